use std::fmt;

/// A single `>`header / sequence pair from a FASTA-style file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    pub header: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_two_line_fasta_record() {
        let record = SequenceRecord::new("exp1__design1", "AACDEFGH");
        assert_eq!(record.to_string(), ">exp1__design1\nAACDEFGH");
    }
}
