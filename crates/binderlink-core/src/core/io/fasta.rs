use super::lines::decoded_lines;
use super::traits::TextFormat;
use crate::core::models::record::SequenceRecord;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("FASTA format error on line {line}: sequence before header")]
    SequenceBeforeHeader { line: usize },
}

enum FastaLine<'a> {
    Header(&'a str),
    Sequence(&'a str),
}

fn classify(text: &str) -> Option<FastaLine<'_>> {
    if text.is_empty() {
        None
    } else if let Some(header) = text.strip_prefix('>') {
        Some(FastaLine::Header(header))
    } else {
        Some(FastaLine::Sequence(text))
    }
}

/// Sequences of one design file, with the leading reference record removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignSequences {
    pub designs: Vec<String>,
    pub reference_dropped: bool,
    pub decode_errors: usize,
}

/// A design-tool output file whose first record is the unmodified reference.
///
/// Each record is assumed to hold its sequence on a single line. The line after the
/// first header is discarded; every other sequence line, including any that appear
/// before the first header, is a design.
pub struct DesignFasta;

impl TextFormat for DesignFasta {
    type Output = DesignSequences;
    type Error = io::Error;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut out = DesignSequences::default();
        let mut first_header_seen = false;
        let mut drop_next_sequence = false;

        for line in decoded_lines(reader) {
            let line = line?;
            if line.lossy {
                out.decode_errors += 1;
            }
            match classify(&line.text) {
                None => {}
                Some(FastaLine::Header(_)) => {
                    if !first_header_seen {
                        first_header_seen = true;
                        drop_next_sequence = true;
                    }
                }
                Some(FastaLine::Sequence(_)) if drop_next_sequence => {
                    drop_next_sequence = false;
                    out.reference_dropped = true;
                }
                Some(FastaLine::Sequence(seq)) => out.designs.push(seq.to_string()),
            }
        }
        Ok(out)
    }
}

/// Every header/sequence pair of a file, with no reference skipping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastaRecords {
    pub records: Vec<SequenceRecord>,
    /// Sequence lines with no usable header (none yet, or an empty `>`), ignored.
    pub orphan_lines: usize,
    pub decode_errors: usize,
}

/// Lenient reader used to index design trees.
///
/// A header applies to every following sequence line until the next header. An
/// empty header leaves the following lines unattributed.
pub struct RecordFasta;

impl TextFormat for RecordFasta {
    type Output = FastaRecords;
    type Error = io::Error;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut out = FastaRecords::default();
        let mut header: Option<String> = None;

        for line in decoded_lines(reader) {
            let line = line?;
            if line.lossy {
                out.decode_errors += 1;
            }
            match classify(&line.text) {
                None => {}
                Some(FastaLine::Header(h)) => {
                    header = (!h.is_empty()).then(|| h.to_string());
                }
                Some(FastaLine::Sequence(seq)) => match &header {
                    Some(h) => out.records.push(SequenceRecord::new(h.clone(), seq)),
                    None => out.orphan_lines += 1,
                },
            }
        }
        Ok(out)
    }
}

/// Strict reader for provenance-tagged FASTA.
///
/// A sequence line with no preceding header is a [`FastaError::SequenceBeforeHeader`].
pub struct TaggedFasta;

impl TextFormat for TaggedFasta {
    type Output = Vec<SequenceRecord>;
    type Error = FastaError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut records = Vec::new();
        let mut header: Option<String> = None;

        for line in decoded_lines(reader) {
            let line = line?;
            match classify(&line.text) {
                None => {}
                Some(FastaLine::Header(h)) => header = Some(h.to_string()),
                Some(FastaLine::Sequence(seq)) => {
                    let h = header
                        .as_ref()
                        .ok_or(FastaError::SequenceBeforeHeader { line: line.number })?;
                    records.push(SequenceRecord::new(h.clone(), seq));
                }
            }
        }
        Ok(records)
    }
}

/// Writes records as two-line FASTA entries, in the given order.
pub fn write_records<'a>(
    writer: &mut impl Write,
    records: impl IntoIterator<Item = &'a SequenceRecord>,
) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

pub fn write_records_to_path<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a SequenceRecord>,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn design_fasta_drops_reference_sequence() {
        let input = ">ref\nMKTAYIAKQR\n>design1\nAACDEFGH\n>design2\nGGHHKK\n";
        let parsed = DesignFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert!(parsed.reference_dropped);
        assert_eq!(parsed.designs, vec!["AACDEFGH", "GGHHKK"]);
    }

    #[test]
    fn design_fasta_drops_first_sequence_even_after_consecutive_headers() {
        let input = ">ref\n>design1\nAACDEFGH\n>design2\nGGHHKK\n";
        let parsed = DesignFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(parsed.designs, vec!["GGHHKK"]);
    }

    #[test]
    fn design_fasta_keeps_sequences_before_first_header() {
        let input = "PPPP\n>ref\nMKT\n>d\nAAC\n";
        let parsed = DesignFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(parsed.designs, vec!["PPPP", "AAC"]);
    }

    #[test]
    fn design_fasta_with_only_reference_yields_no_designs() {
        let parsed = DesignFasta
            .read_from(&mut Cursor::new(">ref\nMKT\n"))
            .unwrap();
        assert!(parsed.designs.is_empty());
    }

    #[test]
    fn record_fasta_leaves_sequences_under_empty_header_unattributed() {
        let input = ">ref\nMKT\n>\nAAC\n>d2\nGGH\n";
        let parsed = RecordFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(parsed.orphan_lines, 1);
        assert_eq!(
            parsed.records,
            vec![
                SequenceRecord::new("ref", "MKT"),
                SequenceRecord::new("d2", "GGH"),
            ]
        );
    }

    #[test]
    fn record_fasta_keeps_reference_and_counts_orphans() {
        let input = "ORPHAN\n>ref\nMKT\n\n>d1, T=0.1\naac\n";
        let parsed = RecordFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(parsed.orphan_lines, 1);
        assert_eq!(
            parsed.records,
            vec![
                SequenceRecord::new("ref", "MKT"),
                SequenceRecord::new("d1, T=0.1", "aac"),
            ]
        );
    }

    #[test]
    fn record_fasta_counts_decode_errors_without_failing() {
        let input = b">ref\nMK\xfeT\n".to_vec();
        let parsed = RecordFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(parsed.decode_errors, 1);
        assert_eq!(parsed.records[0].sequence, "MKT");
    }

    #[test]
    fn tagged_fasta_rejects_sequence_before_header() {
        let result = TaggedFasta.read_from(&mut Cursor::new("\nAACDEF\n>h\nGG\n"));
        assert!(matches!(
            result,
            Err(FastaError::SequenceBeforeHeader { line: 2 })
        ));
    }

    #[test]
    fn tagged_fasta_preserves_file_order() {
        let input = ">b__x\nZZZ\n>a__y\nAAA\n";
        let records = TaggedFasta.read_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(records[0].sequence, "ZZZ");
        assert_eq!(records[1].header, "a__y");
    }

    #[test]
    fn write_records_emits_header_and_sequence_lines() {
        let records = vec![
            SequenceRecord::new("exp1__d1", "AAC"),
            SequenceRecord::new("unmapped__GGH", "GGH"),
        ];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">exp1__d1\nAAC\n>unmapped__GGH\nGGH\n"
        );
    }
}
