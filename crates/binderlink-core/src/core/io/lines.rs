use std::io::{self, BufRead};

/// One input line, trimmed, with any undecodable bytes dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    /// 1-based line number in the source.
    pub number: usize,
    pub text: String,
    /// Set when the raw line was not valid UTF-8.
    pub lossy: bool,
}

/// Iterator over the lines of a reader that never fails on encoding problems.
///
/// Lines are split on `\n`, surrounding whitespace (including `\r`) is trimmed, and
/// invalid UTF-8 sequences are removed rather than replaced.
pub struct DecodedLines<R> {
    reader: R,
    number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> DecodedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            number: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for DecodedLines<R> {
    type Item = io::Result<DecodedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                let (text, lossy) = decode(&self.buf);
                Some(Ok(DecodedLine {
                    number: self.number,
                    text: text.trim().to_string(),
                    lossy,
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

pub fn decoded_lines<R: BufRead>(reader: R) -> DecodedLines<R> {
    DecodedLines::new(reader)
}

fn decode(bytes: &[u8]) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => {
            let text = String::from_utf8_lossy(bytes)
                .chars()
                .filter(|c| *c != char::REPLACEMENT_CHARACTER)
                .collect();
            (text, true)
        }
    }
}
