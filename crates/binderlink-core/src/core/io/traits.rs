use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Common reading interface for the line-oriented formats in this pipeline.
///
/// Implementors carry whatever settings parsing needs (for example the binder
/// markers of a prediction report) and turn a buffered reader into a parsed value.
pub trait TextFormat {
    /// The parsed representation of one file.
    type Output;

    /// The error type for parsing; always able to wrap plain I/O failures.
    type Error: Error + From<io::Error>;

    /// Parses a whole file from a buffered reader.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Opens `path` and parses it with [`TextFormat::read_from`].
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
