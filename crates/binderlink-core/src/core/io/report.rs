//! Reader for the tabular report of the external binding-affinity predictor.
//!
//! The report is free-form whitespace-delimited text. Only rows carrying one of the
//! configured binder markers matter; their third field is the anchor-prefixed peptide.

use super::lines::decoded_lines;
use super::traits::TextFormat;
use crate::core::models::anchor::strip_anchor;
use std::io::{self, BufRead};
use thiserror::Error;

/// Marker the predictor prints on strong-binder rows.
pub const STRONG_BINDER_MARKER: &str = "<= SB";
/// Marker the predictor prints on weak-binder rows.
pub const WEAK_BINDER_MARKER: &str = "<= WB";

/// Zero-based index of the peptide column.
const PEPTIDE_FIELD: usize = 2;

/// A qualifying report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRow {
    pub line: usize,
    /// Peptide as submitted to the predictor, upper-cased.
    pub anchored: String,
    /// Peptide with the anchor residue removed.
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRowKind {
    #[error("row has {0} whitespace-separated fields, expected at least 3")]
    TooFewFields(usize),
    #[error("peptide '{0}' is shorter than 2 residues")]
    PeptideTooShort(String),
}

/// A qualifying row that could not be turned into a peptide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed report row on line {line}: {kind}")]
pub struct MalformedRow {
    pub line: usize,
    pub kind: MalformedRowKind,
}

/// Parses one report line.
///
/// Returns `None` when the line carries none of `markers`.
pub fn parse_row(
    line: usize,
    text: &str,
    markers: &[String],
) -> Option<Result<PredictionRow, MalformedRow>> {
    if !markers.iter().any(|marker| text.contains(marker.as_str())) {
        return None;
    }

    let fields: Vec<&str> = text.split_whitespace().collect();
    let Some(field) = fields.get(PEPTIDE_FIELD) else {
        return Some(Err(MalformedRow {
            line,
            kind: MalformedRowKind::TooFewFields(fields.len()),
        }));
    };

    let anchored = field.to_uppercase();
    Some(match strip_anchor(&anchored) {
        Some(original) => Ok(PredictionRow {
            line,
            original: original.to_string(),
            anchored: anchored.clone(),
        }),
        None => Err(MalformedRow {
            line,
            kind: MalformedRowKind::PeptideTooShort(anchored.clone()),
        }),
    })
}

/// Result of scanning a whole report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportScan {
    pub rows: Vec<PredictionRow>,
    pub malformed: Vec<MalformedRow>,
    pub lines_read: usize,
    pub decode_errors: usize,
}

pub struct PredictionReport {
    markers: Vec<String>,
}

impl PredictionReport {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }
}

impl Default for PredictionReport {
    fn default() -> Self {
        Self::new(vec![
            STRONG_BINDER_MARKER.to_string(),
            WEAK_BINDER_MARKER.to_string(),
        ])
    }
}

impl TextFormat for PredictionReport {
    type Output = ReportScan;
    type Error = io::Error;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut scan = ReportScan::default();
        for line in decoded_lines(reader) {
            let line = line?;
            scan.lines_read += 1;
            if line.lossy {
                scan.decode_errors += 1;
            }
            match parse_row(line.number, &line.text, &self.markers) {
                None => {}
                Some(Ok(row)) => scan.rows.push(row),
                Some(Err(malformed)) => scan.malformed.push(malformed),
            }
        }
        Ok(scan)
    }
}
