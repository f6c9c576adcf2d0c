use super::config::FilterConfig;
use super::error::{EngineError, InputKind};
use super::provenance::ProvenanceIndex;
use crate::core::io::report::{PredictionReport, ReportScan};
use crate::core::io::traits::TextFormat;
use crate::core::models::record::SequenceRecord;
use crate::core::utils::naming::unmapped_header;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Unique original peptides recovered from the qualifying rows of a prediction report.
///
/// Peptides are kept in ascending lexicographic order; duplicate report rows collapse
/// into a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinderSet {
    peptides: BTreeSet<String>,
    pub qualifying_rows: usize,
    pub malformed_rows: usize,
    pub decode_errors: usize,
}

/// Binders joined with their provenance headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedBinders {
    pub records: Vec<SequenceRecord>,
    pub unmapped: usize,
}

impl BinderSet {
    pub fn load(report: &Path, config: &FilterConfig) -> Result<Self, EngineError> {
        if !report.is_file() {
            return Err(EngineError::NotFound {
                kind: InputKind::PredictionReport,
                path: report.to_path_buf(),
            });
        }
        let scan = PredictionReport::new(config.binder_markers.clone())
            .read_from_path(report)
            .map_err(EngineError::io(report))?;
        info!(
            "Scanned {} report line(s): {} qualifying, {} malformed",
            scan.lines_read,
            scan.rows.len() + scan.malformed.len(),
            scan.malformed.len()
        );
        Ok(Self::from_scan(scan))
    }

    pub fn from_scan(scan: ReportScan) -> Self {
        for malformed in &scan.malformed {
            debug!("Skipping {}", malformed);
        }
        Self {
            qualifying_rows: scan.rows.len() + scan.malformed.len(),
            malformed_rows: scan.malformed.len(),
            decode_errors: scan.decode_errors,
            peptides: scan.rows.into_iter().map(|row| row.original).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.peptides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peptides.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.peptides.iter().map(String::as_str)
    }

    /// Attaches a provenance header to every peptide, in ascending peptide order.
    ///
    /// Peptides missing from the index get an `unmapped__{peptide}` header.
    pub fn map_provenance(&self, index: &ProvenanceIndex) -> MappedBinders {
        let mut mapped = MappedBinders::default();
        for peptide in self.iter() {
            let header = match index.get(peptide) {
                Some(header) => header.to_string(),
                None => {
                    mapped.unmapped += 1;
                    debug!("No provenance for {}", peptide);
                    unmapped_header(peptide)
                }
            };
            mapped.records.push(SequenceRecord::new(header, peptide));
        }
        mapped
    }
}
