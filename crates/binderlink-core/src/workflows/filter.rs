use super::ensure_parent_dir;
use crate::core::io::fasta::write_records_to_path;
use crate::engine::binders::BinderSet;
use crate::engine::config::FilterConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::provenance::ProvenanceIndex;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub files_indexed: usize,
    pub entries_indexed: usize,
    pub unique_indexed: usize,
    pub provenance_collisions: usize,
    pub qualifying_rows: usize,
    pub unique_binders: usize,
    pub malformed_rows: usize,
    pub unmapped: usize,
    pub records_written: usize,
    pub decode_errors: usize,
    pub output_path: PathBuf,
}

/// Filters qualifying binders out of `report`, restores their provenance from the
/// design tree at `design_root`, and writes them to `output` sorted by sequence.
#[instrument(skip_all, name = "filter_workflow")]
pub fn run(
    report: &Path,
    design_root: &Path,
    output: &Path,
    config: &FilterConfig,
    reporter: &ProgressReporter,
) -> Result<FilterSummary, EngineError> {
    let index = reporter.phase("Indexing design sequences", || {
        ProvenanceIndex::build(design_root, config, reporter)
    })?;
    let stats = *index.stats();
    info!(
        "Indexed {} file(s), {} entries, {} unique sequence(s)",
        stats.files_indexed,
        stats.entries_indexed,
        index.unique_sequences()
    );

    let binders = reporter.phase("Filtering prediction report", || {
        BinderSet::load(report, config)
    })?;

    let mapped = reporter.phase("Writing filtered peptides", || {
        let mapped = binders.map_provenance(&index);
        ensure_parent_dir(output)?;
        write_records_to_path(output, &mapped.records).map_err(EngineError::io(output))?;
        Ok::<_, EngineError>(mapped)
    })?;

    if mapped.unmapped > 0 {
        warn!(
            "{} binder(s) could not be traced back to a design record.",
            mapped.unmapped
        );
    }

    Ok(FilterSummary {
        files_indexed: stats.files_indexed,
        entries_indexed: stats.entries_indexed,
        unique_indexed: index.unique_sequences(),
        provenance_collisions: stats.collisions,
        qualifying_rows: binders.qualifying_rows,
        unique_binders: binders.len(),
        malformed_rows: binders.malformed_rows,
        unmapped: mapped.unmapped,
        records_written: mapped.records.len(),
        decode_errors: stats.decode_errors + binders.decode_errors,
        output_path: output.to_path_buf(),
    })
}
