use super::ensure_parent_dir;
use crate::core::io::discovery::find_files;
use crate::core::io::fasta::{DesignFasta, DesignSequences};
use crate::core::io::traits::TextFormat;
use crate::core::models::anchor;
use crate::engine::config::ExpandConfig;
use crate::engine::error::{EngineError, InputKind};
use crate::engine::progress::ProgressReporter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandSummary {
    pub files_processed: usize,
    pub references_dropped: usize,
    pub designs_expanded: usize,
    pub candidates_written: usize,
    pub decode_errors: usize,
    pub output_path: PathBuf,
}

/// Expands the designs of one file into anchor-prefixed candidates, in file order.
pub fn expand_designs(sequences: &DesignSequences) -> Vec<String> {
    sequences
        .designs
        .iter()
        .flat_map(|design| anchor::expand(design))
        .collect()
}

/// Expands every design sequence file under `input_root` into `output`.
///
/// Files are processed in sorted path order and the output is rewritten on every run.
/// A tree with no design files produces an empty output file.
#[instrument(skip_all, name = "expand_workflow")]
pub fn run(
    input_root: &Path,
    output: &Path,
    config: &ExpandConfig,
    reporter: &ProgressReporter,
) -> Result<ExpandSummary, EngineError> {
    if !input_root.is_dir() {
        return Err(EngineError::NotFound {
            kind: InputKind::DesignDirectory,
            path: input_root.to_path_buf(),
        });
    }
    ensure_parent_dir(output)?;

    let mut summary = ExpandSummary {
        files_processed: 0,
        references_dropped: 0,
        designs_expanded: 0,
        candidates_written: 0,
        decode_errors: 0,
        output_path: output.to_path_buf(),
    };

    let candidates = reporter.phase("Expanding design sequences", || {
        let files = find_files(input_root, &config.design_extension)
            .map_err(EngineError::io(input_root))?;
        info!(
            "Found {} design file(s) under {:?}",
            files.len(),
            input_root
        );

        let mut candidates = Vec::new();
        reporter.each(&files, |path| {
            let sequences = DesignFasta
                .read_from_path(path)
                .map_err(EngineError::io(path))?;
            debug!(
                "{:?}: {} design(s) after dropping reference",
                path,
                sequences.designs.len()
            );
            summary.files_processed += 1;
            summary.references_dropped += usize::from(sequences.reference_dropped);
            summary.designs_expanded += sequences.designs.len();
            summary.decode_errors += sequences.decode_errors;
            candidates.extend(expand_designs(&sequences));
            Ok::<(), EngineError>(())
        })?;
        Ok::<Vec<String>, EngineError>(candidates)
    })?;

    if summary.decode_errors > 0 {
        warn!(
            "{} line(s) contained undecodable bytes; those bytes were dropped.",
            summary.decode_errors
        );
    }

    reporter.phase("Writing candidates", || {
        let mut writer = BufWriter::new(File::create(output).map_err(EngineError::io(output))?);
        for candidate in &candidates {
            writeln!(writer, "{}", candidate).map_err(EngineError::io(output))?;
        }
        writer.flush().map_err(EngineError::io(output))
    })?;
    summary.candidates_written = candidates.len();

    info!(
        "Wrote {} candidate(s) to {:?}",
        summary.candidates_written, output
    );
    Ok(summary)
}
