use crate::core::io::commands::{CommandTemplate, write_commands, write_manifest};
use crate::core::io::fasta::{FastaError, TaggedFasta};
use crate::core::io::traits::TextFormat;
use crate::engine::config::ThreadConfig;
use crate::engine::error::{EngineError, InputKind};
use crate::engine::progress::ProgressReporter;
use crate::engine::threading::ThreadingPlan;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadSummary {
    pub records_read: usize,
    pub jobs_generated: usize,
    pub backbones: usize,
    pub missing_stems: usize,
    pub skipped_records: usize,
    /// Sorted, deduplicated, and bounded by `missing_preview_limit`.
    pub missing_preview: Vec<String>,
    pub commands_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Generates one threading command per peptide of `filtered_fasta` whose structural
/// stem resolves to a backbone file in `structure_dir`.
///
/// Commands keep the FASTA's record order. A sequence line before any header aborts
/// the run with [`EngineError::Format`]; a missing backbone only skips its record.
#[instrument(skip_all, name = "thread_workflow")]
pub fn run(
    filtered_fasta: &Path,
    structure_dir: &Path,
    output_dir: &Path,
    config: &ThreadConfig,
    reporter: &ProgressReporter,
) -> Result<ThreadSummary, EngineError> {
    if !filtered_fasta.is_file() {
        return Err(EngineError::NotFound {
            kind: InputKind::FilteredFasta,
            path: filtered_fasta.to_path_buf(),
        });
    }
    if !structure_dir.is_dir() {
        return Err(EngineError::NotFound {
            kind: InputKind::StructureDirectory,
            path: structure_dir.to_path_buf(),
        });
    }
    fs::create_dir_all(output_dir).map_err(EngineError::io(output_dir))?;

    let records = reporter.phase("Reading filtered peptides", || {
        TaggedFasta
            .read_from_path(filtered_fasta)
            .map_err(|e| match e {
                FastaError::Io(source) => EngineError::Io {
                    path: filtered_fasta.to_path_buf(),
                    source,
                },
                FastaError::SequenceBeforeHeader { line } => EngineError::Format {
                    path: filtered_fasta.to_path_buf(),
                    line,
                    message: "sequence before header".to_string(),
                },
            })
    })?;
    info!("Read {} tagged record(s) from {:?}", records.len(), filtered_fasta);

    let plan = ThreadingPlan::plan(&records, structure_dir, &config.structure_extension);
    let template = CommandTemplate {
        engine_binary: &config.engine_binary,
        protocol: &config.protocol,
    };
    let commands_path = output_dir.join(&config.commands_file);
    let manifest_path = output_dir.join(&config.manifest_file);

    reporter.phase("Writing threading commands", || {
        let commands = plan.render_commands(&template, output_dir);
        write_commands(&commands_path, &commands).map_err(EngineError::io(&commands_path))?;
        write_manifest(&manifest_path, &plan.jobs, output_dir).map_err(|source| {
            EngineError::Manifest {
                path: manifest_path.clone(),
                source,
            }
        })
    })?;

    if plan.missing_count() > 0 {
        warn!(
            "{} structural stem(s) had no backbone file; {} record(s) skipped.",
            plan.missing_count(),
            plan.skipped_records()
        );
    }

    Ok(ThreadSummary {
        records_read: records.len(),
        jobs_generated: plan.jobs.len(),
        backbones: plan.backbone_count(),
        missing_stems: plan.missing_count(),
        skipped_records: plan.skipped_records(),
        missing_preview: plan.missing_preview(config.missing_preview_limit),
        commands_path,
        manifest_path,
    })
}
