use crate::cli::FilterArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use binderlink::engine::config::PipelineConfig;
use binderlink::engine::progress::ProgressReporter;
use binderlink::workflows;
use binderlink::workflows::filter::FilterSummary;
use tracing::info;

pub fn run(args: FilterArgs, config: &PipelineConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Filtering {:?} against design tree {:?}",
        &args.report, &args.design_root
    );
    let summary = workflows::filter::run(
        &args.report,
        &args.design_root,
        &args.output,
        &config.filter,
        &reporter,
    )?;

    for line in summary_lines(&summary) {
        println!("{}", line);
    }
    Ok(())
}

fn summary_lines(summary: &FilterSummary) -> Vec<String> {
    let mut lines = vec![format!(
        "[INDEX] {} FASTA files, {} entries, {} unique peptides",
        summary.files_indexed, summary.entries_indexed, summary.unique_indexed
    )];
    if summary.provenance_collisions > 0 {
        lines.push(format!(
            "[INDEX] {} sequences indexed under conflicting headers (last header kept)",
            summary.provenance_collisions
        ));
    }
    lines.push(format!(
        "[FILTER] {} unique SB/WB peptides after trimming ({} qualifying rows, {} malformed)",
        summary.unique_binders, summary.qualifying_rows, summary.malformed_rows
    ));
    if summary.decode_errors > 0 {
        lines.push(format!(
            "[FILTER] {} lines contained undecodable bytes (dropped)",
            summary.decode_errors
        ));
    }
    lines.push(format!(
        "[OUTPUT] {} peptides -> {} ({} unmapped)",
        summary.records_written,
        summary.output_path.display(),
        summary.unmapped
    ));
    lines
}
