use crate::cli::ThreadArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use binderlink::engine::config::PipelineConfig;
use binderlink::engine::progress::ProgressReporter;
use binderlink::workflows;
use binderlink::workflows::thread::ThreadSummary;
use tracing::info;

pub fn run(args: ThreadArgs, config: &PipelineConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Threading {:?} onto backbones in {:?}",
        &args.filtered_fasta, &args.structure_dir
    );
    let summary = workflows::thread::run(
        &args.filtered_fasta,
        &args.structure_dir,
        &args.output_dir,
        &config.thread,
        &reporter,
    )?;

    for line in summary_lines(&summary) {
        println!("{}", line);
    }
    Ok(())
}

fn summary_lines(summary: &ThreadSummary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Generated {} threading commands -> {}",
            summary.jobs_generated,
            summary.commands_path.display()
        ),
        format!("Job manifest -> {}", summary.manifest_path.display()),
        format!("Unique structural backbones: {}", summary.backbones),
    ];
    if summary.missing_stems > 0 {
        lines.push(format!(
            "WARNING: {} structural stems not found (skipped).",
            summary.missing_stems
        ));
        lines.extend(summary.missing_preview.iter().map(|stem| format!("  {}", stem)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn summary(missing: &[&str]) -> ThreadSummary {
        ThreadSummary {
            records_read: 5,
            jobs_generated: 3,
            backbones: 2,
            missing_stems: missing.len(),
            skipped_records: missing.len(),
            missing_preview: missing.iter().map(|s| s.to_string()).collect(),
            commands_path: PathBuf::from("out/threading_commands.txt"),
            manifest_path: PathBuf::from("out/threading_jobs.csv"),
        }
    }

    #[test]
    fn summary_without_missing_stems_has_no_warning() {
        let lines = summary_lines(&summary(&[]));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Unique structural backbones: 2");
    }

    #[test]
    fn summary_lists_missing_preview_indented() {
        let lines = summary_lines(&summary(&["ghost", "unmapped"]));
        assert_eq!(lines[3], "WARNING: 2 structural stems not found (skipped).");
        assert_eq!(lines[4], "  ghost");
        assert_eq!(lines[5], "  unmapped");
    }
}
