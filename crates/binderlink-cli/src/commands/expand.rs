use crate::cli::ExpandArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use binderlink::engine::config::PipelineConfig;
use binderlink::engine::progress::ProgressReporter;
use binderlink::workflows;
use tracing::info;

pub fn run(args: ExpandArgs, config: &PipelineConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Expanding designs under {:?}", &args.design_root);
    let summary = workflows::expand::run(
        &args.design_root,
        &args.output,
        &config.expand,
        &reporter,
    )?;

    println!(
        "Found {} design file(s) in {}",
        summary.files_processed,
        args.design_root.display()
    );
    if summary.decode_errors > 0 {
        println!(
            "Note: {} line(s) contained undecodable bytes (dropped).",
            summary.decode_errors
        );
    }
    println!(
        "Prepared {} sequences -> {}",
        summary.candidates_written,
        summary.output_path.display()
    );
    Ok(())
}
