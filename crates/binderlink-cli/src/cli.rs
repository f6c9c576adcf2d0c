use clap::{Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "BinderLink - expand designed peptides for binding prediction, filter binders with provenance, and generate threading jobs.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand every designed sequence into its 20 anchor-prefixed candidates.
    Expand(ExpandArgs),
    /// Filter strong/weak binders from a prediction report and restore their provenance.
    Filter(FilterArgs),
    /// Generate structural threading commands for provenance-tagged binders.
    Thread(ThreadArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExpandArgs {
    /// Root of the design output tree to scan for sequence files.
    #[arg(value_name = "DESIGN_ROOT")]
    pub design_root: PathBuf,

    /// File to write the expanded candidates to, one per line.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Tabular report produced by the binding-affinity predictor.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Root of the design output tree used to recover provenance.
    #[arg(value_name = "DESIGN_ROOT")]
    pub design_root: PathBuf,

    /// FASTA file to write the filtered, provenance-tagged peptides to.
    #[arg(value_name = "OUTPUT_FASTA")]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ThreadArgs {
    /// Provenance-tagged FASTA produced by `filter`.
    #[arg(value_name = "FILTERED_FASTA")]
    pub filtered_fasta: PathBuf,

    /// Directory holding one backbone structure file per stem.
    #[arg(value_name = "STRUCTURE_DIR")]
    pub structure_dir: PathBuf,

    /// Directory receiving the command file and job manifest.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

/// The single usage line printed when arguments are missing or invalid.
pub fn usage_line(subcommand: Option<&str>) -> &'static str {
    match subcommand {
        Some("expand") => "Usage: binderlink expand <DESIGN_ROOT> <OUTPUT>",
        Some("filter") => "Usage: binderlink filter <REPORT> <DESIGN_ROOT> <OUTPUT_FASTA>",
        Some("thread") => "Usage: binderlink thread <FILTERED_FASTA> <STRUCTURE_DIR> <OUTPUT_DIR>",
        _ => "Usage: binderlink <expand|filter|thread> <ARGS>...",
    }
}
