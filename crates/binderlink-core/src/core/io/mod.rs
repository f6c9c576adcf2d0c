//! Text formats exchanged with the external tools.
//!
//! Every reader decodes its input line by line and tolerates invalid UTF-8, so a
//! single damaged byte never aborts a run. The only structural error raised by a
//! reader is a sequence line with no preceding header in a provenance-tagged FASTA.

pub mod commands;
pub mod discovery;
pub mod fasta;
pub mod lines;
pub mod report;
pub mod traits;
