//! # Workflows Module
//!
//! Top-level entry points, one per pipeline stage. Each workflow validates its
//! inputs, runs to completion, always overwrites its outputs, and returns a summary
//! for the caller to report.
//!
//! - **Sequence expansion** ([`expand`]) - design tree to anchor-prefixed candidate list
//! - **Binder filtering** ([`filter`]) - prediction report to provenance-tagged FASTA
//! - **Threading commands** ([`thread`]) - tagged FASTA to threading command file

pub mod expand;
pub mod filter;
pub mod thread;

use crate::engine::error::EngineError;
use std::fs;
use std::path::Path;

/// Creates the parent directory of an output file if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), EngineError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(EngineError::io(parent))
        }
        _ => Ok(()),
    }
}
