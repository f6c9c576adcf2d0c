//! # Engine Module
//!
//! The linking logic between pipeline stages.
//!
//! Each stage builds its state once per run and hands it on explicitly; nothing here
//! is global or shared across runs.
//!
//! - **Provenance** ([`provenance`]) - Sequence to provenance-header index over a design tree
//! - **Binders** ([`binders`]) - Unique qualifying peptides recovered from a prediction report
//! - **Threading** ([`threading`]) - Mapping of tagged peptides onto structural backbones
//! - **Configuration** ([`config`]) - Tunable names, extensions and markers
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type

pub mod binders;
pub mod config;
pub mod error;
pub mod progress;
pub mod provenance;
pub mod threading;
