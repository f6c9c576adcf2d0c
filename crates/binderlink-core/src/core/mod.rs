//! # Core Module
//!
//! Stateless building blocks shared by every pipeline stage.
//!
//! - **Models** ([`models`]) - Sequence records, anchor expansion, threading jobs
//! - **File I/O** ([`io`]) - Design FASTA trees, prediction reports, filtered FASTA,
//!   threading command files and job manifests
//! - **Utilities** ([`utils`]) - Path and header heuristics used to recover provenance

pub mod io;
pub mod models;
pub mod utils;
