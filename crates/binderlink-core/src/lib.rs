//! # BinderLink Core Library
//!
//! The data-linking core of a peptide design and immunogenicity screening pipeline.
//! It expands designed sequences into anchor-prefixed candidates for an external
//! binding-affinity predictor, filters the predictor's report back down to qualifying
//! binders with their design provenance restored, and turns those binders into
//! structural threading jobs for an external modeling engine.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless models (`SequenceRecord`, the anchor
//!   alphabet, `ThreadingJob`), path heuristics, and the text formats exchanged with
//!   the external tools.
//!
//! - **[`engine`]: The Linking Logic.** Run-scoped data structures passed explicitly
//!   between stages (`ProvenanceIndex`, `BinderSet`, `ThreadingPlan`), configuration,
//!   progress reporting, and errors.
//!
//! - **[`workflows`]: The Public API.** One function per pipeline stage that takes
//!   input paths, writes output artifacts, and returns a summary of what it did.

pub mod core;
pub mod engine;
pub mod workflows;
