//! Data models passed between the pipeline stages.

pub mod anchor;
pub mod job;
pub mod record;
