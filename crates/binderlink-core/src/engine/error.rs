use super::config::ConfigError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of required input that was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    DesignDirectory,
    PredictionReport,
    FilteredFasta,
    StructureDirectory,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputKind::DesignDirectory => "Input directory",
            InputKind::PredictionReport => "Prediction report",
            InputKind::FilteredFasta => "Filtered FASTA",
            InputKind::StructureDirectory => "Structure directory",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{kind} not found: {path}", path = path.display())]
    NotFound { kind: InputKind, path: PathBuf },

    #[error("Format error in '{path}' on line {line}: {message}", path = path.display())]
    Format {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write job manifest '{path}': {source}", path = path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| EngineError::Io { path, source }
    }
}
