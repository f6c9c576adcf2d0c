use crate::error::{CliError, Result};
use binderlink::engine::config::{PipelineConfig, PipelineConfigBuilder};
use binderlink::engine::error::EngineError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_ENV: &str = "BINDERLINK_CONFIG";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileFilterConfig {
    #[serde(rename = "binder-markers")]
    binder_markers: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileThreadConfig {
    #[serde(rename = "engine-binary")]
    engine_binary: Option<String>,
    protocol: Option<String>,
    #[serde(rename = "structure-extension")]
    structure_extension: Option<String>,
    #[serde(rename = "commands-file")]
    commands_file: Option<String>,
    #[serde(rename = "manifest-file")]
    manifest_file: Option<String>,
    #[serde(rename = "missing-preview-limit")]
    missing_preview_limit: Option<usize>,
}

/// Settings read from the TOML configuration file; anything absent keeps its default.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "design-extension")]
    design_extension: Option<String>,
    filter: Option<FileFilterConfig>,
    thread: Option<FileThreadConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn into_pipeline_config(self) -> Result<PipelineConfig> {
        let mut builder = PipelineConfigBuilder::new();

        if let Some(extension) = self.design_extension {
            builder = builder.design_extension(extension);
        }
        if let Some(markers) = self.filter.and_then(|f| f.binder_markers) {
            builder = builder.binder_markers(markers);
        }

        let thread = self.thread.unwrap_or_default();
        if let Some(binary) = thread.engine_binary {
            builder = builder.engine_binary(binary);
        }
        if let Some(protocol) = thread.protocol {
            builder = builder.protocol(protocol);
        }
        if let Some(extension) = thread.structure_extension {
            builder = builder.structure_extension(extension);
        }
        if let Some(name) = thread.commands_file {
            builder = builder.commands_file(name);
        }
        if let Some(name) = thread.manifest_file {
            builder = builder.manifest_file(name);
        }
        if let Some(limit) = thread.missing_preview_limit {
            builder = builder.missing_preview_limit(limit);
        }

        builder
            .build()
            .map_err(|e| CliError::Engine(EngineError::from(e)))
    }
}

/// Resolves the pipeline configuration from an optional config file path.
pub fn load_config(path: Option<PathBuf>) -> Result<PipelineConfig> {
    let file_config = match path {
        Some(path) => FileConfig::from_file(&path)?,
        None => FileConfig::default(),
    };
    file_config.into_pipeline_config()
}
