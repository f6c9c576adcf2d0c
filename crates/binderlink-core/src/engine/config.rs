use crate::core::io::report::{STRONG_BINDER_MARKER, WEAK_BINDER_MARKER};
use thiserror::Error;

pub const DEFAULT_DESIGN_EXTENSION: &str = "fa";
pub const DEFAULT_ENGINE_BINARY: &str = "rosetta_scripts";
pub const DEFAULT_PROTOCOL: &str = "thread.xml";
pub const DEFAULT_STRUCTURE_EXTENSION: &str = "pdb";
pub const DEFAULT_COMMANDS_FILE: &str = "threading_commands.txt";
pub const DEFAULT_MANIFEST_FILE: &str = "threading_jobs.csv";
pub const DEFAULT_MISSING_PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{0}' must not be empty")]
    EmptyParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Extension of design sequence files, matched case-insensitively.
    pub design_extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub design_extension: String,
    /// A report line qualifies when it contains any of these literally.
    pub binder_markers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadConfig {
    pub engine_binary: String,
    pub protocol: String,
    /// Extension of backbone files; lookup is an exact `{stem}.{ext}` match.
    pub structure_extension: String,
    pub commands_file: String,
    pub manifest_file: String,
    pub missing_preview_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub expand: ExpandConfig,
    pub filter: FilterConfig,
    pub thread: ThreadConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            expand: ExpandConfig {
                design_extension: DEFAULT_DESIGN_EXTENSION.to_string(),
            },
            filter: FilterConfig {
                design_extension: DEFAULT_DESIGN_EXTENSION.to_string(),
                binder_markers: vec![
                    STRONG_BINDER_MARKER.to_string(),
                    WEAK_BINDER_MARKER.to_string(),
                ],
            },
            thread: ThreadConfig {
                engine_binary: DEFAULT_ENGINE_BINARY.to_string(),
                protocol: DEFAULT_PROTOCOL.to_string(),
                structure_extension: DEFAULT_STRUCTURE_EXTENSION.to_string(),
                commands_file: DEFAULT_COMMANDS_FILE.to_string(),
                manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
                missing_preview_limit: DEFAULT_MISSING_PREVIEW_LIMIT,
            },
        }
    }
}

/// Builds a [`PipelineConfig`], falling back to defaults for anything left unset.
#[derive(Default)]
pub struct PipelineConfigBuilder {
    design_extension: Option<String>,
    binder_markers: Option<Vec<String>>,
    engine_binary: Option<String>,
    protocol: Option<String>,
    structure_extension: Option<String>,
    commands_file: Option<String>,
    manifest_file: Option<String>,
    missing_preview_limit: Option<usize>,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn design_extension(mut self, extension: impl Into<String>) -> Self {
        self.design_extension = Some(extension.into());
        self
    }
    pub fn binder_markers(mut self, markers: Vec<String>) -> Self {
        self.binder_markers = Some(markers);
        self
    }
    pub fn engine_binary(mut self, binary: impl Into<String>) -> Self {
        self.engine_binary = Some(binary.into());
        self
    }
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
    pub fn structure_extension(mut self, extension: impl Into<String>) -> Self {
        self.structure_extension = Some(extension.into());
        self
    }
    pub fn commands_file(mut self, name: impl Into<String>) -> Self {
        self.commands_file = Some(name.into());
        self
    }
    pub fn manifest_file(mut self, name: impl Into<String>) -> Self {
        self.manifest_file = Some(name.into());
        self
    }
    pub fn missing_preview_limit(mut self, limit: usize) -> Self {
        self.missing_preview_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<PipelineConfig, ConfigError> {
        let defaults = PipelineConfig::default();

        let design_extension = non_empty(
            "design_extension",
            normalize_extension(
                self.design_extension
                    .unwrap_or(defaults.expand.design_extension),
            ),
        )?;
        let binder_markers = self
            .binder_markers
            .unwrap_or(defaults.filter.binder_markers)
            .into_iter()
            .filter(|marker| !marker.is_empty())
            .collect::<Vec<_>>();
        if binder_markers.is_empty() {
            return Err(ConfigError::EmptyParameter("binder_markers"));
        }

        let thread = ThreadConfig {
            engine_binary: non_empty(
                "engine_binary",
                self.engine_binary.unwrap_or(defaults.thread.engine_binary),
            )?,
            protocol: non_empty(
                "protocol",
                self.protocol.unwrap_or(defaults.thread.protocol),
            )?,
            structure_extension: non_empty(
                "structure_extension",
                normalize_extension(
                    self.structure_extension
                        .unwrap_or(defaults.thread.structure_extension),
                ),
            )?,
            commands_file: non_empty(
                "commands_file",
                self.commands_file.unwrap_or(defaults.thread.commands_file),
            )?,
            manifest_file: non_empty(
                "manifest_file",
                self.manifest_file.unwrap_or(defaults.thread.manifest_file),
            )?,
            missing_preview_limit: self
                .missing_preview_limit
                .unwrap_or(defaults.thread.missing_preview_limit),
        };

        Ok(PipelineConfig {
            expand: ExpandConfig {
                design_extension: design_extension.clone(),
            },
            filter: FilterConfig {
                design_extension,
                binder_markers,
            },
            thread,
        })
    }
}

fn normalize_extension(extension: String) -> String {
    extension.trim_start_matches('.').to_string()
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyParameter(name))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_no_overrides_matches_default() {
        let config = PipelineConfigBuilder::new().build().unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.thread.engine_binary, "rosetta_scripts");
        assert_eq!(config.filter.binder_markers, vec!["<= SB", "<= WB"]);
    }

    #[test]
    fn builder_applies_overrides_and_strips_leading_dots() {
        let config = PipelineConfigBuilder::new()
            .design_extension(".fasta")
            .structure_extension(".PDB")
            .engine_binary("rosetta_scripts.linuxgccrelease")
            .missing_preview_limit(3)
            .build()
            .unwrap();
        assert_eq!(config.expand.design_extension, "fasta");
        assert_eq!(config.filter.design_extension, "fasta");
        assert_eq!(config.thread.structure_extension, "PDB");
        assert_eq!(
            config.thread.engine_binary,
            "rosetta_scripts.linuxgccrelease"
        );
        assert_eq!(config.thread.missing_preview_limit, 3);
    }

    #[test]
    fn builder_rejects_empty_marker_list() {
        let result = PipelineConfigBuilder::new()
            .binder_markers(vec![String::new()])
            .build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("binder_markers")));
    }

    #[test]
    fn builder_rejects_blank_engine_binary() {
        let result = PipelineConfigBuilder::new().engine_binary("  ").build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("engine_binary")));
    }

    #[test]
    fn builder_rejects_extension_that_is_only_a_dot() {
        let result = PipelineConfigBuilder::new().design_extension(".").build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("design_extension")));
    }
}
