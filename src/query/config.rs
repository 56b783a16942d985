//! Configuration loading
//!
//! `defaults/labelquery.default.toml` is embedded into the crate so the
//! documented defaults and runtime behavior stay in sync. Callers layer user
//! files and individual overrides on top via [`Loader`] before deserializing
//! into [`LabelQueryConfig`].

use crate::query::evaluation::MatchOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/labelquery.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct LabelQueryConfig {
    pub matching: MatchingConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MatchingConfig {
    pub substring: bool,
    pub strip_accents: bool,
}

impl From<MatchingConfig> for MatchOptions {
    fn from(config: MatchingConfig) -> Self {
        MatchOptions {
            substring: config.substring,
            strip_accents: config.strip_accents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Rendering used by `labelquery parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Infix,
    Treeviz,
    Json,
    Postfix,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name {
            "infix" => Some(OutputFormat::Infix),
            "treeviz" => Some(OutputFormat::Treeviz),
            "json" => Some(OutputFormat::Json),
            "postfix" => Some(OutputFormat::Postfix),
            _ => None,
        }
    }
}

/// Settings taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliFlags {
    /// `--config`: TOML file layered over the defaults
    pub config_file: Option<PathBuf>,
    /// `--exact`: whole-word matching
    pub exact: bool,
    /// `--keep-accents`: compare with diacritics intact
    pub keep_accents: bool,
}

/// Assembles a [`LabelQueryConfig`] in layers: embedded defaults, then a
/// user file, then command-line flags. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file; building fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        self.builder = self.builder.add_source(file.required(true));
        self
    }

    /// Layer the `--config` file, then turn `--exact` and `--keep-accents`
    /// into matching overrides.
    pub fn with_cli_flags(self, flags: &CliFlags) -> Result<Self, ConfigError> {
        let mut loader = match &flags.config_file {
            Some(path) => self.with_file(path),
            None => self,
        };
        if flags.exact {
            loader = loader.set_override("matching.substring", false)?;
        }
        if flags.keep_accents {
            loader = loader.set_override("matching.strip_accents", false)?;
        }
        Ok(loader)
    }

    fn set_override<I: Into<ValueKind>>(mut self, key: &str, value: I) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<LabelQueryConfig, ConfigError> {
        let config = self.builder.build()?.try_deserialize::<LabelQueryConfig>()?;
        log::debug!("loaded configuration {:?}", config);
        Ok(config)
    }
}
