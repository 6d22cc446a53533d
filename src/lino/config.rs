//! Layered settings for the parser and the formatter
//!
//!     defaults/lino.default.toml    compiled in, always the bottom layer
//!     --config <file>, inline TOML  layered in call order, later wins
//!     single keys                   `formatting.less_parentheses = true` from CLI flags
//!
//! Every layer is TOML with a `[parsing]` and a `[formatting]` table. Keys a layer leaves
//! out fall through to the layer below, and [`LinoConfig`] fills anything still missing
//! from the code defaults.

use crate::lino::formats::FormatConfig;
use crate::lino::parsing::ParserConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, FileSourceFile, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/lino.default.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinoConfig {
    pub parsing: ParserConfig,
    pub formatting: FormatConfig,
}

/// Stack of TOML layers resolved into one [`LinoConfig`] by [`Loader::build`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
        .with_toml(DEFAULT_TOML)
    }

    /// Fails at [`build`](Loader::build) time when `path` does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(toml_file(path.as_ref()).required(true))
    }

    /// Like [`with_file`](Loader::with_file), but an absent `path` adds nothing.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(toml_file(path.as_ref()).required(false))
    }

    pub fn with_toml(self, text: &str) -> Self {
        self.layer(File::from_str(text, FileFormat::Toml))
    }

    /// `key` is dotted: `parsing.max_depth`. Overrides sit above every layer regardless
    /// of call order.
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        let builder = self.builder.set_override(key, value)?;
        Ok(Self { builder })
    }

    pub fn build(self) -> Result<LinoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer<S>(self, source: S) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self {
            builder: self.builder.add_source(source),
        }
    }
}

fn toml_file(path: &Path) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Only the compiled-in defaults.
pub fn load_defaults() -> Result<LinoConfig, ConfigError> {
    Loader::new().build()
}
