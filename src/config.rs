//! Output formatting configuration
//!
//! A [`CodegenConfig`] carries the line-break sequence and indentation unit
//! every generator formats its output with, plus optional snippet overrides.
//! Configurations can be built in code or loaded from TOML:
//!
//! ```toml
//! [format]
//! line_break = "\r\n"
//! indent = "\t"
//!
//! [snippets]
//! done = "echo 'Finished' . PHP_EOL;"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Line break used when none is configured
pub const DEFAULT_LINE_BREAK: &str = "\n";

/// Indentation unit used when none is configured (four spaces, PSR style)
pub const DEFAULT_INDENT: &str = "    ";

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Formatting settings shared by all generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Sequence appended after every emitted line
    pub line_break: String,
    /// One level of indentation
    pub indent: String,
    /// Snippets that replace (or extend) the default catalog
    pub snippets: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlConfig {
    format: Option<TomlFormat>,
    #[serde(default)]
    snippets: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlFormat {
    line_break: Option<String>,
    indent: Option<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            line_break: DEFAULT_LINE_BREAK.to_string(),
            indent: DEFAULT_INDENT.to_string(),
            snippets: BTreeMap::new(),
        }
    }
}

impl CodegenConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys keep their default values.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(format) = parsed.format {
            if let Some(line_break) = format.line_break {
                config.line_break = line_break;
            }
            if let Some(indent) = format.indent {
                config.indent = indent;
            }
        }
        config.snippets = parsed.snippets;

        Ok(config)
    }

    /// Set the line break sequence
    pub fn with_line_break(mut self, line_break: impl Into<String>) -> Self {
        self.line_break = line_break.into();
        self
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Add a snippet override
    pub fn with_snippet(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.snippets.insert(key.into(), value.into());
        self
    }
}
