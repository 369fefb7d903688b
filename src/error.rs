//! Error types for snippet lookup and generator dispatch

use thiserror::Error;

/// Errors returned by the snippet and generator registries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// No snippet was ever registered under this key
    #[error("snippet not found: {key}")]
    SnippetNotFound { key: String },

    /// No generator was ever registered under this name
    #[error("generator not found: {name}")]
    GeneratorNotFound { name: String },
}

impl CodegenError {
    /// Create a snippet not found error
    pub fn snippet_not_found(key: impl Into<String>) -> Self {
        Self::SnippetNotFound { key: key.into() }
    }

    /// Create a generator not found error
    pub fn generator_not_found(name: impl Into<String>) -> Self {
        Self::GeneratorNotFound { name: name.into() }
    }
}
