//! Read-only view handed to generators at invocation time

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::snippet::SnippetRegistry;

use super::ScriptWriter;

/// Current configuration and snippet lookup, borrowed from the owning
/// [`Codegen`](crate::Codegen) for the duration of one generator call
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    config: &'a CodegenConfig,
    snippets: &'a SnippetRegistry,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a CodegenConfig, snippets: &'a SnippetRegistry) -> Self {
        Self { config, snippets }
    }

    /// Configured line break
    pub fn line_break(&self) -> &'a str {
        &self.config.line_break
    }

    /// Configured indentation unit
    pub fn indent(&self) -> &'a str {
        &self.config.indent
    }

    /// Indentation repeated `depth` times
    pub fn indent_by(&self, depth: usize) -> String {
        self.config.indent.repeat(depth)
    }

    /// Look up a snippet, failing if it was never registered
    pub fn snippet(&self, key: &str) -> Result<&'a str, CodegenError> {
        self.snippets.get(key)
    }

    /// Look up a snippet, treating an absent key as empty content
    pub fn snippet_or_empty(&self, key: &str) -> &'a str {
        self.snippets.get(key).unwrap_or("")
    }

    /// Start composing output against this context
    pub fn writer(&self) -> ScriptWriter<'a> {
        ScriptWriter::new(*self)
    }
}
