//! The [`Codegen`] instance: configuration, registries and dispatch

use tracing::debug;

use crate::config::CodegenConfig;
use crate::defaults;
use crate::error::CodegenError;
use crate::generator::{GenerationContext, GeneratorRegistry};
use crate::snippet::SnippetRegistry;

/// Owns the formatting configuration, the snippet registry and the
/// generator registry
///
/// Registration needs `&mut self`; lookup and generation only `&self`.
#[derive(Debug, Default)]
pub struct Codegen {
    config: CodegenConfig,
    snippets: SnippetRegistry,
    generators: GeneratorRegistry,
}

impl Codegen {
    /// Create an instance with default formatting and empty registries
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance with the given formatting and empty registries
    ///
    /// Snippet overrides in `config` are not applied here; see
    /// [`Codegen::apply_snippet_overrides`].
    pub fn with_config(config: CodegenConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn line_break(&self) -> &str {
        &self.config.line_break
    }

    pub fn indent(&self) -> &str {
        &self.config.indent
    }

    pub fn set_line_break(&mut self, line_break: impl Into<String>) {
        self.config.line_break = line_break.into();
    }

    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.config.indent = indent.into();
    }

    /// Add a snippet, replacing any previous value under `key`
    pub fn add_snippet(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.snippets.add(key, value);
    }

    /// Get a previously added snippet
    pub fn get_snippet(&self, key: &str) -> Result<&str, CodegenError> {
        self.snippets.get(key)
    }

    /// Register a generator, replacing any previous one under `name`
    pub fn register_generator<F>(&mut self, name: impl Into<String>, generator: F)
    where
        F: Fn(&GenerationContext<'_>) -> String + Send + Sync + 'static,
    {
        self.generators.register(name, generator);
    }

    /// Run the named generator against the current configuration and snippets
    pub fn generate(&self, name: &str) -> Result<String, CodegenError> {
        self.generators.dispatch(name, &self.context())
    }

    /// Context view of the current state
    pub fn context(&self) -> GenerationContext<'_> {
        GenerationContext::new(&self.config, &self.snippets)
    }

    pub fn snippets(&self) -> &SnippetRegistry {
        &self.snippets
    }

    pub fn generators(&self) -> &GeneratorRegistry {
        &self.generators
    }

    /// Load the default snippet catalog
    ///
    /// Snippets spanning several lines have the current line break and
    /// indent baked in; changing the configuration later does not update them.
    pub fn add_default_snippets(&mut self) {
        defaults::add_default_snippets(&mut self.snippets, &self.config);
    }

    /// Register the bundled generators (`uf`, `ibprop`, `mevent`)
    pub fn register_default_generators(&mut self) {
        defaults::register_default_generators(&mut self.generators);
    }

    /// Add every snippet listed in the configuration's `snippets` table
    pub fn apply_snippet_overrides(&mut self) {
        for (key, value) in &self.config.snippets {
            self.snippets.add(key.as_str(), value.as_str());
        }
        debug!(count = self.config.snippets.len(), "applied snippet overrides");
    }
}
