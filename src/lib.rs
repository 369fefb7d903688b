//! snipgen - assemble boilerplate scripts from named snippets
//!
//! This library keeps a registry of text snippets and a registry of named
//! generators. A generator composes snippets and ordered field tables into a
//! complete script; [`Codegen::generate`] dispatches to it by name.
//!
//! # Example
//!
//! ```rust
//! use snipgen::Codegen;
//!
//! let mut codegen = Codegen::new();
//! codegen.add_default_snippets();
//! codegen.register_default_generators();
//!
//! let script = codegen.generate("uf").unwrap();
//! assert!(script.starts_with("<?php\n"));
//! assert!(codegen.generate("non_ex_g").is_err());
//! ```

pub mod codegen;
pub mod config;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod snippet;

pub use codegen::Codegen;
pub use config::{CodegenConfig, ConfigError};
pub use error::CodegenError;
pub use generator::{
    enclose_in_single_quotes, FieldTable, GenerationContext, GeneratorRegistry, ScriptWriter,
};
pub use snippet::SnippetRegistry;

/// Build an instance from `config` with the bundled snippets and generators
/// loaded and the configuration's snippet overrides applied on top
///
/// # Example
///
/// ```rust
/// use snipgen::{with_defaults, CodegenConfig};
///
/// let config = CodegenConfig::new().with_snippet("done", "exit;");
/// let codegen = with_defaults(config);
///
/// let script = codegen.generate("ibprop").unwrap();
/// assert!(script.ends_with("exit;\n"));
/// ```
pub fn with_defaults(config: CodegenConfig) -> Codegen {
    let mut codegen = Codegen::with_config(config);
    codegen.add_default_snippets();
    codegen.register_default_generators();
    codegen.apply_snippet_overrides();
    codegen
}
