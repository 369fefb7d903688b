//! Generator registry for storing and dispatching named generators

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::CodegenError;

use super::GenerationContext;

/// A stored generator procedure
pub type GeneratorFn = Box<dyn Fn(&GenerationContext<'_>) -> String + Send + Sync>;

/// Registry mapping generator names to procedures
///
/// Registering under an existing name replaces the previous generator.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, GeneratorFn>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a generator
    pub fn register<F>(&mut self, name: impl Into<String>, generator: F)
    where
        F: Fn(&GenerationContext<'_>) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        if self
            .generators
            .insert(name.clone(), Box::new(generator))
            .is_some()
        {
            debug!(name = %name, "generator replaced");
        } else {
            debug!(name = %name, "generator registered");
        }
    }

    /// Get a generator by name
    pub fn get(&self, name: &str) -> Result<&GeneratorFn, CodegenError> {
        self.generators
            .get(name)
            .ok_or_else(|| CodegenError::generator_not_found(name))
    }

    /// Look up a generator and run it against `ctx`
    ///
    /// The generator's output is returned unchanged.
    pub fn dispatch(
        &self,
        name: &str,
        ctx: &GenerationContext<'_>,
    ) -> Result<String, CodegenError> {
        let generator = self.get(name)?;
        debug!(name, "dispatching generator");
        Ok(generator(ctx))
    }

    /// Check if a generator exists
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// All generator names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.names())
            .finish()
    }
}
