//! Snippet registry for storing named fragments of output text

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::CodegenError;

/// Registry mapping snippet keys to text fragments
///
/// Keys are unique: adding a snippet under an existing key replaces the
/// previous value. An empty value is a registered snippet, distinct from an
/// absent one.
#[derive(Debug, Clone, Default)]
pub struct SnippetRegistry {
    snippets: HashMap<String, String>,
}

impl SnippetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a snippet, returning the value it replaced
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = self.snippets.insert(key.clone(), value.into());
        if previous.is_some() {
            debug!(key = %key, "snippet overwritten");
        } else {
            debug!(key = %key, "snippet added");
        }
        previous
    }

    /// Get a snippet by key
    pub fn get(&self, key: &str) -> Result<&str, CodegenError> {
        match self.snippets.get(key) {
            Some(value) => Ok(value.as_str()),
            None => {
                trace!(key, "snippet lookup missed");
                Err(CodegenError::snippet_not_found(key))
            }
        }
    }

    /// Check if a snippet exists
    pub fn contains(&self, key: &str) -> bool {
        self.snippets.contains_key(key)
    }

    /// All snippet keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.snippets.keys().map(|s| s.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
