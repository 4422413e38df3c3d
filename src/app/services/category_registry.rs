//! In-memory category registry
//!
//! A [`CategoryResolver`] backed by a `HashMap` index for O(1) name
//! lookups. The CLI loads it from a newline-delimited category file; tests
//! build it from a fixed name set.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::app::models::Category;
use crate::app::ports::CategoryResolver;
use crate::{Error, Result};

/// Category registry indexed by exact name
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRegistry {
    categories: HashMap<String, Category>,
}

impl InMemoryCategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a set of category names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.insert(name);
        }
        registry
    }

    /// Load a registry from a newline-delimited category file.
    ///
    /// Lines are trimmed; blank lines are skipped.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("could not read category file {}", path.display()),
                e,
            )
        })?;

        let registry = Self::from_names(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        debug!(
            "Loaded {} categories from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Register a category name
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.categories.insert(name.clone(), Category::new(name));
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CategoryResolver for InMemoryCategoryRegistry {
    fn find_by_name(&self, name: &str) -> Option<Category> {
        self.categories.get(name).cloned()
    }
}
