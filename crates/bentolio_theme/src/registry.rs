//! Theme registry
//!
//! An immutable, ordered catalog of themes. Lookup never fails: unknown
//! ids silently normalize to the first registered theme, which is the
//! deployment default.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::theme::Theme;

/// Errors raised while building a theme registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("theme catalog is empty")]
    EmptyCatalog,

    #[error("duplicate theme id: {0}")]
    DuplicateTheme(String),
}

/// Ordered, read-only theme catalog
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    index: FxHashMap<String, usize>,
}

impl ThemeRegistry {
    /// Build a registry from an ordered theme list
    ///
    /// The first theme becomes the default. Empty lists and duplicate
    /// ids are rejected.
    pub fn new(themes: Vec<Theme>) -> Result<Self, RegistryError> {
        if themes.is_empty() {
            return Err(RegistryError::EmptyCatalog);
        }
        let mut index = FxHashMap::default();
        for (i, theme) in themes.iter().enumerate() {
            if index.insert(theme.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateTheme(theme.id.clone()));
            }
        }
        Ok(Self { themes, index })
    }

    /// Look up a theme by id, falling back to the default
    ///
    /// Never errors; unknown ids resolve to the first registered theme.
    pub fn lookup(&self, id: &str) -> &Theme {
        match self.index.get(id) {
            Some(&i) => &self.themes[i],
            None => {
                tracing::debug!(id, "unknown theme id, falling back to default");
                self.default_theme()
            }
        }
    }

    /// The first registered theme
    pub fn default_theme(&self) -> &Theme {
        &self.themes[0]
    }

    /// All themes in registration order
    pub fn all(&self) -> &[Theme] {
        &self.themes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
