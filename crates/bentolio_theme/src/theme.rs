//! The theme value type

use crate::tokens::SurfaceColors;

/// A named, immutable color theme
///
/// Loaded once at startup into a [`crate::ThemeRegistry`] and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Stable unique key used for lookup and config
    pub id: String,
    /// User-facing display name
    pub name: String,
    /// One color per surface role
    pub colors: SurfaceColors,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>, colors: SurfaceColors) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
        }
    }
}

impl PartialEq for Theme {
    /// Themes compare by id; the catalog guarantees id uniqueness
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Theme {}
