//! Widget catalog
//!
//! Widgets are the named content regions of the layout (hero, skills,
//! projects, ...). The set is configuration, not a hard-coded enum, so
//! deployments can add or drop regions without touching the core.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a widget catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("widget catalog is empty")]
    EmptyCatalog,

    #[error("duplicate widget id: {0}")]
    DuplicateWidget(String),
}

/// Identifier for a widget region
///
/// Cheaply clonable; comparisons are by string value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(Arc<str>);

impl WidgetId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for WidgetId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WidgetId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// Ordered, immutable catalog of widget ids for one deployment
///
/// Serializes as a plain list of id strings; deserialization runs the
/// same validation as [`WidgetCatalog::new`], so duplicate or empty
/// catalogs in config surface as serde errors.
#[derive(Clone, Debug)]
pub struct WidgetCatalog {
    ids: Vec<WidgetId>,
    index: FxHashSet<WidgetId>,
}

impl WidgetCatalog {
    /// Build a catalog from an ordered id list
    ///
    /// Rejects empty lists and duplicate ids.
    pub fn new<I, S>(ids: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = FxHashSet::default();
        for id in ids {
            let id = WidgetId::new(id);
            if !index.insert(id.clone()) {
                return Err(CatalogError::DuplicateWidget(id.to_string()));
            }
            ordered.push(id);
        }
        if ordered.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self {
            ids: ordered,
            index,
        })
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.index.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Serialize for WidgetCatalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids.iter())
    }
}

impl<'de> Deserialize<'de> for WidgetCatalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<WidgetId>::deserialize(deserializer)?;
        Self::new(ids.iter().map(WidgetId::as_str)).map_err(serde::de::Error::custom)
    }
}

impl Default for WidgetCatalog {
    /// The standard layout regions
    fn default() -> Self {
        Self::new([
            "hero", "profile", "about", "skills", "location", "projects", "contact",
        ])
        .expect("builtin catalog is valid")
    }
}
