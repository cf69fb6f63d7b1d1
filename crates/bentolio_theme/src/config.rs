//! Theme catalog configuration
//!
//! Custom deployments supply their catalog as a TOML file with one
//! `[[theme]]` table per theme and hex color strings per surface role.
//! Theme order in the file is picker order; the first theme is the
//! default.
//!
//! ```toml
//! [[theme]]
//! id = "charcoal"
//! name = "Charcoal"
//!
//! [theme.colors]
//! background = "#1a1a1a"
//! surface = "#2b2b2b"
//! surface_accent = "#363636"
//! text_primary = "#f2f0ea"
//! text_secondary = "#b5b1a6"
//! accent = "#d6ff4f"
//! border = "#3f3f3f"
//! ```

use std::path::Path;

use bentolio_core::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::registry::{RegistryError, ThemeRegistry};
use crate::theme::Theme;
use crate::tokens::SurfaceColors;

/// Errors raised while loading a theme catalog from config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme {theme}: bad color for {role}: {value:?}")]
    BadColor {
        theme: String,
        role: &'static str,
        value: String,
    },

    #[error(transparent)]
    Catalog(#[from] RegistryError),
}

#[derive(Debug, Deserialize)]
struct ColorTable {
    background: String,
    surface: String,
    surface_accent: String,
    text_primary: String,
    text_secondary: String,
    accent: String,
    border: String,
}

#[derive(Debug, Deserialize)]
struct ThemeTable {
    id: String,
    name: String,
    colors: ColorTable,
}

/// A deserialized theme catalog, not yet validated
#[derive(Debug, Deserialize)]
pub struct ThemeCatalogConfig {
    #[serde(rename = "theme")]
    themes: Vec<ThemeTable>,
}

impl ThemeCatalogConfig {
    /// Parse a TOML catalog from a string
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Validate and build the registry
    pub fn resolve(self) -> Result<ThemeRegistry, ConfigError> {
        let mut themes = Vec::with_capacity(self.themes.len());
        for table in self.themes {
            let colors = SurfaceColors {
                background: parse_color(&table.id, "background", &table.colors.background)?,
                surface: parse_color(&table.id, "surface", &table.colors.surface)?,
                surface_accent: parse_color(
                    &table.id,
                    "surface_accent",
                    &table.colors.surface_accent,
                )?,
                text_primary: parse_color(&table.id, "text_primary", &table.colors.text_primary)?,
                text_secondary: parse_color(
                    &table.id,
                    "text_secondary",
                    &table.colors.text_secondary,
                )?,
                accent: parse_color(&table.id, "accent", &table.colors.accent)?,
                border: parse_color(&table.id, "border", &table.colors.border)?,
            };
            themes.push(Theme::new(table.id, table.name, colors));
        }
        let registry = ThemeRegistry::new(themes)?;
        tracing::debug!(themes = registry.len(), "theme catalog loaded");
        Ok(registry)
    }
}

fn parse_color(theme: &str, role: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::parse_hex(value).ok_or_else(|| ConfigError::BadColor {
        theme: theme.to_string(),
        role,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
        [[theme]]
        id = "mono"
        name = "Mono"

        [theme.colors]
        background = "#000000"
        surface = "#111111"
        surface_accent = "#222222"
        text_primary = "#ffffff"
        text_secondary = "#aaaaaa"
        accent = "#ff00ff"
        border = "#333333"
    "##;

    #[test]
    fn test_minimal_catalog_resolves() {
        let registry = ThemeCatalogConfig::from_toml(MINIMAL)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.default_theme().id, "mono");
    }

    #[test]
    fn test_bad_color_is_reported_with_role() {
        let source = MINIMAL.replace("#ff00ff", "purple");
        let err = ThemeCatalogConfig::from_toml(&source)
            .unwrap()
            .resolve()
            .unwrap_err();
        match err {
            ConfigError::BadColor { role, .. } => assert_eq!(role, "accent"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_role_is_parse_error() {
        let source = MINIMAL.replace("border = \"#333333\"", "");
        assert!(matches!(
            ThemeCatalogConfig::from_toml(&source),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        // A file with no [[theme]] tables fails at parse time...
        assert!(ThemeCatalogConfig::from_toml("").is_err());

        // ...while an explicit empty list fails catalog validation.
        let err = ThemeCatalogConfig::from_toml("theme = []")
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
    }
}
