//! Bentolio Theme System
//!
//! A fixed palette of named color themes assigned to surface roles,
//! selectable at runtime.
//!
//! # Overview
//!
//! - **Tokens**: the closed set of surface roles every theme populates
//! - **Registry**: an immutable, ordered theme catalog with silent
//!   fallback lookup (unknown ids resolve to the first theme)
//! - **Presets**: the built-in palette catalog (charcoal is the default)
//! - **Config**: TOML theme catalogs for custom deployments
//! - **Selection**: per-view runtime state, including the auto-switch
//!   flag and uniform random reselection
//!
//! # Quick Start
//!
//! ```rust
//! use bentolio_theme::{builtin_registry, SurfaceRole};
//!
//! let registry = builtin_registry();
//!
//! // Unknown ids silently normalize to the default theme.
//! let theme = registry.lookup("no-such-theme");
//! assert_eq!(theme.id, "charcoal");
//!
//! let bg = theme.colors.get(SurfaceRole::Background);
//! assert!(bg.a == 1.0);
//! ```

pub mod config;
pub mod presets;
pub mod registry;
pub mod selection;
pub mod theme;
pub mod tokens;

pub use config::{ConfigError, ThemeCatalogConfig};
pub use presets::builtin_registry;
pub use registry::{RegistryError, ThemeRegistry};
pub use selection::ThemeSelection;
pub use theme::Theme;
pub use tokens::{SurfaceColors, SurfaceRole};
