//! Surface-role color tokens
//!
//! Every theme defines the same closed set of surface roles; the struct
//! has no optional fields, so a constructed theme can never miss one.

use bentolio_core::Color;

/// Semantic surface-role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SurfaceRole {
    /// Page background behind the grid
    Background,
    /// Widget tile background
    Surface,
    /// Raised tile / expanded panel background
    SurfaceAccent,
    /// Primary copy
    TextPrimary,
    /// Secondary copy and captions
    TextSecondary,
    /// Highlight color (links, hover accents, decorative shapes)
    Accent,
    /// Tile borders and dividers
    Border,
}

impl SurfaceRole {
    /// Every role, in declaration order
    pub fn all() -> &'static [SurfaceRole] {
        const ROLES: [SurfaceRole; 7] = [
            SurfaceRole::Background,
            SurfaceRole::Surface,
            SurfaceRole::SurfaceAccent,
            SurfaceRole::TextPrimary,
            SurfaceRole::TextSecondary,
            SurfaceRole::Accent,
            SurfaceRole::Border,
        ];
        &ROLES
    }

    /// Stable key for config/serialization
    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Surface => "surface",
            Self::SurfaceAccent => "surface_accent",
            Self::TextPrimary => "text_primary",
            Self::TextSecondary => "text_secondary",
            Self::Accent => "accent",
            Self::Border => "border",
        }
    }
}

/// Complete set of surface-role colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceColors {
    pub background: Color,
    pub surface: Color,
    pub surface_accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
}

impl SurfaceColors {
    /// Get a color by role key
    pub fn get(&self, role: SurfaceRole) -> Color {
        match role {
            SurfaceRole::Background => self.background,
            SurfaceRole::Surface => self.surface,
            SurfaceRole::SurfaceAccent => self.surface_accent,
            SurfaceRole::TextPrimary => self.text_primary,
            SurfaceRole::TextSecondary => self.text_secondary,
            SurfaceRole::Accent => self.accent,
            SurfaceRole::Border => self.border,
        }
    }
}
