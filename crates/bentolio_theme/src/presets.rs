//! Built-in palette presets
//!
//! The fixed theme catalog the layout ships with. Charcoal is first and
//! therefore the default.

use bentolio_core::Color;

use crate::registry::ThemeRegistry;
use crate::theme::Theme;
use crate::tokens::SurfaceColors;

struct BasePalette {
    background: u32,
    surface: u32,
    surface_accent: u32,
    text_primary: u32,
    text_secondary: u32,
    accent: u32,
    border: u32,
}

fn preset(id: &'static str, name: &'static str, p: BasePalette) -> Theme {
    Theme::new(
        id,
        name,
        SurfaceColors {
            background: Color::from_hex(p.background),
            surface: Color::from_hex(p.surface),
            surface_accent: Color::from_hex(p.surface_accent),
            text_primary: Color::from_hex(p.text_primary),
            text_secondary: Color::from_hex(p.text_secondary),
            accent: Color::from_hex(p.accent),
            border: Color::from_hex(p.border),
        },
    )
}

/// The built-in theme catalog, in picker order
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        preset(
            "charcoal",
            "Charcoal",
            BasePalette {
                background: 0x1a1a1a,
                surface: 0x2b2b2b,
                surface_accent: 0x363636,
                text_primary: 0xf2f0ea,
                text_secondary: 0xb5b1a6,
                accent: 0xd6ff4f,
                border: 0x3f3f3f,
            },
        ),
        preset(
            "cream",
            "Cream",
            BasePalette {
                background: 0xf5f1e8,
                surface: 0xfdfbf5,
                surface_accent: 0xefe9da,
                text_primary: 0x2d2a24,
                text_secondary: 0x6f6a5e,
                accent: 0xe85d3a,
                border: 0xded7c6,
            },
        ),
        preset(
            "sage",
            "Sage",
            BasePalette {
                background: 0xe8ede4,
                surface: 0xf6f8f3,
                surface_accent: 0xdbe4d4,
                text_primary: 0x24301f,
                text_secondary: 0x5f6e57,
                accent: 0x4a7c3a,
                border: 0xc9d5bf,
            },
        ),
        preset(
            "lavender",
            "Lavender",
            BasePalette {
                background: 0xeae6f2,
                surface: 0xf7f5fb,
                surface_accent: 0xded7ee,
                text_primary: 0x2a2237,
                text_secondary: 0x6b6180,
                accent: 0x7b5cd6,
                border: 0xcfc5e4,
            },
        ),
        preset(
            "ocean",
            "Ocean",
            BasePalette {
                background: 0x10212b,
                surface: 0x1b303c,
                surface_accent: 0x244250,
                text_primary: 0xe8f1f5,
                text_secondary: 0x9db4c0,
                accent: 0x3fc1c9,
                border: 0x2e4a58,
            },
        ),
    ]
}

/// Registry over the built-in catalog
pub fn builtin_registry() -> ThemeRegistry {
    ThemeRegistry::new(builtin_themes()).expect("builtin theme catalog is valid")
}
