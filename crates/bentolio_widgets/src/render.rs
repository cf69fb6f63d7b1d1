//! The content renderer
//!
//! A pure function from `(widget id, theme, catalog)` to a display
//! fragment. No state, no timers, no side effects; calling it twice
//! with the same inputs yields equal fragments.

use bentolio_core::{Color, WidgetId};
use bentolio_theme::{SurfaceRole, Theme};

use crate::content::ContentCatalog;

/// A project card ready for display
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub accent: Color,
}

/// One block of widget detail content
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    Paragraph(String),
    List(Vec<String>),
    Cards(Vec<Card>),
    /// Static form field labels; nothing is wired behind them
    Form(Vec<String>),
}

/// The renderable detail view for one expanded widget
#[derive(Clone, Debug, PartialEq)]
pub struct ContentFragment {
    pub widget: WidgetId,
    pub heading: String,
    pub body: Vec<ContentBlock>,
    /// Panel background from the active theme
    pub surface: Color,
    /// Primary text color from the active theme
    pub text: Color,
}

/// Map a widget id and the active theme to its detail fragment
///
/// Unknown widget ids produce an empty fragment in the theme's colors;
/// this is never an error.
pub fn render(widget: &WidgetId, theme: &Theme, catalog: &ContentCatalog) -> ContentFragment {
    let surface = theme.colors.get(SurfaceRole::SurfaceAccent);
    let text = theme.colors.get(SurfaceRole::TextPrimary);
    let accent = theme.colors.get(SurfaceRole::Accent);

    let (heading, body) = match widget.as_str() {
        "hero" => (
            catalog.profile.name.clone(),
            vec![ContentBlock::Paragraph(catalog.profile.tagline.clone())],
        ),
        "profile" => (
            catalog.profile.role.clone(),
            vec![
                ContentBlock::Paragraph(catalog.profile.name.clone()),
                ContentBlock::Paragraph(catalog.profile.location.clone()),
            ],
        ),
        "about" => (
            "About".to_string(),
            vec![ContentBlock::Paragraph(catalog.about.clone())],
        ),
        "skills" => (
            "Skills".to_string(),
            catalog
                .skills
                .iter()
                .flat_map(|group| {
                    [
                        ContentBlock::Paragraph(group.title.clone()),
                        ContentBlock::List(group.items.clone()),
                    ]
                })
                .collect(),
        ),
        "location" => (
            "Location".to_string(),
            vec![ContentBlock::Paragraph(catalog.profile.location.clone())],
        ),
        "projects" => (
            "Projects".to_string(),
            vec![ContentBlock::Cards(
                catalog
                    .projects
                    .iter()
                    .map(|p| Card {
                        title: p.title.clone(),
                        summary: p.summary.clone(),
                        tags: p.tags.clone(),
                        accent,
                    })
                    .collect(),
            )],
        ),
        "contact" => (
            catalog.contact.heading.clone(),
            vec![
                ContentBlock::Paragraph(catalog.contact.prompt.clone()),
                ContentBlock::Form(catalog.contact.fields.clone()),
            ],
        ),
        other => {
            tracing::debug!(widget = other, "no content for widget, rendering empty");
            (String::new(), Vec::new())
        }
    };

    ContentFragment {
        widget: widget.clone(),
        heading,
        body,
        surface,
        text,
    }
}
