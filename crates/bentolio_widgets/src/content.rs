//! Static content catalog
//!
//! All copy is supplied as data, either from the built-in default or
//! from a TOML file, so deployments can swap text without touching
//! code. The contact section is presentation copy only; there is no
//! submission wiring behind it.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a content catalog
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse content catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Who the portfolio belongs to
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
}

/// A titled group of skills
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// One portfolio project card
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Copy for the static contact form
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactCopy {
    pub heading: String,
    pub prompt: String,
    /// Field labels in display order
    pub fields: Vec<String>,
}

/// Everything the widgets display
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContentCatalog {
    pub profile: Profile,
    pub about: String,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub contact: ContactCopy,
}

impl ContentCatalog {
    /// Parse a TOML catalog from a string
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

impl Default for ContentCatalog {
    /// The copy the layout ships with
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Julia Huang".into(),
                role: "Artist & Designer".into(),
                tagline: "Artist redefining architecture with AI-driven design".into(),
                location: "Based in Los Angeles".into(),
            },
            about: "Julia's expertise spans architecture, interior spaces, and \
                    generative systems, blending craft with computation."
                .into(),
            skills: vec![
                SkillGroup {
                    title: "Design".into(),
                    items: vec![
                        "Architecture".into(),
                        "Interior Design".into(),
                        "Visual Identity".into(),
                    ],
                },
                SkillGroup {
                    title: "Tools".into(),
                    items: vec![
                        "Generative Modeling".into(),
                        "Parametric CAD".into(),
                        "Rendering".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Musea".into(),
                    summary: "A museum identity built around light and negative space.".into(),
                    tags: vec!["Branding".into(), "Architecture".into()],
                },
                Project {
                    title: "Elara".into(),
                    summary: "Generative facade studies for a coastal pavilion.".into(),
                    tags: vec!["Generative".into()],
                },
                Project {
                    title: "Verve".into(),
                    summary: "Interior concept for an adaptive co-working loft.".into(),
                    tags: vec!["Interior".into()],
                },
            ],
            contact: ContactCopy {
                heading: "Let's work together".into(),
                prompt: "Have a project in mind?".into(),
                fields: vec!["Name".into(), "Email".into(), "Message".into()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_populated() {
        let catalog = ContentCatalog::default();
        assert!(!catalog.skills.is_empty());
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.contact.fields.len(), 3);
    }

    #[test]
    fn test_toml_catalog_parses() {
        let source = r#"
            about = "Short bio."

            [profile]
            name = "A"
            role = "B"
            tagline = "C"
            location = "D"

            [[skills]]
            title = "Core"
            items = ["x", "y"]

            [[projects]]
            title = "P"
            summary = "S"

            [contact]
            heading = "H"
            prompt = "Q"
            fields = ["Name"]
        "#;
        let catalog = ContentCatalog::from_toml(source).unwrap();
        assert_eq!(catalog.profile.name, "A");
        assert!(catalog.projects[0].tags.is_empty());
    }

    #[test]
    fn test_bad_toml_is_reported() {
        assert!(matches!(
            ContentCatalog::from_toml("profile = 3"),
            Err(ContentError::Parse(_))
        ));
    }
}
