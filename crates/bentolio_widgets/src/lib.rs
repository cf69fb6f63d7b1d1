//! Bentolio Widget Content
//!
//! The static content behind each widget (profile text, skill groups,
//! project cards, contact copy) and the pure renderer that maps a
//! widget id plus the active theme to a displayable fragment.
//!
//! The renderer is a stateless boundary collaborator: it reads the
//! interaction state's `expanded` value and the current theme, produces
//! a [`ContentFragment`], and feeds nothing back into the core.

pub mod content;
pub mod render;

pub use content::{ContactCopy, ContentCatalog, ContentError, Profile, Project, SkillGroup};
pub use render::{render, Card, ContentBlock, ContentFragment};
