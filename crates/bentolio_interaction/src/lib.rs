//! Bentolio Widget Interaction
//!
//! The interaction core of the layout: at most one widget is expanded
//! at a time, opened either by click-toggle or by hover-with-delay
//! (one mode per deployment, never both), with the expanding widget's
//! origin rectangle captured for animation anchoring.
//!
//! All timing is virtual: the host loop calls
//! [`InteractionMachine::advance`] and hover timers fire
//! deterministically, which is also how the tests drive them.
//!
//! # Example
//!
//! ```rust
//! use bentolio_core::WidgetCatalog;
//! use bentolio_interaction::InteractionMachine;
//!
//! let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default());
//!
//! machine.on_widget_click(&"skills".into());
//! assert_eq!(machine.state().expanded.as_ref().unwrap().as_str(), "skills");
//!
//! // Re-clicking the expanded widget collapses it.
//! machine.on_widget_click(&"skills".into());
//! assert!(machine.state().is_collapsed());
//! ```

pub mod auto_switch;
pub mod machine;
pub mod state;

pub use auto_switch::intercept_click;
pub use machine::{InteractionMachine, InteractionMode, OriginResolver};
pub use state::InteractionState;
