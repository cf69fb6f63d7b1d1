//! Interaction state
//!
//! The three fields the render layer reads. Invariants held by the
//! machine:
//!
//! - `clicked` is only ever `Some` when it equals `expanded`
//! - `origin` is only ever `Some` while something is expanded
//! - at most one widget is expanded at a time

use bentolio_core::{Rect, WidgetId};

/// Mutable interaction state, owned by one view instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// The widget whose detail view is currently visible, if any
    pub expanded: Option<WidgetId>,
    /// The widget that produced the current expansion via click;
    /// hover-triggered expansion never sets this
    pub clicked: Option<WidgetId>,
    /// Screen rectangle of the trigger at expansion time, used by the
    /// render layer to anchor the expand animation
    pub origin: Option<Rect>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is expanded and no click is tracked
    pub fn is_collapsed(&self) -> bool {
        self.expanded.is_none() && self.clicked.is_none() && self.origin.is_none()
    }

    /// Collapse: reset all three fields together
    pub fn clear(&mut self) {
        self.expanded = None;
        self.clicked = None;
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_collapsed() {
        assert!(InteractionState::new().is_collapsed());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = InteractionState {
            expanded: Some("skills".into()),
            clicked: Some("skills".into()),
            origin: Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
        };
        state.clear();
        assert!(state.is_collapsed());
    }
}
