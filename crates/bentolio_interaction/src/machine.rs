//! The widget interaction state machine
//!
//! Two mutually exclusive interaction modes exist; a deployment picks
//! one at construction:
//!
//! - **Click-toggle**: clicking a widget expands it, re-clicking the
//!   same widget collapses it, clicking another widget swaps the
//!   expansion. The trigger's screen rectangle is captured through an
//!   injected resolver for animation anchoring.
//! - **Hover-with-delay**: entering a widget schedules its expansion
//!   after a long dwell delay; leaving schedules a short close delay.
//!   Opening is slow to suppress flicker on fast pointer transit, while
//!   closing is fast once intent to leave is clear. At most one hover
//!   timer is ever pending: every new request cancels the previous one
//!   first.
//!
//! Timers never outlive the machine: teardown clears the queue, and a
//! superseded timer can never fire.

use bentolio_core::{Rect, TimerHandle, TimerQueue, WidgetCatalog, WidgetId};

use crate::state::InteractionState;

/// Injected "widget id to current screen rect" capability
pub type OriginResolver = Box<dyn Fn(&WidgetId) -> Option<Rect> + Send>;

/// Which interaction style drives this machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionMode {
    /// Expansion toggled by clicks
    ClickToggle,
    /// Expansion driven by hover dwell
    HoverDelay {
        open_delay_ms: f32,
        close_delay_ms: f32,
    },
}

/// Default hover dwell before a widget expands
pub const DEFAULT_OPEN_DELAY_MS: f32 = 1500.0;
/// Default delay before a left widget collapses
pub const DEFAULT_CLOSE_DELAY_MS: f32 = 300.0;

/// Action carried by a pending hover timer
#[derive(Clone, Debug)]
enum HoverAction {
    Open(WidgetId),
    Close,
}

/// The interaction state machine
pub struct InteractionMachine {
    catalog: WidgetCatalog,
    mode: InteractionMode,
    state: InteractionState,
    timers: TimerQueue<HoverAction>,
    /// The single in-flight hover timer, if any
    pending: Option<TimerHandle>,
    origin_resolver: Option<OriginResolver>,
}

impl InteractionMachine {
    /// A click-toggle machine over the given catalog
    pub fn click_toggle(catalog: WidgetCatalog) -> Self {
        Self::with_mode(catalog, InteractionMode::ClickToggle)
    }

    /// A hover machine with the standard dwell delays
    pub fn hover(catalog: WidgetCatalog) -> Self {
        Self::with_mode(
            catalog,
            InteractionMode::HoverDelay {
                open_delay_ms: DEFAULT_OPEN_DELAY_MS,
                close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            },
        )
    }

    pub fn with_mode(catalog: WidgetCatalog, mode: InteractionMode) -> Self {
        Self {
            catalog,
            mode,
            state: InteractionState::new(),
            timers: TimerQueue::new(),
            pending: None,
            origin_resolver: None,
        }
    }

    /// Install the screen-rect resolver used to capture origin geometry
    ///
    /// Without a resolver (or when it returns `None` for a widget),
    /// expansion proceeds with no animation anchor.
    pub fn with_origin_resolver(mut self, resolver: OriginResolver) -> Self {
        self.origin_resolver = Some(resolver);
        self
    }

    /// Read access for the render layer
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Handle a widget click (click-toggle mode)
    ///
    /// Re-clicking the expanded widget collapses it; clicking any other
    /// widget expands it, implicitly collapsing the previous one.
    /// Ignored with a warning in hover mode and for ids outside the
    /// catalog.
    pub fn on_widget_click(&mut self, id: &WidgetId) {
        if self.mode != InteractionMode::ClickToggle {
            tracing::warn!(%id, "click ignored: machine is in hover mode");
            return;
        }
        if !self.catalog.contains(id) {
            tracing::warn!(%id, "click ignored: widget not in catalog");
            return;
        }

        if self.state.clicked.as_ref() == Some(id) {
            tracing::debug!(%id, "toggle collapse");
            self.state.clear();
            return;
        }

        let origin = self
            .origin_resolver
            .as_ref()
            .and_then(|resolve| resolve(id));
        if origin.is_none() {
            tracing::trace!(%id, "no origin geometry, expanding without anchor");
        }
        tracing::debug!(%id, "expand via click");
        self.state.expanded = Some(id.clone());
        self.state.clicked = Some(id.clone());
        self.state.origin = origin;
    }

    /// Handle a hover transition (hover mode)
    ///
    /// Any pending timer is cancelled before the new one is scheduled,
    /// so the last request always wins and at most one timer is alive.
    pub fn on_widget_hover(&mut self, id: &WidgetId, entering: bool) {
        let (open_delay_ms, close_delay_ms) = match self.mode {
            InteractionMode::HoverDelay {
                open_delay_ms,
                close_delay_ms,
            } => (open_delay_ms, close_delay_ms),
            InteractionMode::ClickToggle => {
                tracing::warn!(%id, "hover ignored: machine is in click-toggle mode");
                return;
            }
        };
        if !self.catalog.contains(id) {
            tracing::warn!(%id, "hover ignored: widget not in catalog");
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }

        let handle = if entering {
            tracing::trace!(%id, delay = open_delay_ms, "scheduling hover open");
            self.timers
                .schedule(open_delay_ms, HoverAction::Open(id.clone()))
        } else {
            tracing::trace!(%id, delay = close_delay_ms, "scheduling hover close");
            self.timers.schedule(close_delay_ms, HoverAction::Close)
        };
        self.pending = Some(handle);
    }

    /// Drive the virtual clock, firing any due hover timer
    pub fn advance(&mut self, dt_ms: f32) {
        for action in self.timers.advance(dt_ms) {
            self.pending = None;
            match action {
                HoverAction::Open(id) => {
                    tracing::debug!(%id, "expand via hover dwell");
                    let origin = self
                        .origin_resolver
                        .as_ref()
                        .and_then(|resolve| resolve(&id));
                    self.state.expanded = Some(id);
                    self.state.origin = origin;
                    // Hover expansion never sets `clicked`.
                }
                HoverAction::Close => {
                    tracing::debug!("collapse via hover leave");
                    self.state.clear();
                }
            }
        }
    }

    /// Explicit close (overlay escape path)
    ///
    /// Clears all interaction state and any pending timer, regardless
    /// of which mode opened the expansion.
    pub fn close(&mut self) {
        self.state.clear();
        self.pending = None;
        self.timers.clear();
    }

    /// Teardown: cancel every pending timer
    ///
    /// Idempotent; a timer must never fire after the owning view is
    /// gone. Dropping the machine drops the timers too.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wid(s: &str) -> WidgetId {
        WidgetId::new(s)
    }

    fn click_machine() -> InteractionMachine {
        InteractionMachine::click_toggle(WidgetCatalog::default())
    }

    fn hover_machine() -> InteractionMachine {
        InteractionMachine::hover(WidgetCatalog::default())
    }

    #[test]
    fn test_click_expands_and_toggles() {
        let mut m = click_machine();

        m.on_widget_click(&wid("skills"));
        assert_eq!(m.state().expanded, Some(wid("skills")));
        assert_eq!(m.state().clicked, Some(wid("skills")));

        m.on_widget_click(&wid("skills"));
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_toggle_is_idempotent_over_cycles() {
        let mut m = click_machine();
        for _ in 0..4 {
            m.on_widget_click(&wid("about"));
            assert_eq!(m.state().expanded, Some(wid("about")));
            m.on_widget_click(&wid("about"));
            assert!(m.state().is_collapsed());
        }
    }

    #[test]
    fn test_at_most_one_open() {
        let mut m = click_machine();
        m.on_widget_click(&wid("skills"));
        m.on_widget_click(&wid("projects"));

        assert_eq!(m.state().expanded, Some(wid("projects")));
        assert_eq!(m.state().clicked, Some(wid("projects")));
    }

    #[test]
    fn test_click_invariants_hold() {
        let mut m = click_machine();
        let sequence = ["hero", "skills", "skills", "projects", "contact", "contact"];
        for id in sequence {
            m.on_widget_click(&wid(id));
            let state = m.state();
            if state.clicked.is_some() {
                assert_eq!(state.clicked, state.expanded);
            }
            if state.expanded.is_none() {
                assert!(state.origin.is_none());
            }
        }
    }

    #[test]
    fn test_origin_captured_through_resolver() {
        let rect = Rect::new(10.0, 20.0, 300.0, 200.0);
        let mut m = click_machine().with_origin_resolver(Box::new(move |id| {
            (id.as_str() == "skills").then_some(rect)
        }));

        m.on_widget_click(&wid("skills"));
        assert_eq!(m.state().origin, Some(rect));

        // Unresolvable widget still expands, just without an anchor.
        m.on_widget_click(&wid("projects"));
        assert_eq!(m.state().expanded, Some(wid("projects")));
        assert_eq!(m.state().origin, None);
    }

    #[test]
    fn test_unknown_widget_ignored() {
        let mut m = click_machine();
        m.on_widget_click(&wid("blog"));
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_click_ignored_in_hover_mode() {
        let mut m = hover_machine();
        m.on_widget_click(&wid("skills"));
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_hover_ignored_in_click_mode() {
        let mut m = click_machine();
        m.on_widget_hover(&wid("skills"), true);
        m.advance(10_000.0);
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_hover_dwell_expands() {
        let mut m = hover_machine();
        m.on_widget_hover(&wid("projects"), true);

        m.advance(1499.0);
        assert!(m.state().is_collapsed());

        m.advance(1.0);
        assert_eq!(m.state().expanded, Some(wid("projects")));
        // Hover never sets the clicked field.
        assert_eq!(m.state().clicked, None);
    }

    #[test]
    fn test_hover_leave_before_dwell_cancels_open() {
        let mut m = hover_machine();
        m.on_widget_hover(&wid("projects"), true);
        m.advance(500.0);
        m.on_widget_hover(&wid("projects"), false);

        // Even long after the original open deadline, nothing expands.
        m.advance(10_000.0);
        assert_eq!(m.state().expanded, None);
    }

    #[test]
    fn test_hover_close_collapses_after_short_delay() {
        let mut m = hover_machine();
        m.on_widget_hover(&wid("about"), true);
        m.advance(1500.0);
        assert_eq!(m.state().expanded, Some(wid("about")));

        m.on_widget_hover(&wid("about"), false);
        m.advance(300.0);
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_rapid_oscillation_keeps_one_timer() {
        let mut m = hover_machine();
        for _ in 0..50 {
            m.on_widget_hover(&wid("hero"), true);
            m.on_widget_hover(&wid("hero"), false);
        }
        // Last scheduled action wins: a single close timer remains.
        m.advance(300.0);
        assert!(m.state().is_collapsed());

        // And nothing else ever fires.
        m.advance(100_000.0);
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_close_clears_state_and_timers() {
        let mut m = hover_machine();
        m.on_widget_hover(&wid("skills"), true);
        m.advance(1500.0);
        m.on_widget_hover(&wid("skills"), false);

        m.close();
        assert!(m.state().is_collapsed());

        m.advance(10_000.0);
        assert!(m.state().is_collapsed());
    }

    #[test]
    fn test_teardown_prevents_late_fires() {
        let mut m = hover_machine();
        m.on_widget_hover(&wid("skills"), true);

        m.teardown();
        m.teardown(); // double-teardown is a no-op
        m.advance(10_000.0);
        assert!(m.state().is_collapsed());
    }
}
