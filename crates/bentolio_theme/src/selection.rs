//! Runtime theme selection
//!
//! One `ThemeSelection` is owned by one view instance. It tracks the
//! current theme id, the auto-switch checkbox flag, and implements the
//! uniform "pick a different theme" reselection used by the auto-switch
//! click interceptor.

use rand::Rng;

use crate::registry::ThemeRegistry;
use crate::theme::Theme;

/// Per-view theme selection state
#[derive(Clone, Debug)]
pub struct ThemeSelection {
    registry: ThemeRegistry,
    current_id: String,
    auto_switch: bool,
}

impl ThemeSelection {
    /// Start on the registry's default theme, auto-switch enabled
    pub fn new(registry: ThemeRegistry) -> Self {
        let current_id = registry.default_theme().id.clone();
        Self {
            registry,
            current_id,
            auto_switch: true,
        }
    }

    /// The active theme
    ///
    /// Always resolves: a stale id falls back to the default theme.
    pub fn current(&self) -> &Theme {
        self.registry.lookup(&self.current_id)
    }

    /// Select a theme by id
    ///
    /// Unknown ids normalize to the default theme rather than erroring.
    pub fn select(&mut self, id: &str) {
        let resolved = self.registry.lookup(id);
        if resolved.id != id {
            tracing::debug!(requested = id, resolved = %resolved.id, "theme id normalized");
        }
        self.current_id = resolved.id.clone();
    }

    /// Switch to a uniformly random theme different from the current one
    ///
    /// No-op when the catalog holds a single theme.
    pub fn switch_random<R: Rng>(&mut self, rng: &mut R) {
        let others: Vec<&Theme> = self
            .registry
            .all()
            .iter()
            .filter(|t| t.id != self.current_id)
            .collect();
        if others.is_empty() {
            return;
        }
        let next = others[rng.gen_range(0..others.len())];
        tracing::debug!(from = %self.current_id, to = %next.id, "auto theme switch");
        self.current_id = next.id.clone();
    }

    /// Whether auto-switch-on-click is enabled (defaults to true)
    pub fn auto_switch(&self) -> bool {
        self.auto_switch
    }

    /// Toggle backing the auto-switch checkbox
    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }
}
