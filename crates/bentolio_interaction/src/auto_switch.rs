//! Auto-theme-switch click interceptor
//!
//! An optional layer in front of the click handler: when the
//! auto-switch flag is on and more than one theme exists, every
//! interactive click first jumps to a random different theme, then the
//! click proceeds as usual. It composes with click-toggle only; hover
//! events are never intercepted, and the widget machine's invariants
//! are untouched.

use bentolio_core::WidgetId;
use bentolio_theme::ThemeSelection;
use rand::Rng;

use crate::machine::InteractionMachine;

/// Reselect the theme (if enabled), then forward the click
pub fn intercept_click<R: Rng>(
    selection: &mut ThemeSelection,
    rng: &mut R,
    machine: &mut InteractionMachine,
    id: &WidgetId,
) {
    if selection.auto_switch() && selection.registry().len() > 1 {
        selection.switch_random(rng);
    }
    machine.on_widget_click(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bentolio_core::WidgetCatalog;
    use bentolio_theme::builtin_registry;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_enabled_switch_always_changes_theme() {
        let mut selection = ThemeSelection::new(builtin_registry());
        let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default());
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..1000 {
            let before = selection.current().id.clone();
            intercept_click(&mut selection, &mut rng, &mut machine, &"skills".into());
            assert_ne!(selection.current().id, before);
        }
    }

    #[test]
    fn test_disabled_flag_leaves_theme_alone() {
        let mut selection = ThemeSelection::new(builtin_registry());
        selection.set_auto_switch(false);
        let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default());
        let mut rng = StdRng::seed_from_u64(99);

        intercept_click(&mut selection, &mut rng, &mut machine, &"skills".into());
        assert_eq!(selection.current().id, "charcoal");
        // The click itself still went through.
        assert_eq!(machine.state().expanded.as_ref().unwrap().as_str(), "skills");
    }

    #[test]
    fn test_interception_does_not_disturb_toggle() {
        let mut selection = ThemeSelection::new(builtin_registry());
        let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default());
        let mut rng = StdRng::seed_from_u64(7);

        intercept_click(&mut selection, &mut rng, &mut machine, &"about".into());
        intercept_click(&mut selection, &mut rng, &mut machine, &"about".into());
        assert!(machine.state().is_collapsed());
    }
}
