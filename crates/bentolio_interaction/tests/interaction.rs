use bentolio_core::{Rect, WidgetCatalog, WidgetId};
use bentolio_interaction::{intercept_click, InteractionMachine};
use bentolio_theme::{builtin_registry, ThemeSelection};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn wid(s: &str) -> WidgetId {
    WidgetId::new(s)
}

#[test]
fn end_to_end_click_scenario() {
    let mut selection = ThemeSelection::new(builtin_registry());
    selection.select("charcoal");
    selection.set_auto_switch(false);

    let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default())
        .with_origin_resolver(Box::new(|_| Some(Rect::new(0.0, 0.0, 320.0, 240.0))));
    let mut rng = StdRng::seed_from_u64(1);

    assert!(machine.state().is_collapsed());
    assert_eq!(selection.current().id, "charcoal");

    intercept_click(&mut selection, &mut rng, &mut machine, &wid("skills"));
    assert_eq!(machine.state().expanded, Some(wid("skills")));
    assert_eq!(machine.state().clicked, Some(wid("skills")));

    // Clicking another widget swaps the expansion, skills closes silently.
    intercept_click(&mut selection, &mut rng, &mut machine, &wid("projects"));
    assert_eq!(machine.state().expanded, Some(wid("projects")));
    assert_eq!(machine.state().clicked, Some(wid("projects")));

    // Re-click collapses everything.
    intercept_click(&mut selection, &mut rng, &mut machine, &wid("projects"));
    assert_eq!(machine.state().expanded, None);
    assert_eq!(machine.state().clicked, None);
    assert_eq!(machine.state().origin, None);
}

#[test]
fn hover_debounce_never_opens_within_dwell() {
    let mut machine = InteractionMachine::hover(WidgetCatalog::default());

    // Oscillate well inside the open delay.
    for _ in 0..20 {
        machine.on_widget_hover(&wid("skills"), true);
        machine.advance(100.0);
        machine.on_widget_hover(&wid("skills"), false);
        machine.advance(100.0);
    }
    assert_eq!(machine.state().expanded, None);
}

#[test]
fn auto_switch_composes_with_toggle_over_many_themes() {
    let mut selection = ThemeSelection::new(builtin_registry());
    let mut machine = InteractionMachine::click_toggle(WidgetCatalog::default());
    let mut rng = StdRng::seed_from_u64(3);

    let mut seen_expanded = 0;
    for i in 0..100 {
        let before = selection.current().id.clone();
        intercept_click(&mut selection, &mut rng, &mut machine, &wid("about"));
        assert_ne!(selection.current().id, before);
        if i % 2 == 0 {
            assert_eq!(machine.state().expanded, Some(wid("about")));
            seen_expanded += 1;
        } else {
            assert!(machine.state().is_collapsed());
        }
    }
    assert_eq!(seen_expanded, 50);
}
