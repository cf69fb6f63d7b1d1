use bentolio_theme::{builtin_registry, SurfaceRole, ThemeCatalogConfig};

#[test]
fn builtin_catalog_has_picker_order() {
    let registry = builtin_registry();
    let ids: Vec<&str> = registry.all().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["charcoal", "cream", "sage", "lavender", "ocean"]);
}

#[test]
fn unknown_id_lookup_matches_first_theme() {
    let registry = builtin_registry();
    assert_eq!(registry.lookup("nonexistent-id"), &registry.all()[0]);
    assert_eq!(registry.lookup(""), registry.default_theme());
}

#[test]
fn every_builtin_theme_fills_every_surface_role() {
    let registry = builtin_registry();
    for theme in registry.all() {
        for role in SurfaceRole::all() {
            let color = theme.colors.get(*role);
            assert_eq!(
                color.a, 1.0,
                "theme {} role {:?} should be fully opaque",
                theme.id, role
            );
        }
    }
}

#[test]
fn toml_catalog_round_trips_builtin_palette() {
    let source = r##"
        [[theme]]
        id = "charcoal"
        name = "Charcoal"

        [theme.colors]
        background = "#1a1a1a"
        surface = "#2b2b2b"
        surface_accent = "#363636"
        text_primary = "#f2f0ea"
        text_secondary = "#b5b1a6"
        accent = "#d6ff4f"
        border = "#3f3f3f"

        [[theme]]
        id = "ocean"
        name = "Ocean"

        [theme.colors]
        background = "#10212b"
        surface = "#1b303c"
        surface_accent = "#244250"
        text_primary = "#e8f1f5"
        text_secondary = "#9db4c0"
        accent = "#3fc1c9"
        border = "#2e4a58"
    "##;

    let registry = ThemeCatalogConfig::from_toml(source)
        .unwrap()
        .resolve()
        .unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.default_theme().id, "charcoal");

    let builtin = builtin_registry();
    assert_eq!(
        registry.lookup("ocean").colors.get(SurfaceRole::Accent),
        builtin.lookup("ocean").colors.get(SurfaceRole::Accent)
    );
}
