use super::*;
use crate::storage::MemoryStore;

fn theme_core(store: &MemoryStore) -> ThemeCore<&MemoryStore> {
    ThemeCore::new(store, "theme")
}

// =============================================================
// Theme resolution
// =============================================================

#[test]
fn absent_preference_resolves_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn stored_light_resolves_to_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_resolves_to_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn unrecognized_preference_resolves_to_dark() {
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
}

// =============================================================
// Toggle target
// =============================================================

#[test]
fn toggle_from_dark_goes_light() {
    assert_eq!(Theme::toggle_target(Some("dark")), Theme::Light);
}

#[test]
fn toggle_from_light_goes_dark() {
    assert_eq!(Theme::toggle_target(Some("light")), Theme::Dark);
}

#[test]
fn toggle_from_absent_or_garbage_goes_dark() {
    assert_eq!(Theme::toggle_target(None), Theme::Dark);
    assert_eq!(Theme::toggle_target(Some("mauve")), Theme::Dark);
}

// =============================================================
// Markers and icons
// =============================================================

#[test]
fn markers_round_trip_through_resolution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn toggle_icon_indicates_the_other_mode() {
    assert_eq!(Theme::Light.toggle_icon(), icons::MOON);
    assert_eq!(Theme::Dark.toggle_icon(), icons::SUN);
    assert_ne!(icons::SUN, icons::MOON);
}

// =============================================================
// ThemeCore persistence
// =============================================================

#[test]
fn first_visit_initializes_and_persists_dark() {
    let store = MemoryStore::new();
    let core = theme_core(&store);
    let theme = core.initial_theme();
    core.record(theme);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn returning_light_visitor_gets_light() {
    let store = MemoryStore::new().seed("theme", "light");
    assert_eq!(theme_core(&store).initial_theme(), Theme::Light);
}

#[test]
fn corrupt_stored_value_falls_back_to_dark() {
    let store = MemoryStore::new().seed("theme", "blue");
    assert_eq!(theme_core(&store).initial_theme(), Theme::Dark);
}

#[test]
fn toggle_twice_restores_theme_and_stored_value() {
    for start in ["light", "dark"] {
        let store = MemoryStore::new().seed("theme", start);
        let core = theme_core(&store);

        let first = core.toggle_target();
        core.record(first);
        let second = core.toggle_target();
        core.record(second);

        assert_eq!(store.get("theme").as_deref(), Some(start));
        assert_eq!(second, Theme::from_stored(Some(start)));
    }
}

#[test]
fn toggle_with_no_stored_value_lands_on_dark() {
    let store = MemoryStore::new();
    let core = theme_core(&store);
    let target = core.toggle_target();
    core.record(target);
    assert_eq!(target, Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
