use super::*;

// The default config is the DOM contract the site templates rely on;
// these pins guard against accidental renames.

#[test]
fn default_ids_match_site_templates() {
    let config = Config::default();
    assert_eq!(config.overlay_id, "lightbox");
    assert_eq!(config.toggle_button_id, "dark-mode-toggle");
    assert_eq!(config.dark_stylesheet_id, "darkModeStyle");
}

#[test]
fn default_storage_key_is_theme() {
    assert_eq!(Config::default().storage_key, "theme");
}

#[test]
fn default_selectors_cover_post_and_project_images() {
    let selectors = Config::default().image_selectors;
    assert!(selectors.contains(".body img"));
    assert!(selectors.contains("article img"));
    assert!(selectors.contains(".project-icon img"));
}

#[test]
fn theme_classes_are_mutually_exclusive_names() {
    let config = Config::default();
    assert_ne!(config.light_class, config.dark_class);
}
