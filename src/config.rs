//! Fixed DOM contract shared by both components.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Ids, class names, selectors, and the storage key the components are
/// wired to.
///
/// The defaults match the site templates. Browser tests rebind the ids and
/// selectors to fixture elements so tests cannot interfere with each other.
#[derive(Clone, Debug)]
pub struct Config {
    /// Selector list for images eligible for the lightbox.
    pub image_selectors: &'static str,
    /// Id given to the overlay container the lightbox inserts.
    pub overlay_id: &'static str,
    pub overlay_class: &'static str,
    /// Class whose presence on the overlay container means "visible".
    pub overlay_active_class: &'static str,
    pub overlay_image_class: &'static str,
    pub overlay_close_class: &'static str,
    /// Id of the theme toggle control expected in the page.
    pub toggle_button_id: &'static str,
    /// Id of the stylesheet link that is disabled under the light theme.
    pub dark_stylesheet_id: &'static str,
    /// Local storage key holding `"light"` or `"dark"`.
    pub storage_key: &'static str,
    pub light_class: &'static str,
    pub dark_class: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_selectors: ".body img, article img, .project-icon img",
            overlay_id: "lightbox",
            overlay_class: "lightbox",
            overlay_active_class: "active",
            overlay_image_class: "lightbox-img",
            overlay_close_class: "lightbox-close",
            toggle_button_id: "dark-mode-toggle",
            dark_stylesheet_id: "darkModeStyle",
            storage_key: "theme",
            light_class: "light-theme",
            dark_class: "dark-theme",
        }
    }
}
