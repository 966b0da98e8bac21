//! DOM-facing half of the theme controller.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, HtmlElement, HtmlLinkElement};

use super::{Theme, ThemeCore};
use crate::config::Config;
use crate::dom;
use crate::storage::{LocalStore, PreferenceStore};

/// Theme controller bound to its DOM targets.
///
/// Each target is resolved once at construction and individually optional:
/// a missing toggle control or stylesheet link downgrades the matching
/// effect to a no-op without failing the rest.
pub struct ThemeController<S> {
    core: ThemeCore<S>,
    toggle_button: Option<Element>,
    dark_stylesheet: Option<HtmlLinkElement>,
    body: Option<HtmlElement>,
    light_class: &'static str,
    dark_class: &'static str,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Bind a controller to the document elements named by `config`.
    pub fn attach(store: S, config: &Config) -> Self {
        let dark_stylesheet = dom::by_id(config.dark_stylesheet_id)
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());
        Self {
            core: ThemeCore::new(store, config.storage_key),
            toggle_button: dom::by_id(config.toggle_button_id),
            dark_stylesheet,
            body: dom::body(),
            light_class: config.light_class,
            dark_class: config.dark_class,
        }
    }

    /// Apply the persisted preference, defaulting to dark.
    pub fn initialize(&self) {
        self.apply(self.core.initial_theme());
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        self.apply(self.core.toggle_target());
    }

    /// Apply `theme` to the document and persist it.
    ///
    /// Four effects: the dark stylesheet's disabled flag, the toggle
    /// control's icon, the body theme classes, and the stored preference.
    pub fn apply(&self, theme: Theme) {
        if let Some(link) = &self.dark_stylesheet {
            link.set_disabled(theme == Theme::Light);
        }
        if let Some(button) = &self.toggle_button {
            button.set_inner_html(theme.toggle_icon());
        }
        if let Some(body) = &self.body {
            let classes = body.class_list();
            let (added, removed) = match theme {
                Theme::Light => (self.light_class, self.dark_class),
                Theme::Dark => (self.dark_class, self.light_class),
            };
            let _ = classes.remove_1(removed);
            let _ = classes.add_1(added);
        }
        self.core.record(theme);
        log::debug!("theme applied: {}", theme.as_str());
    }
}

/// Initialize the theme from local storage and wire the toggle control.
///
/// The click listener lives for the whole page; its closure is leaked on
/// purpose, matching the control's lifetime.
pub fn install(config: &Config) {
    let controller = ThemeController::attach(LocalStore::new(), config);
    controller.initialize();

    let Some(button) = controller.toggle_button.clone() else {
        log::debug!("theme toggle control not found; toggle disabled");
        return;
    };
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_| {
        controller.toggle();
    });
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
