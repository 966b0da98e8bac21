//! Light/dark theme selection persisted across sessions.
//!
//! Split in two halves: [`Theme`] and [`ThemeCore`] hold the decision and
//! persistence logic and test natively; the `controller` half applies the
//! chosen theme to the document and only compiles with the `web` feature.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub mod icons;

#[cfg(feature = "web")]
mod controller;
#[cfg(feature = "web")]
pub use controller::{ThemeController, install};

use crate::storage::PreferenceStore;

/// Visual theme applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored preference.
    ///
    /// Only the exact `"light"` marker selects the light theme; anything
    /// else, including an absent or unrecognized value, resolves to dark.
    /// Defaulting to dark is deliberate policy, not an omission.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Theme a toggle press should switch to, given the stored preference.
    ///
    /// Only the exact `"dark"` marker flips to light; every other stored
    /// value lands on dark.
    #[must_use]
    pub fn toggle_target(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Marker persisted to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown on the toggle control while this theme is active.
    ///
    /// The icon always indicates the theme a click switches to: a moon
    /// under the light theme, a sun under the dark theme.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => icons::MOON,
            Self::Dark => icons::SUN,
        }
    }
}

/// Decision and persistence half of the theme controller.
///
/// Owns the injected preference store so the DOM-facing half stays free of
/// persistence concerns and tests can substitute a `MemoryStore`.
pub struct ThemeCore<S> {
    store: S,
    key: &'static str,
}

impl<S: PreferenceStore> ThemeCore<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Theme to apply at startup.
    pub fn initial_theme(&self) -> Theme {
        Theme::from_stored(self.store.get(self.key).as_deref())
    }

    /// Theme the next toggle press should apply.
    pub fn toggle_target(&self) -> Theme {
        Theme::toggle_target(self.store.get(self.key).as_deref())
    }

    /// Persist `theme` as the current preference.
    pub fn record(&self, theme: Theme) {
        self.store.set(self.key, theme.as_str());
    }
}
