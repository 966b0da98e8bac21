//! Full-screen image lightbox.
//!
//! A single overlay element is built at startup and shared by every
//! qualifying image on the page. [`OverlayState`] carries the open/closed
//! state machine and tests natively; the `overlay` half does the DOM
//! construction and event wiring behind the `web` feature.


#[cfg(feature = "web")]
mod overlay;
#[cfg(feature = "web")]
pub use overlay::{Lightbox, install};

/// Overlay visibility state.
///
/// Scroll lock is derived from this state rather than tracked separately,
/// so overlay visibility and scroll suppression cannot drift apart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        src: String,
    },
}

impl OverlayState {
    /// Show the overlay with `src` on display.
    pub fn open(&mut self, src: &str) {
        *self = Self::Open {
            src: src.to_owned(),
        };
    }

    /// Hide the overlay. Closing an already closed overlay changes nothing.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Source currently on display, if any.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Open { src } => Some(src),
            Self::Closed => None,
        }
    }

    /// Page scrolling is suppressed exactly while the overlay is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

/// Whether an image whose immediate parent has tag `parent_tag` should get
/// a lightbox handler.
///
/// Images already wrapped in a hyperlink keep their native navigation and
/// are never hijacked.
#[must_use]
pub fn qualifies(parent_tag: Option<&str>) -> bool {
    !parent_tag.is_some_and(|tag| tag.eq_ignore_ascii_case("a"))
}
