//! Singleton overlay construction and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, MouseEvent};

use super::OverlayState;
use crate::config::Config;
use crate::dom;

/// Handle to the singleton lightbox overlay.
///
/// Cheap to clone; clones share the same DOM nodes and state cell, so any
/// handle can open or close the overlay.
#[derive(Clone)]
pub struct Lightbox {
    container: Element,
    image: HtmlImageElement,
    close_control: Element,
    active_class: &'static str,
    state: Rc<RefCell<OverlayState>>,
}

impl Lightbox {
    /// Build the overlay elements and append them to `<body>`.
    ///
    /// Returns `None` when the document has no body to attach to; the page
    /// then keeps its native behavior.
    fn build(document: &Document, config: &Config) -> Option<Self> {
        let container = document.create_element("div").ok()?;
        container.set_id(config.overlay_id);
        container.set_class_name(config.overlay_class);

        let image: HtmlImageElement = document.create_element("img").ok()?.dyn_into().ok()?;
        image.set_class_name(config.overlay_image_class);

        let close_control = document.create_element("span").ok()?;
        close_control.set_class_name(config.overlay_close_class);
        close_control.set_inner_html("&times;");

        container.append_child(&image).ok()?;
        container.append_child(&close_control).ok()?;
        document.body()?.append_child(&container).ok()?;

        Some(Self {
            container,
            image,
            close_control,
            active_class: config.overlay_active_class,
            state: Rc::new(RefCell::new(OverlayState::Closed)),
        })
    }

    /// Show `src` in the overlay and lock page scrolling.
    pub fn open(&self, src: &str) {
        self.state.borrow_mut().open(src);
        self.image.set_src(src);
        let _ = self.container.class_list().add_1(self.active_class);
        set_scroll_locked(true);
    }

    /// Hide the overlay and restore page scrolling. Idempotent.
    pub fn close(&self) {
        self.state.borrow_mut().close();
        let _ = self.container.class_list().remove_1(self.active_class);
        set_scroll_locked(false);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

fn set_scroll_locked(locked: bool) {
    if let Some(body) = dom::body() {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

/// Build the overlay and attach click handlers to every qualifying image.
///
/// The image set is collected once at install time; images inserted into
/// the document afterwards are not picked up. All listeners live for the
/// page, so their closures are leaked on purpose.
pub fn install(config: &Config) -> Option<Lightbox> {
    let document = dom::document()?;
    let lightbox = Lightbox::build(&document, config)?;

    let images = document.query_selector_all(config.image_selectors).ok()?;
    let mut wired = 0_u32;
    for index in 0..images.length() {
        let Some(image) = images
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        let parent_tag = image.parent_element().map(|p| p.tag_name());
        if !super::qualifies(parent_tag.as_deref()) {
            continue;
        }

        let _ = image.style().set_property("cursor", "pointer");
        let handle = lightbox.clone();
        let source = image.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_| {
            handle.open(&source.src());
        });
        let _ = image.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
        wired += 1;
    }
    log::debug!("lightbox wired to {wired} images");

    let handle = lightbox.clone();
    let on_close = Closure::<dyn FnMut(MouseEvent)>::new(move |_| {
        handle.close();
    });
    let _ = lightbox
        .close_control
        .add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
    on_close.forget();

    // Clicks on the backdrop close the overlay; clicks on the displayed
    // image bubble up with the image as target and are ignored.
    let handle = lightbox.clone();
    let backdrop = lightbox.container.clone();
    let on_backdrop = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let hit_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el == backdrop);
        if hit_backdrop {
            handle.close();
        }
    });
    let _ = lightbox
        .container
        .add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref());
    on_backdrop.forget();

    let handle = lightbox.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" && handle.is_open() {
            handle.close();
        }
    });
    let _ = document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    on_key.forget();

    Some(lightbox)
}
