//! Browser hooks used by the page chrome.
//!
//! Off the browser (native tests, server builds) they do nothing and report
//! the defaults.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_events::EventListener;
use shared::RouteScroll;
use std::{cell::RefCell, rc::Rc};

/// Width reported when there is no window to measure.
const FALLBACK_WIDTH: f64 = 1280.0;

#[cfg(target_arch = "wasm32")]
type Listener = EventListener;
#[cfg(not(target_arch = "wasm32"))]
type Listener = ();

/// Owns a DOM listener for the lifetime of a component. Dropping the
/// listener detaches it.
pub struct ListenerSlot<L> {
    inner: Rc<RefCell<Option<L>>>,
}

impl<L> ListenerSlot<L> {
    pub fn new(listener: Option<L>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(listener)),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Drops the listener. Returns whether one was still attached.
    pub fn release(&self) -> bool {
        self.inner.borrow_mut().take().is_some()
    }
}

impl<L> Clone for ListenerSlot<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Run `callback` on every `event` dispatched to `window`.
///
/// The listener is attached on mount and removed when the component is torn down.
pub fn use_window_listener(event: &'static str, callback: impl FnMut() + 'static) {
    let slot = use_hook(move || ListenerSlot::<Listener>::new(attach(event, callback)));

    use_drop(move || {
        if slot.release() {
            debug!("Detached {} listener", event);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn attach(event: &'static str, mut callback: impl FnMut() + 'static) -> Option<Listener> {
    match web_sys::window() {
        Some(window) => Some(EventListener::new(&window, event, move |_| callback())),
        None => {
            warn!("No window, {} listener not attached", event);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn attach(_event: &'static str, _callback: impl FnMut() + 'static) -> Option<Listener> {
    None
}

pub fn scroll_offset() -> f64 {
    #[cfg(target_arch = "wasm32")]
    if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
        return offset;
    }
    0.0
}

pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    if let Some(width) = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
    {
        return width;
    }
    FALLBACK_WIDTH
}

pub fn scroll_to(offset: f64) {
    #[cfg(target_arch = "wasm32")]
    match web_sys::window() {
        Some(window) => window.scroll_to_with_x_and_y(0.0, offset),
        None => warn!("No window, scroll reset skipped"),
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = offset;
}

/// Tracks `window.innerWidth` across resizes.
pub fn use_viewport_width() -> Signal<f64> {
    let mut width = use_signal(viewport_width);

    use_window_listener("resize", move || {
        let next = viewport_width();
        if *width.peek() != next {
            width.set(next);
        }
    });

    width
}

/// Scrolls the document back to the top whenever `path` changes.
pub fn use_scroll_to_top(path: String) {
    let routes = use_hook(|| Rc::new(RefCell::new(RouteScroll::default())));

    use_effect(use_reactive((&path,), move |(path,)| {
        if let Some(offset) = routes.borrow_mut().enter(&path) {
            debug!("Entered {}, resetting scroll", path);
            scroll_to(offset);
        }
    }));
}

/// Makes sure the document head carries a favicon link pointing at `href`.
pub fn use_favicon(href: &'static str) {
    use_hook(move || ensure_favicon(href));
}

#[cfg(target_arch = "wasm32")]
fn ensure_favicon(href: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document, favicon not set");
        return;
    };

    let Some(head) = document.head() else {
        warn!("No document head, favicon not set");
        return;
    };

    let existing = match document.query_selector("link[rel*='icon']") {
        Ok(existing) => existing,
        Err(e) => {
            warn!("Favicon lookup failed: {:?}", e);
            None
        }
    };
    let link = match existing {
        Some(link) => link,
        None => match document.create_element("link") {
            Ok(link) => link,
            Err(e) => {
                warn!("Could not create favicon link: {:?}", e);
                return;
            }
        },
    };

    for (name, value) in [("type", "image/png"), ("rel", "icon"), ("href", href)] {
        if let Err(e) = link.set_attribute(name, value) {
            warn!("Could not set favicon {}: {:?}", name, e);
        }
    }

    if let Err(e) = head.append_child(&link) {
        warn!("Could not attach favicon link: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn ensure_favicon(_href: &str) {}
