//! Transient state of the page chrome.
//!
//! The UI keeps this value in a signal; every rule about when the header
//! counts as scrolled or the mobile menu closes lives here.

use crate::navigation::NavItem;

/// Vertical offset, in pixels, past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Viewport width, in pixels, from which the desktop navigation is shown (Tailwind `lg`).
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl ChromeState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navigation item was picked from the mobile menu. Returns the path
    /// to navigate to.
    pub fn select_item(&mut self, item: &NavItem) -> String {
        self.close_menu();
        item.path()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }
}

/// Decides when a route change has to send the document back to the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteScroll {
    current: Option<String>,
}

impl RouteScroll {
    /// Offset the document is scrolled to on entering the first page or a
    /// different one.
    pub const TOP: f64 = 0.0;

    /// Record `path` as the current route. Returns the offset to scroll to,
    /// or `None` when the route did not change.
    pub fn enter(&mut self, path: &str) -> Option<f64> {
        if self.current.as_deref() == Some(path) {
            return None;
        }
        self.current = Some(path.to_string());
        Some(Self::TOP)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLayout {
    Mobile,
    #[default]
    Desktop,
}

impl NavLayout {
    pub fn for_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            NavLayout::Mobile
        } else {
            NavLayout::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, NavLayout::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{DONATE_ITEM, NAVIGATION_ITEMS};

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = ChromeState::default();
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(50.0));
    }

    #[test]
    fn scroll_is_recomputed_every_event() {
        let mut state = ChromeState::default();
        state.on_scroll(50.0);
        assert!(state.scrolled);
        state.on_scroll(10.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn double_toggle_round_trips() {
        for initial in [false, true] {
            let mut state = ChromeState {
                menu_open: initial,
                scrolled: false,
            };
            state.toggle_menu();
            assert_ne!(state.menu_open, initial);
            state.toggle_menu();
            assert_eq!(state.menu_open, initial);
        }
    }

    #[test]
    fn selecting_any_item_closes_the_menu() {
        for item in NAVIGATION_ITEMS.iter().chain([&DONATE_ITEM]) {
            for scrolled in [false, true] {
                let mut state = ChromeState {
                    menu_open: true,
                    scrolled,
                };
                let target = state.select_item(item);
                assert!(!state.menu_open, "{} left the menu open", item.label);
                assert_eq!(state.scrolled, scrolled);
                assert_eq!(target, item.path());
            }
        }
    }

    #[test]
    fn selecting_with_closed_menu_keeps_it_closed() {
        let mut state = ChromeState::default();
        state.select_item(&NAVIGATION_ITEMS[2]);
        assert!(!state.menu_open);
    }

    #[test]
    fn first_route_scrolls_to_top() {
        let mut routes = RouteScroll::default();
        assert_eq!(routes.enter("/"), Some(0.0));
        assert_eq!(routes.current(), Some("/"));
    }

    #[test]
    fn new_route_scrolls_to_top_same_route_does_not() {
        let mut routes = RouteScroll::default();
        routes.enter("/");
        assert_eq!(routes.enter("/"), None);
        assert_eq!(routes.enter("/about"), Some(RouteScroll::TOP));
        assert_eq!(routes.enter("/about"), None);
        assert_eq!(routes.enter("/"), Some(RouteScroll::TOP));
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        assert_eq!(NavLayout::for_width(320.0), NavLayout::Mobile);
        assert_eq!(NavLayout::for_width(1023.0), NavLayout::Mobile);
        assert_eq!(NavLayout::for_width(1024.0), NavLayout::Desktop);
        assert_eq!(NavLayout::for_width(1920.0), NavLayout::Desktop);
    }
}
