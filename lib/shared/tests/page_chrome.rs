use shared::navigation::{active_item, DONATE_ITEM};
use shared::{ChromeState, NavLayout, PageName, RouteScroll, NAVIGATION_ITEMS};

#[test]
fn initial_load_at_root() {
    let state = ChromeState::default();
    let mut routes = RouteScroll::default();
    let active = active_item(&NAVIGATION_ITEMS, "/").map(|item| item.page);

    assert_eq!(routes.enter("/"), Some(0.0));
    assert!(!state.scrolled);
    assert!(!state.menu_open);
    assert_eq!(active, Some(PageName::Home));
}

#[test]
fn scroll_then_navigate_to_about() {
    let mut state = ChromeState::default();
    let mut routes = RouteScroll::default();
    routes.enter("/");

    state.on_scroll(50.0);
    assert!(state.scrolled);

    let path = PageName::About.url();
    let offset = routes
        .enter(&path)
        .expect("a new route resets the scroll position");
    // The browser reports the reset through a scroll event.
    state.on_scroll(offset);

    assert_eq!(offset, 0.0);
    assert!(!state.scrolled);
    assert_eq!(
        active_item(&NAVIGATION_ITEMS, &path).map(|item| item.label),
        Some("About")
    );
}

#[test]
fn picking_from_open_mobile_menu_navigates_and_closes_it() {
    assert!(NavLayout::for_width(375.0).is_mobile());

    let mut routes = RouteScroll::default();
    routes.enter("/");

    for item in NAVIGATION_ITEMS.iter().chain([&DONATE_ITEM]) {
        let mut state = ChromeState::default();
        state.toggle_menu();
        assert!(state.menu_open);

        let target = state.select_item(item);

        assert!(!state.menu_open, "{} left the menu open", item.label);
        assert_eq!(PageName::from_path(&target), Some(item.page));
        assert_eq!(
            active_item(&NAVIGATION_ITEMS, &target).map(|active| active.page),
            NAVIGATION_ITEMS
                .iter()
                .find(|nav| nav.page == item.page)
                .map(|nav| nav.page)
        );
        if routes.current() != Some(target.as_str()) {
            assert_eq!(routes.enter(&target), Some(0.0));
        }
    }
}
