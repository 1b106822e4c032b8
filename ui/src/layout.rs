use crate::components::Footer;
use crate::hooks::{
    scroll_offset, use_favicon, use_scroll_to_top, use_viewport_width, use_window_listener,
};
use crate::navbar::Navbar;
use dioxus::prelude::*;
use shared::chrome::is_scrolled;
use shared::{site, ChromeState, NavLayout};

/// Page chrome every page renders inside.
///
/// `current_path` drives the active navigation link and the scroll reset on
/// navigation; `current_page_name` only labels the content slot.
#[component]
pub fn Layout(
    current_path: String,
    #[props(into)] current_page_name: String,
    children: Element,
) -> Element {
    let mut chrome = use_signal(ChromeState::default);
    let width = use_viewport_width();

    use_window_listener("scroll", move || {
        let offset = scroll_offset();
        // Only write when the flag flips, every write re-renders the header.
        if chrome.peek().scrolled != is_scrolled(offset) {
            chrome.write().on_scroll(offset);
        }
    });
    use_favicon(site::FAVICON_HREF);
    use_scroll_to_top(current_path.clone());

    let layout = NavLayout::for_width(width());

    rsx! {
      div { class: "min-h-screen flex flex-col bg-[#FAFAF9]",
        Navbar { current_path: current_path.clone(), chrome, layout }

        main { class: "flex-1 pt-20", "data-page": "{current_page_name}",
          {children}
        }

        Footer {}
      }
    }
}
