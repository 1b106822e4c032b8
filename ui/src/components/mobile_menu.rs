use crate::{Button, ButtonVariant};
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use shared::navigation::{NavItem, DONATE_ITEM, NAVIGATION_ITEMS};
use shared::ChromeState;

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "block px-4 py-2 rounded-lg font-medium transition-colors bg-blue-50 text-blue-600"
    } else {
        "block px-4 py-2 rounded-lg font-medium transition-colors text-gray-700 hover:bg-gray-50"
    }
}

/// Vertical navigation shown under the header on narrow viewports.
/// Picking any entry closes the menu.
#[component]
pub fn MobileMenu(current_path: String, chrome: Signal<ChromeState>) -> Element {
    let mut chrome = chrome;
    let mut pick = move |item: NavItem| {
        let target = chrome.write().select_item(&item);
        debug!("Mobile menu picked {}", target);
    };

    rsx! {
        div { class: "lg:hidden border-t border-gray-200 bg-white",
            div { class: "px-4 py-4 space-y-3",
                for item in NAVIGATION_ITEMS {
                    Link {
                        key: "{item.label}",
                        class: mobile_link_class(item.is_active(&current_path)),
                        to: item.path(),
                        onclick: move |_| pick(item),
                        "{item.label}"
                    }
                }
                Link {
                    to: DONATE_ITEM.path(),
                    onclick: move |_| pick(DONATE_ITEM),
                    Button { variant: ButtonVariant::Block, "DONATE" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_entry_is_highlighted() {
        assert!(mobile_link_class(true).contains("text-blue-600"));
        assert!(!mobile_link_class(false).contains("text-blue-600"));
        assert!(mobile_link_class(false).contains("hover:"));
    }
}
