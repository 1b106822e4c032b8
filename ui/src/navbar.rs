use crate::{Button, Icon, IconKind, MobileMenu};
use dioxus::prelude::*;
use shared::navigation::{NavItem, DONATE_PAGE, NAVIGATION_ITEMS};
use shared::{site, ChromeState, NavLayout, PageName};

pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-white/95 backdrop-blur-md shadow-lg shadow-blue-500/10"
    } else {
        "bg-white/90 backdrop-blur-sm shadow-md"
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "relative px-5 py-2.5 text-base font-bold transition-all duration-300 rounded-lg group overflow-hidden text-white"
    } else {
        "relative px-5 py-2.5 text-base font-bold transition-all duration-300 rounded-lg group overflow-hidden text-gray-700 hover:text-white"
    }
}

fn nav_background_class(active: bool) -> &'static str {
    if active {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-95 group-hover:opacity-100 group-hover:scale-100"
    }
}

#[component]
fn DesktopLink(item: NavItem, active: bool) -> Element {
    rsx! {
        Link { class: nav_link_class(active), to: item.path(),
            // Gradient background on active/hover
            span {
                class: "absolute inset-0 bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] transition-all duration-300",
                class: "{nav_background_class(active)}",
            }
            span {
                class: "absolute inset-0 bg-gradient-to-r from-transparent via-white/30 to-transparent -translate-x-full group-hover:translate-x-full transition-transform duration-700",
                class: if active { "animate-shine" },
            }
            span { class: "relative z-10", "{item.label}" }
        }
    }
}

/// Fixed site header: logo, navigation, donate call-to-action and the mobile toggle.
#[component]
pub fn Navbar(current_path: String, chrome: Signal<ChromeState>, layout: NavLayout) -> Element {
    let mut chrome = chrome;
    let ChromeState {
        menu_open,
        scrolled,
    } = chrome();

    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-50 transition-all duration-500",
            class: "{header_class(scrolled)}",

            // Animated gradient line
            div { class: "absolute bottom-0 left-0 right-0 h-[3px] bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] opacity-80",
                div { class: "absolute inset-0 bg-gradient-to-r from-transparent via-white/60 to-transparent animate-shimmer" }
            }

            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-20",
                    // Logo
                    Link {
                        class: "flex items-center gap-3 group relative",
                        to: PageName::Home.url(),
                        div { class: "relative w-14 h-14 transform transition-transform duration-300 group-hover:scale-110 group-hover:rotate-6",
                            img {
                                class: "w-25 h-25 object-contain",
                                src: site::HEADER_LOGO,
                                alt: site::ORGANIZATION_NAME,
                            }
                            div { class: "absolute inset-0 bg-gradient-to-br from-[#4481e0] via-[#248fa9] to-[#20939f] opacity-0 group-hover:opacity-20 rounded-full blur-lg transition-opacity duration-300" }
                        }
                        div { class: "block relative z-10",
                            div { class: "font-bold text-xl bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] bg-clip-text text-transparent animate-gradient-text",
                                {site::SHORT_NAME}
                            }
                        }
                    }

                    if layout.is_mobile() {
                        button {
                            class: "lg:hidden p-2 rounded-lg hover:bg-gray-100 cursor-pointer",
                            onclick: move |_| chrome.write().toggle_menu(),
                            if menu_open {
                                Icon { kind: IconKind::Close, class: "w-6 h-6 text-gray-900" }
                            } else {
                                Icon { kind: IconKind::Menu, class: "w-6 h-6 text-gray-900" }
                            }
                        }
                    } else {
                        nav { class: "hidden lg:flex items-center gap-2",
                            for item in NAVIGATION_ITEMS {
                                DesktopLink {
                                    key: "{item.label}",
                                    item,
                                    active: item.is_active(&current_path),
                                }
                            }
                        }
                        div { class: "hidden lg:block",
                            Link { to: DONATE_PAGE.url(),
                                Button { "DONATE" }
                            }
                        }
                    }
                }
            }

            if layout.is_mobile() && menu_open {
                MobileMenu { current_path: current_path.clone(), chrome }
            }
        }
    }
}
