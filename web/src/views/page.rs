//! Content slot for each route. Page bodies are placeholders until the
//! content pages are ported.

use dioxus::prelude::*;
use shared::{site, PageName};

#[component]
pub fn HomePage() -> Element {
    rsx! {
        PageBody { page: PageName::Home }
    }
}

/// Any path other than the root, resolved to its page by exact match.
#[component]
pub fn SitePage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    match PageName::from_path(&path) {
        Some(page) => rsx! {
            PageBody { page }
        },
        None => rsx! {
            NotFound { path }
        },
    }
}

#[component]
fn PageBody(page: PageName) -> Element {
    let tagline = match page {
        PageName::Home => site::DESCRIPTION,
        _ => site::ORGANIZATION_NAME,
    };

    rsx! {
        section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", {page.title()} }
            p { class: "text-lg text-gray-600 max-w-3xl", {tagline} }
        }
    }
}

#[component]
fn NotFound(path: String) -> Element {
    rsx! {
        section { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Page not found" }
            p { class: "text-gray-600 font-mono", "{path}" }
            Link {
                class: "inline-block mt-6 text-blue-600 hover:underline",
                to: PageName::Home.url(),
                "Back to home"
            }
        }
    }
}
