use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::PageName;

use ui::{BackendProvider, Layout};
use views::{HomePage, SitePage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        HomePage {},
        #[route("/:..segments")]
        SitePage { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    info!("Starting Yashlok Welfare web");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Yashlok Welfare Foundation" }

        BackendProvider { Router::<Route> {} }
    }
}

/// Wraps every route in the page chrome.
#[component]
fn SiteLayout() -> Element {
    let current_path = use_route::<Route>().to_string();
    let page_name = PageName::from_path(&current_path)
        .map(|page| page.as_str())
        .unwrap_or_default();

    rsx! {
        Layout { current_path, current_page_name: page_name,
            Outlet::<Route> {}
        }
    }
}
