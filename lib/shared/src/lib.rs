//! Platform-free site model shared by the UI and web crates.

pub mod chrome;
pub mod navigation;
pub mod pages;
pub mod site;

pub use chrome::{ChromeState, NavLayout, RouteScroll};
pub use navigation::{NavItem, NAVIGATION_ITEMS};
pub use pages::{create_page_url, PageName};
