use crate::pages::{create_page_url, PageName};
use serde::Serialize;

/// An entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub page: PageName,
}

impl NavItem {
    pub const fn new(label: &'static str, page: PageName) -> Self {
        Self { label, page }
    }

    pub fn path(&self) -> String {
        create_page_url(self.page)
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(&self.path(), current_path)
    }
}

/// Header navigation, in display order.
pub const NAVIGATION_ITEMS: [NavItem; 6] = [
    NavItem::new("Home", PageName::Home),
    NavItem::new("About", PageName::About),
    NavItem::new("Programs", PageName::Programs),
    NavItem::new("Get Involved", PageName::GetInvolved),
    NavItem::new("Updates", PageName::Updates),
    NavItem::new("Contact", PageName::Contact),
];

/// Target of the donate call-to-action.
pub const DONATE_PAGE: PageName = PageName::Donate;

pub const DONATE_ITEM: NavItem = NavItem::new("DONATE", DONATE_PAGE);

/// An item is active only when its path equals the current path exactly.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    item_path == current_path
}

pub fn active_item<'a>(items: &'a [NavItem], current_path: &str) -> Option<&'a NavItem> {
    items.iter().find(|item| item.is_active(current_path))
}
