//! Static organization content rendered by the footer.

use crate::navigation::NavItem;
use crate::pages::PageName;

pub const ORGANIZATION_NAME: &str = "Yashlok Welfare Foundation";
pub const SHORT_NAME: &str = "Yashlok Welfare";

pub const DESCRIPTION: &str = "Yashlok Welfare Foundation is a registered non-profit organization dedicated to river cleaning and road-safety awareness across India since 2017.";

pub const ADDRESS: &str =
    "B-405, Mohan Mansion, Gulmohar Road, Chunnabhati (E), Mumbai, Maharashtra, India – 400022";
pub const EMAIL: &str = "contact@yashlokwelfare.org";
pub const PHONE: &str = "+91-9876543210";

pub const COPYRIGHT: &str = "© 2025 Yashlok Welfare Foundation. All Rights Reserved.";

pub const FAVICON_HREF: &str = "/image/favicon.png";
pub const HEADER_LOGO: &str = "/image/header-logo.png";
pub const FOOTER_LOGO: &str = "/image/footer-logo.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    LinkedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: &'static str,
}

/// Profiles are not published yet, every link points at `#`.
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        network: SocialNetwork::Facebook,
        href: "#",
    },
    SocialLink {
        network: SocialNetwork::Instagram,
        href: "#",
    },
    SocialLink {
        network: SocialNetwork::LinkedIn,
        href: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavItem],
}

pub const QUICK_LINKS: LinkGroup = LinkGroup {
    title: "Quick Links",
    links: &[
        NavItem::new("Home", PageName::Home),
        NavItem::new("About Us", PageName::About),
        NavItem::new("Programs", PageName::Programs),
        NavItem::new("Get Involved", PageName::GetInvolved),
        NavItem::new("Donate", PageName::Donate),
        NavItem::new("Contact", PageName::Contact),
    ],
};

pub const RESOURCE_LINKS: LinkGroup = LinkGroup {
    title: "Resources",
    links: &[
        NavItem::new("River Cleaning Checklist", PageName::RiverCleaningChecklist),
        NavItem::new("Volunteer Toolkit", PageName::VolunteerToolkit),
        NavItem::new("Road Safety Tips", PageName::RoadSafetyTips),
        NavItem::new("Annual Impact Report", PageName::AnnualImpactReport),
        NavItem::new("Media & Press Releases", PageName::MediaPressReleases),
        NavItem::new("Event Highlights", PageName::EventHighlights),
    ],
};

pub const LEGAL_LINKS: LinkGroup = LinkGroup {
    title: "Legal",
    links: &[
        NavItem::new("Privacy Policy", PageName::PrivacyPolicy),
        NavItem::new("Terms of Service", PageName::TermsOfUse),
        NavItem::new("Refund & Donation Policy", PageName::RefundDonationPolicy),
        NavItem::new("Disclaimer", PageName::Disclaimer),
        NavItem::new("Sitemap", PageName::Sitemap),
        NavItem::new("Transparency Report", PageName::TransparencyReport),
    ],
};

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub fn tel() -> String {
    format!("tel:{PHONE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_line_has_six_links() {
        assert_eq!(LEGAL_LINKS.links.len(), 6);
    }

    #[test]
    fn every_footer_link_resolves_to_a_page() {
        for group in [QUICK_LINKS, RESOURCE_LINKS, LEGAL_LINKS] {
            for link in group.links {
                assert_eq!(PageName::from_path(&link.path()), Some(link.page));
            }
        }
    }

    #[test]
    fn contact_hrefs() {
        assert_eq!(mailto(), "mailto:contact@yashlokwelfare.org");
        assert_eq!(tel(), "tel:+91-9876543210");
    }

    #[test]
    fn social_links_are_placeholders() {
        assert!(SOCIAL_LINKS.iter().all(|link| link.href == "#"));
    }
}
