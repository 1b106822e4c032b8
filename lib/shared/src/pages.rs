use serde::Serialize;
use std::fmt;

/// Symbolic name of every page the site links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageName {
    Home,
    About,
    Programs,
    GetInvolved,
    Updates,
    Contact,
    Donate,
    // Resources
    RiverCleaningChecklist,
    VolunteerToolkit,
    RoadSafetyTips,
    AnnualImpactReport,
    MediaPressReleases,
    EventHighlights,
    // Legal
    PrivacyPolicy,
    TermsOfUse,
    RefundDonationPolicy,
    Disclaimer,
    Sitemap,
    TransparencyReport,
}

impl PageName {
    pub const ALL: [PageName; 19] = [
        PageName::Home,
        PageName::About,
        PageName::Programs,
        PageName::GetInvolved,
        PageName::Updates,
        PageName::Contact,
        PageName::Donate,
        PageName::RiverCleaningChecklist,
        PageName::VolunteerToolkit,
        PageName::RoadSafetyTips,
        PageName::AnnualImpactReport,
        PageName::MediaPressReleases,
        PageName::EventHighlights,
        PageName::PrivacyPolicy,
        PageName::TermsOfUse,
        PageName::RefundDonationPolicy,
        PageName::Disclaimer,
        PageName::Sitemap,
        PageName::TransparencyReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::Home => "Home",
            PageName::About => "About",
            PageName::Programs => "Programs",
            PageName::GetInvolved => "GetInvolved",
            PageName::Updates => "Updates",
            PageName::Contact => "Contact",
            PageName::Donate => "Donate",
            PageName::RiverCleaningChecklist => "RiverCleaningChecklist",
            PageName::VolunteerToolkit => "VolunteerToolkit",
            PageName::RoadSafetyTips => "RoadSafetyTips",
            PageName::AnnualImpactReport => "AnnualImpactReport",
            PageName::MediaPressReleases => "MediaPressReleases",
            PageName::EventHighlights => "EventHighlights",
            PageName::PrivacyPolicy => "PrivacyPolicy",
            PageName::TermsOfUse => "TermsOfUse",
            PageName::RefundDonationPolicy => "RefundDonationPolicy",
            PageName::Disclaimer => "Disclaimer",
            PageName::Sitemap => "Sitemap",
            PageName::TransparencyReport => "TransparencyReport",
        }
    }

    /// Human readable page title.
    pub fn title(&self) -> &'static str {
        match self {
            PageName::Home => "Home",
            PageName::About => "About Us",
            PageName::Programs => "Programs",
            PageName::GetInvolved => "Get Involved",
            PageName::Updates => "Updates",
            PageName::Contact => "Contact",
            PageName::Donate => "Donate",
            PageName::RiverCleaningChecklist => "River Cleaning Checklist",
            PageName::VolunteerToolkit => "Volunteer Toolkit",
            PageName::RoadSafetyTips => "Road Safety Tips",
            PageName::AnnualImpactReport => "Annual Impact Report",
            PageName::MediaPressReleases => "Media & Press Releases",
            PageName::EventHighlights => "Event Highlights",
            PageName::PrivacyPolicy => "Privacy Policy",
            PageName::TermsOfUse => "Terms of Service",
            PageName::RefundDonationPolicy => "Refund & Donation Policy",
            PageName::Disclaimer => "Disclaimer",
            PageName::Sitemap => "Sitemap",
            PageName::TransparencyReport => "Transparency Report",
        }
    }

    pub fn from_name(name: &str) -> Option<PageName> {
        Self::ALL.into_iter().find(|page| page.as_str() == name)
    }

    /// Resolve a URL path back to its page. Exact match only.
    pub fn from_path(path: &str) -> Option<PageName> {
        Self::ALL
            .into_iter()
            .find(|page| create_page_url(*page) == path)
    }

    pub fn url(&self) -> String {
        create_page_url(*self)
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a logical page name to the path it is served under.
///
/// `Home` is the site root; every other page lives at its lower-cased name.
pub fn create_page_url(page: PageName) -> String {
    match page {
        PageName::Home => "/".to_string(),
        other => format!("/{}", other.as_str().to_lowercase().replace(' ', "-")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_site_root() {
        assert_eq!(create_page_url(PageName::Home), "/");
        assert_eq!(PageName::from_path("/"), Some(PageName::Home));
    }

    #[test]
    fn pages_map_to_lowercased_names() {
        assert_eq!(create_page_url(PageName::About), "/about");
        assert_eq!(create_page_url(PageName::GetInvolved), "/getinvolved");
        assert_eq!(
            create_page_url(PageName::RefundDonationPolicy),
            "/refunddonationpolicy"
        );
    }

    #[test]
    fn every_page_resolves_from_its_own_url() {
        for page in PageName::ALL {
            assert_eq!(PageName::from_path(&page.url()), Some(page));
            assert_eq!(PageName::from_name(page.as_str()), Some(page));
        }
    }

    #[test]
    fn path_lookup_is_exact() {
        assert_eq!(PageName::from_path("/about/"), None);
        assert_eq!(PageName::from_path("/About"), None);
        assert_eq!(PageName::from_path("/about/team"), None);
        assert_eq!(PageName::from_path(""), None);
    }

    #[test]
    fn urls_are_unique() {
        let mut urls: Vec<String> = PageName::ALL.iter().map(PageName::url).collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), PageName::ALL.len());
    }

    #[test]
    fn serializes_as_symbolic_name() {
        let json = serde_json::to_string(&PageName::GetInvolved).unwrap();
        assert_eq!(json, "\"GetInvolved\"");
    }
}
