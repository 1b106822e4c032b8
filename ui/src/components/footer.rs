use crate::{Icon, IconKind};
use dioxus::prelude::*;
use shared::site::{
    self, LinkGroup, SocialLink, SocialNetwork, LEGAL_LINKS, QUICK_LINKS, RESOURCE_LINKS, SOCIAL_LINKS,
};
use shared::PageName;

fn social_icon(network: SocialNetwork) -> (IconKind, &'static str) {
    match network {
        SocialNetwork::Facebook => (IconKind::Facebook, "hover:bg-blue-600"),
        SocialNetwork::Instagram => (IconKind::Instagram, "hover:bg-pink-600"),
        SocialNetwork::LinkedIn => (IconKind::Linkedin, "hover:bg-blue-700"),
    }
}

#[component]
fn SocialButton(link: SocialLink) -> Element {
    let (icon, hover) = social_icon(link.network);
    rsx! {
        a {
            class: "w-9 h-9 rounded-full bg-gray-800 flex items-center justify-center transition-colors",
            class: "{hover}",
            href: link.href,
            Icon { kind: icon, class: "w-4 h-4" }
        }
    }
}

#[component]
fn LinkColumn(group: LinkGroup) -> Element {
    rsx! {
        div {
            h3 { class: "font-bold text-white mb-4", "{group.title}" }
            ul { class: "space-y-2 text-sm",
                for link in group.links.iter() {
                    li { key: "{link.page}",
                        Link {
                            class: "hover:text-white transition-colors",
                            to: link.path(),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "bg-gray-900 text-gray-300",
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
          div { class: "grid grid-cols-2 lg:grid-cols-4 gap-6 lg:gap-8 mb-8",
            // Logo & description
            div { class: "col-span-2 lg:col-span-1",
              Link {
                class: "flex items-center gap-3 mb-4",
                to: PageName::Home.url(),
                div { class: "relative w-12 h-12",
                  img {
                    class: "w-25 h-25 object-contain",
                    src: site::FOOTER_LOGO,
                    alt: site::ORGANIZATION_NAME,
                  }
                }
                div { class: "font-bold text-xl bg-gradient-to-r from-[#4481e0] via-[#248fa9] to-[#20939f] bg-clip-text text-transparent animate-gradient-text",
                  {site::SHORT_NAME}
                }
              }
              p { class: "text-sm text-gray-400 leading-relaxed mb-4", {site::DESCRIPTION} }
              div { class: "flex gap-4",
                for link in SOCIAL_LINKS {
                  SocialButton { link }
                }
              }
            }

            LinkColumn { group: QUICK_LINKS }
            LinkColumn { group: RESOURCE_LINKS }

            // Contact
            div { class: "col-span-2 lg:col-span-1",
              h3 { class: "font-bold text-white mb-4", "Contact & Legal" }
              div { class: "space-y-3 text-sm mb-4",
                div { class: "flex items-start gap-2",
                  Icon { kind: IconKind::MapPin, class: "w-4 h-4 text-blue-500 flex-shrink-0 mt-0.5" }
                  p { class: "text-gray-400", {site::ADDRESS} }
                }
                div { class: "flex items-start gap-2",
                  Icon { kind: IconKind::Mail, class: "w-4 h-4 text-blue-500 flex-shrink-0 mt-0.5" }
                  a {
                    class: "text-gray-400 hover:text-white transition-colors",
                    href: site::mailto(),
                    {site::EMAIL}
                  }
                }
                div { class: "flex items-start gap-2",
                  Icon { kind: IconKind::Phone, class: "w-4 h-4 text-blue-500 flex-shrink-0 mt-0.5" }
                  a {
                    class: "text-gray-400 hover:text-white transition-colors",
                    href: site::tel(),
                    {site::PHONE}
                  }
                }
              }
            }
          }

          // Copyright and legal links
          div { class: "border-t border-gray-800 pt-6",
            div { class: "flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-gray-500",
              p { {site::COPYRIGHT} }
              div { class: "flex flex-wrap gap-4",
                for link in LEGAL_LINKS.links.iter() {
                  Link {
                    key: "{link.page}",
                    class: "hover:text-white transition-colors",
                    to: link.path(),
                    "{link.label}"
                  }
                }
              }
            }
          }
        }
      }
    }
}
