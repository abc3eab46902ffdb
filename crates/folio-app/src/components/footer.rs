//! Site footer: brand blurb, quick links, socials, copyright.

use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use folio_ui::icons::IconGlyph;

use crate::data::social_links;
use crate::route::{Route, navigate};

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-columns",
                div { class: "footer-brand",
                    h3 { "Portfolio" }
                    p {
                        "A creative web designer and developer passionate about "
                        "creating beautiful, functional, and user-centered digital "
                        "experiences."
                    }
                }
                div { class: "footer-links",
                    h3 { "Quick Links" }
                    for route in [Route::About, Route::Projects, Route::Contact] {
                        button {
                            class: "footer-link",
                            onclick: move |_| navigate(route),
                            "{route.label()}"
                        }
                    }
                }
                div { class: "footer-socials",
                    h3 { "Connect" }
                    div { class: "social-row",
                        for link in social_links() {
                            a {
                                key: "{link.label}",
                                class: "social-link",
                                href: "{link.href}",
                                aria_label: "{link.label}",
                                IconGlyph { icon: link.icon, size: 18 }
                            }
                        }
                    }
                }
            }
            p { class: "footer-copyright",
                "© {year} Portfolio. All rights reserved."
            }
        }
    }
}
