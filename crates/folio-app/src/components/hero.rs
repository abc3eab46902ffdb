//! Landing hero with the headline, call-to-action buttons, and the
//! availability status line.

use dioxus::prelude::*;
use folio_ui::button::Button;
use folio_ui::icons::{Icon, IconGlyph};

use crate::data::profile;
use crate::route::{Route, navigate};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                h1 { class: "hero-heading",
                    "Hi, I'm "
                    span { class: "hero-name", "{profile::NAME}" }
                }
                p { class: "hero-title", "{profile::TITLE}" }
                p { class: "hero-tagline", "{profile::TAGLINE}" }
                div { class: "hero-actions",
                    Button {
                        onclick: move |_| navigate(Route::Projects),
                        "View My Work"
                        IconGlyph { icon: Icon::ArrowRight, size: 16 }
                    }
                    a {
                        class: "button button-secondary button-md",
                        href: "{profile::RESUME_URL}",
                        download: true,
                        IconGlyph { icon: Icon::Download, size: 16 }
                        "Download Resume"
                    }
                }
                p { class: "hero-status",
                    span { class: "status-dot" }
                    "Available for new opportunities"
                }
                IconGlyph { icon: Icon::ChevronDown, size: 24, class: "hero-scroll-hint" }
            }
        }
    }
}
