//! About page: bio, quick facts, and the avatar.

use dioxus::prelude::*;
use folio_ui::boundary::SectionBoundary;
use folio_ui::image::Avatar;

use crate::data::profile;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        SectionBoundary {
            name: "About",
            render: Callback::new(|_: ()| {
                Ok(rsx! {
                    section { class: "section about-section page-section",
                        div { class: "section-heading",
                            h2 { "About Me" }
                        }
                        div { class: "about-layout",
                            Avatar { name: profile::NAME, size: 160, class: "about-avatar" }
                            div { class: "about-copy",
                                p {
                                    "I'm {profile::NAME}, a {profile::TITLE} based in San "
                                    "Francisco. I've spent the last several years designing "
                                    "and building products across web and mobile, from "
                                    "early prototypes to systems serving real traffic."
                                }
                                p {
                                    "My work sits at the intersection of engineering and "
                                    "design: I care as much about the resilience of the "
                                    "code as the experience it delivers. When something "
                                    "breaks, it should break small and recover fast."
                                }
                                p {
                                    "Outside of work you'll find me photographing the "
                                    "coastline, contributing to open source, or trying out "
                                    "whatever framework is making the rounds this month."
                                }
                                ul { class: "about-facts",
                                    li { strong { "Experience: " } "8+ years" }
                                    li { strong { "Projects delivered: " } "40+" }
                                    li { strong { "Based in: " } "San Francisco, CA" }
                                }
                            }
                        }
                    }
                })
            }),
        }
    }
}
