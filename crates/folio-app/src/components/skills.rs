//! Skills grid, one card per category.

use dioxus::prelude::*;
use folio_ui::boundary::SectionBoundary;
use folio_ui::icons::IconGlyph;

use crate::data::{SkillCategory, skill_categories};

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        SectionBoundary {
            name: "Skills",
            render: Callback::new(|_: ()| {
                Ok(rsx! {
                    section { class: "section skills-section", id: "skills",
                        div { class: "section-heading",
                            h2 { "Skills & Technologies" }
                            p {
                                "A comprehensive overview of the technologies and tools I "
                                "use to bring ideas to life."
                            }
                        }
                        div { class: "card-grid",
                            for category in skill_categories() {
                                SkillCard { category }
                            }
                        }
                    }
                })
            }),
        }
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> Element {
    rsx! {
        div { class: "card skill-card",
            div { class: "skill-card-header",
                span { class: "skill-card-icon",
                    IconGlyph { icon: category.icon, size: 24 }
                }
                h3 { "{category.title}" }
            }
            div { class: "chip-row",
                for skill in category.skills {
                    span { class: "chip", "{skill}" }
                }
            }
        }
    }
}
