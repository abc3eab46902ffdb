//! Project catalog: the featured strip on the home page and the full
//! filterable page. Every card sits in its own boundary so one bad
//! project cannot take down the grid.

use dioxus::prelude::*;
use folio_ui::boundary::{ComponentBoundary, RenderFailure, SectionBoundary};
use folio_ui::icons::{Icon, IconGlyph};
use folio_ui::image::ProjectImage;

use crate::data::{Project, ProjectCategory, featured_projects, projects_in};

#[component]
pub fn ProjectsSection(#[props(default)] featured_only: bool) -> Element {
    rsx! {
        SectionBoundary {
            name: "Projects",
            render: Callback::new(move |_: ()| {
                let shown = if featured_only {
                    featured_projects()
                } else {
                    projects_in(ProjectCategory::All)
                };
                Ok(rsx! {
                    section { class: "section projects-section", id: "projects",
                        div { class: "section-heading",
                            h2 { "Featured Projects" }
                            p { "A selection of projects I'm particularly proud of." }
                        }
                        ProjectGrid { shown }
                    }
                })
            }),
        }
    }
}

#[component]
pub fn ProjectsPage() -> Element {
    let mut category = use_signal(ProjectCategory::default);
    let selected = *category.read();

    rsx! {
        SectionBoundary {
            name: "Projects",
            render: Callback::new(move |_: ()| {
                Ok(rsx! {
                    section { class: "section projects-section page-section",
                        div { class: "section-heading",
                            h2 { "My Projects" }
                            p { "Everything I've shipped recently, filterable by category." }
                        }
                        div { class: "filter-row",
                            for option in ProjectCategory::all() {
                                button {
                                    class: if *option == selected { "filter-button filter-button-active" } else { "filter-button" },
                                    onclick: move |_| category.set(*option),
                                    "{option.label()}"
                                }
                            }
                        }
                        ProjectGrid { shown: projects_in(selected) }
                    }
                })
            }),
        }
    }
}

#[component]
fn ProjectGrid(shown: Vec<Project>) -> Element {
    rsx! {
        div { class: "card-grid",
            for project in shown {
                ProjectCell { key: "{project.id}", project: project.clone() }
            }
        }
    }
}

/// One grid slot: the card behind its own boundary, so a bad entry
/// degrades to a placeholder instead of sinking the section.
#[component]
fn ProjectCell(project: Project) -> Element {
    let title = project.title;
    rsx! {
        ComponentBoundary {
            name: "{title}",
            render: Callback::new(move |_: ()| -> Result<Element, RenderFailure> {
                Ok(rsx! {
                    ProjectCard { project: project.clone() }
                })
            }),
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "card project-card",
            ProjectImage {
                source: project.image,
                title: project.title,
                width: 600,
                height: 400,
                class: "project-card-image",
            }
            div { class: "project-card-body",
                h3 { "{project.title}" }
                p { class: "project-card-description", "{project.description}" }
                div { class: "chip-row",
                    for tech in project.technologies {
                        span { class: "chip", "{tech}" }
                    }
                }
                div { class: "project-card-links",
                    if let Some(live) = project.live_url {
                        a { class: "project-link", href: "{live}",
                            IconGlyph { icon: Icon::ExternalLink, size: 14 }
                            "Live Demo"
                        }
                    }
                    if let Some(repo) = project.github_url {
                        a { class: "project-link", href: "{repo}",
                            IconGlyph { icon: Icon::Github, size: 14 }
                            "Source"
                        }
                    }
                }
            }
        }
    }
}
