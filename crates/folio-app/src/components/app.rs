//! Application shell: platform wiring, the page-level boundary, and the
//! route switch.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_ui::boundary::{PageBoundary, RenderFailure};
use folio_ui::platform::provide_platform;
use folio_ui::theme::ThemedRoot;

use crate::components::{
    AboutPage, ContactPage, DemoPage, Footer, Hero, Navigation, ProjectsPage, ProjectsSection,
    SkillsSection, TestimonialsSection,
};
use crate::route::{ACTIVE_ROUTE, REMOUNT_EPOCH, Route};
use crate::shell::ShellPlatform;

#[component]
pub fn App() -> Element {
    provide_platform(Arc::new(ShellPlatform));
    let epoch = *REMOUNT_EPOCH.read();

    rsx! {
        ThemedRoot {
            PageBoundary {
                name: "Portfolio",
                render: Callback::new(move |_: ()| -> Result<Element, RenderFailure> {
                    Ok(rsx! {
                        Navigation {}
                        // Re-keying the main region gives "reload" its
                        // meaning: page state is dropped and rebuilt.
                        main { key: "{epoch}", class: "page-main",
                            ActivePage {}
                        }
                        Footer {}
                    })
                }),
            }
        }
    }
}

#[component]
fn ActivePage() -> Element {
    match *ACTIVE_ROUTE.read() {
        Route::Home => rsx! {
            HomePage {}
        },
        Route::About => rsx! {
            AboutPage {}
        },
        Route::Projects => rsx! {
            ProjectsPage {}
        },
        Route::Contact => rsx! {
            ContactPage {}
        },
        Route::Demo => rsx! {
            DemoPage {}
        },
    }
}

#[component]
fn HomePage() -> Element {
    rsx! {
        Hero {}
        SkillsSection {}
        ProjectsSection { featured_only: true }
        TestimonialsSection {}
    }
}
