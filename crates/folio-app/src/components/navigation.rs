//! Fixed top navigation with a mobile menu that locks body scroll while
//! open.

use dioxus::prelude::*;
use folio_ui::icons::{Icon, IconGlyph};
use folio_ui::platform::{ScrollLockGuard, use_platform};
use folio_ui::theme::{ThemeToggle, ToggleSize};

use crate::route::{ACTIVE_ROUTE, Route, navigate};

#[component]
pub fn Navigation() -> Element {
    let platform = use_platform();
    let mut menu_open = use_signal(|| false);
    // Guard in component state: dropping it (close or unmount) releases
    // the scroll lock.
    let mut menu_lock = use_signal(|| None::<ScrollLockGuard>);
    let active = *ACTIVE_ROUTE.read();

    let menu_icon = if *menu_open.read() { Icon::X } else { Icon::Menu };

    rsx! {
        header { class: "site-header",
            nav { class: "site-nav",
                button {
                    class: "site-logo",
                    onclick: move |_| navigate(Route::Home),
                    "Portfolio"
                }
                div { class: "nav-links",
                    for route in Route::all() {
                        button {
                            class: if *route == active { "nav-link nav-link-active" } else { "nav-link" },
                            onclick: move |_| navigate(*route),
                            "{route.label()}"
                        }
                    }
                }
                div { class: "nav-actions",
                    ThemeToggle { size: ToggleSize::Sm }
                    button {
                        class: "menu-toggle",
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| {
                            let opening = !*menu_open.peek();
                            menu_open.set(opening);
                            if opening {
                                menu_lock.set(Some(ScrollLockGuard::acquire(&platform)));
                            } else {
                                menu_lock.set(None);
                            }
                        },
                        IconGlyph { icon: menu_icon, size: 18 }
                    }
                }
            }
            if *menu_open.read() {
                div { class: "mobile-menu",
                    for route in Route::all() {
                        button {
                            class: "mobile-menu-link",
                            onclick: move |_| {
                                menu_open.set(false);
                                menu_lock.set(None);
                                navigate(*route);
                            },
                            "{route.label()}"
                        }
                    }
                }
            }
        }
    }
}
