//! Rendered-markup tests for the failure boundaries, driven through a
//! server-side render of a real virtual dom.

use std::cell::RefCell;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use folio_ui::boundary::{
    ComponentBoundary, FailureHandle, PageBoundary, RenderFailure, ResetKey, RuntimeMode,
    SectionBoundary, set_runtime_mode, use_failure_handle, with_component_boundary,
};
use folio_ui::image::Avatar;

fn render_app(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Applies a state change inside the dom's runtime and renders the
/// resulting update, so a test can observe the next frame.
fn rerender_with(dom: &mut VirtualDom, change: impl FnOnce()) -> String {
    dom.in_runtime(change);
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

fn healthy_app() -> Element {
    rsx! {
        SectionBoundary {
            name: "Projects",
            render: Callback::new(|_: ()| {
                Ok(rsx! {
                    p { class: "project-list", "three projects" }
                })
            }),
        }
    }
}

#[test]
fn healthy_boundary_renders_children_untouched() {
    let html = render_app(healthy_app);
    assert!(html.contains("three projects"));
    assert!(!html.contains("boundary-fallback"));
}

fn component_failure_app() -> Element {
    rsx! {
        div { class: "page-shell",
            ComponentBoundary {
                name: "Weather Widget",
                render: Callback::new(|_: ()| {
                    Err(RenderFailure::new("weather api unreachable"))
                }),
            }
            p { "the rest of the page" }
        }
    }
}

#[test]
fn component_failure_degrades_to_inline_placeholder() {
    let html = render_app(component_failure_app);
    assert!(html.contains("boundary-fallback-component"));
    assert!(html.contains("Weather Widget unavailable"));
    // Siblings outside the boundary are unaffected.
    assert!(html.contains("the rest of the page"));
    // The raw failure message never leaks into a component fallback,
    // and the smallest scope carries no recovery controls.
    assert!(!html.contains("weather api unreachable"));
    assert!(!html.contains("boundary-action"));
}

static STATS_EPOCH: GlobalSignal<i64> = Signal::global(|| 0);
static STATS_BROKEN: GlobalSignal<bool> = Signal::global(|| true);

fn resettable_app() -> Element {
    let epoch = *STATS_EPOCH.read();
    rsx! {
        ComponentBoundary {
            name: "Stats Widget",
            reset_keys: vec![ResetKey::from(epoch)],
            render: Callback::new(|_: ()| {
                if *STATS_BROKEN.read() {
                    Err(RenderFailure::new("stats feed offline"))
                } else {
                    Ok(rsx! {
                        p { "stats back online" }
                    })
                }
            }),
        }
    }
}

#[test]
fn reset_key_change_heals_a_failed_boundary() {
    let mut dom = VirtualDom::new(resettable_app);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("Stats Widget unavailable"));

    // Fixing the underlying data without touching the keys leaves the
    // boundary in its failed state.
    let html = rerender_with(&mut dom, || *STATS_BROKEN.write() = false);
    assert!(html.contains("Stats Widget unavailable"));

    // Changing a reset key returns the original children.
    let html = rerender_with(&mut dom, || *STATS_EPOCH.write() += 1);
    assert!(html.contains("stats back online"));
    assert!(!html.contains("boundary-fallback"));
}

thread_local! {
    static FEED_HANDLE: RefCell<Option<FailureHandle>> = RefCell::new(None);
}

static FEED_EPOCH: GlobalSignal<i64> = Signal::global(|| 0);
static FEED_BROKEN: GlobalSignal<bool> = Signal::global(|| false);

#[component]
fn FeedBody() -> Element {
    let handle = use_failure_handle();
    FEED_HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
    rsx! {
        p { "feed is live" }
    }
}

fn feed_app() -> Element {
    let epoch = *FEED_EPOCH.read();
    rsx! {
        ComponentBoundary {
            name: "Activity Feed",
            reset_keys: vec![ResetKey::from(epoch)],
            render: Callback::new(|_: ()| {
                if *FEED_BROKEN.read() {
                    return Err(RenderFailure::new("feed fetch failed"));
                }
                Ok(rsx! {
                    FeedBody {}
                })
            }),
        }
    }
}

#[test]
fn raised_failure_does_not_survive_a_reset_key_heal() {
    let mut dom = VirtualDom::new(feed_app);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("feed is live"));
    let handle = FEED_HANDLE
        .with(|slot| *slot.borrow())
        .expect("feed body renders before the boundary fails");

    let html = rerender_with(&mut dom, || *FEED_BROKEN.write() = true);
    assert!(html.contains("Activity Feed unavailable"));

    // A failure raised through the handle while the boundary is already
    // failed is discarded by the next reset, not replayed after it.
    let html = rerender_with(&mut dom, || {
        handle.trigger(RenderFailure::new("late refresh failed"));
    });
    assert!(html.contains("Activity Feed unavailable"));

    let html = rerender_with(&mut dom, || {
        *FEED_BROKEN.write() = false;
        *FEED_EPOCH.write() += 1;
    });
    assert!(html.contains("feed is live"));
    assert!(!html.contains("boundary-fallback"));
}

fn section_failure_app() -> Element {
    rsx! {
        SectionBoundary {
            name: "Testimonials",
            render: Callback::new(|_: ()| {
                Err(RenderFailure::new("testimonial data corrupt"))
            }),
        }
    }
}

#[test]
fn section_failure_offers_a_refresh_action() {
    let html = render_app(section_failure_app);
    assert!(html.contains("boundary-fallback-section"));
    assert!(html.contains("Testimonials is having trouble"));
    assert!(html.contains("Refresh Page"));
}

fn page_failure_app() -> Element {
    rsx! {
        PageBoundary {
            name: "Home",
            render: Callback::new(|_: ()| {
                Err(RenderFailure::new("boom").in_scope("Hero"))
            }),
        }
    }
}

#[test]
fn page_failure_offers_full_recovery_actions() {
    let html = render_app(page_failure_app);
    assert!(html.contains("boundary-fallback-page"));
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("Try Again"));
    assert!(html.contains("Reload Page"));
    assert!(html.contains("Go Home"));
}

// Runtime mode is process-global, so both modes are exercised inside
// this one test, sequentially.
#[test]
fn failure_detail_is_development_only() {
    set_runtime_mode(RuntimeMode::Development);
    let html = render_app(page_failure_app);
    assert!(html.contains("Error Details (Development)"));
    assert!(html.contains("boom"));
    assert!(html.contains("Error ID: failure_"));

    set_runtime_mode(RuntimeMode::Production);
    let html = render_app(page_failure_app);
    assert!(!html.contains("Error Details"));
    assert!(!html.contains("boom"));

    set_runtime_mode(RuntimeMode::Development);
}

fn custom_fallback_app() -> Element {
    rsx! {
        ComponentBoundary {
            name: "Chart",
            render: Callback::new(|_: ()| Err(RenderFailure::new("no data"))),
            fallback: rsx! {
                div { class: "chart-placeholder", "chart temporarily offline" }
            },
        }
    }
}

#[test]
fn custom_fallback_replaces_the_scoped_default() {
    let html = render_app(custom_fallback_app);
    assert!(html.contains("chart temporarily offline"));
    assert!(!html.contains("boundary-fallback-component"));
}

fn wrapped_app() -> Element {
    with_component_boundary(
        "Status Badge",
        Callback::new(|_: ()| Err(RenderFailure::new("badge source missing"))),
    )
}

#[test]
fn wrapper_helper_produces_a_component_scoped_boundary() {
    let html = render_app(wrapped_app);
    assert!(html.contains("boundary-fallback-component"));
    assert!(html.contains("Status Badge unavailable"));
}

fn avatar_app() -> Element {
    rsx! {
        Avatar { name: "Jane Smith" }
    }
}

#[test]
fn avatar_without_source_renders_a_generated_url() {
    let html = render_app(avatar_app);
    assert!(html.contains("https://api.dicebear.com/7.x/avataaars/svg?seed=Jane%20Smith"));
    assert!(html.contains("safe-image avatar"));
}
