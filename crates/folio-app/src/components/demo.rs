//! Live demonstration page for the failure boundaries: a view that can
//! be made to fail on demand, an async task that raises through the
//! handle, and an image with a broken source.

use dioxus::prelude::*;
use folio_ui::boundary::{
    AsyncBoundary, ComponentBoundary, RenderFailure, ResetKey, use_failure_handle,
};
use folio_ui::button::{Button, ButtonVariant};
use folio_ui::image::SafeImage;

#[component]
pub fn DemoPage() -> Element {
    rsx! {
        section { class: "section demo-section page-section",
            div { class: "section-heading",
                h2 { "Error Boundary Demo" }
                p {
                    "Each demo below fails on purpose. The failure stays inside "
                    "its boundary; the rest of this page keeps working."
                }
            }
            div { class: "demo-grid",
                ComponentFailureDemo {}
                AsyncFailureDemo {}
                BrokenImageDemo {}
            }
        }
    }
}

/// A view that fails while rendering once the switch is flipped. The
/// armed flag doubles as a reset key, so disarming heals the boundary
/// without any manual retry.
#[component]
fn ComponentFailureDemo() -> Element {
    let mut armed = use_signal(|| false);
    let is_armed = *armed.read();

    rsx! {
        div { class: "card demo-card",
            h3 { "Component Error Boundary" }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    let next = !*armed.peek();
                    armed.set(next);
                },
                if is_armed { "Fix Component" } else { "Trigger Error" }
            }
            ComponentBoundary {
                name: "Demo Widget",
                reset_keys: vec![ResetKey::from(is_armed)],
                render: Callback::new(move |_: ()| -> Result<Element, RenderFailure> {
                    if *armed.read() {
                        return Err(RenderFailure::new(
                            "Intentional error triggered for demonstration",
                        )
                        .in_scope("DemoWidget"));
                    }
                    Ok(rsx! {
                        p { class: "demo-healthy", "This component is working fine." }
                    })
                }),
            }
        }
    }
}

/// Raises a failure from an async task through the boundary handle.
#[component]
fn AsyncFailureDemo() -> Element {
    rsx! {
        div { class: "card demo-card",
            h3 { "Async Error Boundary" }
            AsyncBoundary {
                name: "Async Demo",
                render: Callback::new(|_: ()| {
                    Ok(rsx! {
                        AsyncTrigger {}
                    })
                }),
            }
        }
    }
}

#[component]
fn AsyncTrigger() -> Element {
    let handle = use_failure_handle();

    rsx! {
        p { class: "demo-healthy", "Async content loaded." }
        Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| {
                spawn(async move {
                    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                    handle.trigger(
                        RenderFailure::new("Async operation failed")
                            .in_scope("AsyncTrigger"),
                    );
                });
            },
            "Trigger Async Error"
        }
    }
}

/// A deliberately broken source, healed by the generated fallback.
#[component]
fn BrokenImageDemo() -> Element {
    rsx! {
        div { class: "card demo-card",
            h3 { "Self-Healing Image" }
            p { "This image URL is broken; a generated placeholder takes its place." }
            SafeImage {
                source: "https://example.invalid/missing.jpg",
                alt_text: "Broken image demo",
                fallback_seed: "Broken image demo",
                width: 320,
                height: 200,
            }
        }
    }
}
