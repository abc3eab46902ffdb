//! The boundary component layer.
//!
//! `FailureBoundary` drives the state machine in [`super::state`]: it
//! runs the fallible view, and on failure captures diagnostics, reports
//! them, and swaps in a fallback within the same render pass. The
//! wrappers below fix the scope level for the common cases.

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use dioxus::prelude::*;

use super::report::{self, FailureReport, RuntimeMode, runtime_mode};
use super::state::{
    BoundaryConfig, FailureBoundaryState, FailureDiagnostics, RenderFailure, ResetKey,
    ScopeLevel, reset_keys_changed,
};
use crate::icons::{Icon, IconGlyph};
use crate::platform::use_platform;

/// What a failure observer receives: the failure and the diagnostics
/// captured with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureNotice {
    pub failure: RenderFailure,
    pub diagnostics: FailureDiagnostics,
}

/// Handle for raising a failure into the nearest enclosing boundary
/// from an event handler or async task. The boundary picks the raised
/// failure up on its next render and treats it like a render failure.
#[derive(Clone, Copy, PartialEq)]
pub struct FailureHandle {
    pending: Signal<Option<RenderFailure>>,
}

impl FailureHandle {
    pub fn trigger(&self, failure: impl Into<RenderFailure>) {
        let mut pending = self.pending;
        pending.set(Some(failure.into()));
    }
}

/// The handle of the nearest enclosing boundary. Outside any boundary
/// the handle is detached: raising through it only logs.
pub fn use_failure_handle() -> FailureHandle {
    let detached = use_signal(|| None::<RenderFailure>);
    use_hook(|| {
        try_consume_context::<FailureHandle>().unwrap_or_else(|| {
            tracing::warn!("failure handle requested outside any boundary");
            FailureHandle { pending: detached }
        })
    })
}

/// Catches the failure its view returns and renders a scoped fallback
/// in its place. The rest of the page is unaffected, and the boundary
/// stays reusable across any number of failure episodes.
#[component]
pub fn FailureBoundary(
    config: BoundaryConfig,
    render: Callback<(), Result<Element, RenderFailure>>,
    on_failure: Option<EventHandler<FailureNotice>>,
    fallback: Option<Element>,
) -> Element {
    let platform = use_platform();
    let mut state = use_signal(FailureBoundaryState::healthy);
    let mut pending = use_signal(|| None::<RenderFailure>);
    use_context_provider(|| FailureHandle { pending });
    let prev_config = use_hook(|| Rc::new(RefCell::new(config.clone())));

    // Auto-reset: a change in reset keys, or any config change when
    // opted in, clears a failed state so the view gets a fresh attempt.
    {
        let mut prev = prev_config.borrow_mut();
        if *prev != config {
            let should_reset = reset_keys_changed(&prev.reset_keys, &config.reset_keys)
                || config.reset_on_any_change;
            *prev = config.clone();
            if should_reset && state.peek().has_failed() {
                tracing::debug!(scope = %config.scope_name, "reset keys changed, clearing failed boundary");
                // A failure raised through the handle while failed must
                // not outlive the reset, or it would re-fail instantly.
                if pending.peek().is_some() {
                    pending.set(None);
                }
                state.write().reset();
            }
        }
    }

    if !state.read().has_failed() {
        let raised = pending.read().clone();
        let outcome = match raised {
            Some(failure) => {
                pending.set(None);
                Err(failure)
            }
            None => render.call(()),
        };
        match outcome {
            Ok(body) => return body,
            Err(failure) => {
                let diagnostics = FailureDiagnostics::capture(
                    &failure,
                    &config.scope_name,
                    platform.user_agent(),
                    platform.current_url(),
                );
                let report = FailureReport::from_diagnostics(&diagnostics, config.scope_level);
                report::log_failure(&report);
                if let Some(handler) = on_failure {
                    let notice = FailureNotice {
                        failure: failure.clone(),
                        diagnostics: diagnostics.clone(),
                    };
                    // An observer panicking must not take the fallback
                    // down with it.
                    if catch_unwind(AssertUnwindSafe(|| handler.call(notice))).is_err() {
                        tracing::error!(
                            scope = %config.scope_name,
                            "failure observer panicked, continuing with fallback"
                        );
                    }
                }
                spawn(async move {
                    report::dispatch(report).await;
                });
                state.write().record(failure, diagnostics);
            }
        }
    }

    if let Some(custom) = fallback {
        return custom;
    }

    let Some(captured) = state.read().captured().cloned() else {
        return rsx! {};
    };

    match config.scope_level {
        ScopeLevel::Component => rsx! {
            div { class: "{config.scope_level.css_class()}",
                IconGlyph { icon: Icon::AlertTriangle, size: 14 }
                span { "{config.scope_name} unavailable" }
            }
        },
        ScopeLevel::Section => rsx! {
            div { class: "{config.scope_level.css_class()}",
                IconGlyph { icon: Icon::AlertTriangle, size: 24 }
                h3 { "{config.scope_name} is having trouble" }
                p { "This section failed to load. The rest of the page still works." }
                button {
                    class: "boundary-action",
                    onclick: {
                        let platform = platform.clone();
                        move |_| platform.reload()
                    },
                    IconGlyph { icon: Icon::Refresh, size: 14 }
                    "Refresh Page"
                }
            }
        },
        ScopeLevel::Page => rsx! {
            div { class: "{config.scope_level.css_class()}",
                IconGlyph { icon: Icon::AlertTriangle, size: 48 }
                h1 { "Something went wrong" }
                p {
                    "We're sorry, but something unexpected happened. "
                    "Please try refreshing the page or go back to the homepage."
                }
                div { class: "boundary-actions",
                    button {
                        class: "boundary-action",
                        onclick: move |_| {
                            pending.set(None);
                            state.write().reset();
                        },
                        IconGlyph { icon: Icon::Refresh, size: 14 }
                        "Try Again"
                    }
                    button {
                        class: "boundary-action",
                        onclick: {
                            let platform = platform.clone();
                            move |_| platform.reload()
                        },
                        "Reload Page"
                    }
                    button {
                        class: "boundary-action",
                        onclick: {
                            let platform = platform.clone();
                            move |_| platform.navigate_home()
                        },
                        IconGlyph { icon: Icon::Home, size: 14 }
                        "Go Home"
                    }
                }
                if runtime_mode() == RuntimeMode::Development {
                    details { class: "boundary-details",
                        summary { "Error Details (Development)" }
                        pre { "{captured.failure.message}" }
                        pre { "{captured.diagnostics.stack_trace}" }
                        p { "Error ID: {captured.diagnostics.failure_id}" }
                    }
                }
            }
        },
    }
}

/// Page-level boundary: full-viewport fallback with recovery actions.
#[component]
pub fn PageBoundary(
    name: String,
    render: Callback<(), Result<Element, RenderFailure>>,
    on_failure: Option<EventHandler<FailureNotice>>,
    reset_keys: Option<Vec<ResetKey>>,
) -> Element {
    let config = BoundaryConfig::new(ScopeLevel::Page, name)
        .with_reset_keys(reset_keys.unwrap_or_default());
    rsx! {
        FailureBoundary { config, render, on_failure }
    }
}

/// Section-level boundary: the section degrades, the page survives.
#[component]
pub fn SectionBoundary(
    name: String,
    render: Callback<(), Result<Element, RenderFailure>>,
    on_failure: Option<EventHandler<FailureNotice>>,
    reset_keys: Option<Vec<ResetKey>>,
) -> Element {
    let config = BoundaryConfig::new(ScopeLevel::Section, name)
        .with_reset_keys(reset_keys.unwrap_or_default())
        .reset_on_change(true);
    rsx! {
        FailureBoundary { config, render, on_failure }
    }
}

/// Component-level boundary: the smallest unit, a one-line placeholder.
#[component]
pub fn ComponentBoundary(
    name: String,
    render: Callback<(), Result<Element, RenderFailure>>,
    on_failure: Option<EventHandler<FailureNotice>>,
    reset_keys: Option<Vec<ResetKey>>,
    fallback: Option<Element>,
) -> Element {
    let config = BoundaryConfig::new(ScopeLevel::Component, name)
        .with_reset_keys(reset_keys.unwrap_or_default())
        .reset_on_change(true);
    rsx! {
        FailureBoundary { config, render, on_failure, fallback }
    }
}

/// Boundary for content driven by async work. Component-scoped, meant to
/// be paired with reset keys derived from the async operation's inputs.
/// Tasks and event handlers inside report through
/// [`use_failure_handle`]; render failures are caught the usual way.
#[component]
pub fn AsyncBoundary(
    name: String,
    render: Callback<(), Result<Element, RenderFailure>>,
    on_failure: Option<EventHandler<FailureNotice>>,
    reset_keys: Option<Vec<ResetKey>>,
) -> Element {
    let config = BoundaryConfig::new(ScopeLevel::Component, name)
        .with_reset_keys(reset_keys.unwrap_or_default())
        .reset_on_change(true);
    rsx! {
        FailureBoundary { config, render, on_failure }
    }
}

/// Wraps a fallible view in a component-level boundary without the rsx
/// ceremony, for list items and other repeated small views.
pub fn with_component_boundary(
    name: impl Into<String>,
    render: Callback<(), Result<Element, RenderFailure>>,
) -> Element {
    let config = BoundaryConfig::new(ScopeLevel::Component, name.into());
    rsx! {
        FailureBoundary { config, render }
    }
}
