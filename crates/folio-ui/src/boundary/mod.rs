//! Failure containment for render subtrees.
//!
//! A `FailureBoundary` wraps a fallible view, catches the failure it
//! returns, and renders a scoped fallback instead of letting the whole
//! page go blank. Specialized wrappers fix the scope level for pages,
//! sections, components, and async-driven content.

mod component;
pub mod report;
mod state;

pub use component::{
    AsyncBoundary, ComponentBoundary, FailureBoundary, FailureHandle, FailureNotice,
    PageBoundary, SectionBoundary, use_failure_handle, with_component_boundary,
};
pub use report::{
    DiagnosticsSink, FailureReport, HttpSink, ReportError, RuntimeMode, clear_sink,
    install_sink, runtime_mode, set_runtime_mode,
};
pub use state::{
    BoundaryConfig, CapturedFailure, FailureBoundaryState, FailureDiagnostics, RenderFailure,
    ResetKey, ScopeLevel, new_failure_id, reset_keys_changed,
};
