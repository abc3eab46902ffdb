//! Boundary state machine and failure diagnostics.
//!
//! A boundary is either `Healthy` (children render untouched) or
//! `Failed` (a fallback is shown). The machine itself is plain data so
//! the transition rules can be tested without a renderer; the component
//! layer in [`super::component`] drives it.

use std::backtrace::Backtrace;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Granularity a boundary protects, controlling fallback richness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeLevel {
    Page,
    Section,
    #[default]
    Component,
}

impl ScopeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ScopeLevel::Page => "boundary-fallback-page",
            ScopeLevel::Section => "boundary-fallback-section",
            ScopeLevel::Component => "boundary-fallback-component",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScopeLevel::Page => "Page Error",
            ScopeLevel::Section => "Section Error",
            ScopeLevel::Component => "Component Error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScopeLevel::Page => "page",
            ScopeLevel::Section => "section",
            ScopeLevel::Component => "component",
        }
    }
}

/// An external value whose change signals "conditions changed enough to
/// retry". Compared positionally by value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResetKey {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl From<&str> for ResetKey {
    fn from(value: &str) -> Self {
        ResetKey::Text(value.to_string())
    }
}

impl From<String> for ResetKey {
    fn from(value: String) -> Self {
        ResetKey::Text(value)
    }
}

impl From<i64> for ResetKey {
    fn from(value: i64) -> Self {
        ResetKey::Number(value)
    }
}

impl From<u64> for ResetKey {
    fn from(value: u64) -> Self {
        ResetKey::Number(value as i64)
    }
}

impl From<usize> for ResetKey {
    fn from(value: usize) -> Self {
        ResetKey::Number(value as i64)
    }
}

impl From<bool> for ResetKey {
    fn from(value: bool) -> Self {
        ResetKey::Flag(value)
    }
}

/// Returns true when any positional element differs by value. A length
/// change counts as a change.
pub fn reset_keys_changed(prev: &[ResetKey], next: &[ResetKey]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next.iter()).any(|(a, b)| a != b)
}

/// The error value a fallible view returns into its nearest boundary.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RenderFailure {
    pub message: String,
    /// Path of view names the failure surfaced through, outermost first.
    pub component_trace: Vec<String>,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            component_trace: Vec::new(),
        }
    }

    /// Records the named view on the trace as the failure propagates out.
    pub fn in_scope(mut self, name: impl Into<String>) -> Self {
        self.component_trace.insert(0, name.into());
        self
    }

    pub fn trace_display(&self) -> String {
        if self.component_trace.is_empty() {
            "(root)".to_string()
        } else {
            self.component_trace.join(" > ")
        }
    }
}

impl From<&str> for RenderFailure {
    fn from(message: &str) -> Self {
        RenderFailure::new(message)
    }
}

impl From<String> for RenderFailure {
    fn from(message: String) -> Self {
        RenderFailure::new(message)
    }
}

/// Unique id per failure occurrence: timestamp plus a random suffix.
pub fn new_failure_id() -> String {
    format!(
        "failure_{}_{:08x}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}

/// Diagnostics captured once at catch time, never mutated afterwards.
/// Fields are best-effort; a missing user agent or url is tolerated.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureDiagnostics {
    pub failure_id: String,
    pub message: String,
    pub stack_trace: String,
    pub component_trace: String,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub url: String,
    pub scope_name: String,
}

impl FailureDiagnostics {
    pub fn capture(
        failure: &RenderFailure,
        scope_name: &str,
        user_agent: String,
        url: String,
    ) -> Self {
        Self {
            failure_id: new_failure_id(),
            message: failure.message.clone(),
            stack_trace: Backtrace::force_capture().to_string(),
            component_trace: failure.trace_display(),
            timestamp: Utc::now(),
            user_agent,
            url,
            scope_name: scope_name.to_string(),
        }
    }
}

/// A failure episode: the error plus the diagnostics captured with it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFailure {
    pub failure: RenderFailure,
    pub diagnostics: FailureDiagnostics,
}

/// The `{Healthy, Failed}` machine. Healthy iff nothing is captured.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FailureBoundaryState {
    captured: Option<CapturedFailure>,
}

impl FailureBoundaryState {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn has_failed(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured(&self) -> Option<&CapturedFailure> {
        self.captured.as_ref()
    }

    /// Healthy -> Failed. A failure arriving while already failed is
    /// ignored: the episode is intercepted exactly once.
    pub fn record(&mut self, failure: RenderFailure, diagnostics: FailureDiagnostics) {
        if self.captured.is_none() {
            self.captured = Some(CapturedFailure {
                failure,
                diagnostics,
            });
        }
    }

    /// Failed -> Healthy. A no-op when already healthy; the boundary is
    /// reusable indefinitely across failure episodes.
    pub fn reset(&mut self) {
        self.captured = None;
    }
}

/// Immutable per-boundary configuration, supplied by the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryConfig {
    pub scope_level: ScopeLevel,
    pub scope_name: String,
    pub reset_keys: Vec<ResetKey>,
    pub reset_on_any_change: bool,
}

impl BoundaryConfig {
    pub fn new(scope_level: ScopeLevel, scope_name: impl Into<String>) -> Self {
        Self {
            scope_level,
            scope_name: scope_name.into(),
            reset_keys: Vec::new(),
            reset_on_any_change: false,
        }
    }

    pub fn with_reset_keys(mut self, keys: Vec<ResetKey>) -> Self {
        self.reset_keys = keys;
        self
    }

    pub fn reset_on_change(mut self, enabled: bool) -> Self {
        self.reset_on_any_change = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnostics_for(failure: &RenderFailure) -> FailureDiagnostics {
        FailureDiagnostics::capture(
            failure,
            "Test Scope",
            "test-agent".to_string(),
            "app://folio/test".to_string(),
        )
    }

    #[test]
    fn starts_healthy_with_nothing_captured() {
        let state = FailureBoundaryState::healthy();
        assert!(!state.has_failed());
        assert!(state.captured().is_none());
    }

    #[test]
    fn record_transitions_to_failed_once() {
        let mut state = FailureBoundaryState::healthy();
        let first = RenderFailure::new("boom");
        state.record(first.clone(), diagnostics_for(&first));
        assert!(state.has_failed());
        let first_id = state.captured().unwrap().diagnostics.failure_id.clone();

        // A second failure in the same episode is ignored.
        let second = RenderFailure::new("later");
        state.record(second.clone(), diagnostics_for(&second));
        assert_eq!(state.captured().unwrap().failure.message, "boom");
        assert_eq!(state.captured().unwrap().diagnostics.failure_id, first_id);
    }

    #[test]
    fn reset_returns_to_healthy_and_is_idempotent() {
        let mut state = FailureBoundaryState::healthy();
        let failure = RenderFailure::new("boom");
        state.record(failure.clone(), diagnostics_for(&failure));
        state.reset();
        assert!(!state.has_failed());
        state.reset();
        assert_eq!(state, FailureBoundaryState::healthy());
    }

    #[test]
    fn boundary_reusable_across_episodes() {
        let mut state = FailureBoundaryState::healthy();
        for episode in 0..3 {
            let failure = RenderFailure::new(format!("episode {episode}"));
            state.record(failure.clone(), diagnostics_for(&failure));
            assert!(state.has_failed());
            state.reset();
            assert!(!state.has_failed());
        }
    }

    #[test]
    fn reset_keys_compare_positionally_by_value() {
        let prev = vec![ResetKey::from("a"), ResetKey::from(1i64)];
        let same = vec![ResetKey::from("a"), ResetKey::from(1i64)];
        let changed = vec![ResetKey::from("a"), ResetKey::from(2i64)];
        let shorter = vec![ResetKey::from("a")];

        assert!(!reset_keys_changed(&prev, &same));
        assert!(reset_keys_changed(&prev, &changed));
        assert!(reset_keys_changed(&prev, &shorter));
        assert!(!reset_keys_changed(&[], &[]));
    }

    #[test]
    fn repeating_an_identical_key_set_does_not_signal_change() {
        // Idempotence: re-supplying the already-seen values is not a
        // change, so a reset is not re-triggered.
        let keys = vec![ResetKey::from(true), ResetKey::from("projects")];
        assert!(!reset_keys_changed(&keys, &keys.clone()));
    }

    #[test]
    fn failure_ids_are_unique_per_occurrence() {
        let a = new_failure_id();
        let b = new_failure_id();
        assert_ne!(a, b);
        assert!(a.starts_with("failure_"));
    }

    #[test]
    fn render_failure_trace_accumulates_outermost_first() {
        let failure = RenderFailure::new("boom")
            .in_scope("ProjectCard")
            .in_scope("ProjectsSection");
        assert_eq!(failure.trace_display(), "ProjectsSection > ProjectCard");
        assert_eq!(RenderFailure::new("x").trace_display(), "(root)");
    }

    #[test]
    fn diagnostics_capture_is_best_effort_but_complete() {
        let failure = RenderFailure::new("boom").in_scope("Hero");
        let diag = diagnostics_for(&failure);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.component_trace, "Hero");
        assert_eq!(diag.scope_name, "Test Scope");
        assert_eq!(diag.user_agent, "test-agent");
        assert_eq!(diag.url, "app://folio/test");
        assert!(!diag.failure_id.is_empty());
    }
}
