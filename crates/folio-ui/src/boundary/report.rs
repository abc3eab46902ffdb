//! Failure reporting: runtime mode gate plus a best-effort diagnostics
//! sink. Forwarding never surfaces to the user; a delivery failure is
//! logged and swallowed.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::state::{FailureDiagnostics, ScopeLevel};

/// Runtime mode controls whether stack detail is shown in fallbacks and
/// whether diagnostics are forwarded to the external sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

const MODE_UNSET: u8 = 0;
const MODE_DEVELOPMENT: u8 = 1;
const MODE_PRODUCTION: u8 = 2;

static RUNTIME_MODE: AtomicU8 = AtomicU8::new(MODE_UNSET);

/// Current runtime mode. Defaults to `Development` in debug builds and
/// `Production` otherwise until explicitly set.
pub fn runtime_mode() -> RuntimeMode {
    match RUNTIME_MODE.load(Ordering::Relaxed) {
        MODE_DEVELOPMENT => RuntimeMode::Development,
        MODE_PRODUCTION => RuntimeMode::Production,
        _ => {
            if cfg!(debug_assertions) {
                RuntimeMode::Development
            } else {
                RuntimeMode::Production
            }
        }
    }
}

pub fn set_runtime_mode(mode: RuntimeMode) {
    let value = match mode {
        RuntimeMode::Development => MODE_DEVELOPMENT,
        RuntimeMode::Production => MODE_PRODUCTION,
    };
    RUNTIME_MODE.store(value, Ordering::Relaxed);
}

/// Serialized diagnostics payload delivered to the reporting sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub failure_id: String,
    pub message: String,
    pub stack_trace: String,
    pub component_trace: String,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub url: String,
    pub scope_name: String,
    pub scope_level: String,
}

impl FailureReport {
    pub fn from_diagnostics(diagnostics: &FailureDiagnostics, scope_level: ScopeLevel) -> Self {
        Self {
            failure_id: diagnostics.failure_id.clone(),
            message: diagnostics.message.clone(),
            stack_trace: diagnostics.stack_trace.clone(),
            component_trace: diagnostics.component_trace.clone(),
            timestamp: diagnostics.timestamp,
            user_agent: diagnostics.user_agent.clone(),
            url: diagnostics.url.clone(),
            scope_name: diagnostics.scope_name.clone(),
            scope_level: scope_level.label().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to deliver failure report: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("reporting sink rejected payload with status {0}")]
    Rejected(u16),
}

/// Destination for failure reports.
#[async_trait]
pub trait DiagnosticsSink: Send + Sync {
    async fn submit(&self, report: &FailureReport) -> Result<(), ReportError>;
}

/// JSON POST sink pointed at an external error-reporting endpoint.
pub struct HttpSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds a sink from `FOLIO_REPORT_ENDPOINT` when configured.
    pub fn from_env() -> Option<Self> {
        std::env::var("FOLIO_REPORT_ENDPOINT")
            .ok()
            .filter(|endpoint| !endpoint.is_empty())
            .map(Self::new)
    }
}

#[async_trait]
impl DiagnosticsSink for HttpSink {
    async fn submit(&self, report: &FailureReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(report)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ReportError::Rejected(response.status().as_u16()));
        }
        Ok(())
    }
}

static SINK: RwLock<Option<Arc<dyn DiagnosticsSink>>> = RwLock::new(None);

pub fn install_sink(sink: Arc<dyn DiagnosticsSink>) {
    *SINK.write().expect("diagnostics sink lock poisoned") = Some(sink);
}

pub fn clear_sink() {
    *SINK.write().expect("diagnostics sink lock poisoned") = None;
}

fn installed_sink() -> Option<Arc<dyn DiagnosticsSink>> {
    SINK.read().expect("diagnostics sink lock poisoned").clone()
}

/// Logs the failure locally. Always called, in every mode.
pub fn log_failure(report: &FailureReport) {
    tracing::error!(
        failure_id = %report.failure_id,
        scope = %report.scope_name,
        level = %report.scope_level,
        trace = %report.component_trace,
        "boundary caught render failure: {}",
        report.message
    );
}

/// Delivers the report to the installed sink in production mode.
/// Best-effort: delivery failures are logged and swallowed.
pub async fn dispatch(report: FailureReport) {
    if runtime_mode() != RuntimeMode::Production {
        return;
    }
    let Some(sink) = installed_sink() else {
        tracing::debug!(
            failure_id = %report.failure_id,
            "no diagnostics sink installed, skipping delivery"
        );
        return;
    };
    if let Err(err) = sink.submit(&report).await {
        tracing::warn!(
            failure_id = %report.failure_id,
            "failed to forward failure report: {err}"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::boundary::state::RenderFailure;

    #[derive(Default)]
    struct RecordingSink {
        received: Mutex<Vec<FailureReport>>,
    }

    #[async_trait]
    impl DiagnosticsSink for RecordingSink {
        async fn submit(&self, report: &FailureReport) -> Result<(), ReportError> {
            self.received.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl DiagnosticsSink for FailingSink {
        async fn submit(&self, _report: &FailureReport) -> Result<(), ReportError> {
            Err(ReportError::Rejected(503))
        }
    }

    fn sample_report() -> FailureReport {
        let failure = RenderFailure::new("boom").in_scope("Hero");
        let diagnostics = FailureDiagnostics::capture(
            &failure,
            "Home",
            "test-agent".to_string(),
            "app://folio/home".to_string(),
        );
        FailureReport::from_diagnostics(&diagnostics, ScopeLevel::Section)
    }

    #[test]
    fn report_carries_diagnostics_and_scope_level() {
        let report = sample_report();
        assert_eq!(report.message, "boom");
        assert_eq!(report.component_trace, "Hero");
        assert_eq!(report.scope_level, "section");
        assert_eq!(report.url, "app://folio/home");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["message"], "boom");
        assert_eq!(json["scope_name"], "Home");
        assert!(json["failure_id"].as_str().unwrap().starts_with("failure_"));
    }

    // Runtime mode is process-global, so every scenario that touches it
    // runs inside this one test, sequentially.
    #[tokio::test]
    async fn dispatch_honours_mode_and_swallows_sink_failures() {
        let recorder = Arc::new(RecordingSink::default());
        install_sink(recorder.clone());

        set_runtime_mode(RuntimeMode::Development);
        dispatch(sample_report()).await;
        assert!(recorder.received.lock().unwrap().is_empty());

        set_runtime_mode(RuntimeMode::Production);
        dispatch(sample_report()).await;
        assert_eq!(recorder.received.lock().unwrap().len(), 1);

        // A failing sink must never propagate its error.
        install_sink(Arc::new(FailingSink));
        dispatch(sample_report()).await;

        // And a missing sink is tolerated.
        clear_sink();
        dispatch(sample_report()).await;

        set_runtime_mode(RuntimeMode::Development);
    }
}
