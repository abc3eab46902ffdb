//! Platform services behind a small trait so boundary and navigation
//! logic stays testable without a real browsing context.

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;

/// Host capabilities the components need: reload, navigation, scroll
/// locking, and the request-context fields diagnostics capture.
pub trait PlatformServices: Send + Sync {
    fn reload(&self);
    fn navigate_home(&self);
    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn current_url(&self) -> String;
    fn user_agent(&self) -> String;
}

/// Cloneable handle shared through Dioxus context.
#[derive(Clone)]
pub struct PlatformContext(Arc<dyn PlatformServices>);

impl PlatformContext {
    pub fn new(services: Arc<dyn PlatformServices>) -> Self {
        Self(services)
    }

    pub fn reload(&self) {
        self.0.reload();
    }

    pub fn navigate_home(&self) {
        self.0.navigate_home();
    }

    pub fn lock_scroll(&self) {
        self.0.lock_scroll();
    }

    pub fn unlock_scroll(&self) {
        self.0.unlock_scroll();
    }

    pub fn current_url(&self) -> String {
        self.0.current_url()
    }

    pub fn user_agent(&self) -> String {
        self.0.user_agent()
    }
}

impl PartialEq for PlatformContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for PlatformContext {
    fn default() -> Self {
        Self(Arc::new(HostPlatform))
    }
}

/// Baseline implementation used when the app has not provided its own.
/// Scroll locking goes through the document; reload and navigation have
/// no host meaning here and only log.
pub struct HostPlatform;

impl PlatformServices for HostPlatform {
    fn reload(&self) {
        tracing::info!("platform reload requested, no handler installed");
    }

    fn navigate_home(&self) {
        tracing::info!("platform home navigation requested, no handler installed");
    }

    fn lock_scroll(&self) {
        document::eval("document.body.style.overflow = 'hidden';");
    }

    fn unlock_scroll(&self) {
        document::eval("document.body.style.overflow = 'unset';");
    }

    fn current_url(&self) -> String {
        "app://folio".to_string()
    }

    fn user_agent(&self) -> String {
        format!(
            "folio/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        )
    }
}

/// Provides the platform context for the subtree. Call once at the app
/// root.
pub fn provide_platform(services: Arc<dyn PlatformServices>) -> PlatformContext {
    use_context_provider(|| PlatformContext::new(services))
}

/// Reads the nearest platform context, falling back to [`HostPlatform`]
/// so components keep working when no provider exists (tests, previews).
pub fn use_platform() -> PlatformContext {
    use_hook(|| try_consume_context::<PlatformContext>().unwrap_or_default())
}

/// Body-scroll lock with acquire-on-open / release-on-drop discipline.
/// Holding the guard in component state guarantees the lock cannot leak
/// past unmount: dropping the state releases it.
pub struct ScrollLockGuard {
    platform: PlatformContext,
}

impl ScrollLockGuard {
    pub fn acquire(platform: &PlatformContext) -> Self {
        platform.lock_scroll();
        Self {
            platform: platform.clone(),
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.platform.unlock_scroll();
    }
}

/// Test double that records every call it receives.
#[derive(Default)]
pub struct RecordingPlatform {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingPlatform {
    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PlatformServices for RecordingPlatform {
    fn reload(&self) {
        self.record("reload");
    }

    fn navigate_home(&self) {
        self.record("navigate_home");
    }

    fn lock_scroll(&self) {
        self.record("lock_scroll");
    }

    fn unlock_scroll(&self) {
        self.record("unlock_scroll");
    }

    fn current_url(&self) -> String {
        "https://example.test/portfolio".to_string()
    }

    fn user_agent(&self) -> String {
        "recording-platform".to_string()
    }
}
