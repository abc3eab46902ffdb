//! Desktop implementation of the platform services the shared
//! components need. Reload re-keys the page subtree, home navigation
//! goes through the router, scroll locking goes through the webview
//! document.

use dioxus::prelude::*;
use folio_ui::platform::PlatformServices;

use crate::route::{self, ACTIVE_ROUTE, Route};

pub struct ShellPlatform;

impl PlatformServices for ShellPlatform {
    fn reload(&self) {
        tracing::info!("reloading page subtree");
        route::remount();
    }

    fn navigate_home(&self) {
        route::navigate(Route::Home);
    }

    fn lock_scroll(&self) {
        document::eval("document.body.style.overflow = 'hidden';");
    }

    fn unlock_scroll(&self) {
        document::eval("document.body.style.overflow = 'unset';");
    }

    fn current_url(&self) -> String {
        format!("app://folio/{}", ACTIVE_ROUTE.peek().path())
    }

    fn user_agent(&self) -> String {
        format!(
            "folio-app/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        )
    }
}
