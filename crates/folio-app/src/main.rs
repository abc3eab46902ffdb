//! Entry point for the portfolio desktop application.

use std::sync::{Arc, OnceLock};

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use folio_app::components::App;
use folio_ui::boundary::{HttpSink, RuntimeMode, install_sink, set_runtime_mode};
use folio_ui::theme::{CURRENT_THEME, Theme};

/// App-level CSS embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Theme requested on the command line, applied on first render.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-app")]
#[command(about = "Personal portfolio desktop application")]
struct Args {
    /// Initial color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeArg,

    /// Run in production mode: failure details hidden, reports forwarded
    #[arg(long)]
    production: bool,

    /// Endpoint to POST failure reports to (overrides FOLIO_REPORT_ENDPOINT)
    #[arg(long)]
    report_endpoint: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!("starting portfolio app");

    set_runtime_mode(if args.production {
        RuntimeMode::Production
    } else {
        RuntimeMode::Development
    });

    let sink = match args.report_endpoint {
        Some(endpoint) => Some(HttpSink::new(endpoint)),
        None => HttpSink::from_env(),
    };
    if let Some(sink) = sink {
        install_sink(Arc::new(sink));
    }

    INITIAL_THEME
        .set(match args.theme {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        })
        .ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Alex Johnson - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    folio_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Applies the command-line theme once, then hands off to the app.
#[component]
fn RootApp() -> Element {
    use_hook(|| {
        if let Some(theme) = INITIAL_THEME.get() {
            *CURRENT_THEME.write() = *theme;
        }
    });

    rsx! {
        App {}
    }
}
