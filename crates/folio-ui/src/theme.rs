//! Theme system for the portfolio: a dark and a light palette.

use dioxus::prelude::*;

use crate::icons::{Icon, IconGlyph};

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Toggle button sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ToggleSize {
    fn css_class(&self) -> &'static str {
        match self {
            ToggleSize::Sm => "theme-toggle-sm",
            ToggleSize::Md => "theme-toggle-md",
            ToggleSize::Lg => "theme-toggle-lg",
        }
    }

    fn icon_size(&self) -> u32 {
        match self {
            ToggleSize::Sm => 14,
            ToggleSize::Md => 18,
            ToggleSize::Lg => 22,
        }
    }
}

/// Button that flips between the dark and light theme.
#[component]
pub fn ThemeToggle(size: Option<ToggleSize>, class: Option<String>) -> Element {
    let size = size.unwrap_or_default();
    let class = class.unwrap_or_default();
    let theme = *CURRENT_THEME.read();
    let icon = match theme {
        Theme::Dark => Icon::Sun,
        Theme::Light => Icon::Moon,
    };
    let next = theme.toggled();

    rsx! {
        button {
            class: "theme-toggle {size.css_class()} {class}",
            aria_label: "Switch to {next.display_name()} theme",
            onclick: move |_| {
                *CURRENT_THEME.write() = next;
            },
            IconGlyph { icon, size: size.icon_size() }
        }
    }
}
