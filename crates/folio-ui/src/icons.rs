//! Closed icon set rendered as inline SVG.
//!
//! Icons are addressed by a closed enum; looking one up by name rejects
//! unknown identifiers with a warning instead of silently rendering
//! nothing.

use dioxus::prelude::*;

/// Every icon the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertTriangle,
    ArrowRight,
    ChevronDown,
    Code,
    Database,
    Download,
    ExternalLink,
    Github,
    Globe,
    Home,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Moon,
    Palette,
    Phone,
    Quote,
    Refresh,
    Send,
    Smartphone,
    Star,
    Sun,
    Twitter,
    X,
    Zap,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::AlertTriangle => "alert-triangle",
            Icon::ArrowRight => "arrow-right",
            Icon::ChevronDown => "chevron-down",
            Icon::Code => "code",
            Icon::Database => "database",
            Icon::Download => "download",
            Icon::ExternalLink => "external-link",
            Icon::Github => "github",
            Icon::Globe => "globe",
            Icon::Home => "home",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::Moon => "moon",
            Icon::Palette => "palette",
            Icon::Phone => "phone",
            Icon::Quote => "quote",
            Icon::Refresh => "refresh-cw",
            Icon::Send => "send",
            Icon::Smartphone => "smartphone",
            Icon::Star => "star",
            Icon::Sun => "sun",
            Icon::Twitter => "twitter",
            Icon::X => "x",
            Icon::Zap => "zap",
        }
    }

    /// Resolves an identifier to an icon. Unknown names are logged and
    /// rejected rather than rendered as an empty glyph.
    pub fn from_name(name: &str) -> Option<Icon> {
        let icon = Icon::all().iter().find(|icon| icon.name() == name);
        if icon.is_none() {
            tracing::warn!(icon = name, "unknown icon identifier");
        }
        icon.copied()
    }

    pub fn all() -> &'static [Icon] {
        &[
            Icon::AlertTriangle,
            Icon::ArrowRight,
            Icon::ChevronDown,
            Icon::Code,
            Icon::Database,
            Icon::Download,
            Icon::ExternalLink,
            Icon::Github,
            Icon::Globe,
            Icon::Home,
            Icon::Linkedin,
            Icon::Mail,
            Icon::MapPin,
            Icon::Menu,
            Icon::Moon,
            Icon::Palette,
            Icon::Phone,
            Icon::Quote,
            Icon::Refresh,
            Icon::Send,
            Icon::Smartphone,
            Icon::Star,
            Icon::Sun,
            Icon::Twitter,
            Icon::X,
            Icon::Zap,
        ]
    }

    fn path_data(&self) -> &'static str {
        match self {
            Icon::AlertTriangle => {
                "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z M12 9v4 M12 17h.01"
            }
            Icon::ArrowRight => "M5 12h14 M12 5l7 7-7 7",
            Icon::ChevronDown => "m6 9 6 6 6-6",
            Icon::Code => "m16 18 6-6-6-6 M8 6l-6 6 6 6",
            Icon::Database => {
                "M12 2c4.97 0 9 1.34 9 3s-4.03 3-9 3-9-1.34-9-3 4.03-3 9-3z M21 5v14c0 1.66-4.03 3-9 3s-9-1.34-9-3V5 M3 12c0 1.66 4.03 3 9 3s9-1.34 9-3"
            }
            Icon::Download => "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3",
            Icon::ExternalLink => {
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6 M15 3h6v6 M10 14 21 3"
            }
            Icon::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4 M9 18c-4.51 2-5-2-7-2"
            }
            Icon::Globe => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
            }
            Icon::Home => "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z M9 22V12h6v10",
            Icon::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M6 9H2v12h4z M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"
            }
            Icon::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z m22 2-10 7L2 6"
            }
            Icon::MapPin => {
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"
            }
            Icon::Menu => "M4 12h16 M4 6h16 M4 18h16",
            Icon::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z",
            Icon::Palette => {
                "M12 22a10 10 0 1 1 10-10c0 1.66-1.34 3-3 3h-2.6a2 2 0 0 0-1.5 3.3 2 2 0 0 1-1.5 3.3z M7.5 11.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M12 7.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M16.5 11.5a1 1 0 1 0 0-2 1 1 0 0 0 0 2z"
            }
            Icon::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.12.81.31 1.6.57 2.38a2 2 0 0 1-.45 2.11L8 9.91a16 16 0 0 0 6 6l1.7-1.23a2 2 0 0 1 2.11-.45c.78.26 1.57.45 2.38.57A2 2 0 0 1 22 16.92z"
            }
            Icon::Quote => {
                "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"
            }
            Icon::Refresh => {
                "M3 12a9 9 0 0 1 15-6.7L21 8 M21 12a9 9 0 0 1-15 6.7L3 16 M21 3v5h-5 M3 21v-5h5"
            }
            Icon::Send => "m22 2-7 20-4-9-9-4z M22 2 11 13",
            Icon::Smartphone => {
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z M12 18h.01"
            }
            Icon::Star => {
                "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"
            }
            Icon::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z M12 2v2 M12 20v2 M4.93 4.93l1.41 1.41 M17.66 17.66l1.41 1.41 M2 12h2 M20 12h2 M6.34 17.66l-1.41 1.41 M19.07 4.93l-1.41 1.41"
            }
            Icon::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            }
            Icon::X => "M18 6 6 18 M6 6l12 12",
            Icon::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
        }
    }
}

/// Renders an icon as an inline stroked SVG.
#[component]
pub fn IconGlyph(icon: Icon, size: Option<u32>, class: Option<String>) -> Element {
    let size = size.unwrap_or(16);
    let class = class.unwrap_or_default();
    let path = icon.path_data();

    rsx! {
        svg {
            class: "icon icon-{icon.name()} {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "{path}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_resolves_by_its_own_name() {
        for icon in Icon::all() {
            assert_eq!(Icon::from_name(icon.name()), Some(*icon));
        }
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(Icon::from_name("sparkles"), None);
        assert_eq!(Icon::from_name(""), None);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Icon::all().iter().map(|icon| icon.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Icon::all().len());
    }
}
