//! Self-healing images: on a load error the broken source is swapped
//! for a deterministically generated placeholder, so the UI never shows
//! a broken-image glyph.

use dioxus::prelude::*;

use crate::fallback_url::{
    DEFAULT_PLACEHOLDER_HEIGHT, DEFAULT_PLACEHOLDER_WIDTH, avatar_url, placeholder_url,
};

/// Which generator a failed image falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackKind {
    Avatar,
    #[default]
    Placeholder,
}

/// Load state owned by one image instance for one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoadState {
    original: String,
    current: String,
    failed: bool,
}

impl ImageLoadState {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            original: source.clone(),
            current: source,
            failed: false,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Handles a load-error signal. The first failure per source swaps
    /// to the derived fallback and returns true; failures of the
    /// fallback itself are left alone so the swap can never loop.
    pub fn mark_failed(
        &mut self,
        kind: FallbackKind,
        seed: &str,
        width: u32,
        height: u32,
    ) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        self.current = match kind {
            FallbackKind::Avatar => avatar_url(seed),
            FallbackKind::Placeholder => placeholder_url(width, height, Some(seed)),
        };
        true
    }

    /// A new source always gets a fresh chance, clearing any failure.
    /// Returns true when the source actually changed.
    pub fn rebind(&mut self, source: &str) -> bool {
        if self.original == source {
            return false;
        }
        *self = ImageLoadState::new(source);
        true
    }
}

/// Image that substitutes a generated placeholder when the source fails
/// to load.
#[component]
pub fn SafeImage(
    source: String,
    alt_text: String,
    #[props(default)] fallback_kind: FallbackKind,
    fallback_seed: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    class: Option<String>,
    on_error: Option<EventHandler<()>>,
) -> Element {
    let mut state = use_signal(|| ImageLoadState::new(source.clone()));

    // Source prop changes reset the state synchronously, in the same
    // render pass, so a stale fallback is never shown.
    if state.peek().original() != source {
        state.write().rebind(&source);
    }

    let seed = fallback_seed.unwrap_or_else(|| alt_text.clone());
    let fallback_width = width.unwrap_or(DEFAULT_PLACEHOLDER_WIDTH);
    let fallback_height = height.unwrap_or(DEFAULT_PLACEHOLDER_HEIGHT);
    let current = state.read().current().to_string();
    let class = class.unwrap_or_default();

    rsx! {
        img {
            class: "safe-image {class}",
            src: "{current}",
            alt: "{alt_text}",
            width: width.map(|w| w.to_string()),
            height: height.map(|h| h.to_string()),
            onerror: move |_| {
                let swapped = state
                    .write()
                    .mark_failed(fallback_kind, &seed, fallback_width, fallback_height);
                if swapped {
                    tracing::debug!(
                        source = %state.peek().original(),
                        fallback = %state.peek().current(),
                        "image failed to load, swapped to generated fallback"
                    );
                }
                // Raw error signals always reach the caller, even after
                // the fallback swap.
                if let Some(handler) = on_error {
                    handler.call(());
                }
            },
        }
    }
}

/// Avatar for a person. With no explicit source the avatar itself is a
/// generated URL seeded by the name, so it renders deterministically
/// without ever touching the failure path.
#[component]
pub fn Avatar(
    name: String,
    source: Option<String>,
    size: Option<u32>,
    class: Option<String>,
) -> Element {
    let size = size.unwrap_or(40);
    let src = source.unwrap_or_else(|| avatar_url(&name));
    let class = class.unwrap_or_default();

    rsx! {
        SafeImage {
            source: src,
            alt_text: "{name}'s avatar",
            fallback_kind: FallbackKind::Avatar,
            fallback_seed: name,
            width: size,
            height: size,
            class: "avatar {class}",
        }
    }
}

/// Project screenshot with a seeded placeholder fallback.
#[component]
pub fn ProjectImage(
    source: String,
    title: String,
    width: Option<u32>,
    height: Option<u32>,
    class: Option<String>,
) -> Element {
    rsx! {
        SafeImage {
            source,
            alt_text: "{title} project screenshot",
            fallback_kind: FallbackKind::Placeholder,
            fallback_seed: title,
            width,
            height,
            class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_swaps_to_deterministic_avatar_fallback() {
        let mut state = ImageLoadState::new("https://bad.example/x.jpg");
        assert!(!state.has_failed());

        let swapped = state.mark_failed(FallbackKind::Avatar, "Jane Smith", 600, 400);
        assert!(swapped);
        assert!(state.has_failed());
        assert_eq!(state.current(), avatar_url("Jane Smith"));
        assert_ne!(state.current(), state.original());

        // Identical inputs derive a byte-identical URL.
        let mut again = ImageLoadState::new("https://bad.example/x.jpg");
        again.mark_failed(FallbackKind::Avatar, "Jane Smith", 600, 400);
        assert_eq!(state.current(), again.current());
    }

    #[test]
    fn placeholder_fallback_uses_dimensions_and_seed() {
        let mut state = ImageLoadState::new("https://bad.example/shot.png");
        state.mark_failed(FallbackKind::Placeholder, "Task Management App", 600, 400);
        assert_eq!(
            state.current(),
            placeholder_url(600, 400, Some("Task Management App"))
        );
    }

    #[test]
    fn fallback_failures_do_not_loop() {
        let mut state = ImageLoadState::new("https://bad.example/x.jpg");
        assert!(state.mark_failed(FallbackKind::Avatar, "Jane", 600, 400));
        let after_first = state.current().to_string();

        // The fallback URL erroring again leaves the state untouched.
        assert!(!state.mark_failed(FallbackKind::Avatar, "Jane", 600, 400));
        assert_eq!(state.current(), after_first);
    }

    #[test]
    fn source_change_resets_failure_and_current() {
        let mut state = ImageLoadState::new("https://bad.example/x.jpg");
        state.mark_failed(FallbackKind::Avatar, "Jane", 600, 400);
        assert!(state.has_failed());

        assert!(state.rebind("https://good.example/y.jpg"));
        assert!(!state.has_failed());
        assert_eq!(state.current(), "https://good.example/y.jpg");
        assert_eq!(state.original(), "https://good.example/y.jpg");
    }

    #[test]
    fn rebinding_the_same_source_is_a_no_op() {
        let mut state = ImageLoadState::new("https://bad.example/x.jpg");
        state.mark_failed(FallbackKind::Avatar, "Jane", 600, 400);
        let fallback = state.current().to_string();

        assert!(!state.rebind("https://bad.example/x.jpg"));
        assert!(state.has_failed());
        assert_eq!(state.current(), fallback);
    }
}
