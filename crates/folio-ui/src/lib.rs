//! Shared UI components for the Folio portfolio application.
//!
//! Provides the failure-containment boundaries, self-healing image
//! components, theme, icons, form state, and the platform-services
//! abstraction the pages are built on.

pub mod boundary;
pub mod button;
pub mod fallback_url;
pub mod form;
pub mod icons;
pub mod image;
pub mod platform;
pub mod theme;

pub use boundary::{
    AsyncBoundary, BoundaryConfig, ComponentBoundary, FailureBoundary, FailureHandle,
    FailureNotice, PageBoundary, RenderFailure, ResetKey, RuntimeMode, ScopeLevel,
    SectionBoundary, use_failure_handle, with_component_boundary,
};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use fallback_url::{avatar_url, avatar_url_with, placeholder_url};
pub use form::{FieldError, FieldSpec, FormField, FormState, ValidationCode};
pub use icons::{Icon, IconGlyph};
pub use image::{Avatar, FallbackKind, ImageLoadState, ProjectImage, SafeImage};
pub use platform::{
    PlatformContext, PlatformServices, RecordingPlatform, ScrollLockGuard, provide_platform,
    use_platform,
};
pub use theme::{CURRENT_THEME, Theme, ThemeToggle, ThemedRoot, ToggleSize};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
