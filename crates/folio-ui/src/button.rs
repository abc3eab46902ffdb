//! Shared button with variant dispatch. Variants are a closed enum
//! resolved once to a class, not re-checked inside rendering logic.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Secondary => "button-secondary",
            ButtonVariant::Outline => "button-outline",
            ButtonVariant::Ghost => "button-ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "button-sm",
            ButtonSize::Md => "button-md",
            ButtonSize::Lg => "button-lg",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    class: Option<String>,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();

    rsx! {
        button {
            class: "button {variant.css_class()} {size.css_class()} {class}",
            r#type: "button",
            disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}
