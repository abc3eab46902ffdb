//! Contact page: validated form on one side, contact channels and
//! social links on the other.

use dioxus::prelude::*;
use folio_ui::boundary::SectionBoundary;
use folio_ui::button::Button;
use folio_ui::form::{FormField, FormState};
use folio_ui::icons::{Icon, IconGlyph};

use crate::data::{contact_channels, social_links};

#[component]
pub fn ContactPage() -> Element {
    rsx! {
        SectionBoundary {
            name: "Contact",
            render: Callback::new(|_: ()| {
                Ok(rsx! {
                    section { class: "section contact-section page-section",
                        div { class: "section-heading",
                            h2 { "Get In Touch" }
                            p {
                                "Have a project in mind or just want to chat? "
                                "I'd love to hear from you."
                            }
                        }
                        div { class: "contact-layout",
                            ContactForm {}
                            ContactDetails {}
                        }
                    }
                })
            }),
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let mut form = use_signal(FormState::contact);
    let mut sent = use_signal(|| false);
    let submitting = form.read().is_submitting();

    let submit = move |_| {
        if form.peek().is_submitting() {
            return;
        }
        if !form.write().validate_all() {
            tracing::debug!("contact form rejected by validation");
            return;
        }
        form.write().set_submitting(true);
        sent.set(false);
        spawn(async move {
            // Stand-in for a real delivery call.
            tokio::time::sleep(std::time::Duration::from_millis(600)).await;
            tracing::info!("contact form submitted");
            form.write().reset();
            sent.set(true);
        });
    };

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |event| event.prevent_default(),
            FormField { state: form, name: "name" }
            FormField { state: form, name: "email" }
            FormField { state: form, name: "subject" }
            FormField { state: form, name: "message" }
            Button {
                disabled: submitting,
                onclick: submit,
                IconGlyph { icon: Icon::Send, size: 16 }
                if submitting { "Sending..." } else { "Send Message" }
            }
            if *sent.read() {
                p { class: "form-success", role: "status",
                    "Thanks for reaching out! I'll get back to you soon."
                }
            }
        }
    }
}

#[component]
fn ContactDetails() -> Element {
    rsx! {
        div { class: "contact-details",
            h3 { "Contact Information" }
            ul { class: "contact-channel-list",
                for channel in contact_channels() {
                    li { key: "{channel.label}", class: "contact-channel",
                        IconGlyph { icon: channel.icon, size: 18 }
                        div {
                            p { class: "contact-channel-label", "{channel.label}" }
                            a { href: "{channel.href}", "{channel.value}" }
                        }
                    }
                }
            }
            h3 { "Follow Me" }
            div { class: "social-row",
                for link in social_links() {
                    a {
                        key: "{link.label}",
                        class: "social-link",
                        href: "{link.href}",
                        aria_label: "{link.label}",
                        IconGlyph { icon: link.icon, size: 18 }
                    }
                }
            }
        }
    }
}
