//! Client testimonials grid.

use dioxus::prelude::*;
use folio_ui::boundary::SectionBoundary;
use folio_ui::icons::{Icon, IconGlyph};
use folio_ui::image::Avatar;

use crate::data::{Testimonial, testimonials};

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        SectionBoundary {
            name: "Testimonials",
            render: Callback::new(|_: ()| {
                Ok(rsx! {
                    section { class: "section testimonials-section",
                        div { class: "section-heading",
                            h2 { "What Clients Say" }
                            p {
                                "Hear from some of the amazing clients I've had the "
                                "pleasure of working with."
                            }
                        }
                        div { class: "card-grid",
                            for testimonial in testimonials() {
                                TestimonialCard { key: "{testimonial.id}", testimonial: testimonial.clone() }
                            }
                        }
                    }
                })
            }),
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        div { class: "card testimonial-card",
            span { class: "testimonial-quote-mark",
                IconGlyph { icon: Icon::Quote, size: 28 }
            }
            div { class: "testimonial-rating",
                for star in 0..testimonial.rating {
                    IconGlyph { key: "{star}", icon: Icon::Star, size: 14, class: "star-filled" }
                }
            }
            p { class: "testimonial-content", "\"{testimonial.content}\"" }
            div { class: "testimonial-author",
                Avatar {
                    name: testimonial.name,
                    source: testimonial.avatar.to_string(),
                    size: 48,
                }
                div {
                    p { class: "testimonial-name", "{testimonial.name}" }
                    p { class: "testimonial-role",
                        "{testimonial.role} at {testimonial.company}"
                    }
                }
            }
        }
    }
}
