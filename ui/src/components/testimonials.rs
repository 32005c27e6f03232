use dioxus::prelude::*;

use crate::components::icon_glyph;
use crate::content::Section;

/// Every published review is five stars.
const RATING: usize = 5;

#[component]
pub fn Testimonials(content: Section) -> Element {
    let subtitle = content.opt_text("subtitle");

    rsx! {
        section { id: "testimonials", class: "section section--plain",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {content.text("title")} }
                    if let Some(subtitle) = subtitle {
                        p { class: "section__subtitle", "{subtitle}" }
                    }
                }
                div { class: "testimonials",
                    for (key, item) in content.sections("items") {
                        TestimonialCard { key: "{key}", content: item }
                    }
                }
            }
        }
    }
}

#[component]
fn TestimonialCard(content: Section) -> Element {
    let name = content.text("name");
    let initial = name.chars().next().map(String::from).unwrap_or_default();
    let role = content.opt_text("role");
    let quote = content.text("text");

    rsx! {
        figure { class: "testimonial",
            div { class: "testimonial__stars", aria_label: "{RATING}/5",
                for i in 0..RATING {
                    span { key: "{i}", aria_hidden: "true", {icon_glyph("star")} }
                }
            }
            blockquote { class: "testimonial__quote", "“{quote}”" }
            figcaption { class: "testimonial__author",
                span { class: "testimonial__avatar", aria_hidden: "true", "{initial}" }
                span { class: "testimonial__who",
                    span { class: "testimonial__name", "{name}" }
                    if let Some(role) = role {
                        span { class: "testimonial__role", "{role}" }
                    }
                    span { class: "testimonial__company", {content.text("company")} }
                }
            }
        }
    }
}
