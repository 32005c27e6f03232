use dioxus::prelude::*;

use crate::components::icon_glyph;
use crate::content::Section;

#[component]
pub fn HowItWorks(content: Section) -> Element {
    rsx! {
        section { id: "how-it-works", class: "section section--muted",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {content.text("title")} }
                }
                ol { class: "steps",
                    for (key, step) in content.sections("steps") {
                        li { key: "{key}", class: "steps__item",
                            div { class: "steps__icon", aria_hidden: "true", {icon_glyph(step.text("icon"))} }
                            h3 { class: "steps__title", {step.text("title")} }
                            p { class: "steps__description", {step.text("description")} }
                        }
                    }
                }
            }
        }
    }
}
