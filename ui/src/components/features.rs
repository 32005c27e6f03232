use dioxus::prelude::*;

use crate::components::icon_glyph;
use crate::content::Section;

#[component]
pub fn FeatureGrid(content: Section) -> Element {
    let count = content.sections("items").count();
    let subtitle = content.opt_text("subtitle");

    rsx! {
        section { id: "features", class: "section section--plain",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {content.text("title")} }
                    if let Some(subtitle) = subtitle {
                        p { class: "section__subtitle", "{subtitle}" }
                    }
                }
                div { class: "feature-grid feature-grid--{count}",
                    for (key, item) in content.sections("items") {
                        article { key: "{key}", class: "feature-card",
                            div { class: "feature-card__icon", aria_hidden: "true",
                                {icon_glyph(item.text("icon"))}
                            }
                            h3 { class: "feature-card__title", {item.text("title")} }
                            p { class: "feature-card__description", {item.text("description")} }
                        }
                    }
                }
            }
        }
    }
}
