use dioxus::prelude::*;

use crate::components::icon_glyph;
use crate::content::Section;

/// Headline numbers. Values are copy, not data: they differ only in
/// locale-specific number formatting.
#[component]
pub fn StatTiles(content: Section) -> Element {
    rsx! {
        div { class: "stats",
            for (key, stat) in content.sections("items") {
                div { key: "{key}", class: "stats__tile",
                    if let Some(icon) = stat.opt_text("icon") {
                        span { class: "stats__icon icon icon--{icon}", aria_hidden: "true", {icon_glyph(icon)} }
                    }
                    div { class: "stats__value", {stat.text("value")} }
                    div { class: "stats__label", {stat.text("label")} }
                }
            }
        }
    }
}
