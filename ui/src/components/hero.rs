use dioxus::prelude::*;

use crate::components::icon_glyph;
use crate::content::Section;

/// Headline block. Children (the stat tiles) render between the calls to
/// action and the trust line.
#[component]
pub fn Hero(content: Section, children: Element) -> Element {
    let badge = content.opt_text("badge");
    let title = content.opt_text("title");
    let subtitle = content.opt_text("subtitle");
    let actions = content.section("actions");
    let trusted = content.opt_text("trusted");

    rsx! {
        section { id: "top", class: "hero",
            div { class: "hero__inner",
                if let Some(badge) = badge {
                    span { class: "hero__badge",
                        span { class: "icon", aria_hidden: "true", {icon_glyph("star")} }
                        "{badge}"
                    }
                }

                h1 { class: "hero__title",
                    if let Some(title) = title {
                        "{title}"
                        br {}
                    }
                    span { class: "hero__highlight", {content.text("highlight")} }
                }

                if let Some(subtitle) = subtitle {
                    h2 { class: "hero__subtitle", "{subtitle}" }
                }
                p { class: "hero__description", {content.text("description")} }

                if let Some(actions) = actions {
                    div { class: "hero__actions",
                        a { class: "button button--primary button--large", href: "#signup",
                            {actions.text("primary")}
                            span { aria_hidden: "true", " →" }
                        }
                        a { class: "button button--outline button--large", href: "#features",
                            {actions.text("secondary")}
                        }
                    }
                }

                {children}

                if let Some(trusted) = trusted {
                    p { class: "hero__trusted", "{trusted}" }
                }
            }
        }
    }
}
