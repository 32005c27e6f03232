use dioxus::prelude::*;

use crate::components::LocaleToggle;
use crate::content::Section;

/// Sticky page header: brand mark, in-page navigation, sign-in link and the
/// language toggle.
///
/// `content` is the whole page tree. Navigation is optional; variants without
/// a `nav` section show only the brand and the toggle.
///
/// The sign-in link is a plain anchor opening the hosted application in a new
/// tab. It carries no parameters.
#[component]
pub fn SiteHeader(content: Section, sign_in_url: String) -> Element {
    let name = content.text("brand.name");
    let mark = name.chars().next().unwrap_or('H');
    let tagline = content.opt_text("brand.tagline");
    let menu = content.section("nav");

    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "#top",
                    span { class: "brand-mark", aria_hidden: "true", "{mark}" }
                    span { class: "site-header__brand-text",
                        span { class: "site-header__brand-name", "{name}" }
                        if let Some(tagline) = tagline {
                            span { class: "site-header__brand-tagline", "{tagline}" }
                        }
                    }
                }

                if let Some(menu) = menu {
                    nav { class: "site-header__links",
                        for (key, link) in menu.sections("links") {
                            a {
                                key: "{key}",
                                class: "site-header__link",
                                href: link.text("href"),
                                {link.text("label")}
                            }
                        }
                        a {
                            class: "button button--outline button--small",
                            href: "{sign_in_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            {menu.text("sign_in")}
                        }
                    }
                }

                LocaleToggle {}
            }
        }
    }
}
