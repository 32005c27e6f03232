use dioxus::prelude::*;

use crate::content::Section;
use crate::core::format::{format_short_date, today};
use crate::i18n::SupportedLocale;

/// Footer with optional link columns, "last updated" date and copyright line.
///
/// `content` is the whole page tree (the brand lives outside `footer`).
#[component]
pub fn SiteFooter(content: Section, locale: SupportedLocale) -> Element {
    let name = content.text("brand.name");
    let mark = name.chars().next().unwrap_or('H');
    let blurb = content.text("footer.blurb");
    let columns = content.section("footer.columns");
    let date = today();
    let updated = content
        .opt_text("footer.updated")
        .map(|label| format!("{label} {}", format_short_date(locale, date)));
    let rights = content
        .opt_text("footer.rights")
        .map(|text| format!("© {} {text}", date.year()));

    rsx! {
        footer { id: "about", class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__brand",
                    div { class: "site-footer__brand-row",
                        span { class: "brand-mark", aria_hidden: "true", "{mark}" }
                        span { class: "site-footer__brand-name", "{name}" }
                    }
                    p { class: "site-footer__blurb", "{blurb}" }
                }

                if let Some(columns) = columns {
                    div { class: "site-footer__columns",
                        for (key, column) in columns.sections("") {
                            div { key: "{key}", class: "site-footer__column",
                                h3 { class: "site-footer__column-title", {column.text("title")} }
                                ul {
                                    for (link_key, label) in column.texts("links") {
                                        li { key: "{link_key}",
                                            a { class: "site-footer__link", href: "#", "{label}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__legal",
                    if let Some(updated) = updated {
                        p { class: "site-footer__updated", "{updated}" }
                    }
                    if let Some(rights) = rights {
                        p { class: "site-footer__rights", "{rights}" }
                    }
                }
            }
        }
    }
}
