use dioxus::prelude::*;

use crate::i18n::{use_resolver, SupportedLocale};

fn option_class(active: bool) -> &'static str {
    if active {
        "locale-toggle__option locale-toggle__option--active"
    } else {
        "locale-toggle__option"
    }
}

/// EST / ENG switch. Writes the shared resolver, which re-renders the page.
#[component]
pub fn LocaleToggle() -> Element {
    let mut resolver = use_resolver();
    let active = resolver.read().active();

    rsx! {
        div { class: "locale-toggle", role: "group",
            for locale in SupportedLocale::ALL {
                button {
                    key: "{locale}",
                    r#type: "button",
                    class: option_class(locale == active),
                    lang: locale.region_tag(),
                    aria_pressed: "{locale == active}",
                    onclick: move |_| resolver.write().set_active(locale),
                    "{locale.toggle_label()}"
                }
            }
        }
    }
}
