use dioxus::prelude::*;

use crate::config::config;
use crate::content::Section;
use crate::handoff::{EmailCapture, Handoff};

/// Email capture band. Submitting opens the hosted application in a new tab
/// with the address as `?email=`; the field is cleared afterwards.
///
/// The browser enforces `type=email` + `required`; a blank value never
/// reaches the hand-off.
#[component]
pub fn Signup(content: Section) -> Element {
    let mut capture = use_signal(EmailCapture::default);
    let handoff = use_hook(|| Handoff::from_config(config()));
    let value = capture.read().value().to_string();
    let guarantee = content.opt_text("guarantee");

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !capture.write().submit_to(&handoff) {
            tracing::debug!("blank signup ignored");
        }
    };

    rsx! {
        section { id: "signup", class: "signup",
            div { class: "signup__inner",
                h2 { class: "signup__title", {content.text("title")} }
                p { class: "signup__description", {content.text("description")} }
                form { class: "signup__form", onsubmit: on_submit,
                    input {
                        class: "signup__input",
                        r#type: "email",
                        name: "email",
                        required: true,
                        autocomplete: "email",
                        placeholder: content.text("placeholder"),
                        value: "{value}",
                        oninput: move |evt: FormEvent| capture.write().set(evt.value()),
                    }
                    button { class: "button button--inverse button--large", r#type: "submit",
                        {content.text("button")}
                        span { aria_hidden: "true", " →" }
                    }
                }
                if let Some(guarantee) = guarantee {
                    p { class: "signup__note", "{guarantee}" }
                }
            }
        }
    }
}
