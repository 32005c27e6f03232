use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::config::config;
use ui::content::Variant;
use ui::views::LandingPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/classic")]
    Classic {},
    #[route("/compact")]
    Compact {},
    #[route("/showcase")]
    Showcase {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Configured default variant.
#[component]
fn Home() -> Element {
    let variant = config().default_variant;
    rsx! {
        LandingPage { key: "{variant}", variant }
    }
}

#[component]
fn Classic() -> Element {
    rsx! {
        LandingPage { variant: Variant::Classic }
    }
}

#[component]
fn Compact() -> Element {
    rsx! {
        LandingPage { variant: Variant::Compact }
    }
}

#[component]
fn Showcase() -> Element {
    rsx! {
        LandingPage { variant: Variant::Showcase }
    }
}

/// Unknown paths get the default page rather than an error screen.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route; serving default variant");
    rsx! {
        Home {}
    }
}
