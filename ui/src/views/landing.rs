use dioxus::prelude::*;

use crate::components::{
    FeatureGrid, Hero, HowItWorks, SiteFooter, SiteHeader, Signup, StatTiles, Testimonials,
};
use crate::config::config;
use crate::content::{self, ContentCatalog, Section, Variant};
use crate::i18n::{LocaleContentResolver, SupportedLocale};

const LANDING_CSS: Asset = asset!("/assets/theme/landing.css");
const LANDING_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/landing.css"
));

#[cfg(debug_assertions)]
fn log_landing_render(variant: Variant, locale: SupportedLocale) {
    tracing::debug!(%variant, %locale, "landing render");
}

/// One landing-page variant. Owns the page's locale state and provides it to
/// descendants as `Signal<LocaleContentResolver>`.
///
/// Sections the variant's tree does not define are skipped, so the three
/// variants share this template.
#[component]
pub fn LandingPage(variant: Variant) -> Element {
    let resolver = use_signal(|| {
        let catalog = content::catalog().unwrap_or_else(|err| {
            tracing::error!(%err, %variant, "landing content unavailable");
            ContentCatalog::empty()
        });
        LocaleContentResolver::new(catalog, variant)
    });
    use_context_provider(|| resolver);

    use_effect(move || {
        let locale = resolver.read().active();
        // Fire-and-forget: nothing reads the result back.
        let _ = document::eval(&document_lang_script(locale));
    });

    let locale = resolver.read().active();
    let Ok(tree) = resolver.read().current() else {
        return rsx! { ContentUnavailable {} };
    };
    let page = Section::new(tree);

    #[cfg(debug_assertions)]
    {
        log_landing_render(variant, locale);
    }

    let title = match page.opt_text("hero.subtitle") {
        Some(subtitle) => format!("{} – {subtitle}", page.text("brand.name")),
        None => page.text("brand.name").to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{LANDING_CSS_INLINE}" }
        }
        document::Title { "{title}" }

        div { class: "landing landing--{variant}", lang: locale.region_tag(),
            SiteHeader { content: page, sign_in_url: config().sign_in_url.clone() }

            main {
                if let Some(hero) = page.section("hero") {
                    Hero { content: hero,
                        if let Some(stats) = page.section("stats") {
                            StatTiles { content: stats }
                        }
                    }
                }
                if let Some(features) = page.section("features") {
                    FeatureGrid { content: features }
                }
                if let Some(steps) = page.section("how_it_works") {
                    HowItWorks { content: steps }
                }
                if let Some(testimonials) = page.section("testimonials") {
                    Testimonials { content: testimonials }
                }
                if let Some(cta) = page.section("cta") {
                    Signup { content: cta }
                }
            }

            SiteFooter { content: page, locale }
        }
    }
}

/// Keeps `<html lang>` in step with the active locale.
fn document_lang_script(locale: SupportedLocale) -> String {
    format!("document.documentElement.lang = \"{}\";", locale.region_tag())
}

/// Shown instead of the page when the embedded copy failed validation.
#[component]
fn ContentUnavailable() -> Element {
    rsx! {
        div { class: "landing landing--unavailable",
            p { "Hange AI" }
        }
    }
}
