//! Locale selection for `hange-ui`.
//!
//! The page copy lives in a static [`ContentCatalog`]; this module decides
//! *which* tree a page renders:
//! - [`SupportedLocale`]: the closed set of languages (`et`, `en`).
//! - [`LocaleContentResolver`]: per-page state holding the variant and the
//!   active locale, resolving the matching [`ContentTree`].
//!
//! Usage in a component (below a `LandingPage`, which provides the context):
//! ```ignore
//! use crate::i18n::use_resolver;
//! let resolver = use_resolver();
//! let tree = resolver.read().current()?;
//! let title = tree.text("hero.title");
//! ```
//!
//! The active locale always starts at [`SupportedLocale::Et`] and is never
//! persisted; a reload returns to Estonian.
use std::fmt;

use dioxus::prelude::*;

use crate::content::{ConfigurationError, ContentCatalog, ContentTree, Variant};

/// Languages the landing page can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SupportedLocale {
    #[default]
    Et,
    En,
}

impl SupportedLocale {
    /// Toggle order in the header.
    pub const ALL: [SupportedLocale; 2] = [SupportedLocale::Et, SupportedLocale::En];

    /// Primary language subtag, also the content file stem.
    pub fn tag(self) -> &'static str {
        match self {
            SupportedLocale::Et => "et",
            SupportedLocale::En => "en",
        }
    }

    /// Region-qualified tag used for date formatting and the `lang` attribute.
    pub fn region_tag(self) -> &'static str {
        match self {
            SupportedLocale::Et => "et-EE",
            SupportedLocale::En => "en-US",
        }
    }

    /// Short label shown on the language toggle.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SupportedLocale::Et => "EST",
            SupportedLocale::En => "ENG",
        }
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-page locale state over the shared catalog.
///
/// Cheap to copy; lives inside a `Signal` so that [`set_active`](Self::set_active)
/// re-renders every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleContentResolver<'a> {
    catalog: &'a ContentCatalog,
    variant: Variant,
    active: SupportedLocale,
}

impl<'a> LocaleContentResolver<'a> {
    pub fn new(catalog: &'a ContentCatalog, variant: Variant) -> Self {
        Self {
            catalog,
            variant,
            active: Self::default_locale(),
        }
    }

    /// Locale every page starts in.
    pub fn default_locale() -> SupportedLocale {
        SupportedLocale::Et
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn active(&self) -> SupportedLocale {
        self.active
    }

    /// Takes effect on the next render.
    pub fn set_active(&mut self, locale: SupportedLocale) {
        if self.active != locale {
            tracing::debug!(from = %self.active, to = %locale, variant = %self.variant, "locale switched");
        }
        self.active = locale;
    }

    /// Tree registered for `locale` under this resolver's variant.
    pub fn resolve(&self, locale: SupportedLocale) -> Result<&'a ContentTree, ConfigurationError> {
        self.catalog.tree(self.variant, locale).inspect_err(|err| {
            tracing::error!(%err, "locale lookup failed");
        })
    }

    /// Tree for the active locale.
    pub fn current(&self) -> Result<&'a ContentTree, ConfigurationError> {
        self.resolve(self.active)
    }
}

/// Resolver provided by the enclosing `LandingPage`.
pub fn use_resolver() -> Signal<LocaleContentResolver<'static>> {
    use_context::<Signal<LocaleContentResolver<'static>>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ContentCatalog {
        ContentCatalog::from_sources([
            (Variant::Compact, SupportedLocale::Et, r#"{ "cta": { "button": "Registreeru" } }"#),
            (Variant::Compact, SupportedLocale::En, r#"{ "cta": { "button": "Sign Up" } }"#),
        ])
        .expect("parity holds")
    }

    #[test]
    fn tags_are_distinct() {
        assert_eq!(SupportedLocale::default(), SupportedLocale::Et);
        assert_eq!(SupportedLocale::Et.region_tag(), "et-EE");
        assert_eq!(SupportedLocale::En.region_tag(), "en-US");
        assert_ne!(SupportedLocale::Et.toggle_label(), SupportedLocale::En.toggle_label());
    }

    #[test]
    fn starts_in_estonian() {
        let catalog = catalog();
        let resolver = LocaleContentResolver::new(&catalog, Variant::Compact);
        assert_eq!(resolver.active(), SupportedLocale::Et);
        assert_eq!(resolver.current().map(|t| t.text("cta.button")), Ok("Registreeru"));
    }

    #[test]
    fn switching_changes_resolved_tree() {
        let catalog = catalog();
        let mut resolver = LocaleContentResolver::new(&catalog, Variant::Compact);
        resolver.set_active(SupportedLocale::En);
        assert_eq!(resolver.current().map(|t| t.text("cta.button")), Ok("Sign Up"));
    }

    #[test]
    fn unknown_variant_is_configuration_error() {
        let catalog = catalog();
        let resolver = LocaleContentResolver::new(&catalog, Variant::Showcase);
        assert_eq!(
            resolver.current(),
            Err(ConfigurationError::MissingLocale {
                variant: Variant::Showcase,
                locale: SupportedLocale::Et
            })
        );
    }
}
