//! Locale state behaviour of the landing page resolver.

use ui::content::{catalog, ConfigurationError, ContentCatalog, Variant};
use ui::i18n::{LocaleContentResolver, SupportedLocale};

fn shared() -> &'static ContentCatalog {
    catalog().expect("embedded content is valid")
}

#[test]
fn fresh_resolver_shows_estonian() {
    for variant in Variant::ALL {
        let resolver = LocaleContentResolver::new(shared(), variant);
        assert_eq!(LocaleContentResolver::default_locale(), SupportedLocale::Et);
        assert_eq!(resolver.active(), SupportedLocale::Et);
        let current = resolver.current().expect("current tree");
        let estonian = shared().tree(variant, SupportedLocale::Et).expect("et tree");
        assert!(std::ptr::eq(current, estonian), "{variant}");
    }
}

#[test]
fn selecting_same_locale_twice_is_idempotent() {
    let mut once = LocaleContentResolver::new(shared(), Variant::Classic);
    once.set_active(SupportedLocale::Et);

    let mut twice = LocaleContentResolver::new(shared(), Variant::Classic);
    twice.set_active(SupportedLocale::Et);
    twice.set_active(SupportedLocale::Et);

    assert_eq!(once, twice);
    assert!(std::ptr::eq(
        once.current().expect("tree"),
        twice.current().expect("tree")
    ));
}

#[test]
fn switching_away_and_back_restores_initial_state() {
    let initial = LocaleContentResolver::new(shared(), Variant::Showcase);
    let mut resolver = initial;

    resolver.set_active(SupportedLocale::En);
    assert_eq!(resolver.current().expect("en").text("cta.button"), "Sign Up Free");

    resolver.set_active(SupportedLocale::Et);
    assert_eq!(resolver, initial);
    assert_eq!(resolver.current().expect("et").text("cta.button"), "Registreeru tasuta");
}

#[test]
fn every_locale_resolves_for_every_variant() {
    for variant in Variant::ALL {
        let resolver = LocaleContentResolver::new(shared(), variant);
        for locale in SupportedLocale::ALL {
            let tree = resolver.resolve(locale).expect("locale registered");
            assert_eq!(tree.text("brand.name"), "Hange AI", "{variant}/{locale}");
        }
    }
}

#[test]
fn english_copy_differs_from_estonian() {
    let resolver = LocaleContentResolver::new(shared(), Variant::Compact);
    let et = resolver.resolve(SupportedLocale::Et).expect("et");
    let en = resolver.resolve(SupportedLocale::En).expect("en");
    assert_eq!(et.text("features.title"), "Peamised funktsioonid");
    assert_eq!(en.text("features.title"), "Key Features");
    assert_eq!(et.leaf_paths(), en.leaf_paths());
}

#[test]
fn empty_catalog_yields_configuration_error() {
    let resolver = LocaleContentResolver::new(ContentCatalog::empty(), Variant::Classic);
    assert_eq!(resolver.active(), SupportedLocale::Et);
    assert_eq!(
        resolver.current(),
        Err(ConfigurationError::MissingLocale {
            variant: Variant::Classic,
            locale: SupportedLocale::Et
        })
    );
}
