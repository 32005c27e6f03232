use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_embed::Embed;

use super::{ConfigurationError, ContentTree, PathKind, Variant};
use crate::i18n::SupportedLocale;

/// Embed every variant folder under `content/`.
#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

/// Immutable `(variant, locale) -> tree` table, parity-checked on construction.
#[derive(Debug, PartialEq, Eq)]
pub struct ContentCatalog {
    trees: BTreeMap<(Variant, SupportedLocale), ContentTree>,
}

static CATALOG: Lazy<Result<ContentCatalog, ConfigurationError>> = Lazy::new(|| {
    let built = ContentCatalog::embedded();
    match &built {
        Ok(catalog) => tracing::debug!(entries = catalog.trees.len(), "content catalog ready"),
        Err(err) => tracing::error!(%err, "content catalog rejected"),
    }
    built
});

/// Shared catalog built from the embedded content files.
pub fn catalog() -> Result<&'static ContentCatalog, ConfigurationError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

impl ContentCatalog {
    /// Build from the JSON documents compiled into the crate.
    pub fn embedded() -> Result<Self, ConfigurationError> {
        let mut sources = Vec::new();
        for variant in Variant::ALL {
            for locale in SupportedLocale::ALL {
                let path = source_path(variant, locale);
                let file = ContentFiles::get(&path)
                    .ok_or_else(|| ConfigurationError::MissingSource { path: path.clone() })?;
                let text = std::str::from_utf8(&file.data)
                    .map_err(|err| ConfigurationError::InvalidSource {
                        path: path.clone(),
                        reason: err.to_string(),
                    })?
                    .to_string();
                sources.push((variant, locale, text));
            }
        }
        Self::from_sources(sources.iter().map(|(v, l, text)| (*v, *l, text.as_str())))
    }

    /// Parse JSON sources and verify that every variant present is complete
    /// and structurally identical across locales.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (Variant, SupportedLocale, &'a str)>,
    {
        let mut trees = BTreeMap::new();
        for (variant, locale, json) in sources {
            let tree: ContentTree =
                serde_json::from_str(json).map_err(|err| ConfigurationError::InvalidSource {
                    path: source_path(variant, locale),
                    reason: err.to_string(),
                })?;
            if !matches!(tree, ContentTree::Node(_)) {
                return Err(ConfigurationError::InvalidSource {
                    path: source_path(variant, locale),
                    reason: "top level must be an object".to_string(),
                });
            }
            trees.insert((variant, locale), tree);
        }
        let catalog = Self { trees };
        catalog.check_parity()?;
        Ok(catalog)
    }

    /// Catalog with no content; every lookup is `MissingLocale`.
    pub fn empty() -> &'static ContentCatalog {
        static EMPTY: ContentCatalog = ContentCatalog {
            trees: BTreeMap::new(),
        };
        &EMPTY
    }

    pub fn tree(
        &self,
        variant: Variant,
        locale: SupportedLocale,
    ) -> Result<&ContentTree, ConfigurationError> {
        self.trees
            .get(&(variant, locale))
            .ok_or(ConfigurationError::MissingLocale { variant, locale })
    }

    /// Variants with content, in declaration order.
    pub fn variants(&self) -> Vec<Variant> {
        let mut variants: Vec<_> = self.trees.keys().map(|(v, _)| *v).collect();
        variants.dedup();
        variants
    }

    fn check_parity(&self) -> Result<(), ConfigurationError> {
        let reference = SupportedLocale::default();
        for variant in self.variants() {
            let base = self.tree(variant, reference)?;
            let base_shape = base.shape();
            check_non_empty(variant, reference, base)?;

            for locale in SupportedLocale::ALL.into_iter().filter(|l| *l != reference) {
                let tree = self.tree(variant, locale)?;
                let paths = shape_diff(&base_shape, &tree.shape());
                if !paths.is_empty() {
                    return Err(ConfigurationError::ParityMismatch {
                        variant,
                        locale,
                        reference,
                        paths,
                    });
                }
                check_non_empty(variant, locale, tree)?;
            }
        }
        Ok(())
    }
}

fn source_path(variant: Variant, locale: SupportedLocale) -> String {
    format!("{}/{}.json", variant.slug(), locale.tag())
}

/// Paths present in only one of the shapes, or present with a different kind.
fn shape_diff(
    base: &BTreeMap<String, PathKind>,
    other: &BTreeMap<String, PathKind>,
) -> Vec<String> {
    let mut paths: Vec<String> = base
        .iter()
        .filter(|(path, kind)| other.get(*path) != Some(*kind))
        .map(|(path, _)| path.clone())
        .collect();
    paths.extend(
        other
            .keys()
            .filter(|path| !base.contains_key(*path))
            .cloned(),
    );
    paths.sort();
    paths
}

fn check_non_empty(
    variant: Variant,
    locale: SupportedLocale,
    tree: &ContentTree,
) -> Result<(), ConfigurationError> {
    match tree
        .leaf_paths()
        .into_iter()
        .find(|path| tree.text(path).trim().is_empty())
    {
        Some(path) => Err(ConfigurationError::EmptyText {
            variant,
            locale,
            path,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ET: &str = r#"{ "hero": { "title": "Alusta", "cta": "Proovi" } }"#;
    const EN: &str = r#"{ "hero": { "title": "Start", "cta": "Try" } }"#;

    #[test]
    fn embedded_catalog_is_complete() {
        let catalog = ContentCatalog::embedded().expect("embedded content is valid");
        assert_eq!(catalog.variants(), Variant::ALL.to_vec());
        for variant in Variant::ALL {
            for locale in SupportedLocale::ALL {
                assert!(catalog.tree(variant, locale).is_ok(), "{variant}/{locale}");
            }
        }
    }

    #[test]
    fn shared_catalog_matches_embedded() {
        let shared = catalog().expect("shared catalog builds");
        assert_eq!(shared, &ContentCatalog::embedded().expect("embedded content is valid"));
    }

    #[test]
    fn accepts_matching_locales() {
        let catalog = ContentCatalog::from_sources([
            (Variant::Compact, SupportedLocale::Et, ET),
            (Variant::Compact, SupportedLocale::En, EN),
        ])
        .expect("parity holds");
        assert_eq!(
            catalog.tree(Variant::Compact, SupportedLocale::En).map(|t| t.text("hero.title")),
            Ok("Start")
        );
        assert_eq!(
            catalog.tree(Variant::Classic, SupportedLocale::Et),
            Err(ConfigurationError::MissingLocale {
                variant: Variant::Classic,
                locale: SupportedLocale::Et
            })
        );
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let empty = ContentCatalog::empty();
        assert!(empty.variants().is_empty());
        assert_eq!(
            empty.tree(Variant::Classic, SupportedLocale::Et),
            Err(ConfigurationError::MissingLocale {
                variant: Variant::Classic,
                locale: SupportedLocale::Et
            })
        );
    }

    #[test]
    fn rejects_missing_translation() {
        let en = r#"{ "hero": { "title": "Start" }, "footer": { "rights": "All rights reserved" } }"#;
        let err = ContentCatalog::from_sources([
            (Variant::Compact, SupportedLocale::Et, ET),
            (Variant::Compact, SupportedLocale::En, en),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::ParityMismatch {
                variant: Variant::Compact,
                locale: SupportedLocale::En,
                reference: SupportedLocale::Et,
                paths: vec![
                    "footer".to_string(),
                    "footer.rights".to_string(),
                    "hero.cta".to_string()
                ],
            }
        );
    }

    #[test]
    fn rejects_text_where_section_expected() {
        let en = r#"{ "hero": "Start" }"#;
        let err = ContentCatalog::from_sources([
            (Variant::Compact, SupportedLocale::Et, ET),
            (Variant::Compact, SupportedLocale::En, en),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::ParityMismatch { .. }), "{err}");
    }

    #[test]
    fn rejects_lone_locale() {
        let err = ContentCatalog::from_sources([(Variant::Showcase, SupportedLocale::En, EN)])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingLocale {
                variant: Variant::Showcase,
                locale: SupportedLocale::Et
            }
        );
    }

    #[test]
    fn rejects_blank_text() {
        let en = r#"{ "hero": { "title": "  ", "cta": "Try" } }"#;
        let err = ContentCatalog::from_sources([
            (Variant::Compact, SupportedLocale::Et, ET),
            (Variant::Compact, SupportedLocale::En, en),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::EmptyText {
                variant: Variant::Compact,
                locale: SupportedLocale::En,
                path: "hero.title".to_string()
            }
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ContentCatalog::from_sources([(Variant::Compact, SupportedLocale::Et, "{")])
            .unwrap_err();
        assert!(
            matches!(&err, ConfigurationError::InvalidSource { path, .. } if path == "compact/et.json"),
            "{err}"
        );
        let err = ContentCatalog::from_sources([(Variant::Compact, SupportedLocale::Et, r#""x""#)])
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSource { .. }));
    }
}
