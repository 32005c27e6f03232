//! Static landing-page copy.
//!
//! Each page variant ships one JSON document per supported locale under
//! `content/<variant>/<locale>.json`. The documents are embedded at compile
//! time, parsed into [`ContentTree`]s and checked for structural parity
//! before anything renders: every locale of a variant must define exactly the
//! same key paths, and every leaf must be non-empty text.
//!
//! ```text
//! content/
//!   classic/et.json   classic/en.json
//!   compact/et.json   compact/en.json
//!   showcase/et.json  showcase/en.json
//! ```
//!
//! To add a locale, add it to [`SupportedLocale::ALL`](crate::i18n::SupportedLocale)
//! and drop a translated copy of every variant's `et.json` next to it.

mod catalog;
mod tree;

pub use catalog::{catalog, ContentCatalog};
pub use tree::{ContentTree, PathKind, Section};

use std::fmt;

use serde::Deserialize;

use crate::i18n::SupportedLocale;

/// One of the landing-page layouts sharing the `LandingPage` template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full page: navigation, how-it-works strip, footer link columns.
    Classic,
    /// Single-screen pitch with a dated footer.
    Compact,
    /// Long-form page with six features and reviewer roles.
    Showcase,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Compact, Variant::Showcase];

    pub fn slug(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Compact => "compact",
            Variant::Showcase => "showcase",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Defects in the embedded copy. These are build/test-time problems and are
/// logged rather than shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no content registered for {variant}/{locale}")]
    MissingLocale {
        variant: Variant,
        locale: SupportedLocale,
    },
    #[error("content file {path} is not embedded")]
    MissingSource { path: String },
    #[error("content file {path} is invalid: {reason}")]
    InvalidSource { path: String, reason: String },
    #[error(
        "{variant}/{locale} does not match {variant}/{reference}: {}",
        .paths.join(", ")
    )]
    ParityMismatch {
        variant: Variant,
        locale: SupportedLocale,
        reference: SupportedLocale,
        paths: Vec<String>,
    },
    #[error("{variant}/{locale} has empty text at {path}")]
    EmptyText {
        variant: Variant,
        locale: SupportedLocale,
        path: String,
    },
}
