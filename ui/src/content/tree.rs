//! Nested, order-preserving copy tables.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

/// All user-visible copy for one locale of one page variant.
///
/// Keys keep their document order, which drives the order of repeated
/// blocks (feature cards, stat tiles, testimonials, footer columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTree {
    Text(String),
    Node(Vec<(String, ContentTree)>),
}

/// Shape of a single path inside a tree, used for parity comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Text,
    Node,
}

impl ContentTree {
    /// Walk a dotted path (`"hero.title"`). An empty path yields `self`.
    pub fn get(&self, path: &str) -> Option<&ContentTree> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, key| match node {
            ContentTree::Node(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, child)| child),
            ContentTree::Text(_) => None,
        })
    }

    /// Text at `path`, or `""` when missing. A miss is a content defect and is logged.
    pub fn text(&self, path: &str) -> &str {
        match self.get(path) {
            Some(ContentTree::Text(value)) => value.as_str(),
            Some(ContentTree::Node(_)) => {
                tracing::warn!(path, "content path resolves to a section, not text");
                ""
            }
            None => {
                tracing::warn!(path, "missing content text");
                ""
            }
        }
    }

    /// Text at `path` if the tree defines it. For optional copy.
    pub fn opt_text(&self, path: &str) -> Option<&str> {
        match self.get(path) {
            Some(ContentTree::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentTree::Text(value) => Some(value.as_str()),
            ContentTree::Node(_) => None,
        }
    }

    /// Ordered children of the section at `path`; empty for text or missing paths.
    pub fn children<'a>(&'a self, path: &str) -> impl Iterator<Item = (&'a str, &'a ContentTree)> {
        let entries: &'a [(String, ContentTree)] = match self.get(path) {
            Some(ContentTree::Node(entries)) => entries,
            _ => &[],
        };
        entries.iter().map(|(key, child)| (key.as_str(), child))
    }

    /// Every path below the root mapped to its kind.
    pub fn shape(&self) -> BTreeMap<String, PathKind> {
        let mut out = BTreeMap::new();
        self.collect_shape("", &mut out);
        out
    }

    /// Dotted paths of all leaves, in document order.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_shape(&self, prefix: &str, out: &mut BTreeMap<String, PathKind>) {
        if let ContentTree::Node(entries) = self {
            for (key, child) in entries {
                let path = join(prefix, key);
                let kind = match child {
                    ContentTree::Text(_) => PathKind::Text,
                    ContentTree::Node(_) => PathKind::Node,
                };
                child.collect_shape(&path, out);
                out.insert(path, kind);
            }
        }
    }

    fn collect_leaves(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            ContentTree::Text(_) => out.push(prefix.to_string()),
            ContentTree::Node(entries) => {
                for (key, child) in entries {
                    child.collect_leaves(&join(prefix, key), out);
                }
            }
        }
    }
}

/// Component prop handle to a subtree of the shared catalog.
///
/// Compares by identity: two sections are equal only if they point at the
/// same catalog node, so a locale switch always re-renders.
#[derive(Debug, Clone, Copy)]
pub struct Section(&'static ContentTree);

impl Section {
    pub fn new(tree: &'static ContentTree) -> Self {
        Self(tree)
    }

    pub fn tree(self) -> &'static ContentTree {
        self.0
    }

    /// Sub-section at `path`, if the tree defines one.
    pub fn section(self, path: &str) -> Option<Section> {
        match self.0.get(path) {
            Some(node @ ContentTree::Node(_)) => Some(Section(node)),
            _ => None,
        }
    }

    pub fn text(self, path: &str) -> &'static str {
        self.0.text(path)
    }

    pub fn opt_text(self, path: &str) -> Option<&'static str> {
        self.0.opt_text(path)
    }

    /// Ordered child sections at `path`; text children are skipped.
    pub fn sections(self, path: &str) -> impl Iterator<Item = (&'static str, Section)> {
        self.0
            .children(path)
            .filter(|(_, child)| matches!(child, ContentTree::Node(_)))
            .map(|(key, child)| (key, Section(child)))
    }

    /// Ordered text children at `path`; nested sections are skipped.
    pub fn texts(self, path: &str) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.0
            .children(path)
            .filter_map(|(key, child)| child.as_text().map(|text| (key, text)))
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

impl<'de> Deserialize<'de> for ContentTree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ContentTreeVisitor)
    }
}

struct ContentTreeVisitor;

impl<'de> Visitor<'de> for ContentTreeVisitor {
    type Value = ContentTree;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or an object of strings/objects")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ContentTree::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(ContentTree::Text(value))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();
        while let Some((key, value)) = map.next_entry::<String, ContentTree>()? {
            if key.is_empty() || key.contains('.') {
                return Err(de::Error::custom(format!("invalid content key {key:?}")));
            }
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate content key {key:?}")));
            }
            entries.push((key, value));
        }
        Ok(ContentTree::Node(entries))
    }
}
