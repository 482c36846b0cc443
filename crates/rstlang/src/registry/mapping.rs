//! Per-language directive and role tables.

use std::collections::{BTreeMap, BTreeSet};

use bon::Builder;
use rstlang_semantics::NameKind;
use serde::Serialize;

/// The localized directive and role names of one natural language.
///
/// Each table maps a localized name to a canonical identifier. Several
/// localized names may share a canonical identifier (`"sectnum"` and
/// `"section-numbering"` both map to `"sectnum"`).
///
/// Disabled entries are synonyms kept on record until the parser registers
/// their canonical identifier. They never resolve, but
/// [`LanguageMapping::is_disabled`] lets a caller tell "recognized but
/// disabled" apart from "never heard of it".
///
/// Mappings are plain values: build one, then hand it to
/// [`LanguageRegistry::register_language`](crate::LanguageRegistry::register_language),
/// which makes it immutable.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use rstlang::{LanguageMapping, NameKind};
///
/// let mapping = LanguageMapping::builder()
///     .directives(BTreeMap::from([
///         ("note".to_string(), "note".to_string()),
///         ("hinweis".to_string(), "note".to_string()),
///     ]))
///     .build();
///
/// assert_eq!(mapping.directive("hinweis"), Some("note"));
/// assert_eq!(mapping.synonyms_of(NameKind::Directive, "note"), vec!["hinweis", "note"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
pub struct LanguageMapping {
    /// Localized directive name to canonical directive identifier.
    #[builder(default)]
    directives: BTreeMap<String, String>,

    /// Localized role name to canonical role identifier.
    #[builder(default)]
    roles: BTreeMap<String, String>,

    /// Directive synonyms awaiting canonical support.
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    disabled_directives: BTreeMap<String, String>,

    /// Role synonyms awaiting canonical support.
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    disabled_roles: BTreeMap<String, String>,
}

impl LanguageMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active entry, returning the canonical identifier it replaced.
    pub fn insert(
        &mut self,
        kind: NameKind,
        name: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Option<String> {
        self.table_mut(kind).insert(name.into(), canonical.into())
    }

    /// Add a disabled entry, returning the canonical identifier it replaced.
    pub fn insert_disabled(
        &mut self,
        kind: NameKind,
        name: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Option<String> {
        self.disabled_table_mut(kind)
            .insert(name.into(), canonical.into())
    }

    /// Look up the canonical identifier for an active localized name.
    ///
    /// Matching is exact: no case folding, trimming, or normalization.
    pub fn get(&self, kind: NameKind, name: &str) -> Option<&str> {
        self.table(kind).get(name).map(String::as_str)
    }

    /// Shorthand for `get(NameKind::Directive, name)`.
    pub fn directive(&self, name: &str) -> Option<&str> {
        self.get(NameKind::Directive, name)
    }

    /// Shorthand for `get(NameKind::Role, name)`.
    pub fn role(&self, name: &str) -> Option<&str> {
        self.get(NameKind::Role, name)
    }

    /// Whether `name` is recorded as a disabled entry.
    pub fn is_disabled(&self, kind: NameKind, name: &str) -> bool {
        self.disabled_table(kind).contains_key(name)
    }

    /// Active `(localized, canonical)` pairs, sorted by localized name.
    pub fn entries(&self, kind: NameKind) -> impl Iterator<Item = (&str, &str)> {
        self.table(kind)
            .iter()
            .map(|(name, canonical)| (name.as_str(), canonical.as_str()))
    }

    /// Disabled `(localized, canonical)` pairs, sorted by localized name.
    pub fn disabled_entries(&self, kind: NameKind) -> impl Iterator<Item = (&str, &str)> {
        self.disabled_table(kind)
            .iter()
            .map(|(name, canonical)| (name.as_str(), canonical.as_str()))
    }

    /// Number of active entries of the given kind.
    pub fn len(&self, kind: NameKind) -> usize {
        self.table(kind).len()
    }

    /// True if the mapping has no active entries of either kind.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.roles.is_empty()
    }

    /// All active localized names that resolve to `canonical`, sorted.
    pub fn synonyms_of(&self, kind: NameKind, canonical: &str) -> Vec<&str> {
        self.entries(kind)
            .filter(|&(_, target)| target == canonical)
            .map(|(name, _)| name)
            .collect()
    }

    /// The distinct canonical identifiers reachable through active entries.
    pub fn canonical_targets(&self, kind: NameKind) -> BTreeSet<&str> {
        self.table(kind).values().map(String::as_str).collect()
    }

    fn table(&self, kind: NameKind) -> &BTreeMap<String, String> {
        match kind {
            NameKind::Directive => &self.directives,
            NameKind::Role => &self.roles,
        }
    }

    fn table_mut(&mut self, kind: NameKind) -> &mut BTreeMap<String, String> {
        match kind {
            NameKind::Directive => &mut self.directives,
            NameKind::Role => &mut self.roles,
        }
    }

    fn disabled_table(&self, kind: NameKind) -> &BTreeMap<String, String> {
        match kind {
            NameKind::Directive => &self.disabled_directives,
            NameKind::Role => &self.disabled_roles,
        }
    }

    fn disabled_table_mut(&mut self, kind: NameKind) -> &mut BTreeMap<String, String> {
        match kind {
            NameKind::Directive => &mut self.disabled_directives,
            NameKind::Role => &mut self.disabled_roles,
        }
    }
}
