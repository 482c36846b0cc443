//! Shared rstlang semantic tables used by both the runtime registry and the CLI.
//!
//! This crate centralizes the canonical directive and role catalogs so that
//! lint rules and coverage reports agree on what a parser has registered.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The two kinds of localized names a language mapping carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameKind {
    /// Block-level directive names (`.. note::`).
    Directive,
    /// Interpreted-text role names (`:sub:`).
    Role,
}

impl NameKind {
    /// Both kinds, directives first.
    pub const ALL: [NameKind; 2] = [NameKind::Directive, NameKind::Role];

    /// Keyword introducing this kind's section in a language pack.
    pub fn section_keyword(self) -> &'static str {
        match self {
            NameKind::Directive => "directives",
            NameKind::Role => "roles",
        }
    }

    /// Inverse of [`NameKind::section_keyword`].
    pub fn from_section_keyword(keyword: &str) -> Option<NameKind> {
        match keyword {
            "directives" => Some(NameKind::Directive),
            "roles" => Some(NameKind::Role),
            _ => None,
        }
    }
}

impl Display for NameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NameKind::Directive => write!(f, "directive"),
            NameKind::Role => write!(f, "role"),
        }
    }
}

/// Canonical identifiers registered by the parser for the given kind.
///
/// Sorted, without duplicates.
pub fn canonical_names(kind: NameKind) -> &'static [&'static str] {
    match kind {
        NameKind::Directive => CANONICAL_DIRECTIVES,
        NameKind::Role => CANONICAL_ROLES,
    }
}

/// Whether `name` is a canonical identifier of the given kind.
pub fn is_canonical(kind: NameKind, name: &str) -> bool {
    canonical_names(kind).binary_search(&name).is_ok()
}

/// Whether a localized name follows the lowercase, hyphen-separated
/// convention used by the bundled language packs.
///
/// Letters without case (CJK, Arabic, ...) are accepted. This check is only
/// used for lint warnings; lookups never normalize names.
pub fn is_conventional_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return false;
    }
    name.chars()
        .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()))
}

const CANONICAL_DIRECTIVES: &[&str] = &[
    "admonition",
    "attention",
    "caution",
    "class",
    "contents",
    "danger",
    "epigraph",
    "error",
    "figure",
    "highlights",
    "hint",
    "image",
    "important",
    "include",
    "line-block",
    "meta",
    "note",
    "parsed-literal",
    "pull-quote",
    "raw",
    "replace",
    "restructuredtext-test-directive",
    "rubric",
    "sectnum",
    "sidebar",
    "target-notes",
    "tip",
    "topic",
    "unicode",
    "warning",
];

const CANONICAL_ROLES: &[&str] = &[
    "abbreviation",
    "acronym",
    "anonymous-reference",
    "citation-reference",
    "emphasis",
    "footnote-reference",
    "index",
    "literal",
    "named-reference",
    "pep-reference",
    "rfc-reference",
    "strong",
    "subscript",
    "substitution-reference",
    "superscript",
    "target",
    "title-reference",
    "uri-reference",
];
