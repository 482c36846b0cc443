//! Static lint rules for language mappings.
//!
//! The registry does not own the parser's canonical directive and role
//! registries, so these checks are advisory: they flag entries that would
//! resolve to identifiers the parser cannot dispatch on, names that break the
//! lowercase-hyphenated convention, and canonical identifiers a language
//! leaves unreachable.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rstlang_semantics::{NameKind, canonical_names, is_canonical, is_conventional_name};
use serde::{Serialize, Serializer};

use crate::registry::mapping::LanguageMapping;

/// A problem found in a language mapping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum LintWarning {
    /// An active entry maps to an identifier the parser has not registered.
    NonCanonicalTarget {
        language: String,
        #[serde(serialize_with = "serialize_kind")]
        kind: NameKind,
        name: String,
        target: String,
    },

    /// A localized name is not lowercase and hyphen-separated.
    UnconventionalName {
        language: String,
        #[serde(serialize_with = "serialize_kind")]
        kind: NameKind,
        name: String,
    },

    /// A disabled entry shares its name with an active entry.
    DisabledShadowed {
        language: String,
        #[serde(serialize_with = "serialize_kind")]
        kind: NameKind,
        name: String,
    },

    /// No active entry reaches a canonical identifier.
    MissingCanonical {
        language: String,
        #[serde(serialize_with = "serialize_kind")]
        kind: NameKind,
        canonical: String,
    },
}

impl Display for LintWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LintWarning::NonCanonicalTarget {
                language,
                kind,
                name,
                target,
            } => write!(
                f,
                "{language}: {kind} '{name}' maps to '{target}', which is not a registered {kind}"
            ),
            LintWarning::UnconventionalName {
                language,
                kind,
                name,
            } => write!(
                f,
                "{language}: {kind} name '{name}' is not lowercase and hyphen-separated"
            ),
            LintWarning::DisabledShadowed {
                language,
                kind,
                name,
            } => write!(
                f,
                "{language}: disabled {kind} '{name}' is also an active entry"
            ),
            LintWarning::MissingCanonical {
                language,
                kind,
                canonical,
            } => write!(f, "{language}: no {kind} name maps to '{canonical}'"),
        }
    }
}

fn serialize_kind<S: Serializer>(kind: &NameKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(kind)
}

/// Runs every lint rule over a mapping, returning sorted warnings.
///
/// ```
/// use rstlang::{languages, lint_mapping};
///
/// assert!(lint_mapping("en", &languages::english()).is_empty());
/// ```
pub fn lint_mapping(language: &str, mapping: &LanguageMapping) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    for kind in NameKind::ALL {
        lint_targets(language, kind, mapping, &mut warnings);
        lint_names(language, kind, mapping, &mut warnings);
        lint_shadowed(language, kind, mapping, &mut warnings);
        lint_missing(language, kind, mapping, &mut warnings);
    }
    warnings.sort();
    warnings
}

fn lint_targets(
    language: &str,
    kind: NameKind,
    mapping: &LanguageMapping,
    warnings: &mut Vec<LintWarning>,
) {
    for (name, target) in mapping.entries(kind) {
        if !is_canonical(kind, target) {
            warnings.push(LintWarning::NonCanonicalTarget {
                language: language.to_string(),
                kind,
                name: name.to_string(),
                target: target.to_string(),
            });
        }
    }
}

/// Checks active and disabled names alike.
fn lint_names(
    language: &str,
    kind: NameKind,
    mapping: &LanguageMapping,
    warnings: &mut Vec<LintWarning>,
) {
    for (name, _) in mapping.entries(kind).chain(mapping.disabled_entries(kind)) {
        if !is_conventional_name(name) {
            warnings.push(LintWarning::UnconventionalName {
                language: language.to_string(),
                kind,
                name: name.to_string(),
            });
        }
    }
}

fn lint_shadowed(
    language: &str,
    kind: NameKind,
    mapping: &LanguageMapping,
    warnings: &mut Vec<LintWarning>,
) {
    for (name, _) in mapping.disabled_entries(kind) {
        if mapping.get(kind, name).is_some() {
            warnings.push(LintWarning::DisabledShadowed {
                language: language.to_string(),
                kind,
                name: name.to_string(),
            });
        }
    }
}

fn lint_missing(
    language: &str,
    kind: NameKind,
    mapping: &LanguageMapping,
    warnings: &mut Vec<LintWarning>,
) {
    for canonical in canonical_coverage(mapping, kind).missing {
        warnings.push(LintWarning::MissingCanonical {
            language: language.to_string(),
            kind,
            canonical: canonical.to_string(),
        });
    }
}

/// How many canonical identifiers of one kind a mapping can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Canonical identifiers reached by at least one active entry.
    pub reached: usize,
    /// Size of the canonical catalog.
    pub total: usize,
    /// Unreached canonical identifiers, sorted.
    pub missing: Vec<&'static str>,
}

impl Coverage {
    /// True if every canonical identifier is reachable.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Measure which canonical identifiers of `kind` a mapping reaches.
pub fn canonical_coverage(mapping: &LanguageMapping, kind: NameKind) -> Coverage {
    let targets = mapping.canonical_targets(kind);
    let catalog = canonical_names(kind);
    let missing: Vec<&'static str> = catalog
        .iter()
        .copied()
        .filter(|canonical| !targets.contains(canonical))
        .collect();
    Coverage {
        reached: catalog.len() - missing.len(),
        total: catalog.len(),
        missing,
    }
}
