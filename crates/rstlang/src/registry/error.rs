//! Error types for the language mapping registry.

use std::path::PathBuf;

use rstlang_semantics::NameKind;
use strsim::levenshtein;
use thiserror::Error;

/// Maximum number of suggestions attached to an unknown-name error.
const MAX_SUGGESTIONS: usize = 3;

/// An error returned when a localized name cannot be resolved.
///
/// All variants are recoverable: a parser typically reports the construct as
/// unrecognized markup and carries on with the rest of the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No mapping is registered for the language tag.
    #[error("no language mapping registered for '{language}'")]
    UnknownLanguage { language: String },

    /// The language is registered but has no such directive name.
    #[error("unknown directive '{name}' for language '{language}'{}", did_you_mean(suggestions))]
    UnknownDirective {
        language: String,
        name: String,
        suggestions: Vec<String>,
    },

    /// The language is registered but has no such role name.
    #[error("unknown role '{name}' for language '{language}'{}", did_you_mean(suggestions))]
    UnknownRole {
        language: String,
        name: String,
        suggestions: Vec<String>,
    },
}

impl ResolveError {
    /// Build the unknown-name variant matching `kind`.
    pub(crate) fn unknown_name(
        kind: NameKind,
        language: &str,
        name: &str,
        suggestions: Vec<String>,
    ) -> Self {
        let language = language.to_string();
        let name = name.to_string();
        match kind {
            NameKind::Directive => ResolveError::UnknownDirective {
                language,
                name,
                suggestions,
            },
            NameKind::Role => ResolveError::UnknownRole {
                language,
                name,
                suggestions,
            },
        }
    }

    /// Close matches for the unresolved name, best first.
    ///
    /// Empty for [`ResolveError::UnknownLanguage`].
    pub fn suggestions(&self) -> &[String] {
        match self {
            ResolveError::UnknownLanguage { .. } => &[],
            ResolveError::UnknownDirective { suggestions, .. }
            | ResolveError::UnknownRole { suggestions, .. } => suggestions,
        }
    }
}

/// An error that occurred while registering a language.
///
/// Registration happens at start-up, so these are configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A mapping is already registered for the tag.
    #[error("language '{language}' is already registered")]
    DuplicateLanguage { language: String },

    /// The tag is not a well-formed language identifier.
    #[error("invalid language tag '{language}': {message}")]
    InvalidLanguageTag { language: String, message: String },
}

/// Errors that occur while loading a language pack.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the language pack.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same localized name appears twice within one section.
    #[error("{path}:{line}: duplicate {kind} '{name}'")]
    DuplicateEntry {
        path: PathBuf,
        line: usize,
        kind: NameKind,
        name: String,
    },

    /// The parsed mapping could not be registered.
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// Compute "did you mean" suggestions for a name that failed to resolve.
///
/// Uses Levenshtein distance: at most 1 edit for names of three characters
/// or fewer, at most 2 otherwise. Results are ordered by distance, then name.
///
/// ```
/// use rstlang::compute_suggestions;
///
/// let available = ["warning", "note", "tip"];
/// assert_eq!(compute_suggestions("warnign", available), vec!["warning"]);
/// assert!(compute_suggestions("figure", available).is_empty());
/// ```
pub fn compute_suggestions<'a>(
    target: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .into_iter()
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|&(distance, _)| distance > 0 && distance <= max_distance)
        .collect();
    scored.sort_unstable();
    scored.dedup();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
    format!("; did you mean {}?", quoted.join(", "))
}
