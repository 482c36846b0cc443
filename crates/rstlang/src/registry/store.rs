//! The language registry: tag to mapping, plus language-pack loading.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rstlang_semantics::NameKind;
use tracing::{debug, trace};

use crate::languages::{BUILTIN_LANGUAGES, builtin};
use crate::parser::{LanguagePack, ParseError, parse_file};
use crate::registry::error::{LoadError, RegisterError, ResolveError, compute_suggestions};
use crate::registry::mapping::LanguageMapping;
use crate::types::LanguageTag;

/// Resolves localized directive and role names to canonical identifiers.
///
/// The registry owns one immutable [`LanguageMapping`] per language tag.
/// Languages are registered once, at start-up; a second registration for
/// the same tag is an error rather than an override. Lookups borrow `&self`
/// and never mutate, so a fully built registry can be shared across threads
/// without locking.
///
/// # Example
///
/// ```
/// use rstlang::{LanguageRegistry, ResolveError};
///
/// let registry = LanguageRegistry::with_builtin_languages();
///
/// assert_eq!(registry.resolve_directive("en", "section-numbering").unwrap(), "sectnum");
/// assert_eq!(registry.resolve_role("en", "url").unwrap(), "uri-reference");
/// assert!(matches!(
///     registry.resolve_directive("fr", "warning"),
///     Err(ResolveError::UnknownLanguage { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    /// Registered mappings by tag.
    languages: BTreeMap<LanguageTag, Arc<LanguageMapping>>,

    /// Pack files that languages were loaded from.
    /// Only populated for file-loaded languages.
    loaded_paths: BTreeMap<LanguageTag, PathBuf>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in language registered.
    pub fn with_builtin_languages() -> Self {
        let mut registry = Self::new();
        for &language in BUILTIN_LANGUAGES {
            if let (Ok(tag), Some(mapping)) = (LanguageTag::parse(language), builtin(language)) {
                registry.insert(tag, mapping);
            }
        }
        registry
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Install the mapping for a language tag.
    ///
    /// Fails with [`RegisterError::DuplicateLanguage`] if the tag is already
    /// registered, or [`RegisterError::InvalidLanguageTag`] if it is not a
    /// well-formed language identifier.
    pub fn register_language(
        &mut self,
        language: &str,
        mapping: LanguageMapping,
    ) -> Result<(), RegisterError> {
        let tag = LanguageTag::parse(language)?;
        if self.languages.contains_key(&tag) {
            return Err(RegisterError::DuplicateLanguage {
                language: language.to_string(),
            });
        }
        self.insert(tag, mapping);
        Ok(())
    }

    fn insert(&mut self, tag: LanguageTag, mapping: LanguageMapping) {
        debug!(
            language = %tag,
            directives = mapping.len(NameKind::Directive),
            roles = mapping.len(NameKind::Role),
            "registered language mapping"
        );
        self.languages.insert(tag, Arc::new(mapping));
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a localized directive name for a language.
    pub fn resolve_directive(&self, language: &str, name: &str) -> Result<&str, ResolveError> {
        self.resolve(NameKind::Directive, language, name)
    }

    /// Resolve a localized role name for a language.
    pub fn resolve_role(&self, language: &str, name: &str) -> Result<&str, ResolveError> {
        self.resolve(NameKind::Role, language, name)
    }

    /// Resolve a localized name of either kind.
    ///
    /// Matching is exact and case-sensitive. Callers that want to accept
    /// `Note` or ` note` must normalize before calling.
    pub fn resolve(
        &self,
        kind: NameKind,
        language: &str,
        name: &str,
    ) -> Result<&str, ResolveError> {
        let mapping =
            self.languages
                .get(language)
                .ok_or_else(|| ResolveError::UnknownLanguage {
                    language: language.to_string(),
                })?;

        match mapping.get(kind, name) {
            Some(canonical) => {
                trace!(%kind, language, name, canonical, "resolved");
                Ok(canonical)
            }
            None => {
                let suggestions =
                    compute_suggestions(name, mapping.entries(kind).map(|(localized, _)| localized));
                Err(ResolveError::unknown_name(kind, language, name, suggestions))
            }
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Get the mapping registered for a tag.
    pub fn mapping(&self, language: &str) -> Option<&LanguageMapping> {
        self.languages.get(language).map(Arc::as_ref)
    }

    /// Whether a mapping is registered for the tag.
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Registered language tags, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(LanguageTag::as_str)
    }

    /// The pack file a language was loaded from, if it was loaded from a file.
    pub fn source_path(&self, language: &str) -> Option<&Path> {
        self.loaded_paths.get(language).map(PathBuf::as_path)
    }

    // =========================================================================
    // Language Pack Loading
    // =========================================================================

    /// Load a `.rstlang` language pack from a file and register it.
    ///
    /// Returns the number of active entries registered. The path is kept and
    /// available through [`LanguageRegistry::source_path`].
    ///
    /// ```ignore
    /// registry.load_language("de", "languages/de.rstlang")?;
    /// ```
    pub fn load_language(
        &mut self,
        language: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        debug!(language, path = %path.display(), "loading language pack");

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let count = self.load_language_str_internal(language, &content, Some(path))?;

        if let Ok(tag) = LanguageTag::parse(language) {
            self.loaded_paths.insert(tag, path.to_path_buf());
        }
        Ok(count)
    }

    /// Load a `.rstlang` language pack from a string and register it.
    ///
    /// ```
    /// use rstlang::LanguageRegistry;
    ///
    /// let mut registry = LanguageRegistry::new();
    /// let count = registry.load_language_str("de", r#"
    ///     directives {
    ///         hinweis = note;
    ///         achtung = attention;
    ///     }
    ///     roles {
    ///         abkürzung = abbreviation;
    ///     }
    /// "#).unwrap();
    ///
    /// assert_eq!(count, 3);
    /// assert_eq!(registry.resolve_role("de", "abkürzung").unwrap(), "abbreviation");
    /// ```
    pub fn load_language_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        self.load_language_str_internal(language, content, None)
    }

    /// Internal loading implementation.
    fn load_language_str_internal(
        &mut self,
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let display_path = || {
            path.map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(format!("<{language}>")))
        };

        let pack = parse_file(content).map_err(|e| {
            let (line, column, message) = match e {
                ParseError::Syntax {
                    line,
                    column,
                    message,
                } => (line, column, message),
                ParseError::UnexpectedEof { line, column } => {
                    (line, column, "unexpected end of file".to_string())
                }
                ParseError::DuplicateSection {
                    line,
                    column,
                    section,
                } => (line, column, format!("duplicate section '{section}'")),
            };
            LoadError::Parse {
                path: display_path(),
                line,
                column,
                message,
            }
        })?;

        let mapping = mapping_from_pack(pack).map_err(|(line, kind, name)| {
            LoadError::DuplicateEntry {
                path: display_path(),
                line,
                kind,
                name,
            }
        })?;

        let count = mapping.len(NameKind::Directive) + mapping.len(NameKind::Role);
        self.register_language(language, mapping)?;
        Ok(count)
    }
}

/// Build a mapping from a parsed pack.
///
/// Fails with the line, kind and name of the first localized name that
/// appears twice within a section.
fn mapping_from_pack(pack: LanguagePack) -> Result<LanguageMapping, (usize, NameKind, String)> {
    let mut mapping = LanguageMapping::new();
    for section in pack.sections {
        let kind = section.kind;
        let mut seen: BTreeSet<String> = BTreeSet::new();
        for entry in section.entries {
            if !seen.insert(entry.name.clone()) {
                return Err((entry.line, kind, entry.name));
            }
            if entry.disabled {
                mapping.insert_disabled(kind, entry.name, entry.canonical);
            } else {
                mapping.insert(kind, entry.name, entry.canonical);
            }
        }
    }
    Ok(mapping)
}
