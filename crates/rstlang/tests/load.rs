//! Integration tests for loading language packs into a registry.

use std::io::Write;
use std::path::PathBuf;

use rstlang::{LanguageRegistry, LoadError, NameKind, RegisterError, ResolveError};
use tempfile::NamedTempFile;

const GERMAN: &str = r#"
// German names for the common admonitions.
directives {
    achtung = attention;
    hinweis = note;
    warnung = warning;
    "abschnitts-nummerierung" = sectnum;
    disabled fußnoten = footnotes;
}
roles {
    abkürzung = abbreviation;
    abk = abbreviation;
}
"#;

// =========================================================================
// Loading from String
// =========================================================================

#[test]
fn load_language_str_counts_active_entries() {
    let mut registry = LanguageRegistry::new();
    let count = registry.load_language_str("de", GERMAN).unwrap();
    assert_eq!(count, 6);
}

#[test]
fn loaded_language_resolves() {
    let mut registry = LanguageRegistry::with_builtin_languages();
    registry.load_language_str("de", GERMAN).unwrap();

    assert_eq!(registry.resolve_directive("de", "hinweis").unwrap(), "note");
    assert_eq!(
        registry.resolve_directive("de", "abschnitts-nummerierung").unwrap(),
        "sectnum"
    );
    assert_eq!(registry.resolve_role("de", "abk").unwrap(), "abbreviation");
    // English is unaffected.
    assert_eq!(registry.resolve_directive("en", "note").unwrap(), "note");
}

#[test]
fn loaded_disabled_entries_do_not_resolve() {
    let mut registry = LanguageRegistry::new();
    registry.load_language_str("de", GERMAN).unwrap();

    assert!(matches!(
        registry.resolve_directive("de", "fußnoten"),
        Err(ResolveError::UnknownDirective { .. })
    ));
    assert!(
        registry
            .mapping("de")
            .unwrap()
            .is_disabled(NameKind::Directive, "fußnoten")
    );
}

#[test]
fn string_loaded_language_has_no_source_path() {
    let mut registry = LanguageRegistry::new();
    registry.load_language_str("de", GERMAN).unwrap();
    assert!(registry.source_path("de").is_none());
}

#[test]
fn parse_error_reports_placeholder_path() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .load_language_str("de", "directives {\n  hinweis note;\n}")
        .unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, PathBuf::from("<de>"));
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!registry.contains_language("de"));
}

#[test]
fn unexpected_eof_becomes_parse_error() {
    let mut registry = LanguageRegistry::new();
    let err = registry.load_language_str("de", "roles {").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<de>:1:8: unexpected end of file");
}

#[test]
fn duplicate_section_becomes_parse_error() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .load_language_str("de", "roles {}\nroles {}")
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"<de>:2:1: duplicate section 'roles'");
}

#[test]
fn duplicate_entry_is_rejected() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .load_language_str("de", "roles {\n  t = title-reference;\n  t = target;\n}")
        .unwrap_err();
    match &err {
        LoadError::DuplicateEntry {
            line, kind, name, ..
        } => {
            assert_eq!(*line, 3);
            assert_eq!(*kind, NameKind::Role);
            assert_eq!(name, "t");
        }
        other => panic!("expected duplicate entry, got {other:?}"),
    }
    insta::assert_snapshot!(err.to_string(), @"<de>:3: duplicate role 't'");
}

#[test]
fn disabled_and_active_with_same_name_is_duplicate() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .load_language_str("de", "directives { hinweis = note; disabled hinweis = note; }")
        .unwrap_err();
    assert!(matches!(err, LoadError::DuplicateEntry { .. }));
}

#[test]
fn same_name_in_both_sections_is_allowed() {
    let mut registry = LanguageRegistry::new();
    registry
        .load_language_str("qaa", "directives { target = target-notes; } roles { target = target; }")
        .unwrap();
    assert_eq!(registry.resolve_directive("qaa", "target").unwrap(), "target-notes");
    assert_eq!(registry.resolve_role("qaa", "target").unwrap(), "target");
}

#[test]
fn loading_a_registered_language_is_rejected() {
    let mut registry = LanguageRegistry::with_builtin_languages();
    let err = registry
        .load_language_str("en", "directives { nota = note; }")
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::Register(RegisterError::DuplicateLanguage { .. })
    ));
    assert!(registry.resolve_directive("en", "nota").is_err());
}

#[test]
fn loading_with_invalid_tag_is_rejected() {
    let mut registry = LanguageRegistry::new();
    let err = registry.load_language_str("!!", "").unwrap_err();
    assert!(matches!(
        err,
        LoadError::Register(RegisterError::InvalidLanguageTag { .. })
    ));
}

// =========================================================================
// Loading from File
// =========================================================================

#[test]
fn load_language_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(GERMAN.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut registry = LanguageRegistry::new();
    let count = registry.load_language("de", file.path()).unwrap();

    assert_eq!(count, 6);
    assert_eq!(registry.resolve_directive("de", "achtung").unwrap(), "attention");
    assert_eq!(registry.source_path("de"), Some(file.path()));
}

#[test]
fn file_parse_error_reports_file_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"roles {\n  ab abbreviation;\n}").unwrap();
    file.flush().unwrap();

    let mut registry = LanguageRegistry::new();
    let err = registry.load_language("de", file.path()).unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(registry.source_path("de").is_none());
}

#[test]
fn missing_file_is_io_error() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .load_language("de", "/nonexistent/path/de.rstlang")
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
