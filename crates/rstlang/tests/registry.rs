//! Integration tests for LanguageRegistry resolution and registration.

use rstlang::languages::english;
use rstlang::{
    LanguageMapping, LanguageRegistry, NameKind, RegisterError, ResolveError, language_mapping,
};

fn registry() -> LanguageRegistry {
    LanguageRegistry::with_builtin_languages()
}

// =========================================================================
// English Scenarios
// =========================================================================

#[test]
fn warning_directive_resolves_to_itself() {
    assert_eq!(registry().resolve_directive("en", "warning").unwrap(), "warning");
}

#[test]
fn section_numbering_resolves_to_sectnum() {
    assert_eq!(
        registry().resolve_directive("en", "section-numbering").unwrap(),
        "sectnum"
    );
}

#[test]
fn abbreviation_synonyms_resolve_together() {
    let registry = registry();
    assert_eq!(registry.resolve_role("en", "ab").unwrap(), "abbreviation");
    assert_eq!(registry.resolve_role("en", "abbreviation").unwrap(), "abbreviation");
}

#[test]
fn url_role_resolves_to_uri_reference() {
    assert_eq!(registry().resolve_role("en", "url").unwrap(), "uri-reference");
}

#[test]
fn disabled_footnotes_directive_is_unknown() {
    let registry = registry();
    let err = registry.resolve_directive("en", "footnotes").unwrap_err();
    assert!(matches!(
        &err,
        ResolveError::UnknownDirective { language, name, .. }
            if language == "en" && name == "footnotes"
    ));
    assert!(
        registry
            .mapping("en")
            .unwrap()
            .is_disabled(NameKind::Directive, "footnotes")
    );
}

#[test]
fn unregistered_french_is_unknown_language() {
    let err = registry().resolve_directive("fr", "warning").unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownLanguage {
            language: "fr".to_string()
        }
    );
}

// =========================================================================
// Properties Over the English Mapping
// =========================================================================

#[test]
fn every_english_directive_resolves_to_its_table_value() {
    let registry = registry();
    let mapping = english();
    for (name, canonical) in mapping.entries(NameKind::Directive) {
        assert_eq!(registry.resolve_directive("en", name).unwrap(), canonical);
    }
    assert_eq!(mapping.len(NameKind::Directive), 31);
}

#[test]
fn every_english_role_resolves_to_its_table_value() {
    let registry = registry();
    let mapping = english();
    for (name, canonical) in mapping.entries(NameKind::Role) {
        assert_eq!(registry.resolve_role("en", name).unwrap(), canonical);
    }
    assert_eq!(mapping.len(NameKind::Role), 29);
}

#[test]
fn every_disabled_english_entry_is_unknown() {
    let registry = registry();
    for (name, _) in english().disabled_entries(NameKind::Directive) {
        assert!(matches!(
            registry.resolve_directive("en", name),
            Err(ResolveError::UnknownDirective { .. })
        ));
    }
}

#[test]
fn synonym_pairs_agree() {
    let registry = registry();
    let roles = [
        ("ab", "abbreviation"),
        ("ac", "acronym"),
        ("i", "index"),
        ("sub", "subscript"),
        ("sup", "superscript"),
        ("t", "title"),
        ("pep", "pep-reference"),
        ("rfc", "rfc-reference"),
        ("uri", "url"),
    ];
    for (first, second) in roles {
        assert_eq!(
            registry.resolve_role("en", first).unwrap(),
            registry.resolve_role("en", second).unwrap(),
            "{first} / {second}"
        );
    }
    assert_eq!(
        registry.resolve_directive("en", "sectnum").unwrap(),
        registry.resolve_directive("en", "section-numbering").unwrap()
    );
}

#[test]
fn repeated_lookups_are_identical() {
    let registry = registry();
    let first = registry.resolve_role("en", "title").map(str::to_string);
    let second = registry.resolve_role("en", "title").map(str::to_string);
    assert_eq!(first, second);

    let first = registry.resolve_role("en", "missing").unwrap_err();
    let second = registry.resolve_role("en", "missing").unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn unknown_language_fails_for_both_kinds() {
    let registry = registry();
    for kind in NameKind::ALL {
        assert!(matches!(
            registry.resolve(kind, "de", "note"),
            Err(ResolveError::UnknownLanguage { .. })
        ));
    }
}

#[test]
fn directive_and_role_tables_are_separate() {
    let registry = registry();
    assert!(matches!(
        registry.resolve_role("en", "warning"),
        Err(ResolveError::UnknownRole { .. })
    ));
    assert!(matches!(
        registry.resolve_directive("en", "url"),
        Err(ResolveError::UnknownDirective { .. })
    ));
}

// =========================================================================
// Exact Matching
// =========================================================================

#[test]
fn lookups_are_case_sensitive() {
    let registry = registry();
    assert!(registry.resolve_directive("en", "Warning").is_err());
    assert!(registry.resolve_directive("en", "WARNING").is_err());
    assert!(registry.resolve_directive("EN", "warning").is_err());
}

#[test]
fn lookups_do_not_trim() {
    let registry = registry();
    assert!(registry.resolve_directive("en", " note").is_err());
    assert!(registry.resolve_directive("en", "note ").is_err());
    assert!(registry.resolve_directive("en ", "note").is_err());
}

// =========================================================================
// Registration
// =========================================================================

#[test]
fn empty_registry_has_no_languages() {
    let registry = LanguageRegistry::new();
    assert_eq!(registry.languages().count(), 0);
    assert!(matches!(
        registry.resolve_directive("en", "note"),
        Err(ResolveError::UnknownLanguage { .. })
    ));
}

#[test]
fn register_language_installs_mapping() {
    let mut registry = LanguageRegistry::new();
    registry
        .register_language(
            "de",
            language_mapping! {
                directives { "hinweis" => "note", "warnung" => "warning" }
                roles { "abk" => "abbreviation" }
            },
        )
        .unwrap();

    assert!(registry.contains_language("de"));
    assert_eq!(registry.resolve_directive("de", "hinweis").unwrap(), "note");
    assert_eq!(registry.resolve_role("de", "abk").unwrap(), "abbreviation");
    assert!(registry.resolve_directive("de", "note").is_err());
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = registry();
    let err = registry
        .register_language("en", LanguageMapping::new())
        .unwrap_err();
    assert_eq!(
        err,
        RegisterError::DuplicateLanguage {
            language: "en".to_string()
        }
    );
    // The original mapping is still in place.
    assert_eq!(registry.resolve_directive("en", "note").unwrap(), "note");
}

#[test]
fn invalid_language_tag_is_rejected() {
    let mut registry = LanguageRegistry::new();
    let err = registry
        .register_language("not a tag", LanguageMapping::new())
        .unwrap_err();
    assert!(matches!(err, RegisterError::InvalidLanguageTag { ref language, .. } if language == "not a tag"));
    assert!(!registry.contains_language("not a tag"));
}

#[test]
fn region_tags_are_stored_verbatim() {
    let mut registry = LanguageRegistry::new();
    registry
        .register_language("pt-BR", language_mapping! { directives { "nota" => "note" } })
        .unwrap();
    assert_eq!(registry.resolve_directive("pt-BR", "nota").unwrap(), "note");
    assert!(registry.resolve_directive("pt-br", "nota").is_err());
    assert!(registry.resolve_directive("pt", "nota").is_err());
}

#[test]
fn languages_are_listed_sorted() {
    let mut registry = registry();
    registry.register_language("sv", LanguageMapping::new()).unwrap();
    registry.register_language("de", LanguageMapping::new()).unwrap();
    let languages: Vec<&str> = registry.languages().collect();
    assert_eq!(languages, vec!["de", "en", "sv"]);
}

#[test]
fn builtin_registry_has_english_only() {
    let registry = registry();
    let languages: Vec<&str> = registry.languages().collect();
    assert_eq!(languages, vec!["en"]);
    assert_eq!(registry.mapping("en"), Some(&english()));
    assert!(registry.source_path("en").is_none());
}

#[test]
fn registry_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LanguageRegistry>();
}
