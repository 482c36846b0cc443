//! Tests for typo suggestions on unknown names.

use rstlang::{LanguageRegistry, ResolveError, compute_suggestions};

#[test]
fn misspelled_role_suggests_the_closest_name() {
    let registry = LanguageRegistry::with_builtin_languages();
    let err = registry.resolve_role("en", "subscirpt").unwrap_err();
    assert_eq!(err.suggestions(), ["subscript".to_string()]);
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown role 'subscirpt' for language 'en'; did you mean 'subscript'?"
    );
}

#[test]
fn unrelated_name_has_no_suggestions() {
    let registry = LanguageRegistry::with_builtin_languages();
    let err = registry
        .resolve_directive("en", "nonexistent-directive")
        .unwrap_err();
    assert!(err.suggestions().is_empty());
    insta::assert_snapshot!(
        err.to_string(),
        @"unknown directive 'nonexistent-directive' for language 'en'"
    );
}

#[test]
fn unknown_language_message() {
    let registry = LanguageRegistry::new();
    let err = registry.resolve_role("fr", "ab").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownLanguage { .. }));
    assert!(err.suggestions().is_empty());
    insta::assert_snapshot!(err.to_string(), @"no language mapping registered for 'fr'");
}

#[test]
fn short_names_allow_a_single_edit() {
    let available = ["t", "i", "ab", "ac", "sub"];
    assert_eq!(compute_suggestions("x", available), vec!["i", "t"]);
}

#[test]
fn suggestions_are_ordered_by_distance_then_name() {
    let available = ["warning", "warnings", "earning", "note"];
    assert_eq!(
        compute_suggestions("warnin", available),
        vec!["warning", "earning", "warnings"]
    );
}

#[test]
fn suggestions_are_capped_at_three() {
    let available = ["aa", "ab", "ac", "ad", "ae"];
    assert_eq!(compute_suggestions("a", available).len(), 3);
}

#[test]
fn exact_match_is_not_a_suggestion() {
    assert!(compute_suggestions("note", ["note"]).is_empty());
}
