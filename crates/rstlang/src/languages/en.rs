//! English directive and role names.

use super::table;
use crate::registry::LanguageMapping;

/// English directive name to registered directive name.
const DIRECTIVES: &[(&str, &str)] = &[
    ("attention", "attention"),
    ("caution", "caution"),
    ("danger", "danger"),
    ("error", "error"),
    ("hint", "hint"),
    ("important", "important"),
    ("note", "note"),
    ("tip", "tip"),
    ("warning", "warning"),
    ("admonition", "admonition"),
    ("sidebar", "sidebar"),
    ("topic", "topic"),
    ("line-block", "line-block"),
    ("parsed-literal", "parsed-literal"),
    ("rubric", "rubric"),
    ("epigraph", "epigraph"),
    ("highlights", "highlights"),
    ("pull-quote", "pull-quote"),
    ("meta", "meta"),
    ("image", "image"),
    ("figure", "figure"),
    ("include", "include"),
    ("raw", "raw"),
    ("replace", "replace"),
    ("unicode", "unicode"),
    ("class", "class"),
    ("contents", "contents"),
    ("sectnum", "sectnum"),
    ("section-numbering", "sectnum"),
    ("target-notes", "target-notes"),
    (
        "restructuredtext-test-directive",
        "restructuredtext-test-directive",
    ),
];

/// Synonyms whose directives are not registered yet.
const DISABLED_DIRECTIVES: &[(&str, &str)] = &[
    ("questions", "questions"),
    ("qa", "questions"),
    ("faq", "questions"),
    ("imagemap", "imagemap"),
    ("footnotes", "footnotes"),
    ("citations", "citations"),
];

/// English role name to canonical role name for interpreted text.
const ROLES: &[(&str, &str)] = &[
    ("abbreviation", "abbreviation"),
    ("ab", "abbreviation"),
    ("acronym", "acronym"),
    ("ac", "acronym"),
    ("index", "index"),
    ("i", "index"),
    ("subscript", "subscript"),
    ("sub", "subscript"),
    ("superscript", "superscript"),
    ("sup", "superscript"),
    ("title-reference", "title-reference"),
    ("title", "title-reference"),
    ("t", "title-reference"),
    ("pep-reference", "pep-reference"),
    ("pep", "pep-reference"),
    ("rfc-reference", "rfc-reference"),
    ("rfc", "rfc-reference"),
    ("emphasis", "emphasis"),
    ("strong", "strong"),
    ("literal", "literal"),
    ("named-reference", "named-reference"),
    ("anonymous-reference", "anonymous-reference"),
    ("footnote-reference", "footnote-reference"),
    ("citation-reference", "citation-reference"),
    ("substitution-reference", "substitution-reference"),
    ("target", "target"),
    ("uri-reference", "uri-reference"),
    ("uri", "uri-reference"),
    ("url", "uri-reference"),
];

/// The English mapping.
pub fn english() -> LanguageMapping {
    LanguageMapping::builder()
        .directives(table(DIRECTIVES))
        .disabled_directives(table(DISABLED_DIRECTIVES))
        .roles(table(ROLES))
        .build()
}
