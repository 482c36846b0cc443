//! Built-in language mappings.

mod en;

use std::collections::BTreeMap;

use crate::registry::LanguageMapping;

pub use en::english;

/// Tags of the languages compiled into the crate.
pub const BUILTIN_LANGUAGES: &[&str] = &["en"];

/// The built-in mapping for a tag, if one ships with the crate.
pub fn builtin(language: &str) -> Option<LanguageMapping> {
    match language {
        "en" => Some(english()),
        _ => None,
    }
}

/// Turn a static `(localized, canonical)` table into an owned map.
fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|&(name, canonical)| (name.to_string(), canonical.to_string()))
        .collect()
}
