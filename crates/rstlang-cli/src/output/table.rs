//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use rstlang::{Coverage, LanguageMapping, NameKind};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language tag (e.g., "en", "de").
    pub language: String,
    /// Canonical directive coverage.
    pub directives: Coverage,
    /// Canonical role coverage.
    pub roles: Coverage,
}

impl LanguageCoverage {
    /// Total number of unreachable canonical identifiers.
    pub fn missing_count(&self) -> usize {
        self.directives.missing.len() + self.roles.missing.len()
    }
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[LanguageCoverage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Language", "Directives", "Roles", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.directives.reached, lang.directives.total),
            format!("{}/{}", lang.roles.reached, lang.roles.total),
            lang.missing_count().to_string(),
        ]);
    }

    table
}

/// Format the entries of a mapping as an ASCII table.
///
/// Disabled entries follow the active ones of the same kind.
pub fn format_mapping_table(mapping: &LanguageMapping, kinds: &[NameKind]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Kind", "Name", "Canonical", "Status"]);

    for &kind in kinds {
        for (name, canonical) in mapping.entries(kind) {
            table.add_row(vec![
                kind.to_string(),
                name.to_string(),
                canonical.to_string(),
                "active".to_string(),
            ]);
        }
        for (name, canonical) in mapping.disabled_entries(kind) {
            table.add_row(vec![
                kind.to_string(),
                name.to_string(),
                canonical.to_string(),
                "disabled".to_string(),
            ]);
        }
    }

    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
