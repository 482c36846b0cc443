//! Public AST types for language packs.
//!
//! These types are public to enable external tooling (linters, formatters, etc.).

use rstlang_semantics::NameKind;

/// A parsed language pack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguagePack {
    /// Sections in source order. Each kind appears at most once.
    pub sections: Vec<Section>,
}

impl LanguagePack {
    /// The section for a kind, if the pack has one.
    pub fn section(&self, kind: NameKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

/// A `directives { ... }` or `roles { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: NameKind,
    /// 1-based line of the section keyword.
    pub line: usize,
    pub entries: Vec<Entry>,
}

/// A single `[disabled] name = canonical;` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Localized name, with quotes and escapes removed.
    pub name: String,
    /// Canonical identifier the name resolves to.
    pub canonical: String,
    /// Entry is on record but must not resolve.
    pub disabled: bool,
    /// 1-based line where the entry starts.
    pub line: usize,
}
