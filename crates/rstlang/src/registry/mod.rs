//! Language mapping registry.
//!
//! This module owns the per-language directive and role tables and resolves
//! localized names to the canonical identifiers a parser dispatches on. It
//! also provides the language-pack loader, static lint rules, and a shared
//! registry for publishing new languages while readers keep resolving.

mod error;
mod lint;
mod mapping;
mod shared;
mod store;

pub use error::{LoadError, RegisterError, ResolveError, compute_suggestions};
pub use lint::{Coverage, LintWarning, canonical_coverage, lint_mapping};
pub use mapping::LanguageMapping;
pub use shared::SharedRegistry;
pub use store::LanguageRegistry;
