//! CLI command implementations.

mod check;
mod coverage;
mod list;
mod resolve;

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use miette::{miette, Result};
use rstlang::{LanguageRegistry, NameKind};
use tracing::debug;

use crate::output::PackDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use list::{run_list, ListArgs};
pub use resolve::{run_resolve, ResolveArgs};

/// Name kind selector for command-line arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Directive,
    Role,
}

impl From<KindArg> for NameKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directive => NameKind::Directive,
            KindArg::Role => NameKind::Role,
        }
    }
}

/// The language tag for a pack file: its file stem (`de.rstlang` -> `de`).
fn language_for(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| miette!("cannot derive a language tag from {}", path.display()))
}

/// Built-in languages plus every pack given on the command line.
fn registry_with_packs(packs: &[PathBuf]) -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::with_builtin_languages();
    for path in packs {
        let language = language_for(path)?;
        debug!(language = %language, path = %path.display(), "loading pack");
        if let Err(e) = registry.load_language(&language, path) {
            let diagnostic = read_to_string(path)
                .ok()
                .and_then(|content| PackDiagnostic::from_load_error(path, &content, &e));
            return Err(match diagnostic {
                Some(diagnostic) => diagnostic.into(),
                None => miette!("{}: {e}", path.display()),
            });
        }
    }
    Ok(registry)
}
