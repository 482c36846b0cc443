//! Miette diagnostic wrapper for language pack load errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use rstlang::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a language pack.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(rstlang::pack))]
pub struct PackDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PackDiagnostic {
    /// Create a diagnostic from a LoadError with source context.
    ///
    /// Returns None for errors that have no position in the file.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (line, column, message, help) = match err {
            LoadError::Parse {
                line,
                column,
                message,
                ..
            } => (*line, *column, message.clone(), None),
            LoadError::DuplicateEntry {
                line, kind, name, ..
            } => (
                *line,
                first_column(content, *line),
                format!("duplicate {kind} '{name}'"),
                Some("each localized name may appear once per section".to_string()),
            ),
            LoadError::Io { .. } | LoadError::Register(_) => return None,
        };

        // Convert line:column to byte offset. Line lengths keep their
        // terminators so CRLF packs stay aligned.
        let offset = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        Some(PackDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        })
    }
}

/// Column of the first non-blank character on a 1-based line.
fn first_column(content: &str, line: usize) -> usize {
    content
        .lines()
        .nth(line.saturating_sub(1))
        .map(|l| l.len() - l.trim_start().len() + 1)
        .unwrap_or(1)
}
