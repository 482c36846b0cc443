//! Implementation of the `rstlang check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream};
use rstlang::{lint_mapping, LanguageRegistry, LintWarning, LoadError};
use serde::Serialize;
use tracing::debug;

use super::language_for;
use crate::output::PackDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.rstlang, tag taken from file stem)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code on lint warnings, not only on errors
    #[arg(long)]
    pub strict: bool,
}

/// Result of checking one file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    language: String,
    entries: usize,
    error: Option<String>,
    warnings: Vec<LintWarning>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    debug!(files = args.files.len(), "checking language packs");

    let mut reports = Vec::new();
    let mut diagnostics = Vec::new();
    for path in &args.files {
        let (report, diagnostic) = check_file(path);
        reports.push(report);
        diagnostics.push(diagnostic);
    }

    let error_count = reports.iter().filter(|r| r.error.is_some()).count();
    let warning_count: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if args.json {
        let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{json}");
    } else {
        for (report, diagnostic) in reports.iter().zip(diagnostics) {
            print_report(report, diagnostic);
        }
        println!(
            "\n{} file(s) checked: {} error(s), {} warning(s)",
            reports.len(),
            error_count,
            warning_count
        );
    }

    if error_count > 0 || (args.strict && warning_count > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Parse, register, and lint a single pack in a fresh registry.
fn check_file(path: &Path) -> (FileReport, Option<Report>) {
    let mut report = FileReport {
        file: path.display().to_string(),
        language: String::new(),
        entries: 0,
        error: None,
        warnings: Vec::new(),
    };

    let language = match language_for(path) {
        Ok(language) => language,
        Err(e) => {
            report.error = Some(e.to_string());
            return (report, Some(e));
        }
    };
    report.language.clone_from(&language);

    let mut registry = LanguageRegistry::new();
    match registry.load_language(&language, path) {
        Ok(entries) => {
            report.entries = entries;
            if let Some(mapping) = registry.mapping(&language) {
                report.warnings = lint_mapping(&language, mapping);
            }
            (report, None)
        }
        Err(e) => {
            // Registration errors carry no path of their own.
            let message = if matches!(e, LoadError::Register(_)) {
                format!("{}: {e}", report.file)
            } else {
                e.to_string()
            };
            let diagnostic = match read_to_string(path)
                .ok()
                .and_then(|content| PackDiagnostic::from_load_error(path, &content, &e))
            {
                Some(diagnostic) => Report::new(diagnostic),
                None => miette!("{message}"),
            };
            report.error = Some(message);
            (report, Some(diagnostic))
        }
    }
}

fn print_report(report: &FileReport, diagnostic: Option<Report>) {
    if let Some(diagnostic) = diagnostic {
        eprintln!("{diagnostic:?}");
        return;
    }

    println!(
        "{} {} ({} entries)",
        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
        report.file,
        report.entries
    );
    for warning in &report.warnings {
        println!(
            "  {} {warning}",
            "warning:".if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }
}
