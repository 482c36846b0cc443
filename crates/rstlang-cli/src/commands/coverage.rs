//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use rstlang::{canonical_coverage, Coverage, NameKind};
use serde::Serialize;

use super::registry_with_packs;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Languages to report (comma-separated). Defaults to every registered language.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Extra language packs to register (.rstlang, tag taken from file stem)
    #[arg(long = "pack")]
    pub packs: Vec<PathBuf>,

    /// Exit with non-zero code if any language leaves a canonical name unreachable.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    language: &'a str,
    directives: &'a Coverage,
    roles: &'a Coverage,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let registry = registry_with_packs(&args.packs)?;

    let languages: Vec<String> = if args.lang.is_empty() {
        registry.languages().map(str::to_string).collect()
    } else {
        args.lang.clone()
    };

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for language in languages {
        let mapping = registry
            .mapping(&language)
            .ok_or_else(|| miette!("no language mapping registered for '{language}'"))?;
        coverage_data.push(LanguageCoverage {
            directives: canonical_coverage(mapping, NameKind::Directive),
            roles: canonical_coverage(mapping, NameKind::Role),
            language,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| c.missing_count() > 0);

    if args.json {
        let json_data: Vec<CoverageJson<'_>> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: &c.language,
                directives: &c.directives,
                roles: &c.roles,
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_coverage_table(&coverage_data));

        for lang_coverage in &coverage_data {
            let missing: Vec<String> = lang_coverage
                .directives
                .missing
                .iter()
                .map(|name| format!("directive {name}"))
                .chain(
                    lang_coverage
                        .roles
                        .missing
                        .iter()
                        .map(|name| format!("role {name}")),
                )
                .collect();
            if !missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &missing {
                    println!("  - {}", name);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
