//! Implementation of the `rstlang resolve` command.

use std::path::PathBuf;

use rstlang::NameKind;
use serde::Serialize;

use super::{registry_with_packs, KindArg};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Whether the name is a directive or a role
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Localized name, matched exactly
    pub name: String,

    /// Language tag
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Extra language packs to register (.rstlang, tag taken from file stem)
    #[arg(long = "pack")]
    pub packs: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveResult<'a> {
    language: &'a str,
    kind: String,
    name: &'a str,
    canonical: &'a str,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let registry = registry_with_packs(&args.packs)?;
    let kind = NameKind::from(args.kind);

    match registry.resolve(kind, &args.lang, &args.name) {
        Ok(canonical) => {
            if args.json {
                let output = ResolveResult {
                    language: &args.lang,
                    kind: kind.to_string(),
                    name: &args.name,
                    canonical,
                };
                let json = serde_json::to_string_pretty(&output)
                    .map_err(|e| miette::miette!("JSON serialization failed: {e}"))?;
                println!("{json}");
            } else {
                println!("{canonical}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string(),
                    "suggestions": e.suggestions(),
                });
                eprintln!("{output:#}");
            } else {
                eprintln!("Resolution error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
