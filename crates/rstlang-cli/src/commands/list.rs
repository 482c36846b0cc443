//! Implementation of the `rstlang list` command.

use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Result};
use rstlang::NameKind;

use super::{registry_with_packs, KindArg};
use crate::output::table::format_mapping_table;

/// Arguments for the list command.
#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Language tag
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Only list directives or only roles
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Extra language packs to register (.rstlang, tag taken from file stem)
    #[arg(long = "pack")]
    pub packs: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> Result<i32> {
    let registry = registry_with_packs(&args.packs)?;
    let Some(mapping) = registry.mapping(&args.lang) else {
        let known: Vec<&str> = registry.languages().collect();
        return Err(miette!(
            "no language mapping registered for '{}' (known: {})",
            args.lang,
            known.join(", ")
        ));
    };

    if args.json {
        let json = serde_json::to_string_pretty(mapping).into_diagnostic()?;
        println!("{json}");
        return Ok(exitcode::OK);
    }

    let kinds: Vec<NameKind> = match args.kind {
        Some(kind) => vec![kind.into()],
        None => NameKind::ALL.to_vec(),
    };
    println!("{}", format_mapping_table(mapping, &kinds));
    if let Some(path) = registry.source_path(&args.lang) {
        println!("\nLoaded from {}", path.display());
    }
    Ok(exitcode::OK)
}
