//! rstlang CLI entry point.
//!
//! Provides command-line tools for working with language packs:
//! - `rstlang resolve` - Resolve a localized directive or role name
//! - `rstlang check` - Validate .rstlang files and lint their contents
//! - `rstlang list` - Show the entries of a registered language
//! - `rstlang coverage` - Report canonical name coverage per language

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_list, run_resolve, CheckArgs, CoverageArgs, ListArgs,
    ResolveArgs,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "RSTLANG_LOG";

/// reStructuredText language pack tools.
#[derive(Debug, Parser)]
#[command(name = "rstlang")]
#[command(about = "reStructuredText language pack tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a localized directive or role name
    Resolve(ResolveArgs),
    /// Check .rstlang file syntax and lint the mappings
    Check(CheckArgs),
    /// List the entries of a language
    List(ListArgs),
    /// Report canonical name coverage across languages
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install the stderr log subscriber. `RSTLANG_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Check(args) => run_check(args),
        Commands::List(args) => run_list(args),
        Commands::Coverage(args) => run_coverage(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
