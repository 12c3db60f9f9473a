//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use docindex_core::index::{BuildConfig, CheckOutcome, build_index, check_index, list_entries};
use docindex_shared::{DEFAULT_ENTRIES_DIR, DEFAULT_INDEX_FILE};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docindex — keep a Markdown HOWTO collection's index in sync.
#[derive(Parser)]
#[command(
    name = "docindex",
    version,
    about = "Regenerate the README index of a Markdown HOWTO collection from entry headings.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Repository root containing the index file and entries directory.
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Entries subdirectory scanned for articles, relative to the root.
    #[arg(long, default_value = DEFAULT_ENTRIES_DIR, global = true)]
    pub entries: String,

    /// Index file to regenerate, relative to the root.
    #[arg(long, default_value = DEFAULT_INDEX_FILE, global = true)]
    pub output: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Regenerate the index file (the default when no subcommand is given).
    Build,

    /// Verify the index file is up to date without rewriting it.
    Check,

    /// List discovered articles and their titles.
    List {
        /// Emit a JSON array instead of text lines.
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = BuildConfig {
        repo_root: cli.root.clone(),
        entries_dir: cli.entries.clone(),
        index_file: cli.output.clone(),
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => cmd_build(&config),
        Command::Check => cmd_check(&config),
        Command::List { json } => cmd_list(&config, json),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_build(config: &BuildConfig) -> Result<()> {
    info!(
        root = %config.repo_root.display(),
        entries = %config.entries_dir,
        "regenerating index"
    );

    let result = build_index(config)?;

    println!();
    println!("  Index regenerated!");
    println!("  Entries: {}", result.entry_count);
    println!("  Path:    {}", result.index_path.display());
    println!();

    Ok(())
}

fn cmd_check(config: &BuildConfig) -> Result<()> {
    info!(root = %config.repo_root.display(), "checking index");

    match check_index(config)? {
        CheckOutcome::UpToDate { entry_count } => {
            println!("{} is up to date ({entry_count} entries).", config.index_file);
            Ok(())
        }
        CheckOutcome::Stale { .. } => Err(eyre!(
            "{} is out of date, run `docindex build` to regenerate it",
            config.index_file
        )),
    }
}

fn cmd_list(config: &BuildConfig, json: bool) -> Result<()> {
    let entries = list_entries(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{}: {}", entry.path, entry.title);
    }

    info!(entry_count = entries.len(), "articles listed");
    Ok(())
}
