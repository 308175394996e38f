//! Item enhancement CLI.
//!
//! Reads an item snapshot from a JSON file, applies the externally-decided
//! transitions (`succeed`, `fail`, `repair`, `get`), and prints the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use enhancer::apply::{apply_from_path, render_item, show_from_path};
use enhancer::core::types::Transition;
use enhancer::exit_codes;
use enhancer::io::config::{DEFAULT_CONFIG_FILE, EnhancerConfig, load_config};
use enhancer::io::init::{InitOptions, init_workspace};
use enhancer::logging;
use enhancer::validate::validate_item_file;

#[derive(Parser)]
#[command(
    name = "enhancer",
    version,
    about = "Deterministic item enhancement engine"
)]
struct Cli {
    /// Path to the TOML config file (missing file = defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `enhancer.toml` and a sample `item.json` in the current directory.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check an item file against the schema and item invariants.
    Validate {
        /// Item JSON file.
        item: PathBuf,
    },
    /// Apply transitions in order and print the resulting item.
    Apply {
        /// Item JSON file.
        item: PathBuf,
        /// Transitions to apply: succeed, fail, repair, get.
        #[arg(required = true)]
        transitions: Vec<Transition>,
        /// Persist the result back to the item file.
        #[arg(long)]
        write: bool,
        /// Print one summary line per transition before the item.
        #[arg(long)]
        summary: bool,
    },
    /// Print the display name of an item.
    Show {
        /// Item JSON file.
        item: PathBuf,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Validate { item } => cmd_validate(&cli.config, &item),
        Command::Apply {
            item,
            transitions,
            write,
            summary,
        } => cmd_apply(&cli.config, &item, &transitions, write, summary),
        Command::Show { item } => cmd_show(&cli.config, &item),
    }
}

fn cmd_init(force: bool) -> Result<()> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let paths = init_workspace(&root, &InitOptions { force })?;
    println!("init: config={}", paths.config_path.display());
    println!("init: item={}", paths.item_path.display());
    Ok(())
}

fn cmd_validate(config_path: &Path, item_path: &Path) -> Result<()> {
    let cfg = load_cfg(config_path)?;
    let outcome = validate_item_file(item_path, &cfg)?;
    println!(
        "valid: name={} durability={} enhancement={}{}",
        outcome.item.name,
        outcome.item.durability,
        outcome.item.enhancement,
        if outcome.depleted { " (depleted)" } else { "" }
    );
    Ok(())
}

fn cmd_apply(
    config_path: &Path,
    item_path: &Path,
    transitions: &[Transition],
    write: bool,
    summary: bool,
) -> Result<()> {
    let cfg = load_cfg(config_path)?;
    let outcome = apply_from_path(item_path, transitions, &cfg, write)?;
    if summary {
        for line in &outcome.summaries {
            println!("{}", line);
        }
    }
    println!("{}", render_item(&outcome.item, &cfg.output)?);
    Ok(())
}

fn cmd_show(config_path: &Path, item_path: &Path) -> Result<()> {
    let cfg = load_cfg(config_path)?;
    println!("{}", show_from_path(item_path, &cfg)?);
    Ok(())
}

fn load_cfg(config_path: &Path) -> Result<EnhancerConfig> {
    debug!(path = %config_path.display(), "loading config");
    load_config(config_path).with_context(|| format!("load {}", config_path.display()))
}
