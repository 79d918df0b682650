//! lectern - terminal slide presenter for built-in content decks.
//!
//! `lectern` (or `lectern present [DECK]`) runs the interactive
//! presentation; `lectern list` and `lectern dump DECK` are the print-only
//! modes.

mod catalog;
mod config;
mod core;
mod frontend;
mod theme;

use crate::catalog::{Catalog, Deck};
use crate::config::Config;
use crate::core::actions::route_key;
use crate::core::Presentation;
use crate::frontend::{Frontend, FrontendEvent, TuiFrontend};
use anyhow::{bail, Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "lectern")]
#[command(about = "Terminal slide presenter for built-in content decks", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive presentation (default)
    Present {
        /// Deck name (defaults to the configured default deck)
        deck: Option<String>,
    },
    /// List the available decks
    List,
    /// Print a deck's full content to stdout (no TUI)
    Dump {
        /// Deck name
        deck: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: DumpFormat,
    },
    /// Write the current configuration to the config directory
    SaveConfig,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Log to a file; the TUI owns stdout. RUST_LOG controls the level.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("lectern.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::List) => {
            for deck in catalog.decks() {
                println!("{:<14} {} ({} topics)", deck.name, deck.title, deck.topic_count());
            }
            Ok(())
        }
        Some(Commands::Dump { deck, format }) => {
            let deck = lookup_deck(&catalog, &deck)?;
            dump_deck(deck, format)
        }
        Some(Commands::SaveConfig) => {
            config.save()?;
            println!("Configuration written to {:?}", Config::base_dir()?.join("config.toml"));
            Ok(())
        }
        Some(Commands::Present { deck }) => present(&config, &catalog, deck.as_deref()),
        None => present(&config, &catalog, None),
    }
}

fn present(config: &Config, catalog: &Catalog, name: Option<&str>) -> Result<()> {
    let name = name.unwrap_or(&config.ui.default_deck);
    let deck = lookup_deck(catalog, name)?.clone();
    run_present(config, deck)
}

fn lookup_deck<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Deck> {
    match catalog.get(name) {
        Some(deck) => Ok(deck),
        None => bail!(
            "Unknown deck '{}'. Available decks: {}",
            name,
            catalog.names().join(", ")
        ),
    }
}

/// Interactive presentation loop: poll input, route to an action, apply it,
/// redraw when the state changed. Runs until the machine closes.
fn run_present(config: &Config, deck: Deck) -> Result<()> {
    tracing::info!(deck = %deck.name, "Starting presentation");

    let mut presentation = Presentation::new(deck);
    let mut frontend = TuiFrontend::new(Duration::from_millis(config.ui.poll_timeout_ms))
        .context("Could not initialize the terminal display")?;

    let (width, height) = frontend.size();
    tracing::debug!(width, height, "Terminal initialized");

    // Initial overview frame before the first input arrives
    frontend.render(&presentation.render(), &config.theme)?;

    while presentation.is_running() {
        let events = frontend.poll_events()?;
        let mut needs_render = false;

        for event in events {
            match event {
                FrontendEvent::Key(key) => {
                    let action = route_key(&key, &config.keys);
                    if presentation.apply(action) {
                        needs_render = true;
                    }
                }
                FrontendEvent::Resize { .. } => needs_render = true,
            }
        }

        if needs_render && presentation.is_running() {
            frontend.render(&presentation.render(), &config.theme)?;
        }
    }

    frontend.cleanup()?;
    tracing::info!("Presentation closed");
    Ok(())
}

/// Print every topic of a deck, the non-interactive mode.
fn dump_deck(deck: &Deck, format: DumpFormat) -> Result<()> {
    match format {
        DumpFormat::Json => {
            let json = serde_json::to_string_pretty(deck).context("Failed to serialize deck")?;
            println!("{}", json);
        }
        DumpFormat::Text => {
            let mut presentation = Presentation::new(deck.clone());
            let rule = "=".repeat(72);

            println!("{}", rule);
            print!("{}", plain_without_hints(&presentation.render()));

            for index in 0..deck.topic_count() {
                presentation.on_jump(index);
                println!("{}", rule);
                print!("{}", plain_without_hints(&presentation.render()));
            }
            println!("{}", rule);
        }
    }
    Ok(())
}

/// Frame text without the interactive key-help lines, for stdout output.
fn plain_without_hints(frame: &crate::core::Frame) -> String {
    let mut out = String::new();
    for line in frame
        .lines
        .iter()
        .filter(|l| l.emphasis != crate::core::Emphasis::Hint)
    {
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}
