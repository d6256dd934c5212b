//! Strawhat - guess the Straw Hat from a hint before time runs out.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strawhat::config::GameConfig;
use strawhat::driver::{GameEvent, GameLoop, TerminalView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "strawhat")]
#[command(about = "Guess the character from a hint before the clock runs out", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Character catalog (TOML) to use instead of the built-in crew
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Seconds on the clock
    #[arg(short, long)]
    time_budget: Option<u32>,

    /// Seed for a reproducible hint order
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final session state as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the game, so logs go to stderr (RUST_LOG=debug for more)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }
    if let Some(seconds) = cli.time_budget {
        config.time_budget_secs = seconds;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let session = config
        .session_builder()
        .context("Failed to load character catalog")?
        .build()
        .context("Failed to set up the game")?;

    println!("Guess that Strawhat!");
    println!("Type part of a name and press Enter. Commands: :refresh :restart :quit");

    let game =
        GameLoop::new(session, config.tick_interval()).context("Invalid tick interval")?;
    tokio::spawn(read_commands(game.sender()));

    let mut view = TerminalView::stdout();
    let summary = game.run(&mut view).await;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
        );
    } else {
        println!(
            "Thanks for playing! Final score: {} ({} of {} hints seen)",
            summary.score, summary.hints_shown, summary.catalog_size
        );
    }
    Ok(())
}

/// Forward stdin lines to the game loop until EOF or `:quit`.
async fn read_commands(events: mpsc::Sender<GameEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let event = match lines.next_line().await {
            Ok(Some(line)) => GameEvent::from_line(&line),
            Ok(None) => GameEvent::Quit,
            Err(err) => {
                tracing::warn!(%err, "failed to read input");
                GameEvent::Quit
            }
        };
        let quit = event == GameEvent::Quit;
        if events.send(event).await.is_err() || quit {
            break;
        }
    }
}
