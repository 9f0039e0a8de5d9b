use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tennis_tally::config::AppConfig;
use tennis_tally::query::Tournament;
use tennis_tally::{MatchSummary, PlayerRecord};

#[derive(Parser)]
#[command(name = "tennis-tally")]
#[command(about = "Score a tennis tournament from its point log")]
#[command(version)]
struct Cli {
    /// Path to configuration file (optional)
    #[arg(long, default_value = "./tennis.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a tournament file and answer queries until an empty line
    Interactive {
        /// Tournament file
        file: PathBuf,
    },

    /// Answer a single query and exit
    Query {
        /// Tournament file
        file: PathBuf,

        /// Query, e.g. `Score Match 01` or `Games Player Person A`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Print every match result and player record
    Summary {
        /// Tournament file
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Report {
    matches: Vec<MatchSummary>,
    players: Vec<PlayerRecord>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    // Initialize tracing
    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::debug!("Starting tennis-tally v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Interactive { file } => {
            let tournament = load(&file, &config)?;
            run_interactive(&tournament)?;
        }
        Commands::Query { file, query } => {
            let tournament = load(&file, &config)?;
            for line in tournament.process_query(&query.join(" "))? {
                println!("{}", line);
            }
        }
        Commands::Summary { file, json } => {
            let tournament = load(&file, &config)?;
            let report = Report {
                matches: tournament.summaries(),
                players: tournament.player_records(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn load(file: &Path, config: &AppConfig) -> Result<Tournament> {
    Ok(Tournament::load_file(file, &config.rules)?)
}

fn print_help_queries() {
    println!("Available queries:");
    println!("  Score Match <id>       - Show match result");
    println!("  Games Player <name>    - Show games won/lost for player");
}

fn run_interactive(tournament: &Tournament) -> Result<()> {
    println!("\n=== Tennis Tournament Calculator ===");
    println!("Tournament data loaded successfully!\n");
    print_help_queries();
    println!("\nPress Enter (empty line) to exit.\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            println!("Goodbye!");
            break;
        }

        match tournament.process_query(&line) {
            Ok(answer) => {
                for out in answer {
                    println!("{}", out);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("=== Matches ===");
    for m in &report.matches {
        println!("Match {}: {} vs {}", m.id, m.player_a, m.player_b);
        if !m.set_scores.is_empty() {
            println!("  Sets:   {}", m.set_scores.join(", "));
        }
        match &m.winner {
            Some(winner) => println!("  Result: {} ({})", winner, m.match_score),
            None => println!("  Result: in progress ({})", m.match_score),
        }
    }

    println!("\n=== Players (games won / lost) ===");
    for p in &report.players {
        println!("  {:<24} {:>4} {:>4}", p.name, p.wins, p.losses);
    }
}
