// ===== circlet/src/main.rs =====
use circlet::config::Config;
use circlet::scorer::Scorer;
use clap::{Parser, Subcommand};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON weight profile; overrides the per-flag weight arguments
    #[arg(global = true, short, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one or more stroke recordings
    Score(cmd::score::ScoreArgs),
    /// Score recordings as one round and finalize it
    Round(cmd::round::RoundArgs),
    /// Sweep synthetic strokes to audit the scorer weights
    Calibrate(cmd::calibrate::CalibrateArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so piped table/JSON output stays clean.
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.command {
        Commands::Score(args) => args.config.clone(),
        Commands::Round(args) => args.config.clone(),
        Commands::Calibrate(args) => args.config.clone(),
    };

    if let Some(path) = &cli.weights {
        info!("⚖️  Loading weight profile from: {}", path);
        config = Config::load_from_file(path).unwrap_or_else(|e| {
            error!("❌ Failed to load weight profile: {}", e);
            process::exit(1);
        });
    }

    let scorer = Arc::new(Scorer::new(config.weights.clone()));

    let result = match cli.command {
        Commands::Score(mut args) => {
            args.config = config;
            cmd::score::run(args, scorer)
        }
        Commands::Round(mut args) => {
            args.config = config;
            cmd::round::run(args, scorer)
        }
        Commands::Calibrate(mut args) => {
            args.config = config;
            cmd::calibrate::run(args, scorer)
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
