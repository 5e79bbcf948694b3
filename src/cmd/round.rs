use crate::reports;
use circlet::config::Config;
use circlet::error::CResult;
use circlet::round::{self, AttemptScore};
use circlet::scorer::{loader, Scorer};
use clap::Args;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RoundArgs {
    #[command(flatten)]
    pub config: Config,

    /// Stroke recordings in attempt order, one round
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Emit the round result as JSON (for the leaderboard collaborator)
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RoundArgs, scorer: Arc<Scorer>) -> CResult<()> {
    info!("🏁 Finalizing a round of {} attempt(s)...", args.files.len());

    // Attempt order is the file order; attempts are 1-based.
    let mut attempts = Vec::with_capacity(args.files.len());
    for (i, file) in args.files.iter().enumerate() {
        let stroke = loader::load_stroke_file(file)?;
        let score = scorer.score(&stroke);
        attempts.push((file.clone(), AttemptScore::new(i as u32 + 1, score)));
    }

    let scores: Vec<AttemptScore> = attempts.iter().map(|(_, a)| *a).collect();
    let result = round::finalize(&scores, &args.config.round)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_round_report(&attempts, &result);
    }
    Ok(())
}
