use crate::reports;
use circlet::config::Config;
use circlet::error::CResult;
use circlet::scorer::{loader, Scorer, StrokeDetails};
use clap::Args;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Stroke recordings (.json or .csv), one score per file
    #[arg(required = true)]
    pub files: Vec<String>,
}

pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) -> CResult<()> {
    info!("🎯 Scoring {} stroke recording(s)...", args.files.len());

    let mut results: Vec<(String, StrokeDetails)> = args
        .files
        .par_iter()
        .map(|file| {
            let stroke = loader::load_stroke_file(file)?;
            Ok((file.clone(), scorer.score_debug(&stroke)))
        })
        .collect::<CResult<Vec<_>>>()?;

    // Best first
    results.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    reports::print_stroke_report(&results);
    Ok(())
}
