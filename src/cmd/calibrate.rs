use crate::reports::{self, CalibrationRow};
use circlet::config::Config;
use circlet::error::{CResult, CircletError};
use circlet::geometry::Point;
use circlet::scorer::Scorer;
use circlet::synth;
use clap::Args;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, default_value_t = 50.0)]
    pub radius: f32,

    #[arg(long, default_value_t = 360)]
    pub samples: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Radial jitter amplitudes to sweep (raw units)
    #[arg(long, default_value = "0,1,2,4,8,16")]
    pub jitters: String,

    /// Closing gaps to sweep (degrees of missing arc)
    #[arg(long, default_value = "0,10,30,60,90")]
    pub gaps: String,
}

fn parse_f32_list(s: &str, name: &str) -> CResult<Vec<f32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse()
                .map_err(|_| CircletError::Validation(format!("Invalid number in --{}: '{}'", name, p)))
        })
        .collect()
}

/// Sanity audit of the scorer: sweeps synthetic strokes from perfect to
/// sloppy and prints what each one earns under the active weights.
pub fn run(args: CalibrateArgs, scorer: Arc<Scorer>) -> CResult<()> {
    let jitters = parse_f32_list(&args.jitters, "jitters")?;
    let gaps = parse_f32_list(&args.gaps, "gaps")?;

    let mut rng = if let Some(s) = args.seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    let center = Point::new(150.0, 150.0);
    info!(
        "📐 Calibrating: radius {}, {} samples per stroke",
        args.radius, args.samples
    );

    let jitter_rows: Vec<CalibrationRow> = jitters
        .iter()
        .map(|&jitter| {
            let stroke =
                synth::jittered_circle(&mut rng, center, args.radius, args.samples, jitter);
            CalibrationRow {
                label: format!("jitter ±{}", jitter),
                score: scorer.score(&stroke),
            }
        })
        .collect();
    reports::print_calibration_table("Radial jitter sweep (closed strokes)", &jitter_rows);

    let gap_rows: Vec<CalibrationRow> = gaps
        .iter()
        .map(|&gap| {
            let stroke = synth::open_arc(center, args.radius, args.samples, gap);
            CalibrationRow {
                label: format!("gap {}°", gap),
                score: scorer.score(&stroke),
            }
        })
        .collect();
    reports::print_calibration_table("Closing gap sweep (clean arcs)", &gap_rows);

    Ok(())
}
