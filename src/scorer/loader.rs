use crate::error::{CResult, CircletError};
use crate::geometry::{Point, Stroke};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a stroke recording in the capture collaborator's JSON export
/// shape: `[{"x": 12.0, "y": 48.5}, ...]`.
pub fn load_stroke_json<R: Read>(reader: R) -> CResult<Stroke> {
    let points: Vec<Point> = serde_json::from_reader(reader)?;
    Ok(Stroke::new(points))
}

/// Reads a stroke recording from CSV rows of `x,y`. Malformed rows are
/// skipped and counted rather than failing the whole recording, so a
/// header row or a truncated tail does not lose the stroke.
pub fn load_stroke_csv<R: Read>(reader: R) -> CResult<Stroke> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut skipped_count = 0;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped_count += 1;
            continue;
        }

        let x: f32 = match rec[0].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };
        let y: f32 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };

        points.push(Point::new(x, y));
    }

    if skipped_count > 0 {
        debug!("Skipped {} invalid rows in stroke CSV.", skipped_count);
    }

    Ok(Stroke::new(points))
}

/// Dispatches on the file extension: `.json` or `.csv`.
pub fn load_stroke_file<P: AsRef<Path>>(path: P) -> CResult<Stroke> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    debug!("Loading stroke from: {}", path.display());
    let file = File::open(path)?;

    match ext.as_str() {
        "json" => load_stroke_json(file),
        "csv" => load_stroke_csv(file),
        other => Err(CircletError::Validation(format!(
            "Unsupported stroke format '{}' for '{}' (expected .json or .csv)",
            other,
            path.display()
        ))),
    }
}
