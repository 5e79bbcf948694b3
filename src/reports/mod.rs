// ===== circlet/src/reports/mod.rs =====
use circlet::round::{AttemptScore, RoundResult};
use circlet::scorer::StrokeDetails;
use circlet::tiers::Tier;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Perfect => Color::Green,
        Tier::Excellent => Color::Cyan,
        Tier::Great => Color::Yellow,
        Tier::Good => Color::DarkYellow,
        Tier::Practice => Color::Red,
    }
}

fn score_cell(score: u8) -> Cell {
    Cell::new(score)
        .fg(tier_color(Tier::for_score(score)))
        .set_alignment(CellAlignment::Right)
}

pub fn print_stroke_report(results: &[(String, StrokeDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stroke").add_attribute(Attribute::Bold),
        Cell::new("Pts"),
        Cell::new("Mean R"),
        Cell::new("Dev").fg(Color::Red),
        Cell::new("Consist"),
        Cell::new("Close"),
        Cell::new("Penalty").fg(Color::Red),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Tier"),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        let tier = Tier::for_score(d.score);
        table.add_row(vec![
            Cell::new(name),
            Cell::new(d.point_count),
            Cell::new(format!("{:.1}", d.mean_radius)),
            Cell::new(format!("{:.2}", d.radius_std_dev)),
            Cell::new(format!("{:.1}", d.consistency)),
            Cell::new(format!("{:.1}", d.closing_distance)),
            Cell::new(format!("{:.1}", d.closing_penalty)),
            score_cell(d.score),
            Cell::new(tier.to_string()).fg(tier_color(tier)),
        ]);
    }

    println!("{}", table);
}

pub fn print_round_report(attempts: &[(String, AttemptScore)], result: &RoundResult) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Attempt").add_attribute(Attribute::Bold),
        Cell::new("Stroke"),
        Cell::new("Score"),
    ]);
    for (name, a) in attempts {
        table.add_row(vec![
            Cell::new(a.attempt).set_alignment(CellAlignment::Right),
            Cell::new(name),
            score_cell(a.score),
        ]);
    }
    println!("{}", table);

    let b = &result.breakdown;
    let mut breakdown = Table::new();
    breakdown.load_preset(ASCII_FULL);
    breakdown.add_row(vec![
        Cell::new("Highest").add_attribute(Attribute::Bold),
        Cell::new("Average"),
        Cell::new("Consistency"),
        Cell::new("Bonus"),
        Cell::new("Attempts"),
        Cell::new("Final").add_attribute(Attribute::Bold),
    ]);
    breakdown.add_row(vec![
        Cell::new(b.highest).set_alignment(CellAlignment::Right),
        Cell::new(b.average).set_alignment(CellAlignment::Right),
        Cell::new(b.consistency).set_alignment(CellAlignment::Right),
        Cell::new(b.bonus).set_alignment(CellAlignment::Right),
        Cell::new(b.attempts).set_alignment(CellAlignment::Right),
        score_cell(result.final_score),
    ]);
    println!("{}", breakdown);

    let tier = Tier::for_score(result.final_score);
    println!(
        "Final Score: {}/100  {}",
        result.final_score,
        tier.message()
    );
}

pub struct CalibrationRow {
    pub label: String,
    pub score: u8,
}

pub fn print_calibration_table(title: &str, rows: &[CalibrationRow]) {
    println!("\n{}", title);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Case").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Tier"),
    ]);
    for row in rows {
        let tier = Tier::for_score(row.score);
        table.add_row(vec![
            Cell::new(&row.label),
            score_cell(row.score),
            Cell::new(tier.to_string()).fg(tier_color(tier)),
        ]);
    }
    println!("{}", table);
}
