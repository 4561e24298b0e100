//! Plain-text report rendering for terminals. No color, no unicode, wraps
//! nowhere: every line is short enough for an 80-column display.

use engine::{CategoryShare, FootprintResult, ReductionStrategy};

use crate::combined_impact;
use crate::rating::{FootprintRating, GLOBAL_AVERAGE_KG_PER_YEAR, PARIS_TARGET_KG_PER_YEAR};

/// Width of the breakdown percentage bar, in characters.
const BAR_WIDTH: usize = 20;

/// Render the full report: headline figures, breakdown, and the first `top`
/// strategies.
pub fn render_report(
    result: &FootprintResult,
    strategies: &[ReductionStrategy],
    top: usize,
) -> String {
    let rating = FootprintRating::for_total(result.total);
    let mut lines: Vec<String> = Vec::new();

    push_heading(&mut lines, "Carbon Footprint Report", '=');
    lines.push(String::new());
    lines.push(format!(
        "Estimated annual footprint: {} kg CO2e",
        format_kg(result.total)
    ));
    lines.push(format!(
        "Rating: {} ({})",
        rating.label(),
        rating.description()
    ));
    lines.push(String::new());
    lines.push(format!(
        "{:<16} {:>9} kg",
        "Your footprint",
        format_kg(result.total)
    ));
    lines.push(format!(
        "{:<16} {:>9} kg",
        "Global average",
        format_kg(GLOBAL_AVERAGE_KG_PER_YEAR)
    ));
    lines.push(format!(
        "{:<16} {:>9} kg",
        "Paris target",
        format_kg(PARIS_TARGET_KG_PER_YEAR)
    ));
    lines.push(String::new());

    push_heading(&mut lines, "Breakdown", '-');
    for share in &result.breakdown {
        lines.push(breakdown_line(share));
    }
    lines.push(String::new());

    let shown = &strategies[..strategies.len().min(top)];
    if !shown.is_empty() {
        push_heading(&mut lines, "Reduction strategies", '-');
        for (rank, strategy) in shown.iter().enumerate() {
            lines.push(format!(
                "{:>2}. {} [{}] ({})",
                rank + 1,
                strategy.action,
                strategy.difficulty.label(),
                strategy.category
            ));
            lines.push(format!("    {}", strategy.impact));
            lines.push(format!(
                "    Saves about {} kg CO2e per year",
                format_kg(strategy.savings)
            ));
        }
        lines.push(String::new());
    }

    let combined = combined_impact(strategies, result.total);
    if combined.strategies_counted > 0 {
        lines.push(format!(
            "Top {} combined: about {} kg CO2e per year ({:.0}% of your footprint)",
            combined.strategies_counted,
            format_kg(combined.savings),
            combined.share_of_total
        ));
    }

    lines.join("\n")
}

fn push_heading(lines: &mut Vec<String>, title: &str, underline: char) {
    lines.push(title.to_owned());
    lines.push(underline.to_string().repeat(title.len()));
}

fn breakdown_line(share: &CategoryShare) -> String {
    format!(
        "{:<12} {:>9} kg  [{}]  {:>3.0}%",
        share.category.name(),
        format_kg(share.emissions),
        bar(share.percentage),
        share.percentage
    )
}

/// A fixed-width bar: one '#' per 5% of the total, '.' for the rest.
fn bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0 * BAR_WIDTH as f64).round().max(0.0) as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Round to whole kilograms and group thousands with commas.
fn format_kg(kg: f64) -> String {
    let n = kg.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();

    let mut grouped = String::with_capacity(len + len / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
