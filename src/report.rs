use crate::query::{Selection, Summary};
use crate::record::MatchRecord;

const TABLE_HEADERS: [&str; 13] = [
    "Date", "Home", "Away", "Odd H", "Odd D", "Odd A", "HT H", "HT A", "FT H", "FT A", "SoT H",
    "SoT A", "Result",
];

fn table_row(r: &MatchRecord) -> [String; 13] {
    [
        r.date.clone(),
        r.home_team.clone(),
        r.away_team.clone(),
        format!("{:.2}", r.closing_odd_home),
        format!("{:.2}", r.closing_odd_draw),
        format!("{:.2}", r.closing_odd_away),
        r.ht_home_goals.to_string(),
        r.ht_away_goals.to_string(),
        r.home_goals.to_string(),
        r.away_goals.to_string(),
        r.home_shots_on_target.to_string(),
        r.away_shots_on_target.to_string(),
        r.outcome().code().to_string(),
    ]
}

pub fn table_headers() -> &'static [&'static str] {
    &TABLE_HEADERS
}

/// Cells of the filtered-match table, one row per match.
pub fn table_rows(rows: &[&MatchRecord]) -> Vec<Vec<String>> {
    rows.iter().map(|r| table_row(r).to_vec()).collect()
}

pub fn render_table(rows: &[&MatchRecord]) -> String {
    if rows.is_empty() {
        return "No matches for this selection".to_string();
    }

    let cells = table_rows(rows);
    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    lines.push(render_line(&header, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(rule.join("-+-"));
    for row in &cells {
        lines.push(render_line(row, &widths));
    }
    lines.join("\n")
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (cell, &width))| {
            // team names left-aligned, numbers right-aligned
            if idx < 3 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn avg(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "no data".to_string(),
    }
}

/// The nine summary lines shown under the table.
pub fn summary_lines(selection: &Selection, summary: &Summary) -> Vec<String> {
    let team = &selection.team;
    vec![
        format!(
            "In odds bucket {}, '{team}' won {} time(s) in {} match(es) ({:.2}%).",
            selection.bucket, summary.wins, summary.total, summary.win_percentage
        ),
        format!("Total profit/loss: {:.2}.", summary.profit_loss),
        format!(
            "Sum of efficiency coefficients for '{team}': {:.2}",
            summary.efficiency_sum
        ),
        format!(
            "Average goals scored by the home team: {}.",
            avg(summary.avg_home_goals)
        ),
        format!(
            "Average goals scored by the away team: {}.",
            avg(summary.avg_away_goals)
        ),
        format!(
            "Average half-time goals scored by the home team: {}.",
            avg(summary.avg_ht_home_goals)
        ),
        format!(
            "Average half-time goals scored by the away team: {}.",
            avg(summary.avg_ht_away_goals)
        ),
        format!(
            "Average shots on target by the home team: {}.",
            avg(summary.avg_home_shots_on_target)
        ),
        format!(
            "Average shots on target by the away team: {}.",
            avg(summary.avg_away_shots_on_target)
        ),
    ]
}
