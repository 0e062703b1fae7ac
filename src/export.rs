use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::query::QueryResult;
use crate::report;

pub struct ExportReport {
    pub matches: usize,
    pub summary_rows: usize,
}

/// Write the filtered matches and their summary to an `.xlsx` workbook.
pub fn export_query_xlsx(path: &Path, result: &QueryResult<'_>) -> Result<ExportReport> {
    let mut match_rows = vec![
        report::table_headers()
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>(),
    ];
    match_rows.extend(report::table_rows(&result.rows));

    let summary = &result.summary;
    let summary_rows = vec![
        vec!["Metric".to_string(), "Value".to_string()],
        vec!["Team".to_string(), result.selection.team.clone()],
        vec!["Odds bucket".to_string(), result.selection.bucket.label()],
        vec!["Wins".to_string(), summary.wins.to_string()],
        vec!["Matches".to_string(), summary.total.to_string()],
        vec!["Win %".to_string(), format!("{:.2}", summary.win_percentage)],
        vec!["Profit/loss".to_string(), format!("{:.2}", summary.profit_loss)],
        vec![
            "Efficiency sum".to_string(),
            format!("{:.2}", summary.efficiency_sum),
        ],
        vec!["Avg home goals".to_string(), cell(summary.avg_home_goals)],
        vec!["Avg away goals".to_string(), cell(summary.avg_away_goals)],
        vec!["Avg HT home goals".to_string(), cell(summary.avg_ht_home_goals)],
        vec!["Avg HT away goals".to_string(), cell(summary.avg_ht_away_goals)],
        vec![
            "Avg home shots on target".to_string(),
            cell(summary.avg_home_shots_on_target),
        ],
        vec![
            "Avg away shots on target".to_string(),
            cell(summary.avg_away_shots_on_target),
        ],
    ];

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Matches")?;
        write_rows(sheet, &match_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary")?;
        write_rows(sheet, &summary_rows)?;
    }
    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        matches: result.rows.len(),
        summary_rows: summary_rows.len() - 1,
    })
}

fn cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "no data".to_string())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
