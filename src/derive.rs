use log::warn;

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::loader::{Column, NormalizedTable, RowRef};
use crate::record::{MatchFields, MatchRecord};

/// What to do with a row that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Stop at the first invalid row.
    #[default]
    Abort,
    /// Log the row, leave it out, and keep going.
    Skip,
}

#[derive(Debug)]
pub struct Derivation {
    pub dataset: Dataset,
    pub skipped: Vec<DatasetError>,
}

pub fn derive_dataset(
    table: &NormalizedTable,
    policy: InvalidRowPolicy,
) -> Result<Derivation, DatasetError> {
    let mut records = Vec::with_capacity(table.len());
    let mut skipped = Vec::new();

    for row in table.rows() {
        match derive_row(&row) {
            Ok(record) => records.push(record),
            Err(err) if policy == InvalidRowPolicy::Skip && err.is_validation() => {
                warn!("skipping row: {err}");
                skipped.push(err);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(Derivation {
        dataset: Dataset::new(records),
        skipped,
    })
}

pub fn derive_row(row: &RowRef<'_>) -> Result<MatchRecord, DatasetError> {
    let fields = MatchFields {
        date: row.value(Column::Date).trim().to_string(),
        home_team: row.value(Column::HomeTeam).trim().to_string(),
        away_team: row.value(Column::AwayTeam).trim().to_string(),
        closing_odd_home: parse_odd(row, Column::ClosingOddHome)?,
        closing_odd_draw: parse_odd(row, Column::ClosingOddDraw)?,
        closing_odd_away: parse_odd(row, Column::ClosingOddAway)?,
        opening_odd_home: parse_odd(row, Column::OpeningOddHome)?,
        ht_home_goals: parse_count(row, Column::HtHomeGoals)?,
        ht_away_goals: parse_count(row, Column::HtAwayGoals)?,
        home_goals: parse_count(row, Column::HomeGoals)?,
        away_goals: parse_count(row, Column::AwayGoals)?,
        home_shots_on_target: parse_count(row, Column::HomeShotsOnTarget)?,
        away_shots_on_target: parse_count(row, Column::AwayShotsOnTarget)?,
    };
    Ok(MatchRecord::derive(fields, row.extras()))
}

fn invalid(row: &RowRef<'_>, column: Column, raw: &str) -> DatasetError {
    DatasetError::Validation {
        source_name: row.source_name().to_string(),
        row: row.row(),
        column: column.canonical_name().to_string(),
        value: raw.to_string(),
    }
}

fn parse_odd(row: &RowRef<'_>, column: Column) -> Result<f64, DatasetError> {
    let raw = row.value(column);
    parse_odd_str(raw).ok_or_else(|| invalid(row, column, raw))
}

fn parse_count(row: &RowRef<'_>, column: Column) -> Result<u32, DatasetError> {
    let raw = row.value(column);
    parse_count_str(raw).ok_or_else(|| invalid(row, column, raw))
}

// Decimal odds pay back the stake, so anything at or below 1.0 is bad data.
fn parse_odd_str(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 1.0)
}

// Exports sometimes write integer columns as "2.0".
fn parse_count_str(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<u32>() {
        return Some(v);
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}
