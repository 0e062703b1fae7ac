use std::fs;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::error::DatasetError;
use crate::http_client::fetch_text;
use crate::sources::SourceLocation;

/// Columns every source must carry, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    HomeTeam,
    AwayTeam,
    ClosingOddHome,
    ClosingOddDraw,
    ClosingOddAway,
    OpeningOddHome,
    HtHomeGoals,
    HtAwayGoals,
    HomeGoals,
    AwayGoals,
    HomeShotsOnTarget,
    AwayShotsOnTarget,
}

impl Column {
    pub const ALL: [Column; 13] = [
        Column::Date,
        Column::HomeTeam,
        Column::AwayTeam,
        Column::ClosingOddHome,
        Column::ClosingOddDraw,
        Column::ClosingOddAway,
        Column::OpeningOddHome,
        Column::HtHomeGoals,
        Column::HtAwayGoals,
        Column::HomeGoals,
        Column::AwayGoals,
        Column::HomeShotsOnTarget,
        Column::AwayShotsOnTarget,
    ];

    /// Header as it appears in the raw match-history files.
    pub fn source_name(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::HomeTeam => "HomeTeam",
            Column::AwayTeam => "AwayTeam",
            Column::ClosingOddHome => "PSCH",
            Column::ClosingOddDraw => "PSCD",
            Column::ClosingOddAway => "PSCA",
            Column::OpeningOddHome => "PSH",
            Column::HtHomeGoals => "HTHG",
            Column::HtAwayGoals => "HTAG",
            Column::HomeGoals => "FTHG",
            Column::AwayGoals => "FTAG",
            Column::HomeShotsOnTarget => "HST",
            Column::AwayShotsOnTarget => "AST",
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::HomeTeam => "home_team",
            Column::AwayTeam => "away_team",
            Column::ClosingOddHome => "closing_odd_home",
            Column::ClosingOddDraw => "closing_odd_draw",
            Column::ClosingOddAway => "closing_odd_away",
            Column::OpeningOddHome => "opening_odd_home",
            Column::HtHomeGoals => "ht_home_goals",
            Column::HtAwayGoals => "ht_away_goals",
            Column::HomeGoals => "home_goals",
            Column::AwayGoals => "away_goals",
            Column::HomeShotsOnTarget => "home_shots_on_target",
            Column::AwayShotsOnTarget => "away_shots_on_target",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Canonical name for a raw header; unknown headers pass through unchanged.
pub fn canonical_header(raw: &str) -> String {
    let cleaned = clean_header(raw);
    Column::ALL
        .iter()
        .find(|col| col.source_name() == cleaned)
        .map(|col| col.canonical_name().to_string())
        .unwrap_or_else(|| cleaned.to_string())
}

fn clean_header(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}').trim()
}

/// One source after header normalization.
#[derive(Debug, Clone)]
pub struct SourceTable {
    name: String,
    headers: Vec<String>,
    required: [usize; 13],
    rows: Vec<(usize, StringRecord)>,
}

impl SourceTable {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical headers, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |(row, record)| RowRef {
            table: self,
            row: *row,
            record,
        })
    }
}

/// Borrowed view of one normalized row.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a SourceTable,
    row: usize,
    record: &'a StringRecord,
}

impl<'a> RowRef<'a> {
    pub fn source_name(&self) -> &'a str {
        &self.table.name
    }

    /// 1-based data row within its source (header excluded).
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn value(&self, column: Column) -> &'a str {
        let idx = self.table.required[column.index()];
        self.record.get(idx).unwrap_or("")
    }

    /// Pass-through cells: every column that is not one of [`Column::ALL`].
    pub fn extras(&self) -> Vec<(String, String)> {
        self.table
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.table.required.contains(idx))
            .map(|(idx, name)| {
                let value = self.record.get(idx).unwrap_or("").to_string();
                (name.clone(), value)
            })
            .collect()
    }
}

/// All sources, concatenated in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct NormalizedTable {
    sources: Vec<SourceTable>,
}

impl NormalizedTable {
    pub fn new(sources: Vec<SourceTable>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[SourceTable] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.iter().map(SourceTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.sources.iter().flat_map(|table| table.rows())
    }
}

/// Read every source, keeping source order then row order.
pub fn load_sources(sources: &[SourceLocation]) -> Result<NormalizedTable, DatasetError> {
    let mut tables = Vec::with_capacity(sources.len());
    for source in sources {
        let table = load_source(source)?;
        info!("loaded {} rows from {}", table.len(), table.name());
        tables.push(table);
    }
    Ok(NormalizedTable::new(tables))
}

pub fn load_source(source: &SourceLocation) -> Result<SourceTable, DatasetError> {
    let name = source.name();
    match source {
        SourceLocation::Url(url) => {
            let body = fetch_text(url)?;
            parse_csv(&name, body.as_bytes())
        }
        SourceLocation::Path(path) => {
            let bytes = fs::read(path).map_err(|err| DatasetError::load(&name, err))?;
            parse_csv(&name, &bytes)
        }
    }
}

/// Parse one CSV document into a [`SourceTable`].
pub fn parse_csv(name: &str, data: &[u8]) -> Result<SourceTable, DatasetError> {
    let mut reader = ReaderBuilder::new().from_reader(data);
    let raw_headers = reader
        .headers()
        .map_err(|err| DatasetError::load(name, format!("unreadable header: {err}")))?
        .clone();

    let mut required = [0usize; 13];
    for col in Column::ALL {
        let idx = raw_headers
            .iter()
            .position(|h| clean_header(h) == col.source_name())
            .ok_or_else(|| DatasetError::Schema {
                source_name: name.to_string(),
                column: col.source_name().to_string(),
            })?;
        required[col.index()] = idx;
    }
    let headers = raw_headers.iter().map(canonical_header).collect();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result
            .map_err(|err| DatasetError::load(name, format!("malformed row {row}: {err}")))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            debug!("{name}: dropping blank row {row}");
            continue;
        }
        rows.push((row, record));
    }

    Ok(SourceTable {
        name: name.to_string(),
        headers,
        required,
        rows,
    })
}
