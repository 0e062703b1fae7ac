use std::collections::BTreeSet;

use crate::query::{self, QueryResult, Selection};
use crate::record::{MatchRecord, OddsBucket};

/// Derived match table. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MatchRecord>,
}

impl Dataset {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct home teams, ascending.
    pub fn teams(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.home_team.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct buckets present, ascending with `Other` last.
    pub fn buckets(&self) -> Vec<OddsBucket> {
        self.records
            .iter()
            .map(MatchRecord::odds_bucket)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter(&self, selection: &Selection) -> Vec<&MatchRecord> {
        query::filter(&self.records, selection)
    }

    pub fn query(&self, selection: &Selection) -> QueryResult<'_> {
        let rows = self.filter(selection);
        let summary = query::summarize(&rows);
        QueryResult {
            selection: selection.clone(),
            rows,
            summary,
        }
    }
}
