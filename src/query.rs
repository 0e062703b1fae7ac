use serde::Serialize;

use crate::record::{MatchRecord, OddsBucket, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub team: String,
    pub bucket: OddsBucket,
}

impl Selection {
    pub fn new(team: impl Into<String>, bucket: OddsBucket) -> Self {
        Self {
            team: team.into(),
            bucket,
        }
    }

    pub fn matches(&self, record: &MatchRecord) -> bool {
        record.home_team == self.team && record.odds_bucket() == self.bucket
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub wins: usize,
    pub total: usize,
    pub win_percentage: f64,
    /// Σ closing home odd − matches. Counts every row, won or not.
    pub profit_loss: f64,
    pub efficiency_sum: f64,
    pub avg_home_goals: Option<f64>,
    pub avg_away_goals: Option<f64>,
    pub avg_ht_home_goals: Option<f64>,
    pub avg_ht_away_goals: Option<f64>,
    pub avg_home_shots_on_target: Option<f64>,
    pub avg_away_shots_on_target: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a> {
    pub selection: Selection,
    pub rows: Vec<&'a MatchRecord>,
    pub summary: Summary,
}

pub fn filter<'a>(records: &'a [MatchRecord], selection: &Selection) -> Vec<&'a MatchRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

pub fn summarize(rows: &[&MatchRecord]) -> Summary {
    let total = rows.len();
    let wins = rows.iter().filter(|r| r.outcome() == Outcome::Win).count();
    let win_percentage = if total > 0 {
        wins as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    // fold from +0.0: an empty f64 `sum()` yields -0.0, which renders as "-0.00"
    let odds_sum = rows.iter().fold(0.0_f64, |acc, r| acc + r.closing_odd_home);
    let efficiency_sum = rows
        .iter()
        .fold(0.0_f64, |acc, r| acc + r.efficiency_coefficient());

    Summary {
        wins,
        total,
        win_percentage,
        profit_loss: odds_sum - total as f64,
        efficiency_sum,
        avg_home_goals: mean(rows, |r| r.home_goals),
        avg_away_goals: mean(rows, |r| r.away_goals),
        avg_ht_home_goals: mean(rows, |r| r.ht_home_goals),
        avg_ht_away_goals: mean(rows, |r| r.ht_away_goals),
        avg_home_shots_on_target: mean(rows, |r| r.home_shots_on_target),
        avg_away_shots_on_target: mean(rows, |r| r.away_shots_on_target),
    }
}

fn mean(rows: &[&MatchRecord], field: impl Fn(&MatchRecord) -> u32) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum = rows.iter().fold(0.0_f64, |acc, r| acc + field(*r) as f64);
    Some(sum / rows.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::{Selection, summarize};
    use crate::record::{MatchFields, MatchRecord, OddsBucket};

    fn record(team: &str, home: u32, away: u32, odd: f64) -> MatchRecord {
        MatchRecord::derive(
            MatchFields {
                date: "01/09/2023".to_string(),
                home_team: team.to_string(),
                away_team: "Rival".to_string(),
                closing_odd_home: odd,
                closing_odd_draw: 3.4,
                closing_odd_away: 4.2,
                opening_odd_home: 1.75,
                ht_home_goals: home.min(1),
                ht_away_goals: 0,
                home_goals: home,
                away_goals: away,
                home_shots_on_target: 5,
                away_shots_on_target: 2,
            },
            Vec::new(),
        )
    }

    #[test]
    fn empty_selection_has_no_averages() {
        let s = summarize(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.win_percentage, 0.0);
        assert_eq!(s.profit_loss, 0.0);
        assert!(s.profit_loss.is_sign_positive());
        assert_eq!(s.efficiency_sum, 0.0);
        assert!(s.efficiency_sum.is_sign_positive());
        assert!(s.avg_home_goals.is_none());
        assert!(s.avg_away_shots_on_target.is_none());
    }

    #[test]
    fn win_and_draw_example() {
        let a = record("X", 2, 0, 1.80);
        let b = record("X", 1, 1, 1.50);
        let s = summarize(&[&a, &b]);
        assert_eq!(s.wins, 1);
        assert_eq!(s.total, 2);
        assert!((s.win_percentage - 50.0).abs() < 1e-9);
        assert!((s.profit_loss - 1.30).abs() < 1e-9);
        assert!((s.efficiency_sum - 0.5).abs() < 1e-9);
        assert_eq!(s.avg_home_goals, Some(1.5));
        assert_eq!(s.avg_away_goals, Some(0.5));
        assert_eq!(s.avg_home_shots_on_target, Some(5.0));
    }

    #[test]
    fn selection_needs_team_and_bucket() {
        let r = record("X", 1, 0, 1.9);
        assert!(Selection::new("X", OddsBucket::Range(7)).matches(&r));
        assert!(!Selection::new("X", OddsBucket::Range(8)).matches(&r));
        assert!(!Selection::new("Y", OddsBucket::Range(7)).matches(&r));
    }
}
