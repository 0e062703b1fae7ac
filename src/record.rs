use std::fmt;

use serde::{Serialize, Serializer};

/// Full-time result from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn code(self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Draw => "D",
            Outcome::Loss => "L",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

pub fn classify_outcome(home_goals: u32, away_goals: u32) -> Outcome {
    if home_goals > away_goals {
        Outcome::Win
    } else if home_goals < away_goals {
        Outcome::Loss
    } else {
        Outcome::Draw
    }
}

pub const BUCKET_COUNT: u32 = 60;
const BUCKET_START_CENTS: u32 = 100;
const BUCKET_WIDTH_CENTS: u32 = 10;

/// Odds band of width 0.10 between 1.00 and 7.00, or `Other` outside it.
///
/// Ordering follows the label sort: ranges ascending, `Other` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OddsBucket {
    Range(u32),
    Other,
}

impl OddsBucket {
    /// Bounds of a range bucket in hundredths.
    fn bounds_cents(index: u32) -> (u32, u32) {
        let lower = BUCKET_START_CENTS + index * BUCKET_WIDTH_CENTS;
        (lower, lower + BUCKET_WIDTH_CENTS)
    }

    pub fn bounds(self) -> Option<(f64, f64)> {
        match self {
            OddsBucket::Range(index) => {
                let (lower, upper) = Self::bounds_cents(index);
                Some((lower as f64 / 100.0, upper as f64 / 100.0))
            }
            OddsBucket::Other => None,
        }
    }

    pub fn label(self) -> String {
        match self.bounds() {
            Some((lower, upper)) => format!("{lower:.2} - {upper:.2}"),
            None => "Other".to_string(),
        }
    }

    /// Inverse of [`OddsBucket::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("other") {
            return Some(OddsBucket::Other);
        }
        (0..BUCKET_COUNT)
            .map(OddsBucket::Range)
            .find(|bucket| bucket.label() == label)
    }

    pub fn all() -> impl Iterator<Item = OddsBucket> {
        (0..BUCKET_COUNT)
            .map(OddsBucket::Range)
            .chain(std::iter::once(OddsBucket::Other))
    }
}

impl fmt::Display for OddsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for OddsBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Bucket for an opening home odd. Bounds are inclusive on both ends, so an
/// odd sitting on a boundary lands in the lower bucket.
pub fn odds_bucket(odd: f64) -> OddsBucket {
    (0..BUCKET_COUNT)
        .map(OddsBucket::Range)
        .find(|bucket| match bucket.bounds() {
            Some((lower, upper)) => lower <= odd && odd <= upper,
            None => false,
        })
        .unwrap_or(OddsBucket::Other)
}

/// One historical match with its derived outcome and odds bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub closing_odd_home: f64,
    pub closing_odd_draw: f64,
    pub closing_odd_away: f64,
    pub opening_odd_home: f64,
    pub ht_home_goals: u32,
    pub ht_away_goals: u32,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_shots_on_target: u32,
    pub away_shots_on_target: u32,
    outcome: Outcome,
    odds_bucket: OddsBucket,
    #[serde(skip)]
    extras: Vec<(String, String)>,
}

/// Typed source fields of a match, before derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchFields {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub closing_odd_home: f64,
    pub closing_odd_draw: f64,
    pub closing_odd_away: f64,
    pub opening_odd_home: f64,
    pub ht_home_goals: u32,
    pub ht_away_goals: u32,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_shots_on_target: u32,
    pub away_shots_on_target: u32,
}

impl MatchRecord {
    /// Attach the derived fields. The bucket comes from the opening home odd.
    pub fn derive(fields: MatchFields, extras: Vec<(String, String)>) -> Self {
        let outcome = classify_outcome(fields.home_goals, fields.away_goals);
        let odds_bucket = odds_bucket(fields.opening_odd_home);
        Self {
            date: fields.date,
            home_team: fields.home_team,
            away_team: fields.away_team,
            closing_odd_home: fields.closing_odd_home,
            closing_odd_draw: fields.closing_odd_draw,
            closing_odd_away: fields.closing_odd_away,
            opening_odd_home: fields.opening_odd_home,
            ht_home_goals: fields.ht_home_goals,
            ht_away_goals: fields.ht_away_goals,
            home_goals: fields.home_goals,
            away_goals: fields.away_goals,
            home_shots_on_target: fields.home_shots_on_target,
            away_shots_on_target: fields.away_shots_on_target,
            outcome,
            odds_bucket,
            extras,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn odds_bucket(&self) -> OddsBucket {
        self.odds_bucket
    }

    /// 0.25 per goal of margin, negative when the home side lost.
    pub fn efficiency_coefficient(&self) -> f64 {
        (self.home_goals as f64 - self.away_goals as f64) * 0.25
    }

    /// Value of a pass-through column, if the source had it.
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn extras(&self) -> &[(String, String)] {
        &self.extras
    }
}
