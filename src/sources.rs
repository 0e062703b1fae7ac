use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Match-history CSVs loaded when no source is configured.
pub const DEFAULT_SOURCES: [&str; 2] = [
    "https://raw.githubusercontent.com/scooby75/bdfootball/main/Italy%20Serie%20A%20Geral.csv",
    "https://raw.githubusercontent.com/scooby75/bdfootball/main/Italy%20Serie%20B%20Geral.csv",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    Path(PathBuf),
}

impl SourceLocation {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Some(Self::Url(trimmed.to_string()))
        } else {
            Some(Self::Path(PathBuf::from(trimmed)))
        }
    }

    /// Name used in log lines and error messages.
    pub fn name(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for SourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| "empty source location".to_string())
    }
}

pub fn default_sources() -> Vec<SourceLocation> {
    DEFAULT_SOURCES
        .iter()
        .filter_map(|raw| SourceLocation::parse(raw))
        .collect()
}
