use crate::derive::InvalidRowPolicy;
use crate::sources::{SourceLocation, default_sources};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub sources: Vec<SourceLocation>,
    pub invalid_rows: InvalidRowPolicy,
}

impl AppConfig {
    /// Falls back to [`default_sources`] when nothing was configured.
    pub fn resolve(sources: Vec<SourceLocation>, skip_invalid: bool) -> Self {
        let sources = if sources.is_empty() {
            default_sources()
        } else {
            sources
        };
        let invalid_rows = if skip_invalid {
            InvalidRowPolicy::Skip
        } else {
            InvalidRowPolicy::Abort
        };
        Self {
            sources,
            invalid_rows,
        }
    }
}

/// Populate the process environment from `.env.local` then `.env`, if present.
pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::derive::InvalidRowPolicy;
    use crate::sources::{SourceLocation, default_sources};

    #[test]
    fn empty_sources_use_defaults() {
        let cfg = AppConfig::resolve(Vec::new(), false);
        assert_eq!(cfg.sources, default_sources());
        assert_eq!(cfg.invalid_rows, InvalidRowPolicy::Abort);
    }

    #[test]
    fn explicit_sources_win() {
        let local = SourceLocation::parse("a.csv").into_iter().collect::<Vec<_>>();
        let cfg = AppConfig::resolve(local.clone(), true);
        assert_eq!(cfg.sources, local);
        assert_eq!(cfg.invalid_rows, InvalidRowPolicy::Skip);
    }
}
