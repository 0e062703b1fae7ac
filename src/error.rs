use thiserror::Error;

/// Failures while building a [`crate::dataset::Dataset`].
///
/// Every variant is fatal for the load it occurs in; there is no partial dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Source unreachable, unreadable, or not parseable as CSV.
    #[error("failed to load {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    /// Source parsed but lacks a column every source must carry.
    #[error("{source_name} is missing required column '{column}'")]
    Schema { source_name: String, column: String },

    /// A row carries a missing or non-numeric value needed for derivation.
    #[error("{source_name} row {row}: invalid {column} value '{value}'")]
    Validation {
        source_name: String,
        row: usize,
        column: String,
        value: String,
    },
}

impl DatasetError {
    pub fn load(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
