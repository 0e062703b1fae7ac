pub mod config;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod export;
pub mod http_client;
pub mod loader;
pub mod query;
pub mod record;
pub mod report;
pub mod sources;

use log::info;

use crate::derive::{Derivation, InvalidRowPolicy, derive_dataset};
use crate::error::DatasetError;
use crate::sources::SourceLocation;

/// Load every source and run the derivation pass once.
pub fn load_dataset(
    sources: &[SourceLocation],
    policy: InvalidRowPolicy,
) -> Result<Derivation, DatasetError> {
    let table = loader::load_sources(sources)?;
    let derivation = derive_dataset(&table, policy)?;
    info!(
        "dataset ready: {} matches from {} source(s), {} skipped",
        derivation.dataset.len(),
        sources.len(),
        derivation.skipped.len()
    );
    Ok(derivation)
}
