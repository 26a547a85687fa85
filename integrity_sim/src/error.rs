// integrity_sim/src/error.rs

use integrity_core::error::IntegrityError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("scenario path not found: {0:?}")]
    NotFound(PathBuf),

    #[error("failed to load or parse scenario: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("failed to search for scenarios: {0}")]
    Walk(#[from] walkdir::Error),

    /// An update record could not be turned into a spatial state, or a step of
    /// the replay was rejected by the core.
    #[error("update {index}: {source}")]
    Update {
        index: usize,
        #[source]
        source: IntegrityError,
    },
}

impl From<figment::Error> for ScenarioError {
    fn from(e: figment::Error) -> Self {
        Self::Config(Box::new(e))
    }
}
