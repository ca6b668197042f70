use crate::map::models::LatLng;
use async_trait::async_trait;
use models::SaveAttemptRequest;
use thiserror::Error;

pub mod http;
pub mod locations;
pub mod models;

#[derive(Debug, Error)]
pub enum LocationFetchError {
    #[error("failed to reach the location provider: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with an error message of its own.
    #[error("{0}")]
    Rejected(String),
    #[error("Нет доступных координат")]
    NoLocationsAvailable,
}

#[derive(Debug, Error)]
pub enum AttemptSaveError {
    #[error("failed to reach the attempt recorder: {0}")]
    Http(#[from] reqwest::Error),
    /// The recorder answered with an error message, shown to the user
    /// verbatim.
    #[error("{0}")]
    Rejected(String),
}

/// Hands out the target coordinate for each round.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn next_location(&self) -> Result<LatLng, LocationFetchError>;
}

/// Persists the totals of a completed game.
#[async_trait]
pub trait AttemptRecorder: Send + Sync {
    async fn record_attempt(&self, attempt: &SaveAttemptRequest) -> Result<(), AttemptSaveError>;
}
