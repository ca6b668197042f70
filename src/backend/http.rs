use crate::backend::models::{NextLocationResponse, SaveAttemptRequest, SaveAttemptResponse};
use crate::backend::{AttemptRecorder, AttemptSaveError, LocationFetchError, LocationProvider};
use crate::map::models::LatLng;
use async_trait::async_trait;
use url::Url;

/// Client of the game backend, implementing both collaborator traits over
/// the two HTTP endpoints the service exposes.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    next_location_url: Url,
    save_attempt_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        let next_location_url = base_url
            .join("next_location")
            .expect("Failed to construct the next location URL.");
        let save_attempt_url = base_url
            .join("save_attempt")
            .expect("Failed to construct the save attempt URL.");
        Self {
            http: reqwest::Client::new(),
            next_location_url,
            save_attempt_url,
        }
    }
}

#[async_trait]
impl LocationProvider for BackendClient {
    async fn next_location(&self) -> Result<LatLng, LocationFetchError> {
        let response: NextLocationResponse = self
            .http
            .get(self.next_location_url.clone())
            .send()
            .await?
            .json()
            .await?;
        match response.coord {
            Some([lat, lng]) => Ok(LatLng { lat, lng }),
            None => Err(LocationFetchError::Rejected(response.error.unwrap_or_else(
                || String::from("malformed response from the location provider"),
            ))),
        }
    }
}

#[async_trait]
impl AttemptRecorder for BackendClient {
    async fn record_attempt(&self, attempt: &SaveAttemptRequest) -> Result<(), AttemptSaveError> {
        let response: SaveAttemptResponse = self
            .http
            .post(self.save_attempt_url.clone())
            .form(attempt)
            .send()
            .await?
            .json()
            .await?;
        match response.error {
            Some(error) => Err(AttemptSaveError::Rejected(error)),
            None => Ok(()),
        }
    }
}
