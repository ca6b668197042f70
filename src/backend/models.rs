use serde::{Deserialize, Serialize};

/// Body of `GET /next_location`: a `[lat, lng]` pair on success, an error
/// message otherwise.
#[derive(Debug, Deserialize)]
pub struct NextLocationResponse {
    pub coord: Option<[f64; 2]>,
    pub error: Option<String>,
}

/// Urlencoded form posted to `POST /save_attempt`. Field names are part of
/// the wire contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAttemptRequest {
    pub total_distance: u64,
    pub total_points: u64,
    pub total_time: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveAttemptResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}
