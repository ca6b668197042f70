use crate::game::consts::{ROUNDS_PER_GAME, ROUND_DURATION_SECS};
use serde::Deserialize;
use url::Url;

#[cfg(test)]
pub mod tests;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

pub const DEFAULT_PANORAMA_RETRY_LIMIT: u32 = 10;

/// External configuration of a game session. Every field has a default
/// matching the stock game, so embedders may deserialize a partial document.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub rounds_per_game: u8,
    pub round_duration_secs: u64,
    pub backend_url: Url,
    /// How many replacement locations to try when no panorama exists at the
    /// fetched one.
    pub max_panorama_retries: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: ROUNDS_PER_GAME,
            round_duration_secs: ROUND_DURATION_SECS,
            backend_url: Url::parse(DEFAULT_BACKEND_URL)
                .expect("Failed to parse the default backend URL."),
            max_panorama_retries: DEFAULT_PANORAMA_RETRY_LIMIT,
        }
    }
}
