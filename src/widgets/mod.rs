use crate::game::models::RoundResult;
use crate::map::models::LatLng;
use crate::report::GameReport;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PanoramaError {
    /// No imagery exists at the requested location; the engine reacts by
    /// fetching a replacement location for the same round.
    #[error("No panoramas")]
    Unavailable,
    /// Any other player error, surfaced to the user verbatim.
    #[error("{0}")]
    Other(String),
}

/// Immersive street-level view of the round's target.
#[async_trait]
pub trait PanoramaWidget: Send {
    /// Points the player at a new location. Implementations keep their own
    /// overlays (built-in markers and the like) cleared across internal view
    /// changes.
    async fn show(&mut self, location: LatLng) -> Result<(), PanoramaError>;
}

/// The interactive guessing map. Click events travel the other way, as
/// `PlayerAction::PlaceGuess` through the `GameHandle`.
pub trait MapWidget: Send {
    /// Clears the guess marker and any result overlay ahead of a new round.
    fn reset(&mut self);

    /// Renders the target and the guess markers with a connecting line.
    fn show_round_outcome(&mut self, target: LatLng, guess: LatLng);
}

/// Everything user-facing that is not the map or the panorama: the HUD, the
/// countdown display, transient messages, and the two popups.
pub trait GameScreen: Send {
    fn update_status(&mut self, round: u8, total_rounds: u8, score: u64);

    fn update_countdown(&mut self, formatted: &str);

    fn show_message(&mut self, message: &str);

    fn show_result(&mut self, result: &RoundResult);

    fn show_game_over(&mut self, report: &GameReport);
}
