use crate::backend::{AttemptSaveError, LocationFetchError};
use crate::map::models::LatLng;
use crate::timer::TimerSignal;

/// An action of the player, one per user-facing affordance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayerAction {
    /// A click on the map.
    PlaceGuess(LatLng),
    SubmitGuess,
    /// Closing the round result view.
    AcknowledgeResult,
    PlayAgain,
    Exit,
}

/// Everything the engine loop consumes, in arrival order. Timer signals and
/// completions of background requests carry the epoch (and round) they were
/// issued for, so the engine can discard the stale ones.
#[derive(Debug)]
pub(crate) enum Event {
    Player(PlayerAction),
    Timer {
        epoch: u64,
        round: u8,
        signal: TimerSignal,
    },
    LocationReady {
        epoch: u64,
        round: u8,
        outcome: Result<LatLng, LocationFetchError>,
    },
    AttemptSaved {
        epoch: u64,
        outcome: Result<(), AttemptSaveError>,
    },
}
