use crate::map::{self, models::LatLng};
use crate::timer::format_time;
use serde::Serialize;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingGuess,
    ShowingResult,
    GameOver,
}

/// Outcome of one round, immutable once created. `time` is the elapsed time
/// formatted as `M:SS`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u8,
    pub distance_meters: u64,
    pub points: u64,
    pub time: String,
}

/// A scored submission: the stored result plus the two coordinates the
/// result view needs.
#[derive(Clone, Debug)]
pub struct RoundOutcome {
    pub target: LatLng,
    pub guess: LatLng,
    pub result: RoundResult,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitGuessError {
    #[error("no guess selected")]
    NoGuessSelected,
    /// The round's target has not arrived yet.
    #[error("the round has not started")]
    RoundNotStarted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundTransition {
    NextRound,
    GameFinished,
}

/// The whole mutable state of one game session. Mutated only through the
/// transition methods below.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: GamePhase,
    pub current_round: u8,
    pub score: u64,
    pub rounds: Vec<RoundResult>,
    pub target: Option<LatLng>,
    pub guess: Option<LatLng>,
    /// Seconds left on the round timer; `-1` signals expiry.
    pub remaining_secs: i64,
    rounds_per_game: u8,
    round_duration_secs: u64,
}

impl GameState {
    pub fn new(rounds_per_game: u8, round_duration_secs: u64) -> Self {
        Self {
            phase: GamePhase::AwaitingGuess,
            current_round: 1,
            score: 0,
            rounds: Vec::new(),
            target: None,
            guess: None,
            remaining_secs: round_duration_secs as i64,
            rounds_per_game,
            round_duration_secs,
        }
    }

    /// Arms the current round with its target: clears the guess, refills the
    /// clock, and opens the round for guessing.
    pub fn begin_round(&mut self, target: LatLng) {
        self.target = Some(target);
        self.guess = None;
        self.remaining_secs = self.round_duration_secs as i64;
        self.phase = GamePhase::AwaitingGuess;
    }

    /// Swaps the target mid-round (the panorama had nothing to show at the
    /// old one). Timer and guess are left alone.
    pub fn replace_target(&mut self, target: LatLng) {
        self.target = Some(target);
    }

    /// Remembers the player's pick, overwriting any earlier one. Ignored
    /// outside `AwaitingGuess`.
    pub fn place_guess(&mut self, location: LatLng) {
        if self.phase == GamePhase::AwaitingGuess {
            self.guess = Some(location);
        }
    }

    /// Scores the current guess against the target and moves the game to
    /// `ShowingResult`. Elapsed time is what the round timer has consumed so
    /// far.
    pub fn submit_guess(&mut self) -> Result<RoundOutcome, SubmitGuessError> {
        if self.phase != GamePhase::AwaitingGuess {
            return Err(SubmitGuessError::RoundNotStarted);
        }
        let target = self.target.ok_or(SubmitGuessError::RoundNotStarted)?;
        let guess = self.guess.ok_or(SubmitGuessError::NoGuessSelected)?;
        let distance = map::distance(guess, target);
        let points = map::points(distance);
        let elapsed_secs = (self.round_duration_secs as i64 - self.remaining_secs).max(0) as u64;
        let result = RoundResult {
            round: self.current_round,
            distance_meters: distance.round() as u64,
            points,
            time: format_time(elapsed_secs),
        };
        self.rounds.push(result.clone());
        self.score += points;
        self.phase = GamePhase::ShowingResult;
        Ok(RoundOutcome {
            target,
            guess,
            result,
        })
    }

    /// Closes the result view: either advances to the next round (the phase
    /// flips back to `AwaitingGuess` once the new target arrives via
    /// `begin_round`) or ends the game.
    pub fn acknowledge_result(&mut self) -> Option<RoundTransition> {
        if self.phase != GamePhase::ShowingResult {
            return None;
        }
        if self.current_round < self.rounds_per_game {
            self.current_round += 1;
            self.guess = None;
            Some(RoundTransition::NextRound)
        } else {
            self.phase = GamePhase::GameOver;
            Some(RoundTransition::GameFinished)
        }
    }

    pub fn record_tick(&mut self, remaining_secs: i64) {
        self.remaining_secs = remaining_secs;
    }

    /// The round timer ran out: the game ends on the spot, skipping any
    /// remaining rounds.
    pub fn expire(&mut self) {
        self.remaining_secs = -1;
        self.phase = GamePhase::GameOver;
    }

    /// "Play again": back to round 1 with an empty history.
    pub fn reset(&mut self) {
        *self = GameState::new(self.rounds_per_game, self.round_duration_secs);
    }
}
