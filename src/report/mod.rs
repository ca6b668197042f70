use crate::backend::models::SaveAttemptRequest;
use crate::game::models::RoundResult;
use crate::timer::{format_time, parse_time};
use std::fmt;

#[cfg(test)]
pub mod tests;

/// End-of-game summary: the per-round breakdown plus the aggregated totals.
/// Elapsed times are recovered from the `M:SS` strings stored on each round
/// result.
#[derive(Clone, Debug, PartialEq)]
pub struct GameReport {
    rounds: Vec<RoundResult>,
    pub total_distance_meters: u64,
    pub total_points: u64,
    pub total_time_secs: u64,
}

impl GameReport {
    pub fn new(rounds: &[RoundResult], total_points: u64) -> Self {
        let total_distance_meters = rounds.iter().map(|result| result.distance_meters).sum();
        let total_time_secs = rounds
            .iter()
            .map(|result| parse_time(&result.time).unwrap_or(0))
            .sum();
        Self {
            rounds: rounds.to_vec(),
            total_distance_meters,
            total_points,
            total_time_secs,
        }
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// The payload submitted to the attempt recorder.
    pub fn totals(&self) -> SaveAttemptRequest {
        SaveAttemptRequest {
            total_distance: self.total_distance_meters,
            total_points: self.total_points,
            total_time: format_time(self.total_time_secs),
        }
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.rounds {
            writeln!(
                f,
                "Раунд {}: {} м - {} очков - {}",
                result.round, result.distance_meters, result.points, result.time
            )?;
        }
        write!(
            f,
            "Итого: {} м - {} очков - {}",
            self.total_distance_meters,
            self.total_points,
            format_time(self.total_time_secs)
        )
    }
}
