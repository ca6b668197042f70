/// WGS-84 equatorial radius in meters, used as the sphere radius for
/// gameplay-grade distances.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

pub const MAX_SCORE: u64 = 5_000;

/// Guesses within this many meters of the target score `MAX_SCORE`.
pub const FULL_SCORE_RADIUS_METERS: f64 = 25.0;

pub const SCORE_PENALTY_PER_METER: f64 = 5.0;
