use consts::{EARTH_RADIUS, FULL_SCORE_RADIUS_METERS, MAX_SCORE, SCORE_PENALTY_PER_METER};
use models::LatLng;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance between two coordinates in meters, haversine on a
/// spherical Earth.
pub fn distance(guess: LatLng, target: LatLng) -> f64 {
    let phi_1 = guess.lat * std::f64::consts::PI / 180.0;
    let phi_2 = target.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (target.lat - guess.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (target.lng - guess.lng) * std::f64::consts::PI / 180.0;
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS * c
}

/// Points awarded for a guess `distance_meters` away from the target: the
/// full `MAX_SCORE` within `FULL_SCORE_RADIUS_METERS`, then a linear decay
/// losing `SCORE_PENALTY_PER_METER` per meter, floored at zero.
pub fn points(distance_meters: f64) -> u64 {
    if distance_meters <= FULL_SCORE_RADIUS_METERS {
        return MAX_SCORE;
    }
    let raw = MAX_SCORE as f64 - SCORE_PENALTY_PER_METER * (distance_meters - FULL_SCORE_RADIUS_METERS);
    raw.max(0.0).round() as u64
}
