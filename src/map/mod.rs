use consts::{
    EARTH_RADIUS_KM, EARTH_RADIUS_M, MAX_SCORE, PERFECT_GUESS_DISTANCE_KM,
    SCORE_DECAY_DISTANCE_KM,
};
use models::LatLng;

pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

/// Great-circle distance between two points, in kilometers.
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    let phi_1 = a.lat.to_radians();
    let phi_2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();
    let h = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // `h` can drift slightly above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn score_for(distance_km: f64) -> u64 {
    if distance_km < PERFECT_GUESS_DISTANCE_KM {
        return MAX_SCORE;
    }
    (MAX_SCORE as f64 * (-distance_km / SCORE_DECAY_DISTANCE_KM).exp()).round() as u64
}

/// Point reached by travelling `distance_m` meters from `origin` along the initial
/// `bearing_deg` (clockwise from north).
pub fn offset(origin: LatLng, distance_m: f64, bearing_deg: f64) -> LatLng {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let phi_1 = origin.lat.to_radians();
    let lambda_1 = origin.lng.to_radians();

    let sin_phi_2 = phi_1.sin() * delta.cos() + phi_1.cos() * delta.sin() * theta.cos();
    let phi_2 = sin_phi_2.clamp(-1.0, 1.0).asin();
    let lambda_2 = lambda_1
        + (theta.sin() * delta.sin() * phi_1.cos()).atan2(delta.cos() - phi_1.sin() * sin_phi_2);

    LatLng {
        lat: phi_2.to_degrees(),
        lng: normalize_longitude(lambda_2.to_degrees()),
    }
}

fn normalize_longitude(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lng > 0.0 {
        180.0
    } else {
        wrapped
    }
}
