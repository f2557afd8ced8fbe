use crate::map::consts::MAX_SCORE;
use crate::map::models::LatLng;
use crate::map::{distance_km, offset, score_for};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARIS: LatLng = LatLng {
    lat: 48.8566,
    lng: 2.3522,
};
const LONDON: LatLng = LatLng {
    lat: 51.5074,
    lng: -0.1278,
};

fn random_point(rng: &mut StdRng) -> LatLng {
    LatLng {
        lat: rng.gen_range(-90.0..=90.0),
        lng: rng.gen_range(-180.0..=180.0),
    }
}

#[test]
fn paris_to_london() {
    let d = distance_km(PARIS, LONDON);
    assert!((d - 343.5).abs() < 2.0, "Expected ~343.5 km, got {d}");
}

#[test]
fn distance_is_symmetric_and_zero_on_itself() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
        assert!(distance_km(a, a).abs() < 1e-6);
        assert!(distance_km(a, b) >= 0.0);
    }
}

#[test]
fn antipodal_points_are_half_the_circumference_apart() {
    let d = distance_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
    assert!((d - std::f64::consts::PI * 6371.0).abs() < 1e-6);
}

#[test]
fn sub_kilometer_guesses_get_the_max_score() {
    assert_eq!(score_for(0.0), MAX_SCORE);
    assert_eq!(score_for(0.5), MAX_SCORE);
    assert_eq!(score_for(0.999), MAX_SCORE);
}

#[test]
fn score_follows_exponential_decay() {
    assert_eq!(score_for(1.5), (5000.0 * (-1.5_f64 / 2000.0).exp()).round() as u64);
    assert_eq!(score_for(2000.0), 1839);
    assert!(score_for(20000.0) <= 1);
}

#[test]
fn score_is_non_increasing() {
    let mut previous = score_for(0.0);
    for step in 1..=1000 {
        let score = score_for(step as f64 * 20.0);
        assert!(score <= previous, "score went up at {} km", step * 20);
        previous = score;
    }
}

#[test]
fn offset_travels_the_requested_distance() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let origin = LatLng {
            lat: rng.gen_range(-80.0..=80.0),
            lng: rng.gen_range(-180.0..=180.0),
        };
        let distance_m = rng.gen_range(0.0..900_000.0);
        let bearing = rng.gen_range(0.0..360.0);
        let target = offset(origin, distance_m, bearing);
        assert!(target.is_valid(), "{target:?} is out of range");
        let travelled_km = distance_km(origin, target);
        assert!(
            (travelled_km - distance_m / 1000.0).abs() < 1e-3,
            "expected {} km, got {travelled_km}",
            distance_m / 1000.0
        );
    }
}

#[test]
fn offset_wraps_across_the_antimeridian() {
    let target = offset(LatLng::new(0.0, 179.5), 200_000.0, 90.0);
    assert!(target.lng < -178.0, "{target:?}");
}

#[test]
fn coordinates_out_of_range_are_invalid() {
    assert!(LatLng::new(90.0, -180.0).is_valid());
    assert!(!LatLng::new(90.1, 0.0).is_valid());
    assert!(!LatLng::new(0.0, 180.5).is_valid());
    assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
}
