use crate::map::models::LatLng;
use tokio::sync::watch;

/// A candidate that passed both the coverage check and reverse geocoding.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedLocation {
    pub location: LatLng,
    pub country_name: String,
    pub heading: f64,
}

/// Ties an in-flight acquisition to the session generation it was started for.
#[derive(Clone, Debug)]
pub struct GenerationGuard {
    generation: u64,
    current: watch::Receiver<u64>,
}

impl GenerationGuard {
    pub fn new(generation: u64, current: watch::Receiver<u64>) -> Self {
        Self {
            generation,
            current,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_superseded(&self) -> bool {
        *self.current.borrow() != self.generation
    }
}
