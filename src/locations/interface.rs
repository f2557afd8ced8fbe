use crate::game::models::Difficulty;
use crate::locations::errors::OracleError;
use crate::map::models::LatLng;
use async_trait::async_trait;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn candidate(&self, difficulty: Difficulty) -> Result<LatLng, OracleError>;
}

#[async_trait]
pub trait PanoramaCoverage: Send + Sync {
    /// Whether outdoor street-level imagery exists within `radius_m` meters of `location`.
    async fn has_coverage(&self, location: LatLng, radius_m: f64) -> Result<bool, OracleError>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Country containing `location`, `None` if there is no country-level result.
    async fn country_name(&self, location: LatLng) -> Result<Option<String>, OracleError>;
}
