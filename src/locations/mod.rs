use crate::cli::Args;
use crate::game::models::Difficulty;
use crate::locations::consts::PANORAMA_SEARCH_RADIUS_M;
use crate::locations::env::MAPS_API_KEY;
use crate::map::models::LatLng;
use crate::warn_if_env_var_is_missing;
use errors::{LocationError, LocationsFileError, ValidationRejection};
use google::GoogleMapsClient;
use interface::{LocationProvider, PanoramaCoverage, ReverseGeocoder};
use models::{GenerationGuard, ValidatedLocation};
use provider::{HttpLocationProvider, NdjsonLocationProvider};
use rand::Rng;
use std::sync::Arc;

pub mod consts;
pub mod env;
pub mod errors;
pub mod google;
pub mod interface;
pub mod models;
pub mod provider;

pub fn init(args: &Args) -> Result<LocationOracle, LocationsFileError> {
    warn_if_env_var_is_missing!(MAPS_API_KEY, "Every candidate location will be rejected.");
    let api_key = std::env::var(MAPS_API_KEY).unwrap_or_default();
    let maps_client = Arc::new(GoogleMapsClient::new(args.maps_api_url.clone(), api_key));

    let provider: Arc<dyn LocationProvider> = match &args.location_provider_url {
        Some(url) => {
            tracing::info!(provider_url = %url, "Using remote location provider.");
            Arc::new(HttpLocationProvider::new(url.clone()))
        }
        None => {
            let provider = NdjsonLocationProvider::from_file(&args.locations)?;
            tracing::info!(
                locations_file = %args.locations.display(),
                locations_count = provider.len(),
                "Loaded locations file."
            );
            Arc::new(provider)
        }
    };

    Ok(LocationOracle::new(
        provider,
        maps_client.clone(),
        maps_client,
        args.max_location_attempts,
    ))
}

/// Produces locations that are guaranteed to have panorama coverage and a country name.
#[derive(Clone)]
pub struct LocationOracle {
    provider: Arc<dyn LocationProvider>,
    coverage: Arc<dyn PanoramaCoverage>,
    geocoder: Arc<dyn ReverseGeocoder>,
    max_attempts: u32,
}

impl LocationOracle {
    pub fn new(
        provider: Arc<dyn LocationProvider>,
        coverage: Arc<dyn PanoramaCoverage>,
        geocoder: Arc<dyn ReverseGeocoder>,
        max_attempts: u32,
    ) -> Self {
        Self {
            provider,
            coverage,
            geocoder,
            max_attempts,
        }
    }

    /// Keeps drawing candidates until one passes validation. A failing provider ends the
    /// acquisition immediately; rejected candidates are retried up to `max_attempts` times.
    pub async fn acquire(
        &self,
        difficulty: Difficulty,
        guard: &GenerationGuard,
    ) -> Result<ValidatedLocation, LocationError> {
        for attempt in 1..=self.max_attempts {
            if guard.is_superseded() {
                return Err(LocationError::Superseded);
            }
            let candidate = self
                .provider
                .candidate(difficulty)
                .await
                .map_err(LocationError::ProviderUnavailable)?;
            match self.validate(candidate).await {
                Ok(country_name) => {
                    tracing::info!(
                        task = "location_acquisition",
                        difficulty = difficulty.as_str(),
                        generation = guard.generation(),
                        attempts = attempt,
                        country = %country_name,
                    );
                    return Ok(ValidatedLocation {
                        location: candidate,
                        country_name,
                        heading: rand::thread_rng().gen_range(0.0..360.0),
                    });
                }
                Err(rejection) => {
                    tracing::debug!(
                        attempt,
                        lat = candidate.lat,
                        lng = candidate.lng,
                        "Rejected candidate location: {rejection}"
                    );
                }
            }
        }
        Err(LocationError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    async fn validate(&self, candidate: LatLng) -> Result<String, ValidationRejection> {
        let covered = self
            .coverage
            .has_coverage(candidate, PANORAMA_SEARCH_RADIUS_M)
            .await
            .map_err(ValidationRejection::CoverageCheckFailed)?;
        if !covered {
            return Err(ValidationRejection::NoCoverage);
        }
        self.geocoder
            .country_name(candidate)
            .await
            .map_err(ValidationRejection::GeocodingFailed)?
            .filter(|name| !name.trim().is_empty())
            .ok_or(ValidationRejection::NoCountry)
    }
}
