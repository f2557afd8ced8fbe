use crate::game::models::Difficulty;
use crate::locations::consts::HTTP_TIMEOUT_SECS;
use crate::locations::errors::{LocationsFileError, OracleError};
use crate::locations::interface::LocationProvider;
use crate::map::models::LatLng;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Asks a remote service for a location: `GET <url>?difficulty=<difficulty>`.
pub struct HttpLocationProvider {
    client: reqwest::Client,
    url: Url,
}

#[derive(Debug, Deserialize)]
struct ProvidedLocation {
    latitude: f64,
    longitude: f64,
}

impl HttpLocationProvider {
    pub fn new(url: Url) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client, url }
    }
}

#[async_trait]
impl LocationProvider for HttpLocationProvider {
    async fn candidate(&self, difficulty: Difficulty) -> Result<LatLng, OracleError> {
        let response = self
            .client
            .get(self.url.clone())
            .query(&[("difficulty", difficulty.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16().to_string(),
                message,
            });
        }

        let provided: ProvidedLocation = response.json().await?;
        let location = LatLng::new(provided.latitude, provided.longitude);
        if !location.is_valid() {
            return Err(OracleError::Parse(format!(
                "provider returned out-of-range coordinates {location:?}"
            )));
        }
        Ok(location)
    }
}

#[derive(Debug, Deserialize)]
struct LocationsFileEntry {
    lat: f64,
    lng: f64,
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

/// Picks locations from a newline-delimited JSON file, one `{"lat", "lng", "difficulty"?}`
/// object per line. Untagged lines are eligible for every difficulty.
#[derive(Debug)]
pub struct NdjsonLocationProvider {
    locations: Vec<(LatLng, Option<Difficulty>)>,
}

impl NdjsonLocationProvider {
    pub fn from_file(path: &Path) -> Result<Self, LocationsFileError> {
        let file_reader = BufReader::new(File::open(path)?);
        let mut locations = Vec::new();
        for (index, line) in file_reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: LocationsFileEntry =
                serde_json::from_str(&line).map_err(|source| LocationsFileError::Parse {
                    line: index + 1,
                    source,
                })?;
            let location = LatLng::new(entry.lat, entry.lng);
            if !location.is_valid() {
                return Err(LocationsFileError::OutOfRange { line: index + 1 });
            }
            locations.push((location, entry.difficulty));
        }
        Self::from_locations(locations)
    }

    pub fn from_locations(
        locations: Vec<(LatLng, Option<Difficulty>)>,
    ) -> Result<Self, LocationsFileError> {
        if locations.is_empty() {
            return Err(LocationsFileError::Empty);
        }
        Ok(Self { locations })
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}

#[async_trait]
impl LocationProvider for NdjsonLocationProvider {
    async fn candidate(&self, difficulty: Difficulty) -> Result<LatLng, OracleError> {
        let eligible = self
            .locations
            .iter()
            .filter(|(_, tag)| tag.map_or(true, |tag| tag == difficulty))
            .map(|(location, _)| *location)
            .collect::<Vec<_>>();
        eligible
            .choose(&mut rand::thread_rng())
            .copied()
            .ok_or_else(|| OracleError::NoCandidates(difficulty.to_string()))
    }
}
