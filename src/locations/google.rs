use crate::locations::consts::{HTTP_TIMEOUT_SECS, PANORAMA_SOURCE};
use crate::locations::errors::OracleError;
use crate::locations::interface::{PanoramaCoverage, ReverseGeocoder};
use crate::map::models::LatLng;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_FOUND: &str = "NOT_FOUND";
const COUNTRY_COMPONENT_TYPE: &str = "country";

/// Thin client for the Street View metadata and Geocoding web services.
#[derive(Clone)]
pub struct GoogleMapsClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl GoogleMapsClient {
    /// `base_url` must end with a slash, e.g. `https://maps.googleapis.com/maps/api/`.
    pub fn new(base_url: Url, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            api_key,
        }
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T, OracleError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|err| OracleError::Parse(err.to_string()))?;
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
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
        Ok(response.json().await?)
    }
}

fn as_query_value(location: LatLng) -> String {
    format!("{},{}", location.lat, location.lng)
}

#[derive(Debug, Deserialize)]
struct StreetViewMetadata {
    status: String,
}

#[async_trait]
impl PanoramaCoverage for GoogleMapsClient {
    async fn has_coverage(&self, location: LatLng, radius_m: f64) -> Result<bool, OracleError> {
        let metadata: StreetViewMetadata = self
            .get(
                "streetview/metadata",
                &[
                    ("location", as_query_value(location)),
                    ("radius", radius_m.to_string()),
                    ("source", PANORAMA_SOURCE.to_string()),
                ],
            )
            .await?;
        match metadata.status.as_str() {
            STATUS_OK => Ok(true),
            STATUS_ZERO_RESULTS | STATUS_NOT_FOUND => Ok(false),
            other => Err(OracleError::Api {
                status: other.to_string(),
                message: String::from("Street View metadata request was not fulfilled."),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) results: Vec<GeocodingResult>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResult {
    #[serde(default)]
    pub(crate) address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddressComponent {
    pub(crate) long_name: String,
    #[serde(default)]
    pub(crate) types: Vec<String>,
}

impl GeocodingResponse {
    /// Only the first (most specific) result is considered.
    pub(crate) fn into_country_name(self) -> Result<Option<String>, OracleError> {
        match self.status.as_str() {
            STATUS_OK => Ok(self.results.into_iter().next().and_then(|result| {
                result
                    .address_components
                    .into_iter()
                    .find(|component| {
                        component
                            .types
                            .iter()
                            .any(|kind| kind == COUNTRY_COMPONENT_TYPE)
                    })
                    .map(|component| component.long_name)
                    .filter(|name| !name.trim().is_empty())
            })),
            STATUS_ZERO_RESULTS => Ok(None),
            other => Err(OracleError::Api {
                status: other.to_string(),
                message: self.error_message.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for GoogleMapsClient {
    async fn country_name(&self, location: LatLng) -> Result<Option<String>, OracleError> {
        let response: GeocodingResponse = self
            .get("geocode/json", &[("latlng", as_query_value(location))])
            .await?;
        response.into_country_name()
    }
}
