use thiserror::Error;

/// Failure to talk to one of the external location services.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No candidate locations for difficulty `{0}`")]
    NoCandidates(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            OracleError::Parse(err.to_string())
        } else {
            OracleError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for OracleError {
    fn from(err: serde_json::Error) -> Self {
        OracleError::Parse(err.to_string())
    }
}

/// Why a candidate location was thrown away. Rejections are retried, never surfaced.
#[derive(Debug, Error)]
pub enum ValidationRejection {
    #[error("no outdoor panorama nearby")]
    NoCoverage,

    #[error("coverage check failed: {0}")]
    CoverageCheckFailed(OracleError),

    #[error("no country at this location")]
    NoCountry,

    #[error("reverse geocoding failed: {0}")]
    GeocodingFailed(OracleError),
}

#[derive(Debug, Error)]
pub enum LocationError {
    /// The location provider itself could not be reached.
    #[error("location service unavailable: {0}")]
    ProviderUnavailable(OracleError),

    #[error("no valid location found after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// A newer round was started while this acquisition was in flight.
    #[error("location acquisition was superseded")]
    Superseded,
}

#[derive(Debug, Error)]
pub enum LocationsFileError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} of the locations file is not a valid location: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line} of the locations file has out-of-range coordinates")]
    OutOfRange { line: usize },

    #[error("the locations file is empty")]
    Empty,
}
