//! Station listing API client.

use serde::Deserialize;

use super::error::StationError;

/// Wrapper for the `GET /stations` response.
#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    /// Human-readable status message; not used by the client.
    #[serde(default)]
    pub message: Option<String>,
    pub stations: Vec<StationDto>,
}

/// Station record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub location: LocationDto,
}

/// Nested location object on a station record.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDto {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub coordinates: CoordinatesDto,
}

/// Geographic coordinates as the backend sends them.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

/// Configuration for the station API client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL of the booking backend, e.g. `https://api.example.com/api`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set a custom request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the station listing endpoint.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new station client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full station set.
    ///
    /// One-shot call: on failure nothing is returned, there is no partial
    /// data. The caller replaces any previously fetched set wholesale.
    pub async fn fetch_all(&self) -> Result<Vec<StationDto>, StationError> {
        let url = format!("{}/stations", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let response: StationsResponse =
            serde_json::from_str(&body).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;

        tracing::debug!(count = response.stations.len(), "fetched stations");

        Ok(response.stations)
    }
}
