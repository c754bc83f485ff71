//! Booking API client.

use serde::Deserialize;

use super::error::BookingError;
use super::types::{
    BookingRequest, BookingsResponse, CreateBookingBody, CreatedBookingDto, CustomerBookingDto,
    TicketDto, TicketsResponse,
};

/// Fallback message when an error body carries no `message` field.
const GENERIC_FAILURE: &str = "booking failed";

/// Error body shape used by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract the server-provided failure message from an error body, falling
/// back to a generic one.
fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Configuration for the booking API client.
#[derive(Debug, Clone)]
pub struct BookingClientConfig {
    /// Base URL of the booking backend.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl BookingClientConfig {
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

/// Client for the booking endpoints.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    /// Create a new booking client.
    pub fn new(config: BookingClientConfig) -> Result<Self, BookingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Create a booking on the backend.
    ///
    /// One POST with the bearer credential attached. No idempotency key is
    /// generated, so retrying after a failure may create a duplicate
    /// server-side.
    pub async fn create_booking(
        &self,
        token: &str,
        request: &BookingRequest,
    ) -> Result<CreatedBookingDto, BookingError> {
        let url = format!("{}/bookings", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: failure_message(&body),
            });
        }

        let body = response.text().await?;

        let parsed: CreateBookingBody =
            serde_json::from_str(&body).map_err(|e| BookingError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.into_inner())
    }

    /// List the customer's bookings, for display.
    pub async fn bookings_for_customer(
        &self,
        token: &str,
        customer_id: &str,
    ) -> Result<Vec<CustomerBookingDto>, BookingError> {
        let url = format!("{}/bookings/customer/{}", self.base_url, customer_id);

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: failure_message(&body),
            });
        }

        let body = response.text().await?;

        let parsed: BookingsResponse =
            serde_json::from_str(&body).map_err(|e| BookingError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.bookings)
    }

    /// List all available tickets, for display.
    pub async fn fetch_tickets(&self) -> Result<Vec<TicketDto>, BookingError> {
        let url = format!("{}/tickets", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: failure_message(&body),
            });
        }

        let body = response.text().await?;

        let parsed: TicketsResponse =
            serde_json::from_str(&body).map_err(|e| BookingError::Json {
                message: e.to_string(),
            })?;

        Ok(parsed.tickets)
    }
}
