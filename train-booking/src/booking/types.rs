//! Booking wire types.
//!
//! Request bodies are explicit structs enumerating every field the
//! backend expects. Response DTOs use `Option` liberally because the
//! backend omits fields rather than sending null in many cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, PaymentMethod, StationId};

use super::error::BookingError;

/// Placeholder used when the backend omits the train name.
pub const PLACEHOLDER_TRAIN_NAME: &str = "Train Name";

/// Placeholder used when the backend omits the seat number.
pub const PLACEHOLDER_SEAT_NUMBER: &str = "N/A";

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Customer the booking is for.
    pub customer_id: String,
    /// Origin station id.
    pub from: StationId,
    /// Destination station id.
    pub to: StationId,
    /// Payment method, as its wire string.
    pub payment_method: PaymentMethod,
    /// Quoted total cost at submission time.
    pub total_cost: f64,
    /// Individual ticket selections. The current flow books without seat
    /// selection, so this is always sent empty.
    pub tickets: Vec<TicketSelection>,
}

/// A seat/class selection within a booking request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSelection {
    pub seat_number: String,
    pub class_type: String,
}

/// Booking record as returned by `POST /bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBookingDto {
    /// Backend booking id. Some deployments send `_id`, others `bookingId`.
    #[serde(rename = "_id", alias = "bookingId")]
    pub id: Option<String>,
    /// Origin station id.
    pub from: Option<String>,
    /// Destination station id.
    pub to: Option<String>,
    /// Train assigned to the booking, when the backend knows it.
    pub train_name: Option<String>,
    /// Seat assigned to the booking, when the backend knows it.
    pub seat_number: Option<String>,
    /// Creation time as an ISO 8601 string.
    pub date: Option<String>,
}

/// `POST /bookings` success body.
///
/// The backend is inconsistent about the envelope: some call sites return
/// the record nested under `booking`, others return it flat. Tolerating
/// both is an interim compatibility shim until the contract is settled.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreateBookingBody {
    Nested { booking: CreatedBookingDto },
    Flat(CreatedBookingDto),
}

impl CreateBookingBody {
    /// Unwrap whichever envelope the backend used.
    pub fn into_inner(self) -> CreatedBookingDto {
        match self {
            CreateBookingBody::Nested { booking } => booking,
            CreateBookingBody::Flat(booking) => booking,
        }
    }
}

impl CreatedBookingDto {
    /// Normalize a created-booking response into the local mirror shape.
    ///
    /// Default-substitution policy: the booking id is required (a success
    /// response without one is an error); origin/destination fall back to
    /// the submitted request; train name and seat number fall back to
    /// fixed placeholders; an absent or unparseable date falls back to
    /// `now`. Payment method and total cost always come from the request,
    /// which was validated before submission.
    pub fn into_booking(
        self,
        request: &BookingRequest,
        now: DateTime<Utc>,
    ) -> Result<Booking, BookingError> {
        let booking_id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(BookingError::MissingBookingId),
        };

        let booked_at = self
            .date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(now);

        Ok(Booking {
            booking_id,
            departure: self.from.map(StationId::new).unwrap_or_else(|| request.from.clone()),
            arrival: self.to.map(StationId::new).unwrap_or_else(|| request.to.clone()),
            train_name: self
                .train_name
                .unwrap_or_else(|| PLACEHOLDER_TRAIN_NAME.to_string()),
            seat_number: self
                .seat_number
                .unwrap_or_else(|| PLACEHOLDER_SEAT_NUMBER.to_string()),
            payment_method: request.payment_method,
            total_cost: request.total_cost,
            booked_at,
        })
    }
}

/// Station reference as populated in booking listings.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRefDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Booking record as returned by `GET /bookings/customer/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub from: StationRefDto,
    pub to: StationRefDto,
    pub total_cost: f64,
    pub payment_method: String,
}

/// Wrapper for the customer bookings response.
#[derive(Debug, Deserialize)]
pub struct BookingsResponse {
    #[serde(default)]
    pub bookings: Vec<CustomerBookingDto>,
}

/// Train reference as populated in ticket listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub train_number: String,
}

/// Ticket record as returned by `GET /tickets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_id: Option<String>,
    #[serde(rename = "trainId")]
    pub train: TrainDto,
    pub seat_number: String,
    pub class_type: String,
    pub price: f64,
    pub status: String,
    pub booking_date: String,
}

/// Wrapper for the tickets response.
#[derive(Debug, Deserialize)]
pub struct TicketsResponse {
    #[serde(default)]
    pub tickets: Vec<TicketDto>,
}
