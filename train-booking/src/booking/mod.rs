//! Booking creation and display.
//!
//! The submitter walks one booking through validation, remote creation,
//! and the local session mirror update; the client also serves the
//! peripheral display listings (customer bookings, tickets).

mod client;
mod error;
mod submit;
mod types;

pub use client::{BookingClient, BookingClientConfig};
pub use error::{BookingError, ValidationError};
pub use submit::{BookingSubmitter, SubmitPhase};
pub use types::{
    BookingRequest, BookingsResponse, CreateBookingBody, CreatedBookingDto, CustomerBookingDto,
    PLACEHOLDER_SEAT_NUMBER, PLACEHOLDER_TRAIN_NAME, StationRefDto, TicketDto, TicketSelection,
    TicketsResponse, TrainDto,
};
