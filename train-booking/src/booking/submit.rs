//! Booking submission workflow.
//!
//! One pass through `Idle → Validating → Submitting → {Succeeded, Failed}`
//! per call, ending back in `Idle` once the outcome is surfaced.
//! Preconditions are checked before any network traffic; a validation
//! failure makes zero HTTP requests and leaves the session untouched.

use chrono::Utc;

use crate::domain::{Booking, PaymentMethod, StationId};
use crate::session::SessionStore;

use super::client::BookingClient;
use super::error::{BookingError, ValidationError};
use super::types::BookingRequest;

/// Where a submitter currently is in the workflow.
///
/// Callers use this to disable the triggering action while a submission is
/// in flight; a submission cannot be cancelled once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// No submission in progress.
    #[default]
    Idle,
    /// Checking preconditions; no request sent yet.
    Validating,
    /// Request in flight.
    Submitting,
}

/// Orchestrates validation, remote booking creation, and the local
/// session mirror update.
///
/// `submit` takes `&mut self`, so a single submitter cannot run two
/// submissions concurrently; the phase is observable for UI gating.
#[derive(Debug)]
pub struct BookingSubmitter {
    client: BookingClient,
    phase: SubmitPhase,
}

impl BookingSubmitter {
    /// Create a submitter around a booking client.
    pub fn new(client: BookingClient) -> Self {
        Self {
            client,
            phase: SubmitPhase::Idle,
        }
    }

    /// Current workflow phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Submit a booking.
    ///
    /// Preconditions, checked in order with no network call on failure:
    /// origin differs from destination, the quoted cost is finite and
    /// positive, and `store` holds a live session with a customer id and
    /// bearer token. On success the confirmed booking is appended to the
    /// session mirror and the session is persisted before the booking is
    /// returned. On any failure the local state is left unchanged.
    pub async fn submit(
        &mut self,
        store: &SessionStore,
        from: &StationId,
        to: &StationId,
        payment_method: PaymentMethod,
        total_cost: f64,
    ) -> Result<Booking, BookingError> {
        self.phase = SubmitPhase::Validating;
        let outcome = self.run(store, from, to, payment_method, total_cost).await;
        self.phase = SubmitPhase::Idle;

        match &outcome {
            Ok(booking) => tracing::info!(booking_id = %booking.booking_id, "booking created"),
            Err(e) => tracing::warn!(error = %e, "booking submission failed"),
        }

        outcome
    }

    async fn run(
        &mut self,
        store: &SessionStore,
        from: &StationId,
        to: &StationId,
        payment_method: PaymentMethod,
        total_cost: f64,
    ) -> Result<Booking, BookingError> {
        if from == to {
            return Err(ValidationError::SameStation.into());
        }

        if !total_cost.is_finite() || total_cost <= 0.0 {
            return Err(ValidationError::InvalidTotalCost.into());
        }

        let mut session = store
            .load_session()?
            .ok_or(ValidationError::NotLoggedIn)?;

        if !session.has_credentials() {
            return Err(ValidationError::NotLoggedIn.into());
        }

        let request = BookingRequest {
            customer_id: session.customer.id.clone(),
            from: from.clone(),
            to: to.clone(),
            payment_method,
            total_cost,
            tickets: Vec::new(),
        };

        self.phase = SubmitPhase::Submitting;

        let created = self
            .client
            .create_booking(&session.access_token, &request)
            .await?;

        let booking = created.into_booking(&request, Utc::now())?;

        session.append_booking(booking.clone());
        store.save_session(&session)?;

        Ok(booking)
    }
}
