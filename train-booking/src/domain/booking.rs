//! Booking types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StationId;

/// Error returned when parsing an unknown payment method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {input}")]
pub struct InvalidPaymentMethod {
    input: String,
}

/// How a booking is paid for.
///
/// The wire strings ("Credit Card", "Cash") are what the backend expects
/// in the booking request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Cash at the counter.
    Cash,
}

impl PaymentMethod {
    /// Returns the wire representation of the payment method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = InvalidPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit card" | "credit-card" | "card" => Ok(PaymentMethod::CreditCard),
            "cash" => Ok(PaymentMethod::Cash),
            _ => Err(InvalidPaymentMethod {
                input: s.to_string(),
            }),
        }
    }
}

/// A confirmed reservation, mirrored locally for display.
///
/// The authoritative copy lives on the backend; this is the normalized
/// shape appended to the session's booking list after a successful
/// submission. Only server-confirmed bookings exist locally, so
/// `booking_id` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Backend-assigned booking identifier.
    pub booking_id: String,
    /// Origin station reference.
    pub departure: StationId,
    /// Destination station reference.
    pub arrival: StationId,
    /// Name of the train, or a placeholder when the backend omits it.
    pub train_name: String,
    /// Seat number, or a placeholder when the backend omits it.
    pub seat_number: String,
    /// How the booking was paid for.
    pub payment_method: PaymentMethod,
    /// Total cost at submission time; strictly positive.
    pub total_cost: f64,
    /// When the booking was created.
    #[serde(rename = "date")]
    pub booked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_wire_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"Credit Card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"Cash\""
        );

        let card: PaymentMethod = serde_json::from_str("\"Credit Card\"").unwrap();
        assert_eq!(card, PaymentMethod::CreditCard);
    }

    #[test]
    fn payment_method_from_str() {
        assert_eq!(
            "credit-card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "Credit Card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("CASH".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn booking_serializes_with_wire_field_names() {
        let booking = Booking {
            booking_id: "b1".to_string(),
            departure: StationId::new("s1"),
            arrival: StationId::new("s2"),
            train_name: "Coastal Express".to_string(),
            seat_number: "12A".to_string(),
            payment_method: PaymentMethod::Cash,
            total_cost: 420.5,
            booked_at: "2024-05-01T09:30:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["bookingId"], "b1");
        assert_eq!(value["departure"], "s1");
        assert_eq!(value["arrival"], "s2");
        assert_eq!(value["trainName"], "Coastal Express");
        assert_eq!(value["seatNumber"], "12A");
        assert_eq!(value["paymentMethod"], "Cash");
        assert_eq!(value["totalCost"], 420.5);
        assert!(value["date"].is_string());
    }
}
