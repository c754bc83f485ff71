//! Account wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Customer;
use crate::session::UserSession;

use super::error::AccountError;

/// Body of `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

impl LoginRequest {
    /// All four fields are required; checked before any request is sent.
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.phone.is_empty()
            || self.email.is_empty()
            || self.name.is_empty()
            || self.password.is_empty()
        {
            return Err(AccountError::MissingFields);
        }
        Ok(())
    }
}

/// `POST /users/login` success body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub customer: Customer,
}

impl LoginResponse {
    /// Turn a successful login into a fresh local session.
    pub fn into_session(self, logged_in_at: DateTime<Utc>) -> UserSession {
        UserSession::new(self.access_token, self.customer, self.message, logged_in_at)
    }
}

/// Body of `POST /feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LoginRequest {
        LoginRequest {
            phone: "0300-1234567".to_string(),
            email: "asha@example.com".to_string(),
            name: "Asha".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn complete_request_validates() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn any_empty_field_is_rejected() {
        for field in ["phone", "email", "name", "password"] {
            let mut req = request();
            match field {
                "phone" => req.phone.clear(),
                "email" => req.email.clear(),
                "name" => req.name.clear(),
                _ => req.password.clear(),
            }
            assert!(
                matches!(req.validate(), Err(AccountError::MissingFields)),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn login_response_becomes_a_session() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "message": "Login successful",
                "accessToken": "tok-1",
                "customer": {
                    "id": "c1",
                    "name": "Asha",
                    "email": "asha@example.com",
                    "phone": "0300-1234567"
                }
            }"#,
        )
        .unwrap();

        let at: DateTime<Utc> = "2024-05-01T09:00:00Z".parse().unwrap();
        let session = response.into_session(at);

        assert_eq!(session.access_token, "tok-1");
        assert_eq!(session.customer.id, "c1");
        assert_eq!(session.message.as_deref(), Some("Login successful"));
        assert_eq!(session.timestamp, at);
        assert!(session.bookings.is_empty());
        assert!(session.has_credentials());
    }
}
