//! Login and feedback API client.

use serde::Deserialize;

use super::error::AccountError;
use super::types::{FeedbackRequest, LoginRequest, LoginResponse};

/// Fallback message when a login error body carries no `message` field.
const GENERIC_LOGIN_FAILURE: &str = "login failed, please try again";

/// Error body shape used by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Configuration for the account API client.
#[derive(Debug, Clone)]
pub struct AccountClientConfig {
    /// Base URL of the booking backend.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl AccountClientConfig {
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

/// Client for the unauthenticated account endpoints.
#[derive(Debug, Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    /// Create a new account client.
    pub fn new(config: AccountClientConfig) -> Result<Self, AccountError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Log in and return the backend's response.
    ///
    /// The caller turns the response into a session and persists it; see
    /// [`LoginResponse::into_session`].
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AccountError> {
        request.validate()?;

        let url = format!("{}/users/login", self.base_url);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| GENERIC_LOGIN_FAILURE.to_string());
            return Err(AccountError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AccountError::Json {
            message: e.to_string(),
        })
    }

    /// Send a feedback message.
    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> Result<(), AccountError> {
        let url = format!("{}/feedback", self.base_url);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "failed to submit feedback".to_string());
            return Err(AccountError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login_request() -> LoginRequest {
        LoginRequest {
            phone: "0300-1234567".to_string(),
            email: "asha@example.com".to_string(),
            name: "Asha".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn config_defaults() {
        let config = AccountClientConfig::new("http://localhost:8080/api");
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn login_returns_the_token_and_customer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .and(body_json(serde_json::json!({
                "phone": "0300-1234567",
                "email": "asha@example.com",
                "name": "Asha",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "accessToken": "tok-1",
                "customer": {
                    "id": "c1",
                    "name": "Asha",
                    "email": "asha@example.com",
                    "phone": "0300-1234567"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AccountClient::new(AccountClientConfig::new(server.uri())).unwrap();
        let response = client.login(&login_request()).await.unwrap();

        assert_eq!(response.access_token, "tok-1");
        assert_eq!(response.customer.id, "c1");
    }

    #[tokio::test]
    async fn login_surfaces_the_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "message": "wrong password" })),
            )
            .mount(&server)
            .await;

        let client = AccountClient::new(AccountClientConfig::new(server.uri())).unwrap();
        let err = client.login(&login_request()).await.unwrap_err();

        match err {
            AccountError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "wrong password");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_fields_fail_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = AccountClient::new(AccountClientConfig::new(server.uri())).unwrap();

        let mut request = login_request();
        request.password.clear();

        let err = client.login(&request).await.unwrap_err();
        assert!(matches!(err, AccountError::MissingFields));
    }

    #[tokio::test]
    async fn feedback_posts_the_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/feedback"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = AccountClient::new(AccountClientConfig::new(server.uri())).unwrap();
        client
            .submit_feedback(&FeedbackRequest {
                name: Some("Asha".to_string()),
                email: None,
                message: "Great service".to_string(),
            })
            .await
            .unwrap();
    }
}
