//! reqwest-backed [`VoterApi`].

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    ApiError, ApiResult, HealthStatus, RegistrationReceipt, VoterApi, VoterRecord,
    VoterRegistration, classify_reqwest_error,
};
use crate::config::Config;

/// Standard User-Agent header for backend requests.
pub const USER_AGENT: &str = concat!("ballot/", env!("CARGO_PKG_VERSION"));

const VOTERS_PATH: &str = "/voters";
const REGISTER_PATH: &str = "/register_voter";
const HEALTH_PATH: &str = "/health";

/// HTTP client for the voting backend.
#[derive(Debug, Clone)]
pub struct HttpVoterApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpVoterApi {
    /// Creates a client for `base_url` with an optional request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Creates a client from the effective config values.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the client cannot be built.
    pub fn from_config(config: &Config, api_url_override: Option<&str>) -> Result<Self> {
        let base_url = config.effective_api_url(api_url_override)?;
        Self::new(&base_url, config.api.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body));
        }
        let body = response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::parse(format!("Invalid response body: {e}")))
    }
}

#[async_trait]
impl VoterApi for HttpVoterApi {
    async fn list_voters(&self) -> ApiResult<Vec<VoterRecord>> {
        let url = self.url(VOTERS_PATH);
        debug!(%url, "fetching voter roster");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        let voters: Vec<VoterRecord> = Self::decode(response).await?;
        debug!(count = voters.len(), "voter roster loaded");
        Ok(voters)
    }

    async fn register_voter(&self, draft: &VoterRegistration) -> ApiResult<RegistrationReceipt> {
        let url = self.url(REGISTER_PATH);
        debug!(%url, "submitting voter registration");
        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        Self::decode(response).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let url = self.url(HEALTH_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{ApiErrorKind, VoterStatus};

    fn draft() -> VoterRegistration {
        VoterRegistration {
            id: "V1".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            place: "London".into(),
            age: "36".into(),
        }
    }

    #[tokio::test]
    async fn test_list_voters_decodes_roster() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/voters"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "hashed_id": "h1",
                    "original_id": "V1",
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "place": "London",
                    "age": "36",
                    "status": "Active"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&server.uri(), None).unwrap();
        let voters = api.list_voters().await.unwrap();

        assert_eq!(voters.len(), 1);
        assert_eq!(voters[0].original_id, "V1");
        assert_eq!(voters[0].status, VoterStatus::Active);
    }

    #[tokio::test]
    async fn test_list_voters_non_ok_is_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/voters"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "Server error: boom"})),
            )
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&server.uri(), None).unwrap();
        let err = api.list_voters().await.unwrap_err();

        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.status, Some(500));
    }

    #[tokio::test]
    async fn test_list_voters_garbage_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/voters"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&server.uri(), None).unwrap();
        let err = api.list_voters().await.unwrap_err();

        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_register_voter_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register_voter"))
            .and(body_json(json!({
                "id": "V1",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "place": "London",
                "age": "36"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Registration submitted successfully. Waiting for admin approval.",
                "hashed_id": "abc123"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&format!("{}/", server.uri()), None).unwrap();
        let receipt = api.register_voter(&draft()).await.unwrap();

        assert_eq!(receipt.hashed_id.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_register_voter_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register_voter"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"message": "Voter ID already registered"})),
            )
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&server.uri(), None).unwrap();
        let err = api.register_voter(&draft()).await.unwrap_err();

        assert!(err.is_http_status());
        assert_eq!(err.server_message(), Some("Voter ID already registered"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop a listener so the port refuses connections.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let api =
            HttpVoterApi::new(&format!("http://127.0.0.1:{port}"), Some(Duration::from_secs(5)))
                .unwrap();
        let err = api.list_voters().await.unwrap_err();

        assert_eq!(err.kind, ApiErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_health_decodes_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "healthy", "timestamp": 1_700_000_000.5})),
            )
            .mount(&server)
            .await;

        let api = HttpVoterApi::new(&server.uri(), None).unwrap();
        let health = api.health().await.unwrap();

        assert_eq!(health.status, "healthy");
    }
}
