use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use thiserror::Error;

/// Production endpoint for homework review statuses.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the review API: {0}")]
    Connectivity(String),
    #[error("endpoint {url} returned status {status} for from_date={from_date}")]
    HttpStatus {
        status: u16,
        url: String,
        from_date: i64,
    },
    #[error("response body is not valid JSON: {0}")]
    Body(String),
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    pub token: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches the raw review-status document for a given cursor.
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

/// `StatusApi` backed by the Practicum HTTP endpoint.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl PracticumClient {
    /// Builds the underlying HTTP client. A hung transport call would block
    /// the whole loop, so both timeouts are always set.
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Connectivity(err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl StatusApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        log::debug!("requesting homework statuses, from_date={from_date}");
        let response = self
            .client
            .get(&self.settings.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.settings.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| ApiError::Connectivity(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                url: self.settings.endpoint.clone(),
                from_date,
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Body(err.to_string()))
    }
}
