use serde::Serialize;
use thiserror::Error;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// A failed delivery attempt. Recoverable; never fatal to the loop.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("could not reach the Telegram API: {0}")]
    Connectivity(String),
    #[error("Telegram API returned status {0}")]
    HttpStatus(u16),
}

/// Delivers a notification text to a destination chat.
#[async_trait::async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// `MessageSender` backed by the Telegram Bot `sendMessage` method.
#[derive(Debug, Clone)]
pub struct TelegramSender {
    client: reqwest::Client,
    url: String,
}

impl TelegramSender {
    pub fn new(token: &str) -> Result<Self, SendError> {
        Self::with_api_base(TELEGRAM_API_BASE, token)
    }

    /// Points the sender at an alternate API host. Used by tests.
    pub fn with_api_base(base: &str, token: &str) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|err| SendError::Connectivity(err.to_string()))?;
        Ok(Self {
            client,
            url: format!("{base}/bot{token}/sendMessage"),
        })
    }
}

#[async_trait::async_trait]
impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.url)
            .json(&SendMessagePayload { chat_id, text })
            .send()
            .await
            .map_err(|err| SendError::Connectivity(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}
