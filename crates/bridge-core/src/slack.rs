//! Slack Web API dispatcher for handoff notifications.
//!
//! Delivery is best-effort: one `chat.postMessage` call, no retry. Failures are
//! classified as [`DispatchError`] for the logs, then collapsed to `false` by
//! [`SlackNotifier::dispatch`].

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://slack.com/api";
pub const DEFAULT_CHANNEL: &str = "#general";
pub const DEFAULT_USERNAME: &str = "Bridge POD Bot";
pub const DEFAULT_ICON_EMOJI: &str = ":bridge:";

// ---------------------------------------------------------------------------
// SlackConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub bot_token: String,
    pub channel_id: String,
    /// Accepted for parity with the Slack app settings; request signing is not verified.
    pub signing_secret: Option<String>,
    pub api_base: String,
    pub username: String,
    pub icon_emoji: String,
}

impl SlackConfig {
    pub fn new(bot_token: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            channel_id: channel_id.into(),
            signing_secret: None,
            api_base: DEFAULT_API_BASE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            icon_emoji: DEFAULT_ICON_EMOJI.to_string(),
        }
    }

    /// Builder: point at a different API root (tests, proxies).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_signing_secret(mut self, secret: Option<String>) -> Self {
        self.signing_secret = secret;
        self
    }

    /// Reject settings that cannot produce a request at all.
    pub fn validate(&self) -> Result<()> {
        if self.channel_id.trim().is_empty() {
            return Err(BridgeError::Config("Slack channel id is empty".into()));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(BridgeError::Config(format!(
                "Slack API base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        Ok(())
    }

    pub fn has_token(&self) -> bool {
        !self.bot_token.trim().is_empty()
    }

    fn post_message_url(&self) -> String {
        format!("{}/chat.postMessage", self.api_base.trim_end_matches('/'))
    }
}

// ---------------------------------------------------------------------------
// DispatchError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request to Slack timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("Slack returned HTTP {0}")]
    Status(u16),

    #[error("Slack rejected the message: {0}")]
    Rejected(String),

    #[error("unexpected Slack response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DispatchError::Timeout
        } else {
            DispatchError::Transport(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
    username: &'a str,
    icon_emoji: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

// ---------------------------------------------------------------------------
// SlackNotifier
// ---------------------------------------------------------------------------

pub struct SlackNotifier {
    config: SlackConfig,
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(config: SlackConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Post `text` to the configured channel.
    ///
    /// Succeeds only on a 2xx response whose body carries `"ok": true`.
    pub async fn post_message(&self, text: &str) -> std::result::Result<(), DispatchError> {
        let payload = PostMessage {
            channel: &self.config.channel_id,
            text,
            username: &self.config.username,
            icon_emoji: &self.config.icon_emoji,
        };

        let response = self
            .client
            .post(self.config.post_message_url())
            .bearer_auth(&self.config.bot_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))?;
        if !parsed.ok {
            return Err(DispatchError::Rejected(
                parsed.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        tracing::debug!(channel = %self.config.channel_id, "slack message posted");
        Ok(())
    }

    /// Fire-and-forget wrapper around [`post_message`](Self::post_message).
    pub async fn dispatch(&self, text: &str) -> bool {
        match self.post_message(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(channel = %self.config.channel_id, error = %e, "slack dispatch failed");
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
