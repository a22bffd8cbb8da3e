//! Twitch channel points client library.
//!
//! Provides typed access to the Helix custom reward and redemption
//! endpoints on top of a pluggable, pre-authenticated transport.

pub mod api;

use serde::{Deserialize, Serialize};

/// Token data for OAuth authentication.
///
/// Acquiring and refreshing tokens is the caller's job; the transport only
/// attaches `access_token` to outgoing requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_at: i64,
}

impl Token {
    /// Whether the space-separated scope list contains `scope`.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|s| s == scope)
    }
}

/// Unified error type for the channel-points crate.
#[derive(Debug, thiserror::Error)]
pub enum TwitchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Twitch API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Response from {path} contained no data")]
    EmptyData { path: &'static str },

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TwitchError {
    /// HTTP status reported by the server, if this error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TwitchError::ApiError { status, .. } => Some(*status),
            TwitchError::NotFound { .. } => Some(404),
            TwitchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-provided message for API errors.
    pub fn message(&self) -> Option<&str> {
        match self {
            TwitchError::ApiError { message, .. } | TwitchError::NotFound { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// Whether the response arrived but did not have the expected shape.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, TwitchError::Json(_) | TwitchError::EmptyData { .. })
    }
}

/// Scope required to create, update and delete rewards and to update redemptions.
pub const MANAGE_REDEMPTIONS_SCOPE: &str = "channel:manage:redemptions";

/// Scope required to list rewards and redemptions.
pub const READ_REDEMPTIONS_SCOPE: &str = "channel:read:redemptions";
