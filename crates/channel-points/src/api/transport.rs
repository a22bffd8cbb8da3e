use std::future::Future;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use super::HelixConfig;
use super::models::RateLimit;
use crate::{Token, TwitchError};

/// Wire form of one Helix call.
///
/// `path` is relative to the Helix root. Query pairs keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixRequest {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl HelixRequest {
    /// First query value for `key`, if present.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Undecoded response as handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub rate_limit: Option<RateLimit>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            rate_limit: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An authenticated channel to the Helix API.
///
/// Implementations own connection handling, auth headers and timeouts.
/// Any status code the server returns is a successful `execute`; only
/// failures to obtain a response are errors.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HelixRequest,
    ) -> impl Future<Output = Result<RawResponse, TwitchError>> + Send;
}

/// reqwest-backed [`Transport`] with Bearer token + Client-Id header injection.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpTransport {
    pub fn new(config: HelixConfig, token: &Token) -> Result<Self, TwitchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            headers: auth_headers(&config.client_id, token)?,
            base_url: config.base_url,
        })
    }

    fn url_for(&self, request: &HelixRequest) -> Result<Url, TwitchError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, request.path))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                request
                    .query
                    .iter()
                    .map(|(key, value)| (*key, value.as_str())),
            );
        }
        Ok(url)
    }
}

/// Build auth headers from the given token.
fn auth_headers(client_id: &str, token: &Token) -> Result<HeaderMap, TwitchError> {
    let mut headers = HeaderMap::new();
    let bearer = format!("Bearer {}", token.access_token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&bearer)
            .map_err(|_| TwitchError::InvalidHeader("access token".into()))?,
    );
    headers.insert(
        "Client-Id",
        HeaderValue::from_str(client_id)
            .map_err(|_| TwitchError::InvalidHeader("client id".into()))?,
    );
    Ok(headers)
}

impl Transport for HttpTransport {
    async fn execute(&self, request: HelixRequest) -> Result<RawResponse, TwitchError> {
        let url = self.url_for(&request)?;
        tracing::debug!(method = %request.method, path = request.path, "Sending Helix request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(self.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await?;

        let status = resp.status();
        let rate_limit = RateLimit::from_headers(resp.headers());
        let body = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(
                path = request.path,
                "Got 401, caller should refresh token and retry"
            );
        }

        Ok(RawResponse {
            status: status.as_u16(),
            rate_limit,
            body,
        })
    }
}

impl RateLimit {
    /// Read the `Ratelimit-*` headers; `None` unless all three are present.
    pub(super) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<u64> { headers.get(name)?.to_str().ok()?.parse().ok() };
        Some(Self {
            limit: read("ratelimit-limit")?,
            remaining: read("ratelimit-remaining")?,
            reset: read("ratelimit-reset")?,
        })
    }
}
