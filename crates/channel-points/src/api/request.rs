use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::*;

/// A Helix operation: where it goes, how its parameters split between the
/// query string and the JSON body, and how its response payload decodes.
///
/// Adding an operation means implementing this for a new parameter type;
/// [`TwitchApiClient::send`] supplies the control flow.
pub trait Endpoint {
    type Payload;

    const METHOD: Method;
    const PATH: &'static str;

    /// Query-string fields, in the order they are sent.
    fn query(&self) -> Vec<(&'static str, String)>;

    /// JSON body fields. Endpoints without a body keep the default.
    fn body(&self) -> Result<Option<serde_json::Value>, TwitchError> {
        Ok(None)
    }

    /// Decode a successful response body.
    fn decode(body: &str) -> Result<Self::Payload, TwitchError>;

    /// Wire form of this call.
    fn to_request(&self) -> Result<HelixRequest, TwitchError> {
        Ok(HelixRequest {
            method: Self::METHOD,
            path: Self::PATH,
            query: self.query(),
            body: self.body()?,
        })
    }
}

/// Helix `{"data": [...]}` wrapper.
#[derive(Debug, Deserialize)]
struct HelixData<T> {
    data: Vec<T>,
}

/// Helix `{"data": [...], "pagination": {...}}` wrapper.
#[derive(Debug, Deserialize)]
struct HelixPaginatedData<T> {
    data: Vec<T>,
    #[serde(default)]
    pagination: Option<HelixPagination>,
}

/// Helix error body, e.g. `{"error":"Bad Request","status":400,"message":"..."}`.
#[derive(Debug, Deserialize)]
struct HelixErrorBody {
    #[serde(default)]
    message: String,
}

/// Decode every element of `data`.
pub(super) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, TwitchError> {
    let resp: HelixData<T> = serde_json::from_str(body)?;
    Ok(resp.data)
}

/// Decode the single resource a create/update call echoes back.
pub(super) fn decode_first<T: DeserializeOwned>(
    body: &str,
    path: &'static str,
) -> Result<T, TwitchError> {
    decode_list(body)?
        .into_iter()
        .next()
        .ok_or(TwitchError::EmptyData { path })
}

/// Decode a page of `data` plus its continuation cursor.
///
/// An empty cursor string is treated as the end of the listing.
pub(super) fn decode_page<T: DeserializeOwned>(
    body: &str,
) -> Result<(Vec<T>, Option<String>), TwitchError> {
    let resp: HelixPaginatedData<T> = serde_json::from_str(body)?;
    let cursor = resp
        .pagination
        .and_then(|p| p.cursor)
        .filter(|cursor| !cursor.is_empty());
    Ok((resp.data, cursor))
}

/// Map a non-2xx response to an error carrying the server's status and message.
pub(super) fn api_error(path: &str, resp: &RawResponse) -> TwitchError {
    let message = serde_json::from_str::<HelixErrorBody>(&resp.body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| resp.body.clone());

    tracing::warn!(path, status = resp.status, %message, "Helix request failed");

    if resp.status == 404 {
        TwitchError::NotFound { message }
    } else {
        TwitchError::ApiError {
            status: resp.status,
            message,
        }
    }
}

impl<T: Transport> TwitchApiClient<T> {
    /// Execute one endpoint call and wrap its decoded payload.
    pub async fn send<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<HelixResponse<E::Payload>, TwitchError> {
        let request = endpoint.to_request()?;
        let resp = self.transport.execute(request).await?;

        if !resp.is_success() {
            return Err(api_error(E::PATH, &resp));
        }

        tracing::debug!(path = E::PATH, status = resp.status, "Helix request succeeded");
        let data = E::decode(&resp.body)?;

        Ok(HelixResponse {
            common: ResponseCommon {
                status: resp.status,
                rate_limit: resp.rate_limit,
            },
            data,
        })
    }
}
