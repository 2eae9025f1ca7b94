//! Low-level HTTP client: `NftStorageHttp`.
//!
//! One method per remote endpoint. Requests are sent once: no retries, and no
//! timeout beyond what the caller configures on the transport.

use crate::auth::AuthRequest;
use crate::error::HttpError;
use crate::nft::wire::UploadResponse;
use crate::shared::RootCid;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Content type of CAR uploads.
pub const CONTENT_TYPE_CAR: &str = "application/car";

/// Low-level HTTP client for the auth service and NFT.Storage.
#[derive(Debug, Clone)]
pub struct NftStorageHttp {
    auth_endpoint: String,
    api_url: String,
    client: Client,
}

impl NftStorageHttp {
    pub fn new(auth_endpoint: &str, api_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(auth_endpoint, api_url, None)
    }

    pub fn with_timeout(
        auth_endpoint: &str,
        api_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            auth_endpoint: auth_endpoint.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn auth_endpoint(&self) -> &str {
        &self.auth_endpoint
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    /// Exchange a signed put request for an upload token.
    pub async fn request_upload_token(&self, request: &AuthRequest) -> Result<String, HttpError> {
        let mut req = self.client.post(&self.auth_endpoint);
        for (name, value) in &request.headers {
            req = req.header(*name, value.as_str());
        }

        tracing::debug!(url = %self.auth_endpoint, "Requesting upload token");
        let resp = ensure_success(req.body(request.body.clone()).send().await?)?;
        let body = resp.bytes().await?;
        parse_token(&body)
    }

    // ── Storage ──────────────────────────────────────────────────────────

    /// Upload one CAR to NFT.Storage with a bearer token. Returns the root CID
    /// reported by the service.
    pub async fn upload_car(&self, token: &str, car: &[u8]) -> Result<RootCid, HttpError> {
        let url = format!("{}/upload", self.api_url);

        tracing::debug!(url = %url, bytes = car.len(), "Uploading CAR");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, CONTENT_TYPE_CAR)
            .body(car.to_vec())
            .send()
            .await?;
        let resp = ensure_success(resp)?;

        let body = resp.bytes().await?;
        let parsed: UploadResponse = serde_json::from_slice(&body)
            .map_err(|e| HttpError::MalformedResponse(format!("invalid upload response: {}", e)))?;

        match parsed {
            UploadResponse {
                ok: true,
                value: Some(value),
                ..
            } => Ok(value.cid),
            UploadResponse { error, .. } => Err(HttpError::MalformedResponse(format!(
                "upload not acknowledged: {}",
                error.map(|e| e.to_string()).unwrap_or_else(|| "no cid".to_string())
            ))),
        }
    }
}

/// Reject non-2xx responses without touching the body.
fn ensure_success(resp: Response) -> Result<Response, HttpError> {
    let status = resp.status();
    tracing::debug!(status = status.as_u16(), "Response received");
    if status.is_success() {
        return Ok(resp);
    }
    Err(HttpError::Request {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

/// Extract a string `token` field from an auth service response body.
pub(crate) fn parse_token(body: &[u8]) -> Result<String, HttpError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| HttpError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    match value.get("token") {
        Some(Value::String(token)) => Ok(token.clone()),
        _ => Err(HttpError::MalformedResponse(
            "no token in response body".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token(br#"{"token":"abc"}"#).unwrap(), "abc");
    }

    #[test]
    fn test_parse_token_missing_field() {
        assert!(matches!(
            parse_token(br#"{"nottoken":"x"}"#),
            Err(HttpError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_token_non_string() {
        assert!(matches!(
            parse_token(br#"{"token":42}"#),
            Err(HttpError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_token_not_json() {
        assert!(matches!(
            parse_token(b"<html>oops</html>"),
            Err(HttpError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let http = NftStorageHttp::new("http://auth.local/x", "http://api.local/").unwrap();
        assert_eq!(http.api_url(), "http://api.local");
        assert_eq!(http.auth_endpoint(), "http://auth.local/x");
    }
}
