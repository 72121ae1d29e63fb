//! HTTP client for the extraction backend

use crate::api::base::ApiBase;
use crate::api::models::{ErrorBody, ExtractionRequest, ExtractionResult};
use crate::api::traits::ExtractApi;
use crate::utils::error::{ControllerError, PinloaderError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, warn};

const USER_AGENT: &str = concat!("pinloader/", env!("CARGO_PKG_VERSION"));

/// Client for `POST {base}/extract`. Cloning is cheap, the connection pool is
/// shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: ApiBase,
}

impl ApiClient {
    pub fn new(base: ApiBase) -> Result<Self, PinloaderError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Underlying HTTP client, shared with previews and downloads
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Ask the backend to resolve `url` into downloadable media
    pub async fn extract(&self, url: &str) -> Result<ExtractionResult, ControllerError> {
        let endpoint = self.base.extract_url();
        debug!("Requesting extraction from {} for {}", endpoint, url);

        let body = serde_json::to_vec(&ExtractionRequest {
            url: url.to_string(),
        })
        .map_err(|e| {
            error!("Failed to encode extraction request: {}", e);
            ControllerError::MalformedResponse
        })?;

        let response = self
            .http
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Extraction request to {} failed: {}", endpoint, e);
                ControllerError::NetworkUnreachable
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!("Failed to read extraction response body: {}", e);
            ControllerError::NetworkUnreachable
        })?;

        interpret_extract_response(status, &bytes)
    }
}

#[async_trait]
impl ExtractApi for ApiClient {
    async fn extract(&self, url: &str) -> Result<ExtractionResult, ControllerError> {
        ApiClient::extract(self, url).await
    }
}

/// Map a status and raw body from `/extract` onto the result or the
/// user-facing error.
pub fn interpret_extract_response(
    status: StatusCode,
    body: &[u8],
) -> Result<ExtractionResult, ControllerError> {
    if status.is_success() {
        return serde_json::from_slice::<ExtractionResult>(body).map_err(|e| {
            warn!("Backend returned unparseable extraction result: {}", e);
            ControllerError::MalformedResponse
        });
    }

    let detail = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(body) => body.message(),
        Err(e) => {
            warn!("Backend returned {} with an unparseable body: {}", status, e);
            return Err(ControllerError::MalformedResponse);
        }
    };

    match detail {
        Some(detail) => {
            debug!("Backend rejected extraction ({}): {}", status, detail);
            Err(ControllerError::ServerReported(detail))
        }
        None => {
            warn!("Backend returned {} without a detail message", status);
            Err(ControllerError::ServerReported(format!(
                "Could not retrieve the content (HTTP {}).",
                status.as_u16()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::MediaType;

    #[test]
    fn test_success_body_parses() {
        let body = br#"{"title":"Cat","thumbnail":"t.jpg","media_type":"video","links":[{"url":"v.mp4","ext":"mp4","label":"720p"}]}"#;
        let result = interpret_extract_response(StatusCode::OK, body).unwrap();
        assert_eq!(result.media_type, MediaType::Video);
        assert_eq!(result.links[0].quality_label(), "720p");
    }

    #[test]
    fn test_success_with_broken_json_is_malformed() {
        let err = interpret_extract_response(StatusCode::OK, b"<html>oops</html>").unwrap_err();
        assert_eq!(err, ControllerError::MalformedResponse);
    }

    #[test]
    fn test_error_detail_is_reported() {
        let err =
            interpret_extract_response(StatusCode::BAD_REQUEST, br#"{"detail":"bad url"}"#)
                .unwrap_err();
        assert_eq!(err.to_string(), "bad url");
    }

    #[test]
    fn test_error_without_detail_mentions_status() {
        let err = interpret_extract_response(StatusCode::BAD_GATEWAY, br#"{"detail":null}"#)
            .unwrap_err();
        match err {
            ControllerError::ServerReported(msg) => assert!(msg.contains("502")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_html_error_page_is_malformed() {
        let err = interpret_extract_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            b"<html>Internal Server Error</html>",
        )
        .unwrap_err();
        assert_eq!(err, ControllerError::MalformedResponse);
    }
}
