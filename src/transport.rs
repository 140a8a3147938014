use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{TransportError, api_error_from_body};
use crate::query::Query;
use crate::util::urljoin;

/// Production endpoint of the Mapbox APIs.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

pub(crate) const CLIENT_USER_AGENT: &str = concat!("mapboxapi-rs/", env!("CARGO_PKG_VERSION"));

const APPLICATION_JSON: &str = "application/json";

/// Status and body of a completed HTTP exchange.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// Shared HTTP plumbing: URL composition, headers, error classification and
/// JSON decoding. Timeouts, TLS and connection pooling belong to the wrapped
/// engine.
#[derive(Debug, Clone)]
pub struct Transport {
    pub(crate) base_url: String,
    pub(crate) http: HttpClient,
}

impl Transport {
    pub fn new(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<RawResponse, TransportError> {
        let url = urljoin(&self.base_url, path);
        debug!(method = %method, path, "sending request");

        let mut req = self
            .http
            .request(method, &url)
            .query(query.pairs())
            .header(ACCEPT, APPLICATION_JSON)
            .header(USER_AGENT, CLIENT_USER_AGENT);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(TransportError::Encode)?;
            req = req.header(CONTENT_TYPE, APPLICATION_JSON).body(bytes);
        }

        // reqwest errors carry the URL, and the URL carries the access token.
        let resp = req.send().map_err(|e| TransportError::Http(e.without_url()))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .map_err(|e| TransportError::Http(e.without_url()))?
            .to_vec();
        debug!(status = status.as_u16(), path, bytes = body.len(), "received response");

        Ok(RawResponse { status, body })
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, TransportError> {
        let raw = self.execute::<()>(Method::GET, path, query, None)?;
        handle_response(path, raw)
    }

    pub(crate) fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        body: &B,
    ) -> Result<T, TransportError> {
        let raw = self.execute(Method::POST, path, query, Some(body))?;
        handle_response(path, raw)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, HttpClient::new())
    }
}

fn handle_response<T: DeserializeOwned>(path: &str, raw: RawResponse) -> Result<T, TransportError> {
    if !raw.status.is_success() {
        let err = api_error_from_body(raw.status, &raw.body);
        warn!(
            status = err.status,
            kind = %err.kind,
            code = err.code.as_deref().unwrap_or(""),
            path,
            "API request failed"
        );
        return Err(err.into());
    }

    serde_json::from_slice(&raw.body).map_err(|source| TransportError::Decode {
        status: raw.status.as_u16(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        name: String,
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn decodes_success() {
        let s: Sample = handle_response("/x", raw(200, r#"{"name":"ok"}"#)).unwrap();
        assert_eq!(s.name, "ok");
    }

    #[test]
    fn decode_failure_is_distinct() {
        let err = handle_response::<Sample>("/x", raw(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Decode { status: 200, .. }));
    }

    #[test]
    fn classifies_failures() {
        let err = handle_response::<Sample>(
            "/x",
            raw(429, r#"{"message":"Rate limit exceeded","code":"RATE_LIMIT_EXCEEDED"}"#),
        )
        .unwrap_err();
        match err {
            TransportError::Api(api) => {
                assert_eq!(api.kind, ApiErrorKind::RateLimited);
                assert_eq!(api.message, "Rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn user_agent_is_fixed() {
        assert!(CLIENT_USER_AGENT.starts_with("mapboxapi-rs/"));
    }
}
