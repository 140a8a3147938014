use std::fmt;

use reqwest::blocking::Client as HttpClient;
use tracing::debug;

use crate::config::load_config;
use crate::error::Error;
use crate::geocoding::Geocoding;
use crate::search_box::SearchBox;
use crate::transport::{DEFAULT_BASE_URL, Transport};
use crate::util::redact_token;

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Mapbox access token (`pk.*` or `sk.*`).
    pub access_token: String,
    /// API root, `https://api.mapbox.com` unless overridden.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &redact_token(&self.access_token))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Entry point: holds the access token and the [`Transport`], and hands out
/// the per-API services.
///
/// Every call is a blocking request/response. `Client` has no interior
/// mutability, so it can be shared across threads as long as the HTTP engine
/// can (the default `reqwest` engine can).
#[derive(Clone)]
pub struct Client {
    token: String,
    transport: Transport,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("token", &redact_token(&self.token))
            .field("transport", &self.transport)
            .finish()
    }
}

impl Client {
    /// Creates a client for the production endpoint with the default HTTP engine.
    pub fn new(access_token: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(access_token))
    }

    /// Creates a client using (in order of precedence):
    /// - environment variables `MAPBOX_ACCESS_TOKEN` / `MAPBOX_API_URL`
    /// - config file from `MAPBOX_RC` or `.mapboxrc` (current directory, then home)
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(load_config(None, None)?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let token = config.access_token.trim().to_string();
        if token.is_empty() {
            return Err(Error::Config("access token is required".to_string()));
        }
        debug!(token = %redact_token(&token), base_url = %config.base_url, "creating Mapbox client");

        Ok(Self {
            token,
            transport: Transport::new(config.base_url, HttpClient::new()),
        })
    }

    /// Replaces the HTTP engine, e.g. one built with custom timeouts or a proxy.
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.transport.http = http;
        self
    }

    /// Points the client at another API root (a proxy or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.transport.base_url = base_url.into();
        self
    }

    /// The access token with all but its first and last four characters hidden.
    pub fn token(&self) -> String {
        redact_token(&self.token)
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.transport.http
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn geocoding(&self) -> Geocoding<'_> {
        Geocoding::new(&self.token, &self.transport)
    }

    pub fn search_box(&self) -> SearchBox<'_> {
        SearchBox::new(&self.token, &self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(Client::new(""), Err(Error::Config(_))));
        assert!(matches!(Client::new("   "), Err(Error::Config(_))));
    }

    #[test]
    fn applies_options() {
        let client = Client::new("pk.test-token-1234")
            .unwrap()
            .with_base_url("http://localhost:8080")
            .with_http_client(HttpClient::new());
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.token(), "pk.t...1234");
    }

    #[test]
    fn debug_output_redacts_token() {
        let secret = "pk.SECRETSECRETSECRET";
        let client = Client::new(secret).unwrap();
        for text in [
            format!("{client:?}"),
            format!("{:?}", client.geocoding()),
            format!("{:?}", client.search_box()),
            format!("{:?}", ClientConfig::new(secret)),
        ] {
            assert!(!text.contains(secret), "token leaked: {text}");
            assert!(text.contains("pk.S...CRET"), "{text}");
        }
    }

    #[test]
    fn defaults_to_production() {
        let client = Client::new("pk.test").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.token(), "****");
    }
}
