//! Geocoding API v6: forward, structured forward, reverse and batch lookups.

mod batch;
mod forward;
mod reverse;
mod types;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Endpoint, Error};
use crate::query::Query;
use crate::transport::Transport;
use crate::util::redact_token;

pub use batch::{BatchRequest, MAX_BATCH_QUERIES};
pub use types::{
    BatchError, BatchQuery, BatchResponse, BatchResult, ContextEntry, Feature, ForwardQuery,
    GeocodeResponse, MatchCode, Properties, ReverseQuery, StructuredForwardQuery,
};

const FORWARD_PATH: &str = "/search/geocode/v6/forward";
const REVERSE_PATH: &str = "/search/geocode/v6/reverse";
const BATCH_PATH: &str = "/search/geocode/v6/batch";

/// Geocoding service bound to an access token and a [`Transport`].
///
/// Cheap to build; obtain one from [`Client::geocoding`](crate::Client::geocoding)
/// or with [`Geocoding::new`].
#[derive(Clone, Copy)]
pub struct Geocoding<'a> {
    token: &'a str,
    transport: &'a Transport,
}

impl fmt::Debug for Geocoding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geocoding")
            .field("token", &redact_token(self.token))
            .field("transport", self.transport)
            .finish()
    }
}

impl<'a> Geocoding<'a> {
    pub fn new(token: &'a str, transport: &'a Transport) -> Self {
        Self { token, transport }
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        query: &Query,
    ) -> Result<T, Error> {
        self.transport
            .get(path, query)
            .map_err(|e| Error::request(endpoint, e))
    }
}
