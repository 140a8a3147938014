//! A typed Rust client for the Mapbox Geocoding v6 and Search Box v1 APIs.
//!
//! Each call validates its parameters, builds the query string, sends one
//! blocking HTTP request and decodes the JSON answer into typed structs.
//! There is no caching, retrying or rate limiting; configure timeouts and
//! proxies on the `reqwest` client passed to [`Client::with_http_client`].
//!
//! ## Quick start
//! - Provide an access token explicitly, or via `MAPBOX_ACCESS_TOKEN` / a
//!   `.mapboxrc` file (current directory or home directory) and
//!   [`Client::from_env`].
//! - Use [`Client::geocoding`] for address lookups and [`Client::search_box`]
//!   for POI search and autocomplete.
//!
//! ```no_run
//! use anyhow::Result;
//! use mapboxapi::{Client, ForwardSearchQuery, RetrieveQuery, SuggestQuery, new_session_token};
//!
//! fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!
//!     let results = client.search_box().forward(&ForwardSearchQuery {
//!         language: Some("en".into()),
//!         limit: Some(5),
//!         ..ForwardSearchQuery::new("Colosseum Rome")
//!     })?;
//!     for feature in &results.features {
//!         println!("{} {:?}", feature.properties.name, feature.geometry.coordinates);
//!     }
//!
//!     // Autocomplete: one session token across suggest and retrieve.
//!     let session = new_session_token();
//!     let suggestions = client
//!         .search_box()
//!         .suggest(&SuggestQuery::new("blue bottle", session.clone()))?;
//!     if let Some(first) = suggestions.suggestions.first() {
//!         let place = client
//!             .search_box()
//!             .retrieve(&RetrieveQuery::new(first.mapbox_id.clone(), session))?;
//!         println!("{:?}", place.features.first().map(|f| &f.properties.coordinates));
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
pub mod geocoding;
mod query;
pub mod search_box;
mod session;
mod transport;
mod types;
mod util;

pub use client::{Client, ClientConfig};
pub use error::{ApiError, ApiErrorKind, Endpoint, Error, TransportError, ValidationError};
pub use geocoding::{
    BatchQuery, BatchRequest, ForwardQuery, GeocodeResponse, Geocoding, ReverseQuery,
    StructuredForwardQuery,
};
pub use search_box::{
    CategorySearchQuery, FeatureCollection, ForwardSearchQuery, ListCategoriesQuery,
    NavigationOptions, RetrieveQuery, ReverseSearchQuery, SarOptions, SearchBox, SuggestQuery,
    SuggestResponse,
};
pub use session::new_session_token;
pub use transport::{DEFAULT_BASE_URL, Transport};
pub use types::{Coordinate, Geometry, Proximity};
