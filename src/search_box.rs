//! Search Box API v1: interactive suggest/retrieve, one-shot forward search,
//! category search and reverse lookups.
//!
//! Suggest and retrieve form a two-call session. Generate a token with
//! [`new_session_token`](crate::new_session_token), pass it to
//! [`SearchBox::suggest`], then pass the same token to [`SearchBox::retrieve`]
//! for the suggestion the user picked. The token is not tracked here.

mod category;
mod forward;
mod reverse;
mod suggest;
mod types;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Endpoint, Error, ValidationError};
use crate::query::Query;
use crate::transport::Transport;
use crate::util::redact_token;

pub use types::{
    Category, CategorySearchQuery, Context, ContextElement, Feature, FeatureCollection,
    FeatureProperties, ForwardSearchQuery, ListCategoriesQuery, ListCategoriesResponse,
    NavigationOptions, RetrieveQuery, ReverseSearchQuery, RoutablePoint, SarOptions,
    SuggestQuery, SuggestResponse, Suggestion,
};

const SUGGEST_PATH: &str = "/search/searchbox/v1/suggest";
const RETRIEVE_PATH: &str = "/search/searchbox/v1/retrieve";
const FORWARD_PATH: &str = "/search/searchbox/v1/forward";
const CATEGORY_PATH: &str = "/search/searchbox/v1/category";
const LIST_CATEGORIES_PATH: &str = "/search/searchbox/v1/list/category";
const REVERSE_PATH: &str = "/search/searchbox/v1/reverse";

const MAX_QUERY_CHARS: usize = 256;

/// Search Box service bound to an access token and a [`Transport`].
#[derive(Clone, Copy)]
pub struct SearchBox<'a> {
    token: &'a str,
    transport: &'a Transport,
}

impl fmt::Debug for SearchBox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBox")
            .field("token", &redact_token(self.token))
            .field("transport", self.transport)
            .finish()
    }
}

impl<'a> SearchBox<'a> {
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

/// Range-checks the navigation origin, when one is given.
fn validate_navigation(nav: Option<&NavigationOptions>) -> Result<(), ValidationError> {
    match nav.and_then(|n| n.origin.as_ref()) {
        Some(origin) => origin.validate(),
        None => Ok(()),
    }
}

fn add_navigation(q: &mut Query, nav: Option<&NavigationOptions>) {
    let Some(nav) = nav else {
        return;
    };
    q.opt_str("eta_type", nav.eta_type.as_deref())
        .origin(nav.origin.as_ref())
        .opt_str("navigation_profile", nav.profile.as_deref());
}
