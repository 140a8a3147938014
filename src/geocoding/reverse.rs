use tracing::instrument;

use super::{GeocodeResponse, Geocoding, REVERSE_PATH, ReverseQuery};
use crate::error::{Endpoint, Error};
use crate::query::Query;

impl Geocoding<'_> {
    /// Turns a coordinate into the addresses and places around it.
    #[instrument(name = "geocoding.reverse", skip_all)]
    pub fn reverse(&self, req: &ReverseQuery) -> Result<GeocodeResponse, Error> {
        req.coordinate.validate()?;
        let query = build_reverse_query(self.token, req);
        self.get(Endpoint::ReverseGeocode, REVERSE_PATH, &query)
    }
}

pub(super) fn build_reverse_query(token: &str, req: &ReverseQuery) -> Query {
    let mut q = Query::with_token(token);
    q.coordinate(&req.coordinate)
        .list("country", &req.country)
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit)
        .list("types", &req.types)
        .opt_str("worldview", req.worldview.as_deref());
    q
}
