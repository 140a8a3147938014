use tracing::instrument;

use super::{FORWARD_PATH, ForwardQuery, GeocodeResponse, Geocoding, StructuredForwardQuery};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::{Query, check_proximity, check_text};

impl Geocoding<'_> {
    /// Turns free text such as `"1600 Pennsylvania Avenue NW"` into coordinates.
    #[instrument(name = "geocoding.forward", skip_all)]
    pub fn forward(&self, req: &ForwardQuery) -> Result<GeocodeResponse, Error> {
        check_text("query", &req.query, None)?;
        check_proximity(req.proximity.as_ref())?;
        let query = build_forward_query(self.token, req);
        self.get(Endpoint::ForwardGeocode, FORWARD_PATH, &query)
    }

    /// Forward geocoding from separate address components.
    #[instrument(name = "geocoding.forward_structured", skip_all)]
    pub fn forward_structured(&self, req: &StructuredForwardQuery) -> Result<GeocodeResponse, Error> {
        if !req.has_address_component() {
            return Err(ValidationError::NoAddressComponent.into());
        }
        check_proximity(req.proximity.as_ref())?;
        let query = build_structured_forward_query(self.token, req);
        self.get(Endpoint::StructuredForwardGeocode, FORWARD_PATH, &query)
    }
}

pub(super) fn build_forward_query(token: &str, req: &ForwardQuery) -> Query {
    let mut q = Query::with_token(token);
    q.set("q", req.query.as_str())
        .opt_value("autocomplete", req.autocomplete)
        .bbox(req.bbox.as_ref())
        .list("country", &req.country)
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit)
        .proximity(req.proximity.as_ref())
        .list("types", &req.types)
        .opt_str("worldview", req.worldview.as_deref());
    q
}

pub(super) fn build_structured_forward_query(token: &str, req: &StructuredForwardQuery) -> Query {
    let mut q = Query::with_token(token);
    q.opt_str("address_number", req.address_number.as_deref())
        .opt_str("street", req.street.as_deref())
        .opt_str("block", req.block.as_deref())
        .opt_str("place", req.place.as_deref())
        .opt_str("region", req.region.as_deref())
        .opt_str("postcode", req.postcode.as_deref())
        .opt_str("country", req.country.as_deref())
        .opt_value("autocomplete", req.autocomplete)
        .bbox(req.bbox.as_ref())
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit)
        .proximity(req.proximity.as_ref())
        .opt_str("worldview", req.worldview.as_deref());
    q
}
