use tracing::instrument;

use super::{
    FORWARD_PATH, FeatureCollection, ForwardSearchQuery, MAX_QUERY_CHARS, SearchBox, add_navigation,
    validate_navigation,
};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::{Query, check_limit, check_proximity, check_text};

impl SearchBox<'_> {
    /// Single-request text search. No session token; features include coordinates.
    #[instrument(name = "search_box.forward", skip_all)]
    pub fn forward(&self, req: &ForwardSearchQuery) -> Result<FeatureCollection, Error> {
        validate_forward(req)?;
        let query = build_forward_query(self.token, req);
        self.get(Endpoint::ForwardSearch, FORWARD_PATH, &query)
    }
}

fn validate_forward(req: &ForwardSearchQuery) -> Result<(), ValidationError> {
    check_text("query", &req.query, Some(MAX_QUERY_CHARS))?;
    check_limit(req.limit, 1, 10)?;
    check_proximity(req.proximity.as_ref())?;
    validate_navigation(req.navigation.as_ref())
}

fn build_forward_query(token: &str, req: &ForwardSearchQuery) -> Query {
    let mut q = Query::with_token(token);
    q.set("q", req.query.as_str())
        .opt_value("autocomplete", req.autocomplete)
        .proximity(req.proximity.as_ref())
        .bbox(req.bbox.as_ref())
        .list("country", &req.country)
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit)
        .list("types", &req.types)
        .list("poi_category", &req.poi_category);
    add_navigation(&mut q, req.navigation.as_ref());
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, Proximity};

    #[test]
    fn validates() {
        assert!(validate_forward(&ForwardSearchQuery::new("Colosseum Rome")).is_ok());
        assert_eq!(
            validate_forward(&ForwardSearchQuery::default()),
            Err(ValidationError::Missing { field: "query" })
        );
        let req = ForwardSearchQuery {
            limit: Some(11),
            ..ForwardSearchQuery::new("Colosseum Rome")
        };
        assert_eq!(
            validate_forward(&req),
            Err(ValidationError::LimitOutOfRange {
                min: 1,
                max: 10,
                value: 11
            })
        );
    }

    #[test]
    fn checks_points() {
        let req = ForwardSearchQuery {
            proximity: Some(Proximity::Coordinate(Coordinate::new(200.0, 0.0))),
            ..ForwardSearchQuery::new("Colosseum Rome")
        };
        assert!(matches!(
            validate_forward(&req),
            Err(ValidationError::CoordinateOutOfRange { field: "longitude", .. })
        ));

        let req = ForwardSearchQuery {
            navigation: Some(crate::search_box::NavigationOptions {
                origin: Some(Coordinate::new(0.0, f64::NAN)),
                ..Default::default()
            }),
            ..ForwardSearchQuery::new("Colosseum Rome")
        };
        assert!(matches!(
            validate_forward(&req),
            Err(ValidationError::CoordinateOutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn builds_query() {
        let req = ForwardSearchQuery {
            autocomplete: Some(true),
            proximity: Some(Proximity::Coordinate(Coordinate::new(12.4924, 41.8902))),
            language: Some("en".into()),
            limit: Some(5),
            ..ForwardSearchQuery::new("Colosseum Rome")
        };
        let q = build_forward_query("tok", &req);
        assert_eq!(q.get("q"), Some("Colosseum Rome"));
        assert_eq!(q.get("autocomplete"), Some("true"));
        assert_eq!(q.get("proximity"), Some("12.4924,41.8902"));
        assert_eq!(q.get("language"), Some("en"));
        assert_eq!(q.get("limit"), Some("5"));
        assert_eq!(q.get("session_token"), None);
        assert_eq!(q.get("types"), None);
    }
}
