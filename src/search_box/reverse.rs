use tracing::instrument;

use super::{FeatureCollection, REVERSE_PATH, ReverseSearchQuery, SearchBox};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::{Query, check_limit};

impl SearchBox<'_> {
    #[instrument(name = "search_box.reverse", skip_all)]
    pub fn reverse(&self, req: &ReverseSearchQuery) -> Result<FeatureCollection, Error> {
        validate_reverse(req)?;
        let query = build_reverse_query(self.token, req);
        self.get(Endpoint::ReverseSearch, REVERSE_PATH, &query)
    }
}

fn validate_reverse(req: &ReverseSearchQuery) -> Result<(), ValidationError> {
    req.coordinate.validate()?;
    check_limit(req.limit, 1, 10)
}

fn build_reverse_query(token: &str, req: &ReverseSearchQuery) -> Query {
    let mut q = Query::with_token(token);
    q.coordinate(&req.coordinate)
        .list("country", &req.country)
        .opt_str("language", req.language.as_deref())
        .opt_value("limit", req.limit)
        .list("types", &req.types);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    #[test]
    fn validates_coordinate_and_limit() {
        assert!(validate_reverse(&ReverseSearchQuery::new(Coordinate::new(180.0, -90.0))).is_ok());
        assert!(matches!(
            validate_reverse(&ReverseSearchQuery::new(Coordinate::new(-180.0001, 0.0))),
            Err(ValidationError::CoordinateOutOfRange {
                field: "longitude",
                ..
            })
        ));
        let req = ReverseSearchQuery {
            limit: Some(11),
            ..ReverseSearchQuery::new(Coordinate::new(0.0, 0.0))
        };
        assert!(matches!(
            validate_reverse(&req),
            Err(ValidationError::LimitOutOfRange { .. })
        ));
    }

    #[test]
    fn builds_query() {
        let req = ReverseSearchQuery {
            types: vec!["address".into(), "street".into()],
            ..ReverseSearchQuery::new(Coordinate::new(-122.419415, 37.774929))
        };
        let q = build_reverse_query("tok", &req);
        assert_eq!(q.get("longitude"), Some("-122.419415"));
        assert_eq!(q.get("latitude"), Some("37.774929"));
        assert_eq!(q.get("types"), Some("address,street"));
        assert_eq!(q.get("limit"), None);
    }
}
