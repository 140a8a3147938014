use tracing::instrument;

use super::{
    FeatureCollection, MAX_QUERY_CHARS, RETRIEVE_PATH, RetrieveQuery, SUGGEST_PATH, SearchBox,
    SuggestQuery, SuggestResponse, add_navigation, validate_navigation,
};
use crate::error::{Endpoint, Error, ValidationError};
use crate::query::{Query, check_limit, check_proximity, check_text};
use crate::util::path_with_id;

impl SearchBox<'_> {
    /// Autocomplete suggestions for partial input. Suggestions carry no
    /// coordinates; pass the chosen `mapbox_id` to [`retrieve`](Self::retrieve)
    /// with the same session token.
    #[instrument(name = "search_box.suggest", skip_all)]
    pub fn suggest(&self, req: &SuggestQuery) -> Result<SuggestResponse, Error> {
        validate_suggest(req)?;
        let query = build_suggest_query(self.token, req);
        self.get(Endpoint::Suggest, SUGGEST_PATH, &query)
    }

    /// Full feature, including coordinates, for a suggestion.
    #[instrument(name = "search_box.retrieve", skip_all)]
    pub fn retrieve(&self, req: &RetrieveQuery) -> Result<FeatureCollection, Error> {
        validate_retrieve(req)?;
        let path = path_with_id(RETRIEVE_PATH, &req.mapbox_id);
        let query = build_retrieve_query(self.token, req);
        self.get(Endpoint::Retrieve, &path, &query)
    }
}

fn validate_suggest(req: &SuggestQuery) -> Result<(), ValidationError> {
    check_text("query", &req.query, Some(MAX_QUERY_CHARS))?;
    check_text("session_token", &req.session_token, None)?;
    check_limit(req.limit, 1, 10)?;
    check_proximity(req.proximity.as_ref())?;
    validate_navigation(req.navigation.as_ref())
}

fn validate_retrieve(req: &RetrieveQuery) -> Result<(), ValidationError> {
    check_text("mapbox_id", &req.mapbox_id, None)?;
    check_text("session_token", &req.session_token, None)?;
    validate_navigation(req.navigation.as_ref())
}

fn build_suggest_query(token: &str, req: &SuggestQuery) -> Query {
    let mut q = Query::with_token(token);
    q.set("q", req.query.as_str())
        .set("session_token", req.session_token.as_str())
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

fn build_retrieve_query(token: &str, req: &RetrieveQuery) -> Query {
    let mut q = Query::with_token(token);
    q.set("session_token", req.session_token.as_str());
    add_navigation(&mut q, req.navigation.as_ref());
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_box::NavigationOptions;
    use crate::types::{Coordinate, Proximity};

    #[test]
    fn validates_suggest() {
        assert_eq!(
            validate_suggest(&SuggestQuery::new("", "tok")),
            Err(ValidationError::Missing { field: "query" })
        );
        assert_eq!(
            validate_suggest(&SuggestQuery::new("x".repeat(257), "tok")),
            Err(ValidationError::TooLong {
                field: "query",
                max: 256
            })
        );
        assert_eq!(
            validate_suggest(&SuggestQuery::new("coffee", "")),
            Err(ValidationError::Missing {
                field: "session_token"
            })
        );
        for limit in [0, 11] {
            let req = SuggestQuery {
                limit: Some(limit),
                ..SuggestQuery::new("coffee", "tok")
            };
            assert!(matches!(
                validate_suggest(&req),
                Err(ValidationError::LimitOutOfRange { .. })
            ));
        }
        let req = SuggestQuery {
            limit: Some(10),
            ..SuggestQuery::new("coffee", "tok")
        };
        assert!(validate_suggest(&req).is_ok());
    }

    #[test]
    fn validates_retrieve() {
        assert_eq!(
            validate_retrieve(&RetrieveQuery::new("", "tok")),
            Err(ValidationError::Missing { field: "mapbox_id" })
        );
        assert_eq!(
            validate_retrieve(&RetrieveQuery::new("id", "")),
            Err(ValidationError::Missing {
                field: "session_token"
            })
        );
        assert!(validate_retrieve(&RetrieveQuery::new("id", "tok")).is_ok());

        let req = RetrieveQuery {
            navigation: Some(NavigationOptions {
                origin: Some(Coordinate::new(0.0, -95.0)),
                ..Default::default()
            }),
            ..RetrieveQuery::new("id", "tok")
        };
        assert!(matches!(
            validate_retrieve(&req),
            Err(ValidationError::CoordinateOutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn suggest_checks_proximity_point() {
        let req = SuggestQuery {
            proximity: Some(Proximity::Coordinate(Coordinate::new(f64::NAN, 500.0))),
            ..SuggestQuery::new("coffee", "tok")
        };
        assert!(matches!(
            validate_suggest(&req),
            Err(ValidationError::CoordinateOutOfRange { .. })
        ));

        let req = SuggestQuery {
            proximity: Some(Proximity::Ip),
            ..SuggestQuery::new("coffee", "tok")
        };
        assert!(validate_suggest(&req).is_ok());
    }

    #[test]
    fn builds_suggest_query() {
        let req = SuggestQuery {
            proximity: Some(Proximity::Ip),
            country: vec!["US".into()],
            limit: Some(5),
            poi_category: vec!["coffee_shop".into(), "cafe".into()],
            navigation: Some(NavigationOptions {
                profile: Some("walking".into()),
                ..Default::default()
            }),
            ..SuggestQuery::new("blue bottle", "session-1")
        };
        let q = build_suggest_query("tok", &req);
        assert_eq!(q.get("q"), Some("blue bottle"));
        assert_eq!(q.get("session_token"), Some("session-1"));
        assert_eq!(q.get("proximity"), Some("ip"));
        assert_eq!(q.get("country"), Some("US"));
        assert_eq!(q.get("limit"), Some("5"));
        assert_eq!(q.get("poi_category"), Some("coffee_shop,cafe"));
        assert_eq!(q.get("navigation_profile"), Some("walking"));
        assert_eq!(q.get("eta_type"), None);
        assert_eq!(q.get("bbox"), None);
    }

    #[test]
    fn builds_retrieve_query() {
        let req = RetrieveQuery {
            navigation: Some(NavigationOptions {
                eta_type: Some("navigation".into()),
                origin: Some(Coordinate::new(-122.4, 37.8)),
                profile: Some("driving".into()),
            }),
            ..RetrieveQuery::new("dXJuOm1ieHBvaTphYmNkZWY", "session-1")
        };
        let q = build_retrieve_query("tok", &req);
        assert_eq!(q.get("access_token"), Some("tok"));
        assert_eq!(q.get("session_token"), Some("session-1"));
        assert_eq!(q.get("origin"), Some("-122.4,37.8"));
        assert_eq!(q.get("mapbox_id"), None);
    }
}
