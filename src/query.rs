//! Query-string assembly shared by every endpoint.
//!
//! Optional values are only written when present: `None`, empty strings and
//! empty lists never produce a parameter.

use std::fmt::Display;

use crate::error::ValidationError;
use crate::types::{Coordinate, Proximity};
use crate::util::{encode_route, format_coordinate, format_floats};

/// Ordered list of query parameters. Percent-encoding happens in the transport.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    /// Starts a query carrying the access token.
    pub(crate) fn with_token(token: &str) -> Self {
        let mut q = Self::default();
        q.set("access_token", token);
        q
    }

    /// Sets `key`, replacing an earlier value.
    pub(crate) fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub(crate) fn opt_str(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.is_empty() => self.set(key, v),
            _ => self,
        }
    }

    pub(crate) fn opt_value<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        match value {
            Some(v) => self.set(key, v.to_string()),
            None => self,
        }
    }

    pub(crate) fn list(&mut self, key: &'static str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        self.set(key, values.join(","))
    }

    pub(crate) fn bbox(&mut self, bbox: Option<&[f64; 4]>) -> &mut Self {
        match bbox {
            Some(b) => self.set("bbox", format_floats(b)),
            None => self,
        }
    }

    pub(crate) fn coordinate(&mut self, coordinate: &Coordinate) -> &mut Self {
        self.set("longitude", coordinate.longitude.to_string());
        self.set("latitude", coordinate.latitude.to_string())
    }

    pub(crate) fn proximity(&mut self, proximity: Option<&Proximity>) -> &mut Self {
        match proximity {
            Some(Proximity::Ip) => self.set("proximity", "ip"),
            Some(Proximity::Coordinate(c)) => self.set("proximity", format_coordinate(c)),
            None => self,
        }
    }

    pub(crate) fn origin(&mut self, origin: Option<&Coordinate>) -> &mut Self {
        match origin {
            Some(c) => self.set("origin", format_coordinate(c)),
            None => self,
        }
    }

    pub(crate) fn route(&mut self, route: &[Coordinate]) -> &mut Self {
        if route.is_empty() {
            return self;
        }
        self.set("route", encode_route(route))
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

/// Fails with [`ValidationError::LimitOutOfRange`] when
/// `limit` is set and outside `[min, max]`.
pub(crate) fn check_limit(
    limit: Option<u32>,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    match limit {
        Some(value) if value < min || value > max => {
            Err(ValidationError::LimitOutOfRange { min, max, value })
        }
        _ => Ok(()),
    }
}

/// Range-checks an optional proximity point.
pub(crate) fn check_proximity(proximity: Option<&Proximity>) -> Result<(), ValidationError> {
    proximity.map_or(Ok(()), Proximity::validate)
}

/// Fails when `value` is blank or longer than `max` characters.
pub(crate) fn check_text(
    field: &'static str,
    value: &str,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(ValidationError::TooLong { field, max });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_values() {
        let mut q = Query::with_token("tok");
        q.opt_str("language", None)
            .opt_str("worldview", Some(""))
            .opt_value::<u32>("limit", None)
            .list("types", &[])
            .bbox(None)
            .proximity(None)
            .route(&[]);
        assert_eq!(q.pairs(), &[("access_token", "tok".to_string())]);
    }

    #[test]
    fn encodes_values() {
        let mut q = Query::with_token("tok");
        q.bbox(Some(&[-122.5, 37.7, -122.3, 37.8]))
            .list("country", &["US".to_string(), "CA".to_string()])
            .opt_value("limit", Some(10))
            .opt_value("autocomplete", Some(false));
        assert_eq!(q.get("bbox"), Some("-122.5,37.7,-122.3,37.8"));
        assert_eq!(q.get("country"), Some("US,CA"));
        assert_eq!(q.get("limit"), Some("10"));
        assert_eq!(q.get("autocomplete"), Some("false"));
        assert_eq!(q.get("worldview"), None);
    }

    #[test]
    fn encodes_proximity_variants() {
        let mut q = Query::default();
        q.proximity(Some(&Proximity::Ip));
        assert_eq!(q.get("proximity"), Some("ip"));

        q.proximity(Some(&Proximity::Coordinate(Coordinate::new(-122.4194, 37.7749))));
        assert_eq!(q.get("proximity"), Some("-122.4194,37.7749"));
        assert_eq!(q.pairs().len(), 1);
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut q = Query::with_token("a");
        q.set("access_token", "b");
        assert_eq!(q.get("access_token"), Some("b"));
        assert_eq!(q.pairs().len(), 1);
    }

    #[test]
    fn checks_limits() {
        assert!(check_limit(None, 1, 10).is_ok());
        assert!(check_limit(Some(1), 1, 10).is_ok());
        assert!(check_limit(Some(10), 1, 10).is_ok());
        assert_eq!(
            check_limit(Some(0), 1, 10),
            Err(ValidationError::LimitOutOfRange {
                min: 1,
                max: 10,
                value: 0
            })
        );
        assert!(check_limit(Some(26), 1, 25).is_err());
    }

    #[test]
    fn checks_text() {
        assert_eq!(
            check_text("query", "", Some(256)),
            Err(ValidationError::Missing { field: "query" })
        );
        assert!(check_text("query", &"a".repeat(256), Some(256)).is_ok());
        assert_eq!(
            check_text("query", &"a".repeat(257), Some(256)),
            Err(ValidationError::TooLong {
                field: "query",
                max: 256
            })
        );
        assert!(check_text("mapbox_id", "abc", None).is_ok());
    }
}
