use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A `(longitude, latitude)` pair in WGS84 degrees.
///
/// The same shape appears in responses as a `{"longitude": .., "latitude": ..}`
/// object, so this type is used on both sides of the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Checks `longitude ∈ [-180, 180]` and `latitude ∈ [-90, 90]`, both inclusive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::CoordinateOutOfRange {
                field: "longitude",
                min: -180.0,
                max: 180.0,
                value: self.longitude,
            });
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::CoordinateOutOfRange {
                field: "latitude",
                min: -90.0,
                max: 90.0,
                value: self.latitude,
            });
        }
        Ok(())
    }
}

/// Location bias for a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proximity {
    /// Bias toward a fixed point.
    Coordinate(Coordinate),
    /// Let the API derive the location from the caller's IP address.
    Ip,
}

impl Proximity {
    /// Range-checks a fixed point; `Ip` is always valid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Coordinate(c) => c.validate(),
            Self::Ip => Ok(()),
        }
    }
}

impl From<Coordinate> for Proximity {
    fn from(c: Coordinate) -> Self {
        Self::Coordinate(c)
    }
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

impl Geometry {
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        for (lon, lat) in [
            (180.0, 90.0),
            (-180.0, -90.0),
            (180.0, -90.0),
            (-180.0, 90.0),
            (0.0, 0.0),
        ] {
            assert!(Coordinate::new(lon, lat).validate().is_ok(), "{lon},{lat}");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Coordinate::new(180.0001, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CoordinateOutOfRange {
                field: "longitude",
                ..
            }
        ));
        assert!(Coordinate::new(-180.0001, 0.0).validate().is_err());

        let err = Coordinate::new(0.0, -90.0001).validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CoordinateOutOfRange {
                field: "latitude",
                ..
            }
        ));
        assert!(Coordinate::new(0.0, 90.0001).validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn proximity_checks_fixed_points() {
        assert!(Proximity::Ip.validate().is_ok());
        assert!(Proximity::from(Coordinate::new(-122.4, 37.8)).validate().is_ok());
        assert!(Proximity::from(Coordinate::new(f64::NAN, 500.0)).validate().is_err());
    }

    #[test]
    fn geometry_accessors() {
        let g: Geometry =
            serde_json::from_str(r#"{"type":"Point","coordinates":[12.5,41.9]}"#).unwrap();
        assert_eq!(g.kind, "Point");
        assert_eq!(g.longitude(), Some(12.5));
        assert_eq!(g.latitude(), Some(41.9));
        assert_eq!(Geometry::default().longitude(), None);
    }
}
