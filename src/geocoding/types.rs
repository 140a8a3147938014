use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Coordinate, Geometry, Proximity};

/// Free-text forward geocoding (`q=...`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardQuery {
    /// Search text. Required.
    pub query: String,
    pub autocomplete: Option<bool>,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub bbox: Option<[f64; 4]>,
    /// ISO 3166 alpha-2 codes.
    pub country: Vec<String>,
    /// IETF language tag.
    pub language: Option<String>,
    /// Documented range is 1-10; the server enforces it.
    pub limit: Option<u32>,
    pub proximity: Option<Proximity>,
    pub types: Vec<String>,
    pub worldview: Option<String>,
}

impl ForwardQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Forward geocoding from address components. At least one component is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredForwardQuery {
    pub address_number: Option<String>,
    pub street: Option<String>,
    pub block: Option<String>,
    /// City, town or village.
    pub place: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub autocomplete: Option<bool>,
    pub bbox: Option<[f64; 4]>,
    pub language: Option<String>,
    pub limit: Option<u32>,
    pub proximity: Option<Proximity>,
    pub worldview: Option<String>,
}

impl StructuredForwardQuery {
    pub(crate) fn has_address_component(&self) -> bool {
        [
            &self.address_number,
            &self.street,
            &self.block,
            &self.place,
            &self.region,
            &self.postcode,
            &self.country,
        ]
        .iter()
        .any(|c| c.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

/// Reverse geocoding of a single coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReverseQuery {
    pub coordinate: Coordinate,
    pub country: Vec<String>,
    pub language: Option<String>,
    pub limit: Option<u32>,
    pub types: Vec<String>,
    pub worldview: Option<String>,
}

impl ReverseQuery {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Default::default()
        }
    }
}

/// One entry of a [`BatchRequest`](super::BatchRequest): either a text query or
/// a coordinate, never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchQuery {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: Option<String>,
    #[serde(rename = "q", skip_serializing_if = "is_blank")]
    pub query: Option<String>,
    #[serde(flatten)]
    pub coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

impl BatchQuery {
    pub fn forward(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn reverse(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub(crate) fn has_text(&self) -> bool {
        !is_blank(&self.query)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// A geocoding v6 `FeatureCollection`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeocodeResponse {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub mapbox_id: String,
    /// `address`, `place`, `country`, ...
    pub feature_type: String,
    pub name: String,
    pub name_preferred: Option<String>,
    pub place_name: Option<String>,
    pub place_name_preferred: Option<String>,
    pub full_address: Option<String>,
    /// Keyed by layer: `region`, `country`, `postcode`, ...
    pub context: HashMap<String, ContextEntry>,
    pub coordinates: Coordinate,
    pub bbox: Option<Vec<f64>>,
    pub match_code: Option<MatchCode>,
    pub accuracy: Option<String>,
    pub address_number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContextEntry {
    pub mapbox_id: String,
    pub name: String,
    #[serde(alias = "wikidata")]
    pub wikidata_id: Option<String>,
    pub short_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchCode {
    /// `exact`, `high`, `medium` or `low`.
    pub confidence: String,
    pub accuracy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchResponse {
    #[serde(alias = "batch")]
    pub results: Vec<BatchResult>,
}

/// Outcome of one batch entry, in request order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchResult {
    pub id: Option<String>,
    pub response: Option<GeocodeResponse>,
    pub error: Option<BatchError>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchError {
    pub message: String,
    pub code: Option<String>,
}
