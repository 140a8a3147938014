use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{Coordinate, Geometry, Proximity};

/// ETA options shared by several search-box queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationOptions {
    /// `navigation` to request ETAs.
    pub eta_type: Option<String>,
    pub origin: Option<Coordinate>,
    /// `driving`, `walking` or `cycling`.
    pub profile: Option<String>,
}

/// Search-along-route parameters for category search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SarOptions {
    /// `isochrone`
    pub sar_type: Option<String>,
    pub route: Vec<Coordinate>,
    /// Acceptable detour, in seconds.
    pub time_deviation: Option<u32>,
}

/// First step of the interactive suggest → retrieve workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestQuery {
    /// Up to 256 characters.
    pub query: String,
    /// See [`new_session_token`](crate::new_session_token).
    pub session_token: String,
    pub proximity: Option<Proximity>,
    pub bbox: Option<[f64; 4]>,
    pub country: Vec<String>,
    pub language: Option<String>,
    /// 1-10
    pub limit: Option<u32>,
    pub types: Vec<String>,
    pub poi_category: Vec<String>,
    pub navigation: Option<NavigationOptions>,
}

impl SuggestQuery {
    pub fn new(query: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            session_token: session_token.into(),
            ..Default::default()
        }
    }
}

/// Second step of the workflow: full details for a chosen suggestion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrieveQuery {
    /// `mapbox_id` from a [`Suggestion`].
    pub mapbox_id: String,
    /// Must be the token used for the preceding suggest call.
    pub session_token: String,
    pub navigation: Option<NavigationOptions>,
}

impl RetrieveQuery {
    pub fn new(mapbox_id: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            mapbox_id: mapbox_id.into(),
            session_token: session_token.into(),
            ..Default::default()
        }
    }
}

/// One-shot text search returning full features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardSearchQuery {
    pub query: String,
    pub autocomplete: Option<bool>,
    pub proximity: Option<Proximity>,
    pub bbox: Option<[f64; 4]>,
    pub country: Vec<String>,
    pub language: Option<String>,
    pub limit: Option<u32>,
    pub types: Vec<String>,
    pub poi_category: Vec<String>,
    pub navigation: Option<NavigationOptions>,
}

impl ForwardSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// POI search within a category. Needs a search area: proximity, bbox or a
/// search-along-route with a non-empty route.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySearchQuery {
    pub category_id: String,
    pub proximity: Option<Proximity>,
    pub bbox: Option<[f64; 4]>,
    pub country: Vec<String>,
    pub language: Option<String>,
    /// 1-25
    pub limit: Option<u32>,
    pub navigation: Option<NavigationOptions>,
    pub sar: Option<SarOptions>,
}

impl CategorySearchQuery {
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            ..Default::default()
        }
    }

    pub(crate) fn has_search_area(&self) -> bool {
        self.proximity.is_some()
            || self.bbox.is_some()
            || self.sar.as_ref().is_some_and(|s| !s.route.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCategoriesQuery {
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReverseSearchQuery {
    pub coordinate: Coordinate,
    pub country: Vec<String>,
    pub language: Option<String>,
    /// 1-10
    pub limit: Option<u32>,
    pub types: Vec<String>,
}

impl ReverseSearchQuery {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
    pub attribution: Option<String>,
    pub response_id: Option<String>,
}

/// A suggest result. Has no coordinates; call retrieve for those.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub mapbox_id: String,
    pub feature_type: String,
    pub name: String,
    pub name_preferred: Option<String>,
    pub place_formatted: Option<String>,
    pub address: Option<String>,
    pub full_address: Option<String>,
    pub context: Option<Context>,
    pub poi_category: Vec<String>,
    pub poi_category_ids: Vec<String>,
    pub brand: Vec<String>,
    #[serde(rename = "maki")]
    pub maki_icon: Option<String>,
    pub metadata: HashMap<String, serde_json::Value>,
    /// Meters from the origin.
    pub distance: Option<f64>,
    /// Minutes from the origin.
    pub eta: Option<f64>,
}

/// `FeatureCollection` returned by retrieve, forward, category and reverse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    pub attribution: Option<String>,
    pub response_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    pub mapbox_id: String,
    pub feature_type: String,
    pub name: String,
    pub name_preferred: Option<String>,
    pub place_formatted: Option<String>,
    pub full_address: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub context: Option<Context>,
    pub coordinates: Coordinate,
    pub accuracy: Option<String>,
    pub routable_points: Vec<RoutablePoint>,
    pub poi_category: Vec<String>,
    pub poi_category_ids: Vec<String>,
    pub brand: Vec<String>,
    pub brand_id: Vec<String>,
    #[serde(rename = "maki")]
    pub maki_icon: Option<String>,
    pub external_ids: HashMap<String, String>,
    pub metadata: HashMap<String, serde_json::Value>,
    pub distance: Option<f64>,
    pub eta: Option<f64>,
}

/// Administrative hierarchy around a feature.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Context {
    pub country: Option<ContextElement>,
    pub region: Option<ContextElement>,
    pub postcode: Option<ContextElement>,
    pub district: Option<ContextElement>,
    pub place: Option<ContextElement>,
    pub locality: Option<ContextElement>,
    pub neighborhood: Option<ContextElement>,
    pub street: Option<ContextElement>,
    pub address: Option<ContextElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContextElement {
    pub mapbox_id: Option<String>,
    pub name: String,
    pub wikidata_id: Option<String>,
    pub short_code: Option<String>,
    pub country_code: Option<String>,
    pub region_code: Option<String>,
}

/// Entrance or access point suitable for navigation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutablePoint {
    pub name: String,
    /// `[longitude, latitude]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListCategoriesResponse {
    #[serde(rename = "listItems", alias = "categories")]
    pub categories: Vec<Category>,
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(alias = "canonical_name")]
    pub canonical_id: String,
    pub name: String,
    #[serde(alias = "maki_icon")]
    pub icon: Option<String>,
}
