// src/models/leisure.rs
// DOCUMENTATION: Core data structures for leisure points and proximity queries
// PURPOSE: Defines the persisted record shape and the API request/response DTOs

use geo_types::Point;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Geographic coordinate in WGS84 degrees (SRID 4326)
/// No range checks are applied: latitude above 90 reaches the database as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Coordinate {
            lon: point.x(),
            lat: point.y(),
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.lon, coord.lat)
    }
}

/// Represents a complete leisure record from the `leisure_data` table
/// DOCUMENTATION: Rows are loaded by an external process; this service only reads them.
/// Only id, name, the three tag columns and the location take part in proximity queries.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct PointOfInterest {
    /// Primary key (`id`)
    pub id: i32,

    /// Display name (`name`)
    pub name: String,

    /// Administrative region name (`ten_xa`)
    pub commune_name: Option<String>,

    /// Administrative region code (`ma_xa`)
    pub commune_code: Option<String>,

    /// Region kind (`loai`)
    pub kind: Option<String>,

    /// Region area in km² (`dtich_km2`)
    pub area_km2: Option<f64>,

    /// Region population (`dan_so`)
    pub population: Option<i32>,

    /// Population per km² (`matdo_km2`)
    pub density_km2: Option<i32>,

    /// Coarse tag in the source vocabulary (`nhom_tag`)
    pub tag_group: String,

    /// Fine-grained tag in the source vocabulary, English label (`gia_tri_tag`)
    pub tag_value: String,

    /// Simplified group in the display vocabulary, Vietnamese label (`nhom_don_gian`)
    pub display_group: String,

    /// `geom`, POINT in SRID 4326
    pub location: Coordinate,
}

impl PointOfInterest {
    /// A category matches when it equals either source-vocabulary tag
    #[allow(dead_code)]
    pub fn matches_category(&self, category: &str) -> bool {
        self.tag_group == category || self.tag_value == category
    }
}

/// Request body for POST /geometry/
/// DOCUMENTATION: Field names are part of the public contract
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    /// Origin of the search
    pub user_geom: Coordinate,

    /// Optional category; matched against both source-vocabulary tags
    #[serde(default)]
    pub type_of_leisure: Option<String>,

    /// Search radius in meters
    #[serde(deserialize_with = "whole_number")]
    #[validate(range(min = 1, message = "Radius must be positive"))]
    pub radius: i64,

    /// Maximum number of results; the configured default applies when null
    #[serde(default, deserialize_with = "optional_whole_number")]
    #[validate(range(min = 0, message = "Result count must not be negative"))]
    pub min_leisure: Option<i64>,
}

/// Integer written either as `2000` or `2000.0`
#[derive(Deserialize)]
#[serde(untagged)]
enum WholeNumber {
    Int(i64),
    Float(f64),
}

impl WholeNumber {
    fn into_i64<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            WholeNumber::Int(v) => Ok(v),
            WholeNumber::Float(v)
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 =>
            {
                Ok(v as i64)
            }
            WholeNumber::Float(v) => Err(E::custom(format!(
                "expected a whole number, found {}",
                v
            ))),
        }
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    WholeNumber::deserialize(deserializer)?.into_i64()
}

fn optional_whole_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    Option::<WholeNumber>::deserialize(deserializer)?
        .map(WholeNumber::into_i64)
        .transpose()
}

/// Parameters handed to the repository after validation and defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub origin: Coordinate,
    pub radius_m: f64,
    /// `None` disables category filtering
    pub category: Option<String>,
    pub limit: i64,
}

/// One item of the POST /geometry/ response array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyLeisure {
    pub leisure_id: i32,
    pub leisure_name: String,
    pub leisure_tag_eng: String,
    pub leisure_tag_vie: String,
    pub leisure_geom: Coordinate,
    /// Geodesic distance from the origin in meters
    pub distance: f64,
}
