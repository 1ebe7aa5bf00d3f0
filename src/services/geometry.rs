// src/services/geometry.rs
// DOCUMENTATION: Stored geometry decoding
// PURPOSE: Turn ST_AsGeoJSON output into a WGS84 point

use geo_types::Point;
use geojson::GeoJson;

/// Decode a GeoJSON geometry that must be a single Point
/// Returns a human-readable reason on failure; callers attach the row id.
pub fn decode_point(raw: &str) -> Result<Point<f64>, String> {
    let parsed: GeoJson = raw
        .parse()
        .map_err(|e: geojson::Error| format!("invalid GeoJSON: {}", e))?;

    let geometry = match parsed {
        GeoJson::Geometry(geometry) => geometry,
        other => {
            return Err(format!(
                "expected a bare geometry, found {}",
                geojson_kind(&other)
            ))
        }
    };

    Point::<f64>::try_from(geometry.value).map_err(|e| format!("not a point: {}", e))
}

fn geojson_kind(value: &GeoJson) -> &'static str {
    match value {
        GeoJson::Geometry(_) => "Geometry",
        GeoJson::Feature(_) => "Feature",
        GeoJson::FeatureCollection(_) => "FeatureCollection",
    }
}
