// src/db/fixture.rs
// DOCUMENTATION: In-memory repository for tests that need real geodesic behaviour
// PURPOSE: Mirror the PostGIS query semantics without a database

use super::{LeisureRepository, NearbyRow};
use crate::errors::ProximityError;
use crate::models::{NearbyQuery, PointOfInterest};
use async_trait::async_trait;
use geo::GeodesicDistance;
use geo_types::Point;

pub struct InMemoryLeisureRepository {
    points: Vec<PointOfInterest>,
}

impl InMemoryLeisureRepository {
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        Self { points }
    }
}

#[async_trait]
impl LeisureRepository for InMemoryLeisureRepository {
    async fn find_nearby(&self, query: &NearbyQuery) -> Result<Vec<NearbyRow>, ProximityError> {
        let origin: Point<f64> = query.origin.into();

        let mut rows: Vec<NearbyRow> = self
            .points
            .iter()
            .filter(|p| match &query.category {
                Some(category) => p.matches_category(category),
                None => true,
            })
            .filter_map(|p| {
                let location: Point<f64> = p.location.into();
                let distance = location.geodesic_distance(&origin);
                if distance > query.radius_m {
                    return None;
                }
                let geometry = geojson::Geometry::new(geojson::Value::from(&location));
                Some(NearbyRow {
                    id: p.id,
                    name: Some(p.name.clone()),
                    tag_eng: Some(p.tag_value.clone()),
                    tag_vie: Some(p.display_group.clone()),
                    geom_geojson: serde_json::to_string(&geometry).ok(),
                    distance,
                })
            })
            .collect();

        rows.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        rows.truncate(query.limit.max(0) as usize);
        Ok(rows)
    }
}

/// Leisure point with the columns the query ignores left empty
pub fn leisure(id: i32, name: &str, tags: (&str, &str, &str), lon: f64, lat: f64) -> PointOfInterest {
    let (tag_group, tag_value, display_group) = tags;
    PointOfInterest {
        id,
        name: name.to_string(),
        commune_name: None,
        commune_code: None,
        kind: None,
        area_km2: None,
        population: None,
        density_km2: None,
        tag_group: tag_group.to_string(),
        tag_value: tag_value.to_string(),
        display_group: display_group.to_string(),
        location: crate::models::Coordinate { lon, lat },
    }
}

/// The Manhattan dataset used across service and handler tests
pub fn manhattan() -> Vec<PointOfInterest> {
    vec![
        leisure(1, "Central Park", ("leisure", "park", "công viên"), -73.968, 40.785),
        leisure(2, "Bryant Park", ("leisure", "park", "công viên"), -73.9832, 40.7536),
        leisure(3, "Museum of Natural History", ("tourism", "museum", "bảo tàng"), -73.9740, 40.7813),
        leisure(4, "Chelsea Piers", ("leisure", "sports_centre", "thể thao"), -74.0088, 40.7465),
        leisure(5, "The Met", ("tourism", "museum", "bảo tàng"), -73.9632, 40.7794),
    ]
}
