// src/services/proximity_service.rs
// DOCUMENTATION: Business logic for nearby leisure lookups
// PURPOSE: Validate, bound and run the proximity query, then assemble result items

use crate::config::Config;
use crate::db::{LeisureRepository, NearbyRow};
use crate::errors::ProximityError;
use crate::models::{NearbyLeisure, NearbyQuery, NearbyRequest};
use crate::services::geometry::decode_point;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

/// Limits applied to every query
#[derive(Debug, Clone)]
pub struct QueryPolicy {
    /// Used when `min_leisure` is absent or null
    pub default_limit: i64,
    /// Larger requested limits are clamped to this
    pub max_results: i64,
    pub query_timeout: Duration,
}

impl Default for QueryPolicy {
    fn default() -> Self {
        Self {
            default_limit: 5,
            max_results: 100,
            query_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&Config> for QueryPolicy {
    fn from(config: &Config) -> Self {
        Self {
            default_limit: config.default_limit,
            max_results: config.max_results,
            query_timeout: Duration::from_secs(config.query_timeout_secs),
        }
    }
}

/// Stateless apart from the shared repository; safe to share across workers
pub struct ProximityService {
    repository: Arc<dyn LeisureRepository>,
    policy: QueryPolicy,
}

impl ProximityService {
    pub fn new(repository: Arc<dyn LeisureRepository>, policy: QueryPolicy) -> Self {
        Self { repository, policy }
    }

    /// Find leisure points near the request origin, nearest first
    /// DOCUMENTATION: Validation runs before the repository is touched, so a
    /// rejected request never reaches the database. An empty result is a success.
    pub async fn find_nearby(
        &self,
        request: NearbyRequest,
    ) -> Result<Vec<NearbyLeisure>, ProximityError> {
        request.validate()?;

        let query = self.build_query(request);
        let timeout = self.policy.query_timeout;

        let rows = tokio::time::timeout(timeout, self.repository.find_nearby(&query))
            .await
            .map_err(|_| {
                log::error!(
                    "Proximity query exceeded {}s (radius={}m, limit={})",
                    timeout.as_secs(),
                    query.radius_m,
                    query.limit
                );
                ProximityError::Timeout(timeout.as_secs())
            })??;

        let items = rows
            .into_iter()
            .map(to_result_item)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Proximity query completed: {} results within {}m",
            items.len(),
            query.radius_m
        );

        Ok(items)
    }

    fn build_query(&self, request: NearbyRequest) -> NearbyQuery {
        let limit = request
            .min_leisure
            .unwrap_or(self.policy.default_limit)
            .min(self.policy.max_results);

        // An empty category string means "no filter", same as null
        let category = request.type_of_leisure.filter(|c| !c.is_empty());

        NearbyQuery {
            origin: request.user_geom,
            radius_m: request.radius as f64,
            category,
            limit,
        }
    }
}

fn to_result_item(row: NearbyRow) -> Result<NearbyLeisure, ProximityError> {
    let id = row.id;
    let fault = |reason: String| {
        log::error!("Data integrity fault in leisure {}: {}", id, reason);
        ProximityError::Decoding { id, reason }
    };

    let raw = row
        .geom_geojson
        .ok_or_else(|| fault("geometry is NULL".to_string()))?;
    let point = decode_point(&raw).map_err(fault)?;

    Ok(NearbyLeisure {
        leisure_id: id,
        leisure_name: row.name.ok_or_else(|| fault("name is NULL".to_string()))?,
        leisure_tag_eng: row
            .tag_eng
            .ok_or_else(|| fault("gia_tri_tag is NULL".to_string()))?,
        leisure_tag_vie: row
            .tag_vie
            .ok_or_else(|| fault("nhom_don_gian is NULL".to_string()))?,
        leisure_geom: point.into(),
        distance: row.distance,
    })
}
