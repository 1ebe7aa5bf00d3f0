// src/db/repository.rs
// DOCUMENTATION: Database access layer - the proximity query
// PURPOSE: Abstract PostGIS access from business logic

use crate::errors::ProximityError;
use crate::models::NearbyQuery;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Raw row of a proximity query
/// DOCUMENTATION: Geometry arrives as GeoJSON text from ST_AsGeoJSON(geom) and is
/// decoded by the service. Text columns stay optional so NULLs surface as
/// decoding faults instead of driver errors.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct NearbyRow {
    pub id: i32,
    pub name: Option<String>,
    pub tag_eng: Option<String>,
    pub tag_vie: Option<String>,
    pub geom_geojson: Option<String>,
    pub distance: f64,
}

/// Read port for leisure points
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeisureRepository: Send + Sync {
    /// Rows within `query.radius_m` geodesic meters of the origin, nearest first,
    /// at most `query.limit` of them
    async fn find_nearby(&self, query: &NearbyQuery) -> Result<Vec<NearbyRow>, ProximityError>;
}

/// Both the predicate and the distance cast to geography, so PostGIS measures on
/// the WGS84 spheroid rather than in planar degrees.
const SQL_FIND_NEARBY: &str = r#"
    SELECT
        l.id,
        l.name,
        l.gia_tri_tag AS tag_eng,
        l.nhom_don_gian AS tag_vie,
        ST_AsGeoJSON(l.geom) AS geom_geojson,
        ST_Distance(
            l.geom::geography,
            ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography
        ) AS distance
    FROM leisure_data l
    WHERE ST_DWithin(
            l.geom::geography,
            ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography,
            $3
        )
        AND ($4::text IS NULL OR l.nhom_tag = $4 OR l.gia_tri_tag = $4)
    ORDER BY distance ASC
    LIMIT $5
"#;

/// PgLeisureRepository: PostGIS-backed implementation
/// DOCUMENTATION: Each call checks one connection out of the shared pool; the
/// PoolConnection guard returns it on drop, on success and on every error path.
pub struct PgLeisureRepository {
    pool: PgPool,
    /// Matches the statement_timeout set on every pooled connection
    query_timeout_secs: u64,
}

impl PgLeisureRepository {
    pub fn new(pool: PgPool, query_timeout_secs: u64) -> Self {
        Self {
            pool,
            query_timeout_secs,
        }
    }
}

/// SQLSTATE raised when statement_timeout cancels a query
const QUERY_CANCELED: &str = "57014";

/// Server-side cancellations become `Timeout`; everything else is a storage fault
fn classify_query_error(err: sqlx::Error, query_timeout_secs: u64) -> ProximityError {
    let canceled = err
        .as_database_error()
        .and_then(|db| db.code())
        .map_or(false, |code| code == QUERY_CANCELED);

    if canceled {
        log::error!(
            "Proximity query canceled by statement_timeout ({}s)",
            query_timeout_secs
        );
        ProximityError::Timeout(query_timeout_secs)
    } else {
        log::error!("Proximity query error: {}", err);
        ProximityError::Storage(err.to_string())
    }
}

#[async_trait]
impl LeisureRepository for PgLeisureRepository {
    async fn find_nearby(&self, query: &NearbyQuery) -> Result<Vec<NearbyRow>, ProximityError> {
        let mut conn = self.pool.acquire().await.map_err(|e| {
            log::error!("Failed to acquire database connection: {}", e);
            ProximityError::Storage(e.to_string())
        })?;

        log::debug!(
            "Executing proximity query: origin=({}, {}), radius={}m, category={:?}, limit={}",
            query.origin.lon,
            query.origin.lat,
            query.radius_m,
            query.category,
            query.limit
        );

        let rows = sqlx::query_as::<_, NearbyRow>(SQL_FIND_NEARBY)
            .bind(query.origin.lon) // $1
            .bind(query.origin.lat) // $2
            .bind(query.radius_m) // $3
            .bind(query.category.as_deref()) // $4
            .bind(query.limit) // $5
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| classify_query_error(e, self.query_timeout_secs))?;

        Ok(rows)
    }
}
