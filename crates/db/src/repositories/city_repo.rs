use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::address::CityEntity;

/// Provides read operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Load the cities with the given ids in one query.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<CityEntity>, sqlx::Error> {
        sqlx::query_as::<_, CityEntity>(
            "SELECT city_id, city, country_id FROM city WHERE city_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
    }
}
