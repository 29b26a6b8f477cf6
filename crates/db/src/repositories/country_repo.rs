use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::address::CountryEntity;

/// Provides read operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Load the countries with the given ids in one query.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<CountryEntity>, sqlx::Error> {
        sqlx::query_as::<_, CountryEntity>(
            "SELECT country_id, country FROM country WHERE country_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
    }
}
