//! Repository for the `store` table.

use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::store::StoreEntity;

const COLUMNS: &str = "store_id, manager_staff_id, address_id";

/// Provides read operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// List all stores, ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<StoreEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store ORDER BY store_id");
        sqlx::query_as::<_, StoreEntity>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Load the stores with the given ids in one query.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<StoreEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store WHERE store_id = ANY($1)");
        sqlx::query_as::<_, StoreEntity>(&query)
            .bind(ids)
            .fetch_all(&mut *conn)
            .await
    }
}
