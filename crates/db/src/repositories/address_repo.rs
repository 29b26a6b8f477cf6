//! Repository for the `address` table.

use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::address::AddressEntity;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "address_id, address, address2, district, city_id, postal_code, phone";

/// Provides read operations for addresses.
pub struct AddressRepo;

impl AddressRepo {
    /// List all addresses, ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<AddressEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM address ORDER BY address_id");
        sqlx::query_as::<_, AddressEntity>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Load the addresses with the given ids in one query.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<AddressEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM address WHERE address_id = ANY($1)");
        sqlx::query_as::<_, AddressEntity>(&query)
            .bind(ids)
            .fetch_all(&mut *conn)
            .await
    }
}
