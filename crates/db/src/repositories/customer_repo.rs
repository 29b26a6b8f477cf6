//! Repository for the `customer` table.

use sqlx::PgConnection;

use crate::entities::customer::CustomerEntity;

const COLUMNS: &str =
    "customer_id, store_id, first_name, last_name, email, address_id, create_date, active";

/// Provides read operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers, ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<CustomerEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customer ORDER BY customer_id");
        sqlx::query_as::<_, CustomerEntity>(&query)
            .fetch_all(&mut *conn)
            .await
    }
}
