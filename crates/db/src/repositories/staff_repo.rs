//! Repository for the `staff` table.

use sqlx::PgConnection;

use crate::entities::staff::StaffEntity;

const COLUMNS: &str = "staff_id, first_name, last_name, address_id, email, store_id, \
    active, username, password, picture";

/// Provides read operations for staff members.
pub struct StaffRepo;

impl StaffRepo {
    /// List all staff members, ordered by id.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<StaffEntity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff ORDER BY staff_id");
        sqlx::query_as::<_, StaffEntity>(&query)
            .fetch_all(&mut *conn)
            .await
    }
}
