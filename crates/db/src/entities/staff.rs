use pagila_core::types::DbId;
use sqlx::FromRow;

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow)]
pub struct StaffEntity {
    #[sqlx(rename = "staff_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub address_id: DbId,
    pub email: Option<String>,
    pub store_id: DbId,
    pub active: bool,
    pub username: String,
    pub password: Option<String>,
    pub picture: Option<Vec<u8>>,
}
