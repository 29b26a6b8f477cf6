use pagila_core::types::DbId;
use sqlx::FromRow;

/// A row from the `store` table.
#[derive(Debug, Clone, FromRow)]
pub struct StoreEntity {
    #[sqlx(rename = "store_id")]
    pub id: DbId,
    pub manager_staff_id: DbId,
    pub address_id: DbId,
}
