use chrono::NaiveDate;
use pagila_core::types::DbId;
use sqlx::FromRow;

/// A row from the `customer` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    #[sqlx(rename = "customer_id")]
    pub id: DbId,
    pub store_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address_id: DbId,
    pub create_date: NaiveDate,
    /// Legacy integer flag; `activebool` is not read.
    pub active: Option<i32>,
}
