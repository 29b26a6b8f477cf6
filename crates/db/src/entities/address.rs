//! Address, city, and country entities.

use pagila_core::types::DbId;
use sqlx::FromRow;

/// A row from the `country` table.
#[derive(Debug, Clone, FromRow)]
pub struct CountryEntity {
    #[sqlx(rename = "country_id")]
    pub id: DbId,
    pub country: String,
}

/// A row from the `city` table.
#[derive(Debug, Clone, FromRow)]
pub struct CityEntity {
    #[sqlx(rename = "city_id")]
    pub id: DbId,
    pub city: String,
    pub country_id: DbId,
}

/// A row from the `address` table.
#[derive(Debug, Clone, FromRow)]
pub struct AddressEntity {
    #[sqlx(rename = "address_id")]
    pub id: DbId,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city_id: DbId,
    pub postal_code: Option<String>,
    pub phone: String,
}
