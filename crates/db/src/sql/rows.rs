//! Result rows of the composed queries, and their conversions into view
//! records.

use chrono::NaiveDate;
use pagila_core::model::film::{normalize_special_features, strip_padding};
use pagila_core::model::{Actor, Address, Category, City, Customer, Film, Staff, Store};
use pagila_core::types::DbId;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// Nested city row, built by [`super::fragments::city_json`].
#[derive(Debug, Clone, Deserialize)]
pub struct CityRow {
    pub id: DbId,
    pub city: String,
    pub country: String,
}

impl CityRow {
    pub fn to_model(&self) -> City {
        City {
            id: self.id,
            name: self.city.clone(),
            country: self.country.clone(),
        }
    }
}

/// Nested address row, built by [`super::fragments::address_json`].
#[derive(Debug, Clone, Deserialize)]
pub struct AddressRow {
    pub id: DbId,
    pub address: String,
    pub address2: Option<String>,
    pub district: String,
    pub city: CityRow,
    pub postal_code: Option<String>,
    pub phone: String,
}

impl AddressRow {
    pub fn to_model(&self) -> Address {
        Address {
            id: self.id,
            address: self.address.clone(),
            address2: self.address2.clone(),
            district: self.district.clone(),
            city: self.city.to_model(),
            postal_code: self.postal_code.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Nested store row, built by [`super::fragments::store_json`].
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRow {
    pub id: DbId,
    pub address: AddressRow,
}

impl StoreRow {
    pub fn to_model(&self) -> Store {
        Store {
            id: self.id,
            address: self.address.to_model(),
        }
    }
}

/// Top-level address query row.
#[derive(Debug, FromRow)]
pub struct AddressResultRow {
    pub address: Json<AddressRow>,
}

/// Top-level store query row.
#[derive(Debug, FromRow)]
pub struct StoreResultRow {
    pub store: Json<StoreRow>,
}

#[derive(Debug, FromRow)]
pub struct CustomerRow {
    #[sqlx(rename = "customer_id")]
    pub id: DbId,
    pub store: Json<StoreRow>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: Json<AddressRow>,
    pub active: Option<i32>,
    pub create_date: NaiveDate,
}

impl CustomerRow {
    pub fn to_model(&self) -> Customer {
        Customer {
            id: self.id,
            store: self.store.to_model(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            address: self.address.to_model(),
            is_active: Customer::is_active_flag(self.active),
            create_date: self.create_date,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct StaffRow {
    #[sqlx(rename = "staff_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub address: Json<AddressRow>,
    pub email: Option<String>,
    pub store: Json<StoreRow>,
    pub active: bool,
    pub username: String,
    pub password: Option<String>,
    pub picture: Option<Vec<u8>>,
}

impl StaffRow {
    pub fn to_model(&self) -> Staff {
        Staff {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.to_model(),
            email: self.email.clone(),
            store: self.store.to_model(),
            is_active: self.active,
            username: self.username.clone(),
            password: self.password.clone(),
            picture: self.picture.clone(),
        }
    }
}

/// Element of the categories multiset.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: DbId,
    pub name: String,
}

/// Element of the actors multiset.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorRow {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, FromRow)]
pub struct FilmRow {
    #[sqlx(rename = "film_id")]
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub language: String,
    pub original_language: Option<String>,
    pub categories: Json<Vec<CategoryRow>>,
    pub actors: Json<Vec<ActorRow>>,
    pub rental_duration: i16,
    pub rental_rate: Decimal,
    pub length: Option<i16>,
    pub replacement_cost: Decimal,
    pub rating: Option<String>,
    pub special_features: Option<Vec<String>>,
}

impl FilmRow {
    pub fn to_model(&self) -> Film {
        Film {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            release_year: self.release_year,
            language: strip_padding(&self.language),
            original_language: self.original_language.as_deref().map(strip_padding),
            categories: self
                .categories
                .iter()
                .map(|c| Category {
                    id: c.id,
                    name: c.name.clone(),
                })
                .collect(),
            actors: self
                .actors
                .iter()
                .map(|a| Actor {
                    id: a.id,
                    first_name: a.first_name.clone(),
                    last_name: a.last_name.clone(),
                })
                .collect(),
            rental_duration: self.rental_duration,
            rental_rate: self.rental_rate,
            length: self.length,
            replacement_cost: self.replacement_cost,
            rating: self.rating.clone(),
            special_features: normalize_special_features(self.special_features.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store_json() -> serde_json::Value {
        json!({
            "id": 1,
            "address": {
                "id": 1,
                "address": "47 MySakila Drive",
                "address2": null,
                "district": "Alberta",
                "city": { "id": 300, "city": "Lethbridge", "country": "Canada" },
                "postal_code": null,
                "phone": ""
            }
        })
    }

    #[test]
    fn nested_store_row_decodes_and_converts() {
        let row: StoreRow = serde_json::from_value(store_json()).unwrap();
        let store = row.to_model();
        assert_eq!(store.id, 1);
        assert_eq!(store.address.city.name, "Lethbridge");
        assert_eq!(store.address.city.country, "Canada");
        assert_eq!(store.address.address2, None);
    }

    #[test]
    fn address_row_without_city_is_rejected() {
        let mut value = store_json();
        value["address"]["city"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<StoreRow>(value).is_err());
    }

    #[test]
    fn film_row_converts_multisets_into_sets() {
        let row = FilmRow {
            id: 1,
            title: "ACADEMY DINOSAUR".to_string(),
            description: None,
            release_year: Some(2006),
            language: "English".to_string(),
            original_language: None,
            categories: Json(vec![CategoryRow {
                id: 6,
                name: "Documentary".to_string(),
            }]),
            actors: Json(vec![
                ActorRow {
                    id: 10,
                    first_name: "CHRISTIAN".to_string(),
                    last_name: "GABLE".to_string(),
                },
                ActorRow {
                    id: 1,
                    first_name: "PENELOPE".to_string(),
                    last_name: "GUINESS".to_string(),
                },
            ]),
            rental_duration: 6,
            rental_rate: Decimal::new(99, 2),
            length: Some(86),
            replacement_cost: Decimal::new(2099, 2),
            rating: Some("PG".to_string()),
            special_features: Some(vec!["Deleted Scenes".to_string()]),
        };

        let film = row.to_model();
        assert_eq!(film.actors.len(), 2);
        assert_eq!(film.actors.iter().next().map(|a| a.id), Some(1));
        assert_eq!(film.categories.len(), 1);
        assert_eq!(film.special_features_text(), "Deleted Scenes");
    }
}
