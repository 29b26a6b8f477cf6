//! Film entity plus the language, category, and actor entities it refers to.

use pagila_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `language` table.
///
/// `name` is a blank-padded `character(20)` column and is read as stored.
#[derive(Debug, Clone, FromRow)]
pub struct LanguageEntity {
    #[sqlx(rename = "language_id")]
    pub id: DbId,
    pub name: String,
}

/// A row from the `category` table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryEntity {
    #[sqlx(rename = "category_id")]
    pub id: DbId,
    pub name: String,
}

/// A row from the `actor` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActorEntity {
    #[sqlx(rename = "actor_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// A row from the `film` table.
///
/// `release_year` (a `year` domain) and `rating` (an `mpaa_rating` enum)
/// are cast to plain SQL types in the select list.
#[derive(Debug, Clone, FromRow)]
pub struct FilmEntity {
    #[sqlx(rename = "film_id")]
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub language_id: DbId,
    pub original_language_id: Option<DbId>,
    pub rental_duration: i16,
    pub rental_rate: Decimal,
    pub length: Option<i16>,
    pub replacement_cost: Decimal,
    pub rating: Option<String>,
    pub special_features: Option<Vec<String>>,
}

/// A `film_category` junction row joined with its category.
#[derive(Debug, Clone, FromRow)]
pub struct FilmCategoryLink {
    pub film_id: DbId,
    #[sqlx(flatten)]
    pub category: CategoryEntity,
}

/// A `film_actor` junction row joined with its actor.
#[derive(Debug, Clone, FromRow)]
pub struct FilmActorLink {
    pub film_id: DbId,
    #[sqlx(flatten)]
    pub actor: ActorEntity,
}
