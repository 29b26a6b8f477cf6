//! Film, actor, and category records.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::DbId;

/// A film category such as "Travel" or "Documentary".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// An actor appearing in one or more films.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

impl Actor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A film with its languages, categories, and cast resolved.
///
/// Categories and actors are ordered sets so that two loads of the same
/// film compare equal regardless of the order rows came back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub language: String,
    pub original_language: Option<String>,
    pub categories: BTreeSet<Category>,
    pub actors: BTreeSet<Actor>,
    pub rental_duration: i16,
    pub rental_rate: Decimal,
    pub length: Option<i16>,
    pub replacement_cost: Decimal,
    pub rating: Option<String>,
    pub special_features: Option<BTreeSet<String>>,
}

impl Film {
    /// `"FIRST LAST"` for every actor in the film.
    pub fn actor_names(&self) -> BTreeSet<String> {
        self.actors.iter().map(Actor::full_name).collect()
    }

    pub fn category_names(&self) -> BTreeSet<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Comma-separated special features, or an empty string.
    pub fn special_features_text(&self) -> String {
        self.special_features
            .as_ref()
            .map(|features| features.iter().cloned().collect::<Vec<_>>().join(", "))
            .unwrap_or_default()
    }
}

/// Normalize a nullable `text[]` column: a missing or empty array means
/// "no special features".
pub fn normalize_special_features<I>(features: Option<I>) -> Option<BTreeSet<String>>
where
    I: IntoIterator<Item = String>,
{
    features
        .map(|f| f.into_iter().collect::<BTreeSet<_>>())
        .filter(|set| !set.is_empty())
}

/// Strip the blank padding of a `character(n)` column such as
/// `language.name`.
pub fn strip_padding(value: &str) -> String {
    value.trim().to_string()
}
