//! Repository for the `film` table.
//!
//! Filters only select the root film rows; languages, categories, and actors
//! are loaded afterwards by [`crate::graph::FilmGraph`], so a film matched by
//! one category still comes back with all of its categories.

use sqlx::PgConnection;

use crate::entities::film::FilmEntity;

/// Column list, qualified with the `f` alias used by every film query.
const COLUMNS: &str = "f.film_id, f.title, f.description, f.release_year::int4 AS release_year, \
    f.language_id, f.original_language_id, f.rental_duration, f.rental_rate, f.length, \
    f.replacement_cost, f.rating::text AS rating, f.special_features";

/// Provides read operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Films in the given language. `language` must already be upper-cased.
    pub async fn find_by_language(
        conn: &mut PgConnection,
        language: &str,
    ) -> Result<Vec<FilmEntity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film f \
             JOIN language l ON l.language_id = f.language_id \
             WHERE upper(l.name::text) = $1 \
             ORDER BY f.film_id"
        );
        sqlx::query_as::<_, FilmEntity>(&query)
            .bind(language)
            .fetch_all(&mut *conn)
            .await
    }

    /// Films having at least one of the given (upper-cased) categories.
    pub async fn find_by_categories(
        conn: &mut PgConnection,
        categories: &[String],
    ) -> Result<Vec<FilmEntity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film f \
             WHERE f.film_id IN ( \
                SELECT fc.film_id FROM film_category fc \
                JOIN category c ON c.category_id = fc.category_id \
                WHERE upper(c.name) = ANY($1)) \
             ORDER BY f.film_id"
        );
        sqlx::query_as::<_, FilmEntity>(&query)
            .bind(categories)
            .fetch_all(&mut *conn)
            .await
    }

    /// Films featuring the actor with the given (upper-cased) names.
    pub async fn find_by_actor(
        conn: &mut PgConnection,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<FilmEntity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film f \
             WHERE f.film_id IN ( \
                SELECT fa.film_id FROM film_actor fa \
                JOIN actor a ON a.actor_id = fa.actor_id \
                WHERE upper(a.first_name) = $1 AND upper(a.last_name) = $2) \
             ORDER BY f.film_id"
        );
        sqlx::query_as::<_, FilmEntity>(&query)
            .bind(first_name)
            .bind(last_name)
            .fetch_all(&mut *conn)
            .await
    }

    /// Films without any category. Category-bucketed loading never sees these.
    pub async fn find_without_category(
        conn: &mut PgConnection,
    ) -> Result<Vec<FilmEntity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM film f \
             WHERE NOT EXISTS (SELECT 1 FROM film_category fc WHERE fc.film_id = f.film_id) \
             ORDER BY f.film_id"
        );
        sqlx::query_as::<_, FilmEntity>(&query)
            .fetch_all(&mut *conn)
            .await
    }
}
