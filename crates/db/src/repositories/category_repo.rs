//! Repository for the `category` table and the `film_category` junction.

use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::film::FilmCategoryLink;

/// Provides read operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All category names, ordered.
    pub async fn list_names(conn: &mut PgConnection) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT name FROM category ORDER BY name")
            .fetch_all(&mut *conn)
            .await
    }

    /// Categories of every given film, as junction rows.
    pub async fn for_films(
        conn: &mut PgConnection,
        film_ids: &[DbId],
    ) -> Result<Vec<FilmCategoryLink>, sqlx::Error> {
        sqlx::query_as::<_, FilmCategoryLink>(
            "SELECT fc.film_id, c.category_id, c.name \
             FROM film_category fc \
             JOIN category c ON c.category_id = fc.category_id \
             WHERE fc.film_id = ANY($1)",
        )
        .bind(film_ids)
        .fetch_all(&mut *conn)
        .await
    }
}
