//! Repository for the `actor` table and the `film_actor` junction.

use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::film::FilmActorLink;

/// Provides read operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Actors of every given film, as junction rows.
    pub async fn for_films(
        conn: &mut PgConnection,
        film_ids: &[DbId],
    ) -> Result<Vec<FilmActorLink>, sqlx::Error> {
        sqlx::query_as::<_, FilmActorLink>(
            "SELECT fa.film_id, a.actor_id, a.first_name, a.last_name \
             FROM film_actor fa \
             JOIN actor a ON a.actor_id = fa.actor_id \
             WHERE fa.film_id = ANY($1)",
        )
        .bind(film_ids)
        .fetch_all(&mut *conn)
        .await
    }
}
