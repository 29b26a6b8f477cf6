use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::entities::film::LanguageEntity;

/// Provides read operations for languages.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Load the languages with the given ids in one query.
    pub async fn find_by_ids(
        conn: &mut PgConnection,
        ids: &[DbId],
    ) -> Result<Vec<LanguageEntity>, sqlx::Error> {
        sqlx::query_as::<_, LanguageEntity>(
            "SELECT language_id, name FROM language WHERE language_id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
    }
}
