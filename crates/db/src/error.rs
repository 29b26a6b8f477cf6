use pagila_core::types::DbId;

/// Errors raised by the data-access layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A row referenced by a foreign key was not returned by the batched
    /// association query.
    #[error("Missing associated {entity} with id {id}")]
    MissingAssociation { entity: &'static str, id: DbId },
}

pub type DbResult<T> = Result<T, DbError>;
