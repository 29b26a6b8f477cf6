/// Pagila primary keys are PostgreSQL `integer` (SERIAL) columns.
pub type DbId = i32;
