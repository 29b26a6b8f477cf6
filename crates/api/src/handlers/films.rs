//! JSON film endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pagila_core::filter::FilmFilter;

use crate::error::AppResult;
use crate::query::FilmQueryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/films
///
/// Lists films, optionally filtered by language, categories, or actor.
/// Only one kind of filter may be given.
pub async fn list_films(
    State(state): State<AppState>,
    Query(params): Query<FilmQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let films = state.services.films.find_films(&filter).await?;

    if !matches!(filter, FilmFilter::All) {
        tracing::info!(?filter, count = films.len(), "Filtered film list");
    }

    Ok(Json(DataResponse { data: films }))
}

/// GET /api/v1/films/categories
///
/// Distinct category names, sorted.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.services.films.find_all_film_categories().await?;

    Ok(Json(DataResponse { data: categories }))
}
