use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stores
pub async fn list_stores(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stores = state.services.stores.find_all_stores().await?;

    Ok(Json(DataResponse { data: stores }))
}
