use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/addresses
pub async fn list_addresses(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let addresses = state.services.addresses.find_all_addresses().await?;

    Ok(Json(DataResponse { data: addresses }))
}
