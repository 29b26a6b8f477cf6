//! Staff JSON endpoint. Passwords and pictures never leave the server;
//! see [`pagila_core::model::Staff`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/staff
pub async fn list_staff(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let staff = state.services.staff.find_all_staff_members().await?;

    Ok(Json(DataResponse { data: staff }))
}
