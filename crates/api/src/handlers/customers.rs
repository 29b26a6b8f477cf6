use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/customers
///
/// Customers with their store and home address, ordered by id.
pub async fn list_customers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = state.services.customers.find_all_customers().await?;

    Ok(Json(DataResponse { data: customers }))
}
