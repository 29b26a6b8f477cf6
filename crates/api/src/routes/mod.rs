pub mod health;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /films                 films, filtered by ?language, ?categories, or
///                        ?actor_first_name & ?actor_last_name
/// /films/categories      distinct category names
/// /addresses             all addresses
/// /customers             all customers
/// /staff                 all staff members
/// /stores                all stores
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/films", get(handlers::films::list_films))
        .route("/films/categories", get(handlers::films::list_categories))
        .route("/addresses", get(handlers::addresses::list_addresses))
        .route("/customers", get(handlers::customers::list_customers))
        .route("/staff", get(handlers::staff::list_staff))
        .route("/stores", get(handlers::stores::list_stores))
}
