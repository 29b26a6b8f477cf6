use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML pages, mounted at the root.
///
/// ```text
/// GET /            -> index
/// GET /films       -> films.html
/// GET /customers   -> customers.html
/// GET /staff       -> staff.html
/// GET /stores      -> stores.html
/// GET /addresses   -> addresses.html
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/films", get(pages::films))
        .route("/customers", get(pages::customers))
        .route("/staff", get(pages::staff))
        .route("/stores", get(pages::stores))
        .route("/addresses", get(pages::addresses))
}
