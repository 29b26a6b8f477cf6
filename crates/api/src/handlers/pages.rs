//! Server-rendered HTML pages.
//!
//! Each page loads one list through the service interface and renders it
//! with the matching askama template.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::state::AppState;
use crate::templates::{
    render, AddressesTemplate, CustomersTemplate, FilmsTemplate, IndexTemplate, StaffTemplate,
    StoresTemplate,
};

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&IndexTemplate {
        title: "Pagila",
        strategy: state.config.data_access.strategy_name(),
    })
}

/// GET /films
pub async fn films(State(state): State<AppState>) -> AppResult<Html<String>> {
    let films = state.services.films.find_all_films().await?;
    render(&FilmsTemplate {
        title: "Films",
        films,
    })
}

/// GET /customers
pub async fn customers(State(state): State<AppState>) -> AppResult<Html<String>> {
    let customers = state.services.customers.find_all_customers().await?;
    render(&CustomersTemplate {
        title: "Customers",
        customers,
    })
}

/// GET /staff
pub async fn staff(State(state): State<AppState>) -> AppResult<Html<String>> {
    let staff = state.services.staff.find_all_staff_members().await?;
    render(&StaffTemplate {
        title: "Staff members",
        staff,
    })
}

/// GET /stores
pub async fn stores(State(state): State<AppState>) -> AppResult<Html<String>> {
    let stores = state.services.stores.find_all_stores().await?;
    render(&StoresTemplate {
        title: "Stores",
        stores,
    })
}

/// GET /addresses
pub async fn addresses(State(state): State<AppState>) -> AppResult<Html<String>> {
    let addresses = state.services.addresses.find_all_addresses().await?;
    render(&AddressesTemplate {
        title: "Addresses",
        addresses,
    })
}
