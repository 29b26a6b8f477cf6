//! Askama page templates. Template files live in `crates/api/templates/`.

use askama::Template;
use axum::response::Html;
use pagila_core::model::{Address, Customer, Film, Staff, Store};

use crate::error::AppResult;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub strategy: &'static str,
}

#[derive(Template)]
#[template(path = "films.html")]
pub struct FilmsTemplate {
    pub title: &'static str,
    pub films: Vec<Film>,
}

#[derive(Template)]
#[template(path = "customers.html")]
pub struct CustomersTemplate {
    pub title: &'static str,
    pub customers: Vec<Customer>,
}

#[derive(Template)]
#[template(path = "staff.html")]
pub struct StaffTemplate {
    pub title: &'static str,
    pub staff: Vec<Staff>,
}

#[derive(Template)]
#[template(path = "stores.html")]
pub struct StoresTemplate {
    pub title: &'static str,
    pub stores: Vec<Store>,
}

#[derive(Template)]
#[template(path = "addresses.html")]
pub struct AddressesTemplate {
    pub title: &'static str,
    pub addresses: Vec<Address>,
}

/// Render a template into an HTML response body.
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
