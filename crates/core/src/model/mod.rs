//! Immutable view records.
//!
//! Each record is a flat projection of one or more Pagila tables, built
//! fresh per query by the data-access layer and discarded after rendering.
//! Nullable columns become `Option` fields.

pub mod address;
pub mod customer;
pub mod film;
pub mod staff;
pub mod store;

pub use address::{Address, City};
pub use customer::Customer;
pub use film::{Actor, Category, Film};
pub use staff::Staff;
pub use store::Store;
