//! Persistence entities.
//!
//! Each entity is one row of a Pagila table, with foreign keys kept as ids.
//! Entities never leave the data-access layer: they are resolved into a
//! fetch graph (see [`crate::graph`]) and converted into view records.

pub mod address;
pub mod customer;
pub mod film;
pub mod staff;
pub mod store;
