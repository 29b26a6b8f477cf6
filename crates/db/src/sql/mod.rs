//! SQL-builder strategy.
//!
//! One statement per call, composed with [`sqlx::QueryBuilder`]. Nested
//! to-one associations are selected as `json_build_object(...)` row values
//! and to-many associations as `json_agg(...)` multisets, then decoded into
//! the row types in [`rows`].

pub mod fragments;
pub mod queries;
pub mod rows;
