//! Domain types shared by the Pagila data-access and web layers.
//!
//! This crate has no database or HTTP dependencies: it holds the immutable
//! view records handed to templates, the film filter vocabulary, and the
//! domain error type.

pub mod error;
pub mod filter;
pub mod model;
pub mod types;
