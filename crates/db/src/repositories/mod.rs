//! Repository layer for the entity strategy.
//!
//! Each repository is a zero-sized struct providing async read methods that
//! accept `&mut PgConnection` as the first argument, so every call of one
//! service method shares the same read-only transaction.

pub mod actor_repo;
pub mod address_repo;
pub mod category_repo;
pub mod city_repo;
pub mod country_repo;
pub mod customer_repo;
pub mod film_repo;
pub mod language_repo;
pub mod staff_repo;
pub mod store_repo;

pub use actor_repo::ActorRepo;
pub use address_repo::AddressRepo;
pub use category_repo::CategoryRepo;
pub use city_repo::CityRepo;
pub use country_repo::CountryRepo;
pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
pub use language_repo::LanguageRepo;
pub use staff_repo::StaffRepo;
pub use store_repo::StoreRepo;
