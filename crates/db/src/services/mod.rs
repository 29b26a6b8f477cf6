//! Service interface shared by both data-access strategies.
//!
//! Handlers only see these traits. [`Services::new`] picks the strategy at
//! startup; every method runs inside one read-only transaction.

pub mod entity;
pub mod sql;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use pagila_core::filter::{FilmFilter, DEFAULT_FILM_QUERY_BUCKETS};
use pagila_core::model::{Address, Customer, Film, Staff, Store};

use crate::{DbPool, DbResult};

#[async_trait]
pub trait AddressService: Send + Sync {
    /// All addresses, ordered by id.
    async fn find_all_addresses(&self) -> DbResult<Vec<Address>>;
}

#[async_trait]
pub trait CustomerService: Send + Sync {
    /// All customers with their store and address, ordered by id.
    async fn find_all_customers(&self) -> DbResult<Vec<Customer>>;
}

#[async_trait]
pub trait StaffService: Send + Sync {
    /// All staff members with their store and address, ordered by id.
    async fn find_all_staff_members(&self) -> DbResult<Vec<Staff>>;
}

#[async_trait]
pub trait StoreService: Send + Sync {
    /// All stores with their address, ordered by id.
    async fn find_all_stores(&self) -> DbResult<Vec<Store>>;
}

/// Film queries. Every list is ordered by id without duplicates, and each
/// film carries all of its categories and actors regardless of the filter.
#[async_trait]
pub trait FilmService: Send + Sync {
    async fn find_films(&self, filter: &FilmFilter) -> DbResult<Vec<Film>>;

    /// Distinct category names, sorted.
    async fn find_all_film_categories(&self) -> DbResult<BTreeSet<String>>;

    async fn find_all_films(&self) -> DbResult<Vec<Film>> {
        self.find_films(&FilmFilter::All).await
    }

    async fn find_films_by_language(&self, language: &str) -> DbResult<Vec<Film>> {
        self.find_films(&FilmFilter::language(language)).await
    }

    async fn find_films_by_category(&self, category: &str) -> DbResult<Vec<Film>> {
        self.find_films_by_categories(&[category.to_string()]).await
    }

    /// Films having any of `categories`.
    async fn find_films_by_categories(&self, categories: &[String]) -> DbResult<Vec<Film>> {
        self.find_films(&FilmFilter::categories(categories)).await
    }

    async fn find_films_by_actor(&self, first_name: &str, last_name: &str) -> DbResult<Vec<Film>> {
        self.find_films(&FilmFilter::actor(first_name, last_name)).await
    }
}

/// Strategy selection and tuning for [`Services::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataAccessConfig {
    /// Use composed SQL statements instead of entity fetch graphs.
    pub use_sql_builder: bool,
    /// Number of category-filtered queries the entity strategy splits an
    /// unfiltered film load into.
    pub film_query_buckets: usize,
}

impl Default for DataAccessConfig {
    fn default() -> Self {
        Self {
            use_sql_builder: false,
            film_query_buckets: DEFAULT_FILM_QUERY_BUCKETS,
        }
    }
}

impl DataAccessConfig {
    pub fn strategy_name(&self) -> &'static str {
        if self.use_sql_builder {
            sql::STRATEGY
        } else {
            entity::STRATEGY
        }
    }
}

/// One implementation of every service trait, all from the same strategy.
#[derive(Clone)]
pub struct Services {
    pub addresses: Arc<dyn AddressService>,
    pub customers: Arc<dyn CustomerService>,
    pub films: Arc<dyn FilmService>,
    pub staff: Arc<dyn StaffService>,
    pub stores: Arc<dyn StoreService>,
}

impl Services {
    pub fn new(pool: DbPool, config: &DataAccessConfig) -> Self {
        if config.use_sql_builder {
            Self::sql(pool)
        } else {
            Self::entity(pool, config.film_query_buckets)
        }
    }

    pub fn entity(pool: DbPool, film_query_buckets: usize) -> Self {
        Self {
            addresses: Arc::new(entity::EntityAddressService::new(pool.clone())),
            customers: Arc::new(entity::EntityCustomerService::new(pool.clone())),
            films: Arc::new(entity::EntityFilmService::new(
                pool.clone(),
                film_query_buckets,
            )),
            staff: Arc::new(entity::EntityStaffService::new(pool.clone())),
            stores: Arc::new(entity::EntityStoreService::new(pool)),
        }
    }

    pub fn sql(pool: DbPool) -> Self {
        Self {
            addresses: Arc::new(sql::SqlAddressService::new(pool.clone())),
            customers: Arc::new(sql::SqlCustomerService::new(pool.clone())),
            films: Arc::new(sql::SqlFilmService::new(pool.clone())),
            staff: Arc::new(sql::SqlStaffService::new(pool.clone())),
            stores: Arc::new(sql::SqlStoreService::new(pool)),
        }
    }
}
