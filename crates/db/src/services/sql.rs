//! SQL-builder strategy: one composed statement per call.

use std::collections::BTreeSet;

use async_trait::async_trait;
use pagila_core::filter::FilmFilter;
use pagila_core::model::{Address, Customer, Film, Staff, Store};

use super::{AddressService, CustomerService, FilmService, StaffService, StoreService};
use crate::sql::queries;
use crate::{begin_read_only, DbPool, DbResult};

pub const STRATEGY: &str = "sql";

pub struct SqlAddressService {
    pool: DbPool,
}

impl SqlAddressService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressService for SqlAddressService {
    async fn find_all_addresses(&self) -> DbResult<Vec<Address>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let addresses = queries::find_addresses(&mut tx).await?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = addresses.len(), "Loaded addresses");
        Ok(addresses)
    }
}

pub struct SqlCustomerService {
    pool: DbPool,
}

impl SqlCustomerService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerService for SqlCustomerService {
    async fn find_all_customers(&self) -> DbResult<Vec<Customer>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let customers = queries::find_customers(&mut tx).await?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = customers.len(), "Loaded customers");
        Ok(customers)
    }
}

pub struct SqlStaffService {
    pool: DbPool,
}

impl SqlStaffService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffService for SqlStaffService {
    async fn find_all_staff_members(&self) -> DbResult<Vec<Staff>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let staff = queries::find_staff(&mut tx).await?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = staff.len(), "Loaded staff members");
        Ok(staff)
    }
}

pub struct SqlStoreService {
    pool: DbPool,
}

impl SqlStoreService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreService for SqlStoreService {
    async fn find_all_stores(&self) -> DbResult<Vec<Store>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let stores = queries::find_stores(&mut tx).await?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = stores.len(), "Loaded stores");
        Ok(stores)
    }
}

pub struct SqlFilmService {
    pool: DbPool,
}

impl SqlFilmService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FilmService for SqlFilmService {
    async fn find_films(&self, filter: &FilmFilter) -> DbResult<Vec<Film>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let films = queries::find_films(&mut tx, filter).await?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, ?filter, count = films.len(), "Loaded films");
        Ok(films)
    }

    async fn find_all_film_categories(&self) -> DbResult<BTreeSet<String>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let names = queries::find_film_categories(&mut tx).await?;
        tx.commit().await?;
        Ok(names)
    }
}
