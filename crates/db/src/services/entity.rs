//! Entity strategy: root entities plus batched fetch graphs.

use std::collections::BTreeSet;

use async_trait::async_trait;
use pagila_core::filter::{category_buckets, FilmFilter};
use pagila_core::model::{Address, Customer, Film, Staff, Store};
use sqlx::PgConnection;

use super::{AddressService, CustomerService, FilmService, StaffService, StoreService};
use crate::entities::film::FilmEntity;
use crate::graph::{AddressGraph, FilmGraph, StoreGraph};
use crate::repositories::{AddressRepo, CategoryRepo, CustomerRepo, FilmRepo, StaffRepo, StoreRepo};
use crate::{begin_read_only, DbPool, DbResult};

pub const STRATEGY: &str = "entity";

pub struct EntityAddressService {
    pool: DbPool,
}

impl EntityAddressService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressService for EntityAddressService {
    async fn find_all_addresses(&self) -> DbResult<Vec<Address>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let addresses = AddressRepo::list(&mut tx).await?;
        let graph = AddressGraph::complete(&mut tx, addresses).await?;
        let addresses = graph.all_addresses()?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = addresses.len(), "Loaded addresses");
        Ok(addresses)
    }
}

pub struct EntityCustomerService {
    pool: DbPool,
}

impl EntityCustomerService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerService for EntityCustomerService {
    async fn find_all_customers(&self) -> DbResult<Vec<Customer>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let customers = CustomerRepo::list(&mut tx).await?;

        let store_ids: Vec<_> = customers.iter().map(|c| c.store_id).collect();
        let address_ids: Vec<_> = customers.iter().map(|c| c.address_id).collect();
        let graph = StoreGraph::load(&mut tx, &store_ids, &address_ids).await?;

        let customers = customers
            .iter()
            .map(|c| {
                Ok(crate::conversions::customer(
                    c,
                    graph.store(c.store_id)?,
                    graph.address(c.address_id)?,
                ))
            })
            .collect::<DbResult<Vec<_>>>()?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = customers.len(), "Loaded customers");
        Ok(customers)
    }
}

pub struct EntityStaffService {
    pool: DbPool,
}

impl EntityStaffService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffService for EntityStaffService {
    async fn find_all_staff_members(&self) -> DbResult<Vec<Staff>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let staff = StaffRepo::list(&mut tx).await?;

        let store_ids: Vec<_> = staff.iter().map(|s| s.store_id).collect();
        let address_ids: Vec<_> = staff.iter().map(|s| s.address_id).collect();
        let graph = StoreGraph::load(&mut tx, &store_ids, &address_ids).await?;

        let staff = staff
            .iter()
            .map(|s| {
                Ok(crate::conversions::staff(
                    s,
                    graph.address(s.address_id)?,
                    graph.store(s.store_id)?,
                ))
            })
            .collect::<DbResult<Vec<_>>>()?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = staff.len(), "Loaded staff members");
        Ok(staff)
    }
}

pub struct EntityStoreService {
    pool: DbPool,
}

impl EntityStoreService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreService for EntityStoreService {
    async fn find_all_stores(&self) -> DbResult<Vec<Store>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let stores = StoreRepo::list(&mut tx).await?;
        let ids: Vec<_> = stores.iter().map(|s| s.id).collect();
        let graph = StoreGraph::complete(&mut tx, stores, &[]).await?;
        let stores = ids
            .into_iter()
            .map(|id| graph.store(id))
            .collect::<DbResult<Vec<_>>>()?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, count = stores.len(), "Loaded stores");
        Ok(stores)
    }
}

pub struct EntityFilmService {
    pool: DbPool,
    film_query_buckets: usize,
}

impl EntityFilmService {
    pub fn new(pool: DbPool, film_query_buckets: usize) -> Self {
        Self {
            pool,
            film_query_buckets,
        }
    }

    /// Load every film as a union of category-filtered queries, one per
    /// bucket of category names, plus the films without any category.
    async fn load_all_bucketed(&self, conn: &mut PgConnection) -> DbResult<Vec<FilmEntity>> {
        let names = CategoryRepo::list_names(conn).await?;
        let buckets = category_buckets(names, self.film_query_buckets);

        let mut films = Vec::new();
        for bucket in &buckets {
            let names: Vec<String> = bucket.iter().map(|n| n.to_uppercase()).collect();
            films.extend(FilmRepo::find_by_categories(conn, &names).await?);
        }
        films.extend(FilmRepo::find_without_category(conn).await?);

        films.sort_by_key(|f| f.id);
        films.dedup_by_key(|f| f.id);

        tracing::debug!(buckets = buckets.len(), "Loaded films by category bucket");
        Ok(films)
    }
}

#[async_trait]
impl FilmService for EntityFilmService {
    async fn find_films(&self, filter: &FilmFilter) -> DbResult<Vec<Film>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let entities = match filter {
            FilmFilter::All => self.load_all_bucketed(&mut tx).await?,
            FilmFilter::Language(language) => FilmRepo::find_by_language(&mut tx, language).await?,
            FilmFilter::Categories(categories) => {
                let categories: Vec<String> = categories.iter().cloned().collect();
                FilmRepo::find_by_categories(&mut tx, &categories).await?
            }
            FilmFilter::Actor {
                first_name,
                last_name,
            } => FilmRepo::find_by_actor(&mut tx, first_name, last_name).await?,
        };
        let graph = FilmGraph::load(&mut tx, &entities).await?;
        let films = graph.films(&entities)?;
        tx.commit().await?;

        tracing::debug!(strategy = STRATEGY, ?filter, count = films.len(), "Loaded films");
        Ok(films)
    }

    async fn find_all_film_categories(&self) -> DbResult<BTreeSet<String>> {
        let mut tx = begin_read_only(&self.pool).await?;
        let names = CategoryRepo::list_names(&mut tx).await?;
        tx.commit().await?;
        Ok(names.into_iter().collect())
    }
}
