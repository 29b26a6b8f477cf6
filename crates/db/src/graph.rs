//! Fetch graphs for the entity strategy.
//!
//! A fetch graph names the associations to load together with a set of root
//! entities. Each level is loaded with one `= ANY($1)` query over the ids
//! collected from the level above, so the number of queries depends on the
//! depth of the graph, never on the number of rows:
//!
//! ```text
//! AddressGraph   address -> city -> country                        3 queries
//! StoreGraph     store -> AddressGraph                             1 + 3
//! FilmGraph      film -> language (both), category, actor          3 queries
//! ```

use std::collections::HashMap;

use pagila_core::model::{Address, Film, Store};
use pagila_core::types::DbId;
use sqlx::PgConnection;

use crate::conversions;
use crate::entities::address::{AddressEntity, CityEntity, CountryEntity};
use crate::entities::film::{ActorEntity, CategoryEntity, FilmEntity, LanguageEntity};
use crate::entities::store::StoreEntity;
use crate::error::{DbError, DbResult};
use crate::repositories::{
    ActorRepo, AddressRepo, CategoryRepo, CityRepo, CountryRepo, LanguageRepo, StoreRepo,
};

/// Sorted, de-duplicated ids, ready to bind as an array parameter.
fn unique_ids(ids: impl IntoIterator<Item = DbId>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn index_by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> DbId) -> HashMap<DbId, T> {
    rows.into_iter().map(|row| (id(&row), row)).collect()
}

fn lookup<'a, T>(map: &'a HashMap<DbId, T>, entity: &'static str, id: DbId) -> DbResult<&'a T> {
    map.get(&id).ok_or(DbError::MissingAssociation { entity, id })
}

// ---------------------------------------------------------------------------
// Address graph
// ---------------------------------------------------------------------------

/// Addresses with their cities and countries.
#[derive(Debug, Default)]
pub struct AddressGraph {
    addresses: HashMap<DbId, AddressEntity>,
    cities: HashMap<DbId, CityEntity>,
    countries: HashMap<DbId, CountryEntity>,
}

impl AddressGraph {
    /// Load the given addresses and their cities and countries.
    pub async fn load(conn: &mut PgConnection, address_ids: &[DbId]) -> DbResult<Self> {
        let addresses =
            AddressRepo::find_by_ids(conn, &unique_ids(address_ids.iter().copied())).await?;
        Self::complete(conn, addresses).await
    }

    /// Load cities and countries for addresses that are already loaded.
    pub async fn complete(
        conn: &mut PgConnection,
        addresses: Vec<AddressEntity>,
    ) -> DbResult<Self> {
        let city_ids = unique_ids(addresses.iter().map(|a| a.city_id));
        let cities = CityRepo::find_by_ids(conn, &city_ids).await?;

        let country_ids = unique_ids(cities.iter().map(|c| c.country_id));
        let countries = CountryRepo::find_by_ids(conn, &country_ids).await?;

        Ok(Self {
            addresses: index_by_id(addresses, |a| a.id),
            cities: index_by_id(cities, |c| c.id),
            countries: index_by_id(countries, |c| c.id),
        })
    }

    /// Resolve one address into its view record.
    pub fn address(&self, id: DbId) -> DbResult<Address> {
        let address = lookup(&self.addresses, "address", id)?;
        let city = lookup(&self.cities, "city", address.city_id)?;
        let country = lookup(&self.countries, "country", city.country_id)?;
        Ok(conversions::address(address, conversions::city(city, country)))
    }

    /// Resolve every loaded address, ordered by id.
    pub fn all_addresses(&self) -> DbResult<Vec<Address>> {
        let ids = unique_ids(self.addresses.keys().copied());
        ids.into_iter().map(|id| self.address(id)).collect()
    }
}

// ---------------------------------------------------------------------------
// Store graph
// ---------------------------------------------------------------------------

/// Stores with their addresses, plus any extra addresses the caller needs
/// (customer or staff home addresses), loaded in the same address queries.
#[derive(Debug, Default)]
pub struct StoreGraph {
    stores: HashMap<DbId, StoreEntity>,
    addresses: AddressGraph,
}

impl StoreGraph {
    pub async fn load(
        conn: &mut PgConnection,
        store_ids: &[DbId],
        extra_address_ids: &[DbId],
    ) -> DbResult<Self> {
        let stores = StoreRepo::find_by_ids(conn, &unique_ids(store_ids.iter().copied())).await?;
        Self::complete(conn, stores, extra_address_ids).await
    }

    /// Load addresses for stores that are already loaded.
    pub async fn complete(
        conn: &mut PgConnection,
        stores: Vec<StoreEntity>,
        extra_address_ids: &[DbId],
    ) -> DbResult<Self> {
        let address_ids = unique_ids(
            stores
                .iter()
                .map(|s| s.address_id)
                .chain(extra_address_ids.iter().copied()),
        );
        let addresses = AddressGraph::load(conn, &address_ids).await?;
        Ok(Self {
            stores: index_by_id(stores, |s| s.id),
            addresses,
        })
    }

    pub fn store(&self, id: DbId) -> DbResult<Store> {
        let store = lookup(&self.stores, "store", id)?;
        let address = self.addresses.address(store.address_id)?;
        Ok(conversions::store(store, address))
    }

    pub fn address(&self, id: DbId) -> DbResult<Address> {
        self.addresses.address(id)
    }
}

// ---------------------------------------------------------------------------
// Film graph
// ---------------------------------------------------------------------------

/// Languages, categories, and actors of a set of films.
#[derive(Debug, Default)]
pub struct FilmGraph {
    languages: HashMap<DbId, LanguageEntity>,
    categories: HashMap<DbId, Vec<CategoryEntity>>,
    actors: HashMap<DbId, Vec<ActorEntity>>,
}

impl FilmGraph {
    pub async fn load(conn: &mut PgConnection, films: &[FilmEntity]) -> DbResult<Self> {
        if films.is_empty() {
            return Ok(Self::default());
        }

        let language_ids = unique_ids(
            films
                .iter()
                .flat_map(|f| std::iter::once(f.language_id).chain(f.original_language_id)),
        );
        let languages = LanguageRepo::find_by_ids(conn, &language_ids).await?;

        let film_ids = unique_ids(films.iter().map(|f| f.id));

        let mut categories: HashMap<DbId, Vec<CategoryEntity>> = HashMap::new();
        for link in CategoryRepo::for_films(conn, &film_ids).await? {
            categories.entry(link.film_id).or_default().push(link.category);
        }

        let mut actors: HashMap<DbId, Vec<ActorEntity>> = HashMap::new();
        for link in ActorRepo::for_films(conn, &film_ids).await? {
            actors.entry(link.film_id).or_default().push(link.actor);
        }

        Ok(Self {
            languages: index_by_id(languages, |l| l.id),
            categories,
            actors,
        })
    }

    pub fn film(&self, film: &FilmEntity) -> DbResult<Film> {
        let language = lookup(&self.languages, "language", film.language_id)?;
        let original_language = film
            .original_language_id
            .map(|id| lookup(&self.languages, "language", id))
            .transpose()?;
        let categories = self.categories.get(&film.id).into_iter().flatten();
        let actors = self.actors.get(&film.id).into_iter().flatten();
        Ok(conversions::film(
            film,
            language,
            original_language,
            categories,
            actors,
        ))
    }

    /// Convert every film, keeping the input order.
    pub fn films(&self, films: &[FilmEntity]) -> DbResult<Vec<Film>> {
        films.iter().map(|f| self.film(f)).collect()
    }
}
