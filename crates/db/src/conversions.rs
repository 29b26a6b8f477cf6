//! Conversions from entities to view records.
//!
//! Callers pass every associated entity the record needs; nothing here
//! touches the database. [`crate::graph`] is responsible for having loaded
//! those associations up front.

use pagila_core::model::film::{normalize_special_features, strip_padding};
use pagila_core::model::{Actor, Address, Category, City, Customer, Film, Staff, Store};

use crate::entities::address::{AddressEntity, CityEntity, CountryEntity};
use crate::entities::customer::CustomerEntity;
use crate::entities::film::{ActorEntity, CategoryEntity, FilmEntity, LanguageEntity};
use crate::entities::staff::StaffEntity;
use crate::entities::store::StoreEntity;

pub fn city(city: &CityEntity, country: &CountryEntity) -> City {
    City {
        id: city.id,
        name: city.city.clone(),
        country: country.country.clone(),
    }
}

pub fn address(address: &AddressEntity, city: City) -> Address {
    Address {
        id: address.id,
        address: address.address.clone(),
        address2: address.address2.clone(),
        district: address.district.clone(),
        city,
        postal_code: address.postal_code.clone(),
        phone: address.phone.clone(),
    }
}

pub fn store(store: &StoreEntity, address: Address) -> Store {
    Store {
        id: store.id,
        address,
    }
}

pub fn customer(customer: &CustomerEntity, store: Store, address: Address) -> Customer {
    Customer {
        id: customer.id,
        store,
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
        address,
        is_active: Customer::is_active_flag(customer.active),
        create_date: customer.create_date,
    }
}

pub fn staff(staff: &StaffEntity, address: Address, store: Store) -> Staff {
    Staff {
        id: staff.id,
        first_name: staff.first_name.clone(),
        last_name: staff.last_name.clone(),
        address,
        email: staff.email.clone(),
        store,
        is_active: staff.active,
        username: staff.username.clone(),
        password: staff.password.clone(),
        picture: staff.picture.clone(),
    }
}

pub fn category(category: &CategoryEntity) -> Category {
    Category {
        id: category.id,
        name: category.name.clone(),
    }
}

pub fn actor(actor: &ActorEntity) -> Actor {
    Actor {
        id: actor.id,
        first_name: actor.first_name.clone(),
        last_name: actor.last_name.clone(),
    }
}

pub fn film<'a>(
    film: &FilmEntity,
    language: &LanguageEntity,
    original_language: Option<&LanguageEntity>,
    categories: impl IntoIterator<Item = &'a CategoryEntity>,
    actors: impl IntoIterator<Item = &'a ActorEntity>,
) -> Film {
    Film {
        id: film.id,
        title: film.title.clone(),
        description: film.description.clone(),
        release_year: film.release_year,
        language: strip_padding(&language.name),
        original_language: original_language.map(|l| strip_padding(&l.name)),
        categories: categories.into_iter().map(category).collect(),
        actors: actors.into_iter().map(actor).collect(),
        rental_duration: film.rental_duration,
        rental_rate: film.rental_rate,
        length: film.length,
        replacement_cost: film.replacement_cost,
        rating: film.rating.clone(),
        special_features: normalize_special_features(film.special_features.clone()),
    }
}
