//! Reusable SQL fragments for nested rows and multisets.
//!
//! Arguments are table aliases chosen by the calling query, never user input.

/// `json_build_object` for a city and its country name.
pub fn city_json(address: &str, city: &str, country: &str) -> String {
    format!(
        "json_build_object('id', {address}.city_id, 'city', {city}.city, \
         'country', {country}.country)"
    )
}

/// `json_build_object` for an address with its nested city.
pub fn address_json(address: &str, city: &str, country: &str) -> String {
    format!(
        "json_build_object('id', {address}.address_id, 'address', {address}.address, \
         'address2', {address}.address2, 'district', {address}.district, \
         'city', {}, 'postal_code', {address}.postal_code, 'phone', {address}.phone)",
        city_json(address, city, country)
    )
}

/// `json_build_object` for a store with its nested address.
pub fn store_json(store: &str, address: &str, city: &str, country: &str) -> String {
    format!(
        "json_build_object('id', {store}.store_id, 'address', {})",
        address_json(address, city, country)
    )
}

/// `LEFT JOIN`s resolving `{owner}.address_id` through city and country.
pub fn address_joins(owner: &str, address: &str, city: &str, country: &str) -> String {
    format!(
        " LEFT JOIN address {address} ON {address}.address_id = {owner}.address_id \
          LEFT JOIN city {city} ON {city}.city_id = {address}.city_id \
          LEFT JOIN country {country} ON {country}.country_id = {city}.country_id"
    )
}

/// Categories multiset of film alias `film`, as a JSON array (never NULL).
pub fn categories_multiset(film: &str) -> String {
    format!(
        "COALESCE((SELECT json_agg(json_build_object('id', c.category_id, 'name', c.name) \
                               ORDER BY c.category_id) \
                   FROM category c \
                   JOIN film_category fc ON fc.category_id = c.category_id \
                   WHERE fc.film_id = {film}.film_id), '[]'::json)"
    )
}

/// Actors multiset of film alias `film`, as a JSON array (never NULL).
pub fn actors_multiset(film: &str) -> String {
    format!(
        "COALESCE((SELECT json_agg(json_build_object('id', a.actor_id, \
                                'first_name', a.first_name, 'last_name', a.last_name) \
                               ORDER BY a.actor_id) \
                   FROM actor a \
                   JOIN film_actor fa ON fa.actor_id = a.actor_id \
                   WHERE fa.film_id = {film}.film_id), '[]'::json)"
    )
}
