//! Composed queries of the SQL-builder strategy.
//!
//! Every function issues exactly one statement. Filter values are always
//! bound with `push_bind`.

use std::collections::BTreeSet;

use pagila_core::filter::FilmFilter;
use pagila_core::model::{Address, Customer, Film, Staff, Store};
use sqlx::{PgConnection, Postgres, QueryBuilder};

use super::fragments::{
    actors_multiset, address_joins, address_json, categories_multiset, store_json,
};
use super::rows::{AddressResultRow, CustomerRow, FilmRow, StaffRow, StoreResultRow};

pub async fn find_addresses(conn: &mut PgConnection) -> Result<Vec<Address>, sqlx::Error> {
    let sql = format!(
        "SELECT {} AS address \
         FROM address a \
         LEFT JOIN city ci ON ci.city_id = a.city_id \
         LEFT JOIN country co ON co.country_id = ci.country_id \
         ORDER BY a.address_id",
        address_json("a", "ci", "co")
    );
    let rows = sqlx::query_as::<_, AddressResultRow>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(|r| r.address.to_model()).collect())
}

pub async fn find_stores(conn: &mut PgConnection) -> Result<Vec<Store>, sqlx::Error> {
    let sql = format!(
        "SELECT {} AS store FROM store s{} ORDER BY s.store_id",
        store_json("s", "a", "ci", "co"),
        address_joins("s", "a", "ci", "co")
    );
    let rows = sqlx::query_as::<_, StoreResultRow>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(|r| r.store.to_model()).collect())
}

pub async fn find_customers(conn: &mut PgConnection) -> Result<Vec<Customer>, sqlx::Error> {
    let sql = format!(
        "SELECT cu.customer_id, {} AS store, cu.first_name, cu.last_name, cu.email, \
                {} AS address, cu.active, cu.create_date \
         FROM customer cu \
         LEFT JOIN store s ON s.store_id = cu.store_id{}{} \
         ORDER BY cu.customer_id",
        store_json("s", "sa", "sci", "sco"),
        address_json("a", "ci", "co"),
        address_joins("s", "sa", "sci", "sco"),
        address_joins("cu", "a", "ci", "co"),
    );
    let rows = sqlx::query_as::<_, CustomerRow>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(CustomerRow::to_model).collect())
}

pub async fn find_staff(conn: &mut PgConnection) -> Result<Vec<Staff>, sqlx::Error> {
    let sql = format!(
        "SELECT st.staff_id, st.first_name, st.last_name, {} AS address, st.email, \
                {} AS store, st.active, st.username, st.password, st.picture \
         FROM staff st \
         LEFT JOIN store s ON s.store_id = st.store_id{}{} \
         ORDER BY st.staff_id",
        address_json("a", "ci", "co"),
        store_json("s", "sa", "sci", "sco"),
        address_joins("s", "sa", "sci", "sco"),
        address_joins("st", "a", "ci", "co"),
    );
    let rows = sqlx::query_as::<_, StaffRow>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(StaffRow::to_model).collect())
}

/// Select list and joins shared by every film query.
fn film_select() -> String {
    format!(
        "SELECT f.film_id, f.title, f.description, f.release_year::int4 AS release_year, \
                rtrim(l.name) AS language, rtrim(ol.name) AS original_language, \
                {} AS categories, {} AS actors, \
                f.rental_duration, f.rental_rate, f.length, f.replacement_cost, \
                f.rating::text AS rating, f.special_features \
         FROM film f \
         LEFT JOIN language l ON l.language_id = f.language_id \
         LEFT JOIN language ol ON ol.language_id = f.original_language_id",
        categories_multiset("f"),
        actors_multiset("f")
    )
}

/// Append the `WHERE` clause for `filter`.
///
/// Category and actor filters are `EXISTS` subqueries, so a film matching
/// several categories still appears once and keeps its full multisets.
fn push_film_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &FilmFilter) {
    match filter {
        FilmFilter::All => {}
        FilmFilter::Language(language) => {
            qb.push(" WHERE upper(l.name::text) = ");
            qb.push_bind(language.clone());
        }
        FilmFilter::Categories(categories) => {
            qb.push(
                " WHERE EXISTS (SELECT 1 FROM film_category fc \
                   JOIN category c ON c.category_id = fc.category_id \
                   WHERE fc.film_id = f.film_id AND upper(c.name) = ANY(",
            );
            qb.push_bind(categories.iter().cloned().collect::<Vec<String>>());
            qb.push("))");
        }
        FilmFilter::Actor {
            first_name,
            last_name,
        } => {
            qb.push(
                " WHERE EXISTS (SELECT 1 FROM film_actor fa \
                   JOIN actor a ON a.actor_id = fa.actor_id \
                   WHERE fa.film_id = f.film_id AND upper(a.first_name) = ",
            );
            qb.push_bind(first_name.clone());
            qb.push(" AND upper(a.last_name) = ");
            qb.push_bind(last_name.clone());
            qb.push(")");
        }
    }
}

/// Build the film query for `filter`; exposed for SQL inspection in tests.
pub fn film_query(filter: &FilmFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(film_select());
    push_film_filter(&mut qb, filter);
    qb.push(" ORDER BY f.film_id");
    qb
}

pub async fn find_films(
    conn: &mut PgConnection,
    filter: &FilmFilter,
) -> Result<Vec<Film>, sqlx::Error> {
    let mut qb = film_query(filter);
    let rows = qb
        .build_query_as::<FilmRow>()
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(FilmRow::to_model).collect())
}

pub async fn find_film_categories(
    conn: &mut PgConnection,
) -> Result<BTreeSet<String>, sqlx::Error> {
    let names = sqlx::query_scalar::<_, String>("SELECT DISTINCT name FROM category")
        .fetch_all(&mut *conn)
        .await?;
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_film_query_has_no_where_clause() {
        let qb = film_query(&FilmFilter::All);
        let sql = qb.sql();
        assert!(!sql.contains(" WHERE upper"));
        assert!(!sql.contains(" WHERE EXISTS"));
        assert!(sql.ends_with(" ORDER BY f.film_id"));
    }

    #[test]
    fn language_filter_is_bound_not_inlined() {
        let qb = film_query(&FilmFilter::language("english"));
        let sql = qb.sql();
        assert!(sql.contains("WHERE upper(l.name::text) = $1"));
        assert!(!sql.contains("ENGLISH"));
    }

    #[test]
    fn actor_filter_binds_both_names() {
        let qb = film_query(&FilmFilter::actor("Jennifer", "Davis"));
        let sql = qb.sql();
        assert!(sql.contains("upper(a.first_name) = $1 AND upper(a.last_name) = $2"));
        assert!(!sql.contains("JENNIFER"));
    }

    #[test]
    fn category_filter_uses_any_array() {
        let qb = film_query(&FilmFilter::categories(["travel", "drama"]));
        assert!(qb.sql().contains("upper(c.name) = ANY($1)"));
    }
}
