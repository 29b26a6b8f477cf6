//! Integration tests for the server-rendered HTML pages.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_text, get};
use sqlx::PgPool;

async fn page(pool: PgPool, use_sql_builder: bool, uri: &str) -> String {
    let app = common::build_test_app_with(pool, use_sql_builder);
    let response = get(app, uri).await;

    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let content_type = response.headers().get(CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    body_text(response).await
}

// ---------------------------------------------------------------------------
// Films
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("pagila_sample"))
)]
async fn films_page_lists_every_film(pool: PgPool) {
    for use_sql_builder in [false, true] {
        let html = page(pool.clone(), use_sql_builder, "/films").await;

        assert!(html.contains("<title>Films | Pagila</title>"));
        assert!(html.contains("6 films"));
        assert!(html.contains("ACADEMY DINOSAUR"));
        assert!(html.contains("AGENT TRUMAN"), "uncategorized film is listed");
        assert!(html.contains("Drama, Travel"));
        assert!(html.contains("Behind the Scenes, Deleted Scenes"));
        assert!(html.contains("Japanese"));
    }
}

// ---------------------------------------------------------------------------
// People and places
// ---------------------------------------------------------------------------

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("pagila_sample"))
)]
async fn customers_page_renders_names_and_addresses(pool: PgPool) {
    let html = page(pool, false, "/customers").await;

    assert!(html.contains("<h1>Customers</h1>"));
    assert!(html.contains("MARY SMITH"));
    assert!(html.contains("1913 Hanoi Way, Osaka, Osaka, Japan"));
    assert!(html.contains("2022-02-14"));
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("pagila_sample"))
)]
async fn staff_page_hides_passwords(pool: PgPool) {
    let html = page(pool, true, "/staff").await;

    assert!(html.contains("<h1>Staff members</h1>"));
    assert!(html.contains("Mike Hillyer"));
    assert!(!html.contains("8cb2237d0679ca88db6464eac60da96345513964"));
}

#[sqlx::test(
    migrations = "../../db/migrations",
    fixtures(path = "../../../db/fixtures", scripts("pagila_sample"))
)]
async fn stores_and_addresses_pages_render(pool: PgPool) {
    let stores = page(pool.clone(), false, "/stores").await;
    assert!(stores.contains("<h1>Stores</h1>"));
    assert!(stores.contains("47 MySakila Drive, Alberta, Lethbridge, Canada"));

    let addresses = page(pool, true, "/addresses").await;
    assert!(addresses.contains("<h1>Addresses</h1>"));
    assert!(addresses.contains("1121 Loja Avenue"));
    assert!(addresses.contains("Australia"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn index_names_the_strategy(pool: PgPool) {
    let html = page(pool.clone(), false, "/").await;
    assert!(html.contains("<code>entity</code>"));

    let html = page(pool, true, "/").await;
    assert!(html.contains("<code>sql</code>"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_database_renders_empty_tables(pool: PgPool) {
    let html = page(pool, false, "/films").await;
    assert!(html.contains("0 films"));
}
