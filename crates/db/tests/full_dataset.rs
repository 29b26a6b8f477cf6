//! Checks against a database restored from the public Pagila dump.
//!
//! Ignored by default. Restore Pagila, point `DATABASE_URL` at it and run
//! `cargo test -p pagila-db --test full_dataset -- --ignored`.

use pagila_core::filter::DEFAULT_FILM_QUERY_BUCKETS;
use pagila_db::services::Services;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn strategies() -> [(&'static str, Services); 2] {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must name a Pagila database");
    let pool = pagila_db::create_pool(&url).await.unwrap();
    [
        ("entity", Services::entity(pool.clone(), DEFAULT_FILM_QUERY_BUCKETS)),
        ("sql", Services::sql(pool)),
    ]
}

// ---------------------------------------------------------------------------
// Films
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a restored Pagila database in DATABASE_URL"]
async fn english_language_has_585_films() {
    for (name, services) in strategies().await {
        let films = services.films.find_films_by_language("English").await.unwrap();
        assert_eq!(films.len(), 585, "{name}");
        assert!(films.iter().all(|f| f.language == "English"), "{name}");
    }
}

#[tokio::test]
#[ignore = "requires a restored Pagila database in DATABASE_URL"]
async fn travel_category_holds_over_a_hundred_films() {
    for (name, services) in strategies().await {
        let films = services.films.find_films_by_category("Travel").await.unwrap();
        assert!(films.len() > 100, "{name}: {}", films.len());
        assert!(films.iter().all(|f| f.category_names().contains("Travel")), "{name}");
    }
}

#[tokio::test]
#[ignore = "requires a restored Pagila database in DATABASE_URL"]
async fn jennifer_davis_appears_in_more_than_ten_films() {
    for (name, services) in strategies().await {
        let films = services
            .films
            .find_films_by_actor("Jennifer", "Davis")
            .await
            .unwrap();
        assert!(films.len() > 10, "{name}: {}", films.len());
        assert!(films.iter().all(|f| f.actor_names().contains("JENNIFER DAVIS")), "{name}");
    }
}

// ---------------------------------------------------------------------------
// Addresses
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a restored Pagila database in DATABASE_URL"]
async fn addresses_number_over_a_hundred() {
    for (name, services) in strategies().await {
        let addresses = services.addresses.find_all_addresses().await.unwrap();
        assert!(addresses.len() > 100, "{name}: {}", addresses.len());
    }
}
