//! Integration tests for the `user_preferences` repository and the Postgres
//! store. They need a reachable Postgres (`DATABASE_URL`), so they are
//! ignored by default: run with `cargo test -p survey-db -- --ignored`.

use sqlx::PgPool;
use survey_core::survey::NewSurveyResponse;
use survey_db::repositories::SurveyResponseRepo;
use survey_db::{PgResponseStore, ResponseStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_response(name: &str, accessory: &str, color: &str) -> NewSurveyResponse {
    NewSurveyResponse {
        full_name: name.to_string(),
        accessory_type: accessory.to_string(),
        color_preference: color.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_returns_row_with_assigned_id(pool: PgPool) {
    let row = SurveyResponseRepo::create(&pool, &new_response("An", "Vòng tay", "Đen nhám"))
        .await
        .unwrap();

    assert!(row.id > 0);
    assert_eq!(row.full_name, "An");
    assert_eq!(row.accessory_type, "Vòng tay");
    assert_eq!(row.color_preference, "Đen nhám");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_is_ordered_by_id_descending(pool: PgPool) {
    for name in ["An", "Binh", "Chi"] {
        SurveyResponseRepo::create(&pool, &new_response(name, "Móc khóa", "Red"))
            .await
            .unwrap();
    }

    let rows = SurveyResponseRepo::list_newest_first(&pool).await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].full_name, "Chi");
    assert!(rows.windows(2).all(|w| w[0].id > w[1].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn unknown_accessory_is_stored_verbatim(pool: PgPool) {
    let row = SurveyResponseRepo::create(&pool, &new_response("Dung", "Unknown", "Green"))
        .await
        .unwrap();

    assert_eq!(row.accessory_type, "Unknown");
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn pg_store_round_trips_through_trait(pool: PgPool) {
    let store = PgResponseStore::new(pool);
    store.health_check().await.unwrap();

    let first = store
        .insert(&new_response("An", "Vòng tay", "Đen nhám"))
        .await
        .unwrap();
    let second = store
        .insert(&new_response("An", "Vòng tay", "Đen nhám"))
        .await
        .unwrap();

    // No deduplication: identical submissions are separate rows.
    assert!(second.id > first.id);

    let listed = store.list_newest_first().await.unwrap();
    assert_eq!(listed, vec![second, first]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn repeated_listing_is_identical(pool: PgPool) {
    let store = PgResponseStore::new(pool);
    for name in ["An", "Binh"] {
        store
            .insert(&new_response(name, "Móc khóa", "Red"))
            .await
            .unwrap();
    }

    let first = store.list_newest_first().await.unwrap();
    let second = store.list_newest_first().await.unwrap();
    assert_eq!(first, second);
}
