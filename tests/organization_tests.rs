//! Entity lifecycle tests against a live database. Run with:
//! `cargo test -- --ignored`

use std::time::Duration;

use uuid::Uuid;

use hrms_api::config::Settings;
use hrms_api::db::{self, create_pool, with_session};

async fn test_pool() -> sqlx::PgPool {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env().unwrap();
    let pool = create_pool(&settings.database_url()).await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn unique_code(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn insert_assigns_id_and_timestamps() {
    let pool = test_pool().await;
    let code = unique_code("acme");

    let org = db::organization::insert_organization(&pool, "Acme", &code)
        .await
        .unwrap();

    assert_eq!(org.name, "Acme");
    assert_eq!(org.code, code);
    assert!(org.is_active);
    assert_eq!(org.created_at, org.updated_at);

    let found = db::organization::find_organization_by_code(&pool, &code)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, org.id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn duplicate_code_violates_unique_index() {
    let pool = test_pool().await;
    let code = unique_code("dup");

    db::organization::insert_organization(&pool, "First", &code)
        .await
        .unwrap();
    let err = db::organization::insert_organization(&pool, "Second", &code)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn update_refreshes_updated_at() {
    let pool = test_pool().await;
    let code = unique_code("rename");

    let org = db::organization::insert_organization(&pool, "Before", &code)
        .await
        .unwrap();

    // NOW() has microsecond resolution; give it room to move.
    tokio::time::sleep(Duration::from_millis(10)).await;

    let renamed = db::organization::rename_organization(&pool, org.id, "After")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(renamed.id, org.id);
    assert_eq!(renamed.name, "After");
    assert_eq!(renamed.created_at, org.created_at);
    assert!(renamed.updated_at > org.updated_at);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn deactivation_flips_the_flag() {
    let pool = test_pool().await;
    let code = unique_code("inactive");

    let org = db::organization::insert_organization(&pool, "Dormant", &code)
        .await
        .unwrap();
    let updated = db::organization::set_organization_active(&pool, org.id, false)
        .await
        .unwrap()
        .unwrap();

    assert!(!updated.is_active);
    assert!(updated.updated_at >= org.updated_at);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn listing_orders_by_creation_time() {
    let pool = test_pool().await;
    let first_code = unique_code("list-a");
    let second_code = unique_code("list-b");

    let first = db::organization::insert_organization(&pool, "List A", &first_code)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = db::organization::insert_organization(&pool, "List B", &second_code)
        .await
        .unwrap();

    let all = db::organization::list_organizations(&pool).await.unwrap();
    let pos = |id| all.iter().position(|o| o.id == id).unwrap();
    assert!(pos(first.id) < pos(second.id));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn with_session_runs_work_on_a_pooled_connection() {
    let pool = test_pool().await;
    let code = unique_code("scoped");

    let org = with_session(&pool, |mut conn| async move {
        let org = db::organization::insert_organization(&mut *conn, "Scoped", &code)
            .await?;
        Ok(org)
    })
    .await
    .unwrap();

    assert_eq!(org.name, "Scoped");

    // The connection went back to the pool; the row is visible from others.
    let found = db::organization::find_organization_by_code(&pool, &org.code)
        .await
        .unwrap();
    assert!(found.is_some());
}
