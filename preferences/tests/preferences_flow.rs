//! End-to-end flow tests on an in-memory sqlite database with the real
//! repositories, sidebar projection and broadcast publisher wired together.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use preferences::config::PreferencesConfig;
use preferences::domain::service::Service;
use preferences::infra::notify::BroadcastEventPublisher;
use preferences::infra::storage::entity::sidebar_channel;
use preferences::infra::storage::migrations::Migrator;
use preferences::infra::storage::{OrmPreferencesRepository, OrmSidebarRepository};
use preferences::local_client::LocalClient;
use preferences::{Preference, PreferencesApi, PreferencesError};
use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter};
use sea_orm_migration::MigratorTrait;

async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

struct Env {
    db: DatabaseConnection,
    publisher: Arc<BroadcastEventPublisher>,
    client: LocalClient,
}

async fn env() -> Env {
    let db = inmem_db().await;
    let publisher = Arc::new(BroadcastEventPublisher::new(64));
    let service = Service::new(
        Arc::new(OrmPreferencesRepository::new(db.clone())),
        Arc::new(OrmSidebarRepository::new(db.clone())),
        publisher.clone(),
        PreferencesConfig::default(),
    );

    Env {
        db,
        publisher,
        client: LocalClient::new(Arc::new(service)),
    }
}

fn pref(user: &str, category: &str, name: &str, value: &str) -> Preference {
    Preference::new(user, category, name, value)
}

#[tokio::test]
async fn saved_preference_round_trips_through_get_one() {
    let env = env().await;

    env.client
        .update_preferences("u1", vec![pref("u1", "display", "theme", "dark")])
        .await
        .unwrap();

    let stored = env
        .client
        .get_preference("u1", "display", "theme")
        .await
        .unwrap();
    assert_eq!(stored.value, "dark");
}

#[tokio::test]
async fn save_is_an_upsert_on_the_key_triple() {
    let env = env().await;

    env.client
        .update_preferences("u1", vec![pref("u1", "display", "theme", "dark")])
        .await
        .unwrap();
    env.client
        .update_preferences("u1", vec![pref("u1", "display", "theme", "light")])
        .await
        .unwrap();

    let stored = env
        .client
        .get_preference("u1", "display", "theme")
        .await
        .unwrap();
    assert_eq!(stored.value, "light");

    let category = env
        .client
        .get_preferences_by_category("u1", "display")
        .await
        .unwrap();
    assert_eq!(category.len(), 1);
}

#[tokio::test]
async fn foreign_record_is_forbidden_and_store_unchanged() {
    let env = env().await;

    let err = env
        .client
        .update_preferences("u1", vec![pref("u2", "display", "theme", "dark")])
        .await
        .unwrap_err();
    assert!(matches!(err, PreferencesError::Forbidden));

    let err = env
        .client
        .get_preference("u2", "display", "theme")
        .await
        .unwrap_err();
    assert!(matches!(err, PreferencesError::NotFound));
}

#[tokio::test]
async fn empty_category_is_not_found() {
    let env = env().await;

    let err = env
        .client
        .get_preferences_by_category("u1", "nonexistent")
        .await
        .unwrap_err();
    assert!(matches!(err, PreferencesError::NotFound));
}

#[tokio::test]
async fn mutation_emits_coarse_then_detailed_event() {
    let env = env().await;
    let mut rx = env.publisher.subscribe();

    let batch = vec![pref("u1", "display", "theme", "dark")];
    env.client.update_preferences("u1", batch).await.unwrap();

    let first = rx.try_recv().unwrap();
    assert_eq!(first.kind(), "sidebar_category_updated");
    assert_eq!(first.user_id(), "u1");

    let second = rx.try_recv().unwrap();
    assert_eq!(second.kind(), "preferences_changed");
    assert_eq!(second.user_id(), "u1");

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn favoriting_a_channel_materializes_the_sidebar_row() {
    let env = env().await;

    env.client
        .update_preferences("u1", vec![pref("u1", "favorite_channel", "ch1", "true")])
        .await
        .unwrap();

    let rows = sidebar_channel::Entity::find()
        .filter(sidebar_channel::Column::UserId.eq("u1"))
        .all(&env.db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].channel_id, "ch1");

    // Unfavoriting removes the row again.
    env.client
        .update_preferences("u1", vec![pref("u1", "favorite_channel", "ch1", "false")])
        .await
        .unwrap();

    let rows = sidebar_channel::Entity::find()
        .filter(sidebar_channel::Column::UserId.eq("u1"))
        .all(&env.db)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn deleting_preferences_clears_records_and_sidebar_rows() {
    let env = env().await;

    let batch = vec![
        pref("u1", "favorite_channel", "ch1", "true"),
        pref("u1", "display", "theme", "dark"),
    ];
    env.client
        .update_preferences("u1", batch.clone())
        .await
        .unwrap();

    let mut rx = env.publisher.subscribe();
    env.client.delete_preferences("u1", batch).await.unwrap();

    assert!(env.client.get_preferences("u1").await.unwrap().is_empty());

    let rows = sidebar_channel::Entity::find()
        .filter(sidebar_channel::Column::UserId.eq("u1"))
        .all(&env.db)
        .await
        .unwrap();
    assert!(rows.is_empty());

    assert_eq!(rx.try_recv().unwrap().kind(), "sidebar_category_updated");
    assert_eq!(rx.try_recv().unwrap().kind(), "preferences_deleted");
}

#[tokio::test]
async fn get_all_spans_categories_but_not_users() {
    let env = env().await;

    env.client
        .update_preferences(
            "u1",
            vec![
                pref("u1", "display", "theme", "dark"),
                pref("u1", "tutorial_step", "u1", "3"),
            ],
        )
        .await
        .unwrap();
    env.client
        .update_preferences("u2", vec![pref("u2", "display", "theme", "light")])
        .await
        .unwrap();

    let all = env.client.get_preferences("u1").await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.user_id == "u1"));
}
