//! Tests planned pizza resolution against a real SQLite database.

use super::*;

#[tokio::test]
async fn test_round_override_beats_default_and_history() {
    let db = TestDb::new().await;
    let store = db.store();
    store.insert_round("r1", 1, RoundStatus::Created).await.unwrap();
    store.record_unit("r1", 11).await.unwrap();

    let resolver = db.resolver();
    resolver.save_round_config("r1", 4).await.unwrap();
    store
        .upsert_config("units_planned_default", "8", "global")
        .await
        .unwrap();

    assert_eq!(
        resolver.resolve_planned_units("r1").await,
        (4, PlannedUnitsSource::RoundOverride)
    );
}

#[tokio::test]
async fn test_global_default_applies_to_unconfigured_rounds() {
    let db = TestDb::new().await;
    let resolver = db.resolver();
    db.store()
        .upsert_config("units_planned_default", "8", "global")
        .await
        .unwrap();
    resolver.save_round_config("r1", 4).await.unwrap();

    assert_eq!(
        resolver.get_round_config("r2").await,
        RoundConfig {
            planned_unit_count: 8,
            per_unit_time_limit: 0
        }
    );
}

#[tokio::test]
async fn test_history_infers_count_from_highest_ordem() {
    let db = TestDb::new().await;
    let store = db.store();
    store
        .insert_round("r1", 1, RoundStatus::Finalized)
        .await
        .unwrap();
    for ordem in 1..=6 {
        store.record_unit("r1", ordem).await.unwrap();
    }

    assert_eq!(
        db.resolver().resolve_planned_units("r1").await,
        (6, PlannedUnitsSource::History)
    );
}

#[tokio::test]
async fn test_empty_database_gives_default() {
    let db = TestDb::new().await;
    assert_eq!(
        db.resolver().get_round_config("r1").await,
        RoundConfig {
            planned_unit_count: 5,
            per_unit_time_limit: 0
        }
    );
}

#[tokio::test]
async fn test_save_then_get_round_trips() {
    let db = TestDb::new().await;
    let resolver = db.resolver();

    resolver.save_round_config("r1", 7).await.unwrap();
    assert_eq!(
        resolver.get_round_config("r1").await,
        RoundConfig {
            planned_unit_count: 7,
            per_unit_time_limit: 0
        }
    );

    // last write wins
    resolver.save_round_config("r1", 9).await.unwrap();
    assert_eq!(resolver.get_round_config("r1").await.planned_unit_count, 9);

    let entry = db
        .store()
        .find_config("round_r1_units_planned")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.value, "9");
    assert_eq!(
        entry.description.as_deref(),
        Some("Planned pizzas for round r1")
    );
}

#[tokio::test]
async fn test_garbage_override_falls_through() {
    let db = TestDb::new().await;
    let store = db.store();
    store
        .upsert_config("round_r1_units_planned", "lots", "hand edited")
        .await
        .unwrap();
    store
        .upsert_config("units_planned_default", "3", "global")
        .await
        .unwrap();

    assert_eq!(
        db.resolver().resolve_planned_units("r1").await,
        (3, PlannedUnitsSource::GlobalDefault)
    );
}

#[tokio::test]
async fn test_saved_config_survives_reopening_the_file() {
    let db = TestDb::new().await;
    db.resolver().save_round_config("r1", 6).await.unwrap();
    db.resolver().save_round_limit(12).await.unwrap();

    let conn = db::establish_connection(db.path()).await.unwrap();
    let reopened = ConfigResolver::new(Arc::new(SeaOrmStore::new(Arc::new(conn))));
    assert_eq!(
        reopened.resolve_planned_units("r1").await,
        (6, PlannedUnitsSource::RoundOverride)
    );
    assert_eq!(reopened.get_round_limit().await, 12);
}
