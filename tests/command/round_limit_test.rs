//! Tests the round limit accessors and the limit-exceeded check against a real SQLite database.

use super::*;

async fn seed_rounds(db: &TestDb, statuses: &[RoundStatus]) {
    let store = db.store();
    for (i, status) in statuses.iter().enumerate() {
        let number = i as i32 + 1;
        store
            .insert_round(&format!("r{number}"), number, *status)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_round_limit_default_then_saved() {
    let db = TestDb::new().await;
    let resolver = db.resolver();
    assert_eq!(resolver.get_round_limit().await, 5);

    resolver.save_round_limit(10).await.unwrap();
    assert_eq!(resolver.get_round_limit().await, 10);

    resolver.save_round_limit(2).await.unwrap();
    assert_eq!(resolver.get_round_limit().await, 2);
}

#[tokio::test]
async fn test_limit_reached_by_finalized_rounds() {
    let db = TestDb::new().await;
    seed_rounds(
        &db,
        &[
            RoundStatus::Finalized,
            RoundStatus::Finalized,
            RoundStatus::Finalized,
            RoundStatus::Created,
        ],
    )
    .await;
    let resolver = db.resolver();
    resolver.save_round_limit(3).await.unwrap();

    assert_eq!(
        resolver.check_round_limit_exceeded().await,
        RoundLimitStatus {
            exceeded: true,
            finalized_count: 3,
            limit: 3
        }
    );
}

#[tokio::test]
async fn test_created_rounds_do_not_count() {
    let db = TestDb::new().await;
    seed_rounds(
        &db,
        &[
            RoundStatus::Finalized,
            RoundStatus::Created,
            RoundStatus::Finalized,
            RoundStatus::InProgress,
            RoundStatus::Created,
            RoundStatus::Created,
        ],
    )
    .await;

    assert_eq!(
        db.resolver().check_round_limit_exceeded().await,
        RoundLimitStatus {
            exceeded: false,
            finalized_count: 2,
            limit: 5
        }
    );
}

#[tokio::test]
async fn test_no_rounds_and_no_limit() {
    let db = TestDb::new().await;
    assert_eq!(
        db.resolver().check_round_limit_exceeded().await,
        RoundLimitStatus::default()
    );
}
