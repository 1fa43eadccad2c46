//! Tests for market resolution through the service layer.

mod support;

use std::sync::Arc;

use predarena::config::Config;
use predarena::domain::{resolve, DomainError, Leaderboard, Market};
use predarena::error::{ArenaError, Error};
use predarena::port::{LeaderboardStore, MarketStore, PredictionStore};
use predarena::testkit::config;
use predarena::testkit::domain::{agent, agent_id, day, market, market_id, prediction};
use predarena::testkit::store::seeded;
use support::arena::Arena;
use support::assertions::assert_near;

/// Market opens day 0, closes day 10; p=80 on day 1; outcome true.
#[tokio::test]
async fn early_confident_correct_forecast_earns_most_points() {
    let store = Arc::new(
        seeded(
            &[market("m1", 0, 10)],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "m1", 80, 1)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());

    let report = arena
        .resolutions
        .resolve(&market_id("m1"), true, "https://source", "resolved yes")
        .await
        .unwrap();

    assert_eq!(report.processed, 1);
    let board = arena.store.load_leaderboard().await.unwrap();
    let entry = board.get(&agent_id("u1")).unwrap();
    assert_near(entry.score, 0.8686, 1e-4);
    assert_eq!(entry.agent_name, "Cassandra");
    assert_eq!(entry.last_submission, day(1));
}

/// p=50 exactly at close; outcome false.
#[tokio::test]
async fn hedge_at_close_earns_little() {
    let store = Arc::new(
        seeded(
            &[market("m1", 0, 10)],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "m1", 50, 10)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());

    let report = arena
        .resolutions
        .resolve(&market_id("m1"), false, "s", "n")
        .await
        .unwrap();

    assert_near(report.awarded_points, 0.2759, 1e-4);
}

#[tokio::test]
async fn points_accumulate_across_markets() {
    let store = Arc::new(
        seeded(
            &[market("m1", 0, 10), market("m2", 5, 15)],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "m1", 100, 0), prediction("u1", "m2", 0, 5)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());

    arena.resolutions.resolve(&market_id("m1"), true, "s", "n").await.unwrap();
    arena.resolutions.resolve(&market_id("m2"), false, "s", "n").await.unwrap();

    let board = arena.store.load_leaderboard().await.unwrap();
    let entry = board.get(&agent_id("u1")).unwrap();
    assert_near(entry.score, 2.0, 1e-12);
    assert_eq!(entry.submissions, 2);
    assert_eq!(entry.last_submission, day(5));
}

#[tokio::test]
async fn orphaned_predictions_are_consumed_without_credit() {
    let store = Arc::new(
        seeded(
            &[market("m1", 0, 10)],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "m1", 70, 2), prediction("gone", "m1", 70, 2)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());

    let report = arena
        .resolutions
        .resolve(&market_id("m1"), true, "s", "n")
        .await
        .unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.orphaned, vec![agent_id("gone")]);
    assert!(arena
        .store
        .unscored_for_market(&market_id("m1"))
        .await
        .unwrap()
        .is_empty());

    let board = arena.store.load_leaderboard().await.unwrap();
    assert_eq!(board.len(), 1);
    assert!(board.get(&agent_id("gone")).is_none());
}

#[tokio::test]
async fn second_resolution_leaves_state_untouched() {
    let store = Arc::new(
        seeded(
            &[market("m1", 0, 10)],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "m1", 60, 3)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());
    arena.resolutions.resolve(&market_id("m1"), true, "s", "n").await.unwrap();
    let board = arena.store.load_leaderboard().await.unwrap();
    let resolved = arena.store.get_market(&market_id("m1")).await.unwrap();

    let again = arena.resolutions.resolve(&market_id("m1"), false, "x", "y").await;

    assert!(matches!(
        again,
        Err(Error::Arena(ArenaError::AlreadyResolved { .. }))
    ));
    assert_eq!(arena.store.load_leaderboard().await.unwrap(), board);
    assert_eq!(arena.store.get_market(&market_id("m1")).await.unwrap(), resolved);
}

#[tokio::test]
async fn stored_market_with_empty_window_is_rejected_before_any_write() {
    let broken: Market = serde_json::from_value(serde_json::json!({
        "id": "flat",
        "title": "Flat?",
        "source": "https://flat.example",
        "open_time": day(3),
        "close_time": day(3),
        "active": true,
        "resolved": false,
        "outcome": null,
        "resolution": null
    }))
    .unwrap();
    let store = Arc::new(
        seeded(
            &[broken],
            &[agent("u1", "Cassandra")],
            &[prediction("u1", "flat", 90, 3)],
        )
        .await,
    );
    let arena = Arena::with_store(store, &Config::default());

    let result = arena.resolutions.resolve(&market_id("flat"), true, "s", "n").await;

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::InvalidMarketWindow { .. }))
    ));
    let market = arena.store.get_market(&market_id("flat")).await.unwrap().unwrap();
    assert!(!market.is_resolved());
    assert_eq!(
        arena.store.unscored_for_market(&market_id("flat")).await.unwrap().len(),
        1
    );
    assert!(arena.store.load_leaderboard().await.unwrap().is_empty());
}

#[test]
fn core_resolution_is_order_independent_for_distinct_agents() {
    let names = [agent("a", "A"), agent("b", "B")]
        .into_iter()
        .map(|a| (a.id().clone(), a))
        .collect::<std::collections::HashMap<_, _>>();
    let m = market("m1", 0, 10);

    let mut forward = vec![prediction("a", "m1", 35, 2), prediction("b", "m1", 95, 8)];
    let mut reverse = vec![prediction("b", "m1", 95, 8), prediction("a", "m1", 35, 2)];

    let left = resolve(&m, &mut forward, true, Leaderboard::new(), &names, &config::scoring()).unwrap();
    let right = resolve(&m, &mut reverse, true, Leaderboard::new(), &names, &config::scoring()).unwrap();

    assert_eq!(left.leaderboard, right.leaderboard);
    assert_near(left.awarded_points(), right.awarded_points(), 1e-12);
}
