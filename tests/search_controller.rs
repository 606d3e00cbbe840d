mod common;

use std::time::Duration;

use common::{product, settle, FakeProductRepo};
use souk::backend::BackendError;
use souk::config::AppConfig;
use souk::domain::Category;
use souk::screens::product_search::{ProductSearchController, ProductSearchIntent};

const DEBOUNCE: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn search_waits_for_the_debounce_window() {
    let repo = FakeProductRepo::new();
    repo.script_search(
        "lamp",
        Duration::ZERO,
        Ok(vec![product("desk lamp", Category::Home)]),
    );
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("lamp".to_string()));
    settle().await;
    assert!(repo.searches.lock().is_empty());
    assert!(!controller.state().searching);

    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    assert_eq!(*repo.searches.lock(), vec!["lamp".to_string()]);
    assert_eq!(controller.state().visible.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_only_searches_the_final_query() {
    let repo = FakeProductRepo::new();
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("l".to_string()));
    settle().await;
    tokio::time::advance(Duration::from_millis(150)).await;
    controller.dispatch(ProductSearchIntent::QueryChanged("la".to_string()));
    settle().await;
    tokio::time::advance(Duration::from_millis(150)).await;
    controller.dispatch(ProductSearchIntent::QueryChanged("lamp".to_string()));
    settle().await;

    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    assert_eq!(*repo.searches.lock(), vec!["lamp".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn busy_flag_spans_exactly_the_backend_call() {
    let repo = FakeProductRepo::new();
    repo.script_search(
        "lamp",
        Duration::from_millis(100),
        Ok(vec![product("desk lamp", Category::Home)]),
    );
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("lamp".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    assert!(controller.state().searching);

    tokio::time::advance(Duration::from_millis(100)).await;
    settle().await;
    let state = controller.state();
    assert!(!state.searching);
    assert!(state.error.is_none());
    assert_eq!(state.visible.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failure_reports_an_error_and_keeps_previous_results() {
    let repo = FakeProductRepo::new();
    let lamp = product("desk lamp", Category::Home);
    repo.script_search("lamp", Duration::ZERO, Ok(vec![lamp.clone()]));
    repo.script_search(
        "lantern",
        Duration::ZERO,
        Err(BackendError::unavailable("network down")),
    );
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("lamp".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    assert_eq!(controller.state().visible, vec![lamp.clone()]);

    controller.dispatch(ProductSearchIntent::QueryChanged("lantern".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;

    let state = controller.state();
    assert!(!state.searching);
    assert_eq!(
        state.error.as_deref(),
        Some("Service unavailable: network down")
    );
    // The previous results survive the failure untouched.
    assert_eq!(state.results, vec![lamp.clone()]);
    assert_eq!(state.visible, vec![lamp]);
}

#[tokio::test(start_paused = true)]
async fn newer_query_supersedes_an_in_flight_search() {
    let repo = FakeProductRepo::new();
    let stale = product("alpha blanket", Category::Home);
    let fresh = product("alps poster", Category::Home);
    repo.script_search("alpha", Duration::from_millis(500), Ok(vec![stale]));
    repo.script_search("alps", Duration::from_millis(10), Ok(vec![fresh.clone()]));
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("alpha".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    // The first search is in flight when the query changes.
    assert_eq!(*repo.searches.lock(), vec!["alpha".to_string()]);

    controller.dispatch(ProductSearchIntent::QueryChanged("alps".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    tokio::time::advance(Duration::from_millis(10)).await;
    settle().await;

    let state = controller.state();
    assert_eq!(state.visible, vec![fresh]);

    // Even after the first query's latency would have elapsed, its
    // results never surface.
    tokio::time::advance(Duration::from_millis(500)).await;
    settle().await;
    assert_eq!(controller.state().visible.len(), 1);
    assert_eq!(
        *repo.searches.lock(),
        vec!["alpha".to_string(), "alps".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn clearing_the_query_cancels_the_pending_search() {
    let repo = FakeProductRepo::new();
    let lamp = product("desk lamp", Category::Home);
    repo.script_search("lamp", Duration::ZERO, Ok(vec![lamp.clone()]));
    let controller = ProductSearchController::new(repo.clone(), &AppConfig::default());

    controller.dispatch(ProductSearchIntent::QueryChanged("lamp".to_string()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;
    assert_eq!(controller.state().visible, vec![lamp]);

    controller.dispatch(ProductSearchIntent::QueryChanged("lam".to_string()));
    settle().await;
    controller.dispatch(ProductSearchIntent::QueryChanged(String::new()));
    settle().await;
    tokio::time::advance(DEBOUNCE).await;
    settle().await;

    let state = controller.state();
    assert!(state.visible.is_empty());
    assert!(state.results.is_empty());
    assert!(!state.searching);
    // Neither the truncated nor the empty query reached the backend.
    assert_eq!(*repo.searches.lock(), vec!["lamp".to_string()]);
}
