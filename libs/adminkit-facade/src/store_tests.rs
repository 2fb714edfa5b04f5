#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::{FacadeStore, Operation, OperationResult, Slot, Snapshot};
    use adminkit_dto::PagedResult;
    use adminkit_http::{StatusCode, TransportError};
    use serde_json::json;
    use std::future::pending;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::{Notify, oneshot};
    use tracing_test::traced_test;

    type Store = FacadeStore<String, Option<u32>>;
    type PageReply = Result<PagedResult<String>, TransportError>;

    const FETCH: Operation = Operation::fetch("fetch_items", Slot::Items, "Failed to fetch items");
    const SIDE: Operation =
        Operation::fetch("fetch_counter", Slot::Side("counter"), "Failed to fetch counter");
    const GET: Operation = Operation::fetch("get_item", Slot::Selected, "Failed to get item");
    const DELETE: Operation = Operation::mutation("delete_item", "Failed to delete item");

    fn page(items: &[&str]) -> PagedResult<String> {
        PagedResult::new(
            items.iter().map(|s| (*s).to_owned()).collect(),
            u64::try_from(items.len()).unwrap(),
        )
    }

    fn apply_page(snapshot: &mut Snapshot<String, Option<u32>>, page: &PagedResult<String>) {
        snapshot.replace_page(page);
    }

    /// Start a fetch on a spawned task and wait until it is in flight.
    async fn spawn_gated_fetch(
        store: &Store,
    ) -> (
        oneshot::Sender<PageReply>,
        tokio::task::JoinHandle<OperationResult<PagedResult<String>>>,
    ) {
        let (tx, rx) = oneshot::channel::<PageReply>();
        let started = Arc::new(Notify::new());
        let store = store.clone();
        let signal = Arc::clone(&started);
        let handle = tokio::spawn(async move {
            store
                .run(
                    FETCH,
                    async move {
                        signal.notify_one();
                        rx.await.unwrap()
                    },
                    apply_page,
                )
                .await
        });
        started.notified().await;
        (tx, handle)
    }

    #[test]
    fn test_new_store_has_defaults() {
        let store = Store::new("items");
        let state = store.state();
        assert!(state.snapshot.items.is_empty());
        assert_eq!(state.snapshot.total_count, 0);
        assert_eq!(state.snapshot.selected, None);
        assert_eq!(state.snapshot.side, None);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(store.name(), "items");
    }

    #[tokio::test]
    async fn test_success_replaces_page() {
        let store = Store::new("items");
        let result = store
            .run(FETCH, async { Ok(page(&["a", "b"])) }, apply_page)
            .await;

        assert!(result.is_success());
        let state = store.state();
        assert_eq!(state.snapshot.items, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(state.snapshot.total_count, 2);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_empty_response_clears_previous_items() {
        let store = Store::new("items");
        let _ = store
            .run(FETCH, async { Ok(page(&["a", "b", "c"])) }, apply_page)
            .await;
        let _ = store
            .run(FETCH, async { Ok(PagedResult::default()) }, apply_page)
            .await;

        let state = store.state();
        assert!(state.snapshot.items.is_empty());
        assert_eq!(state.snapshot.total_count, 0);
    }

    #[tokio::test]
    async fn test_failure_records_message_and_keeps_snapshot() {
        let store = Store::new("items");
        let _ = store
            .run(FETCH, async { Ok(page(&["a"])) }, apply_page)
            .await;

        let result = store
            .run(
                FETCH,
                async {
                    Err::<PagedResult<String>, _>(TransportError::status(
                        StatusCode::SERVICE_UNAVAILABLE,
                        "backend down",
                    ))
                },
                apply_page,
            )
            .await;

        assert_eq!(result, OperationResult::Failure("backend down".to_owned()));
        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("backend down"));
        assert_eq!(state.snapshot.items, vec!["a".to_owned()]);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_fallback() {
        let store = Store::new("items");
        let result = store
            .run(
                DELETE,
                async { Err::<(), _>(TransportError::Rejected(json!({ "code": 7 }))) },
                |_, ()| {},
            )
            .await;

        assert_eq!(result.error(), Some("Failed to delete item"));
        assert_eq!(store.error().as_deref(), Some("Failed to delete item"));
    }

    #[tokio::test]
    async fn test_next_operation_clears_error() {
        let store = Store::new("items");
        let _ = store
            .run(
                DELETE,
                async { Err::<(), _>(TransportError::status(StatusCode::NOT_FOUND, "gone")) },
                |_, ()| {},
            )
            .await;
        assert!(store.error().is_some());

        let _ = store.run(FETCH, async { Ok(page(&[])) }, apply_page).await;
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_loading_flag_spans_the_request() {
        let store = Store::new("items");
        let (tx, handle) = spawn_gated_fetch(&store).await;

        assert!(store.is_loading());
        tx.send(Ok(page(&["a"]))).unwrap();
        let result = handle.await.unwrap();

        assert!(result.is_success());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_loading_stays_raised_until_last_request_finishes() {
        let store = Store::new("items");
        let (tx1, h1) = spawn_gated_fetch(&store).await;
        let (tx2, h2) = spawn_gated_fetch(&store).await;

        tx1.send(Ok(page(&["a"]))).unwrap();
        let _ = h1.await.unwrap();
        assert!(store.is_loading());

        tx2.send(Ok(page(&["b"]))).unwrap();
        let _ = h2.await.unwrap();
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_cancelled_operation_releases_loading_flag() {
        let store = Store::new("items");
        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            store.run(FETCH, pending::<PageReply>(), apply_page),
        )
        .await;
        assert!(cancelled.is_err());
        assert!(!store.is_loading());

        let result = store
            .run(FETCH, async { Ok(page(&["a"])) }, apply_page)
            .await;
        assert!(result.is_success());
        assert!(!store.is_loading());
        assert_eq!(store.state().snapshot.items, vec!["a".to_owned()]);
    }

    #[tokio::test]
    async fn test_cancelled_operation_keeps_other_requests_loading() {
        let store = Store::new("items");
        let (tx, handle) = spawn_gated_fetch(&store).await;

        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            store.run(SIDE, pending::<Result<u32, TransportError>>(), |_, _| {}),
        )
        .await;
        assert!(cancelled.is_err());
        assert!(store.is_loading());

        tx.send(Ok(page(&["a"]))).unwrap();
        assert!(handle.await.unwrap().is_success());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_explicit_selection_wins_over_in_flight_get() {
        let store = Store::new("items");
        let (tx, rx) = oneshot::channel::<Result<String, TransportError>>();
        let started = Arc::new(Notify::new());
        let signal = Arc::clone(&started);
        let background = store.clone();
        let handle = tokio::spawn(async move {
            background
                .run(
                    GET,
                    async move {
                        signal.notify_one();
                        rx.await.unwrap()
                    },
                    |snapshot, item: &String| snapshot.selected = Some(item.clone()),
                )
                .await
        });
        started.notified().await;

        store.select(Some("picked".to_owned()));
        tx.send(Ok("fetched".to_owned())).unwrap();
        let result = handle.await.unwrap();

        assert_eq!(result, OperationResult::Success("fetched".to_owned()));
        assert_eq!(store.state().snapshot.selected.as_deref(), Some("picked"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_latest_request_wins_over_late_stale_response() {
        let store = Store::new("items");
        let (older_tx, older) = spawn_gated_fetch(&store).await;
        let (newer_tx, newer) = spawn_gated_fetch(&store).await;

        newer_tx.send(Ok(page(&["new"]))).unwrap();
        assert!(newer.await.unwrap().is_success());

        older_tx.send(Ok(page(&["old", "stale"]))).unwrap();
        let stale = older.await.unwrap();

        // The caller still sees its own data.
        assert_eq!(stale.data().map(|p| p.items.len()), Some(2));
        let state = store.state();
        assert_eq!(state.snapshot.items, vec!["new".to_owned()]);
        assert_eq!(state.snapshot.total_count, 1);
    }

    #[tokio::test]
    async fn test_stale_failure_does_not_set_error() {
        let store = Store::new("items");
        let (older_tx, older) = spawn_gated_fetch(&store).await;
        let (newer_tx, newer) = spawn_gated_fetch(&store).await;

        newer_tx.send(Ok(page(&["new"]))).unwrap();
        let _ = newer.await.unwrap();
        older_tx
            .send(Err(TransportError::status(StatusCode::GATEWAY_TIMEOUT, "late failure")))
            .unwrap();
        let result = older.await.unwrap();

        assert_eq!(result.error(), Some("late failure"));
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let store = Store::new("items");
        let (items_tx, items) = spawn_gated_fetch(&store).await;

        let counter = store
            .run(SIDE, async { Ok(5_u32) }, |snapshot, value| {
                snapshot.side = Some(*value);
            })
            .await;
        assert!(counter.is_success());

        items_tx.send(Ok(page(&["a"]))).unwrap();
        let _ = items.await.unwrap();

        let state = store.state();
        assert_eq!(state.snapshot.side, Some(5));
        assert_eq!(state.snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_is_idempotent_and_discards_in_flight() {
        let store = Store::new("items");
        let _ = store
            .run(FETCH, async { Ok(page(&["a"])) }, apply_page)
            .await;
        let (tx, handle) = spawn_gated_fetch(&store).await;

        store.reset();
        let once = store.state();
        store.reset();
        assert_eq!(store.state(), once);
        assert!(once.snapshot.items.is_empty());
        assert!(!once.is_loading);

        tx.send(Ok(page(&["late"]))).unwrap();
        let _ = handle.await.unwrap();
        assert_eq!(store.state(), once);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let store = Store::new("items");
        let mut changes = store.subscribe();
        let before = *changes.borrow_and_update();

        let _ = store
            .run(FETCH, async { Ok(page(&["a"])) }, apply_page)
            .await;

        assert!(changes.has_changed().unwrap());
        assert!(*changes.borrow_and_update() > before);

        store.write(|snapshot| snapshot.selected = Some("a".to_owned()));
        assert!(changes.has_changed().unwrap());
        assert_eq!(store.state().snapshot.selected.as_deref(), Some("a"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failure_is_logged() {
        let store = Store::new("editions");
        let _ = store
            .run(
                DELETE,
                async { Err::<(), _>(TransportError::status(StatusCode::CONFLICT, "stamp mismatch")) },
                |_, ()| {},
            )
            .await;

        assert!(logs_contain("operation failed"));
        assert!(logs_contain("delete_item"));
        assert!(logs_contain("stamp mismatch"));
    }
}
