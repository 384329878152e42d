// End-to-end runtime smoke test (headless)
// - Starts revscope::app::run in the background against an in-memory service.
// - Runs with REVSCOPE_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Waits briefly to allow initialization and the startup history refresh.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeService, entry};
use revscope::app::{RunOptions, run};

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("REVSCOPE_TEST_HEADLESS", "1");
    }
    let options = RunOptions::new("http://localhost:6543");
    assert!(options.headless);

    let service = Arc::new(FakeService::new());
    service.push_history(Ok(vec![entry(1, "Laptop X", "Positive", &["battery"])]));
    let counter = Arc::clone(&service);

    let handle = tokio::spawn(async move { run(service, options).await });

    tokio::time::sleep(Duration::from_millis(200)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    assert_eq!(counter.history_calls(), 1, "startup refresh issued once");

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_fetches_history_exactly_once_at_startup() {
    let mut options = RunOptions::new("http://localhost:6543");
    options.headless = true;

    let service = Arc::new(FakeService::new());
    service.push_history(Ok(Vec::new()));
    let counter = Arc::clone(&service);
    let handle = tokio::spawn(async move { run(service, options).await });

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(counter.history_calls(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(counter.history_calls(), 1, "no further fetch without a trigger");

    handle.abort();
    let _ = handle.await;
}
