use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::RefreshReason;
use crate::sources::ReviewService;
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

pub mod channels;
mod event_loop;
pub mod handlers;
pub mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use handlers::request_history_refresh;
use workers::analyze::spawn_analyze_worker;
use workers::auxiliary::{spawn_event_thread, spawn_tick_worker};
use workers::history::spawn_history_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup options for the interactive UI.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Skip terminal setup and input handling (tests).
    pub headless: bool,
    /// Service base URL shown in the footer.
    pub base_url: String,
}

impl RunOptions {
    /// What: Options for the given base URL, honoring `REVSCOPE_TEST_HEADLESS=1`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            headless: std::env::var("REVSCOPE_TEST_HEADLESS").ok().as_deref() == Some("1"),
            base_url: base_url.to_string(),
        }
    }
}

/// What: Run the revscope TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `service`: Analysis service client shared by the workers
/// - `options`: Startup options
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or restore failures.
///
/// Details:
/// - Background tasks: analyze worker, history worker, tick worker, and the
///   terminal input thread, all connected by unbounded channels.
/// - Issues the startup history refresh before entering the loop.
/// - Request failures never end the loop; they are alerts or log lines.
pub async fn run<S: ReviewService>(service: Arc<S>, options: RunOptions) -> Result<()> {
    let headless = options.headless;
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState {
        base_url: options.base_url.clone(),
        ..AppState::default()
    };

    let mut channels = Channels::new();
    if let Some(ends) = channels.take_worker_ends() {
        spawn_analyze_worker(
            Arc::clone(&service),
            ends.analyze_req_rx,
            channels.analyze_res_tx.clone(),
        );
        spawn_history_worker(
            Arc::clone(&service),
            ends.history_req_rx,
            channels.history_res_tx.clone(),
        );
    }
    spawn_tick_worker(&channels.tick_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    request_history_refresh(&mut app, RefreshReason::Startup, &channels.history_req_tx);

    tracing::info!(base_url = %options.base_url, headless, "event loop starting");
    run_event_loop(&mut terminal, &mut app, &mut channels).await;
    tracing::debug!("[Runtime] Main loop exited");

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
