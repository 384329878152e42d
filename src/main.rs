//! revscope binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use clap::Parser;

use revscope::app::{self, RunOptions};
use revscope::args::{self, Args, Mode};
use revscope::config;
use revscope::sources::HttpReviewService;

struct RevscopeTimer;

impl tracing_subscriber::fmt::time::FormatTime for RevscopeTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `~/.config/revscope/logs/revscope.log`.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("revscope.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RevscopeTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(RevscopeTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = args.apply_overrides(config::settings());
    tracing::info!(
        base_url = %settings.base_url,
        timeout_secs = settings.request_timeout_secs,
        "revscope starting"
    );
    let service = HttpReviewService::new(&settings.base_url, settings.request_timeout_secs);

    let code = match args.mode() {
        Mode::Analyze { product, review } => {
            args::run_analyze(
                &service,
                &product,
                &review,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            )
            .await
        }
        Mode::History => {
            args::run_history(&service, &mut std::io::stdout(), &mut std::io::stderr()).await
        }
        Mode::Interactive => {
            let options = RunOptions::new(service.base_url());
            if let Err(err) = app::run(Arc::new(service), options).await {
                tracing::error!(error = ?err, "Application error");
                eprintln!("revscope: {err}");
                Ok(1)
            } else {
                Ok(0)
            }
        }
    };

    let code = code.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to write output");
        1
    });
    tracing::info!(code, "revscope exited");
    if code != 0 {
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn revscope_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::RevscopeTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
