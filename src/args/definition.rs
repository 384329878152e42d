//! Command-line argument definition and processing.

use clap::Parser;

use crate::config::Settings;

/// revscope - A terminal client for a review sentiment analysis service
#[derive(Parser, Debug, Default)]
#[command(name = "revscope")]
#[command(version)]
#[command(about = "A terminal client for a review sentiment analysis service", long_about = None)]
pub struct Args {
    /// Base URL of the analysis service (overrides settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, 0 to wait forever (overrides settings.conf)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Analyze a review without starting the TUI (use with --review)
    #[arg(short, long, requires = "review")]
    pub product: Option<String>,

    /// Review text to analyze (use with --product)
    #[arg(short, long, requires = "product")]
    pub review: Option<String>,

    /// Print the analysis history and exit
    #[arg(long, conflicts_with = "product")]
    pub history: bool,
}

/// Mode selected by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive terminal UI.
    Interactive,
    /// One-shot analysis of the given product and review.
    Analyze {
        /// Product name as given.
        product: String,
        /// Review text as given.
        review: String,
    },
    /// Print history and exit.
    History,
}

impl Args {
    /// What: Resolve which mode the process runs in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match (&self.product, &self.review) {
            (Some(product), Some(review)) => Mode::Analyze {
                product: product.clone(),
                review: review.clone(),
            },
            _ if self.history => Mode::History,
            _ => Mode::Interactive,
        }
    }

    /// What: Apply command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`
    ///
    /// Output:
    /// - Settings with every flag the user passed taking precedence.
    #[must_use]
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(url) = self.base_url.as_deref().map(str::trim)
            && !url.is_empty()
        {
            settings.base_url = url.to_string();
        }
        if let Some(secs) = self.timeout {
            settings.request_timeout_secs = secs;
        }
        settings
    }
}
