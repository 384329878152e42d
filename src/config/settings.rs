//! `settings.conf` parsing.

use std::fs;
use std::path::Path;

use crate::sources::DEFAULT_BASE_URL;

use super::paths::{config_dir, resolve_settings_config_path};

/// Default whole-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Content written to `settings.conf` on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# revscope settings
#
# Base URL of the review analysis service.
base_url = http://localhost:6543

# Seconds to wait for a response before giving up (0 waits forever).
request_timeout_secs = 30
";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the analysis service.
    pub base_url: String,
    /// Whole-request timeout in seconds; `0` disables it.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Strip a trailing `# comment` that is preceded by whitespace.
///
/// A bare `#` inside a value (URL fragments) is kept.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Output:
/// - None (modifies `settings`).
///
/// Details:
/// - Skips blank lines and lines starting with `#`, `//`, or `;`.
/// - Keys are lowercased with `.`, `-`, and spaces mapped to `_`.
/// - Unknown keys are ignored; invalid values keep the previous value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("//")
            || trimmed.starts_with(';')
        {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "base_url" | "service_url" => {
                if val.is_empty() {
                    tracing::warn!(key = %key, "empty base URL in settings; keeping default");
                } else {
                    settings.base_url = val.trim_end_matches('/').to_string();
                }
            }
            "request_timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) => settings.request_timeout_secs = v,
                Err(_) => tracing::warn!(value = %val, "invalid request timeout in settings"),
            },
            _ => tracing::debug!(key = %key, "ignoring unknown settings key"),
        }
    }
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Defaults overlaid with the file content; plain defaults if unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::info!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Load settings from the user's config directory.
///
/// Output:
/// - Parsed settings, or defaults when no file exists.
///
/// Details:
/// - Writes [`SETTINGS_SKELETON_CONTENT`] to `config_dir()/settings.conf` when
///   no settings file exists yet.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let target = config_dir().join("settings.conf");
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
        Err(e) => tracing::debug!(path = %target.display(), error = %e, "could not write settings skeleton"),
    }
    Settings::default()
}
