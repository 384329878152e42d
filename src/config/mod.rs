//! User configuration: file locations and `settings.conf`.

mod paths;
mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    DEFAULT_TIMEOUT_SECS, SETTINGS_SKELETON_CONTENT, Settings, load_settings_from,
    parse_settings, settings,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
