use std::cell::RefCell;

use compute::animation::Easing;
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Shape of the KPI count-up
    pub kpi_easing: Easing,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            kpi_easing: Easing::Linear,
        }
    }
}

/// localStorage keys read by [`AppSettings::from_environment`].
pub const LOG_LEVEL_KEY: &str = "dashboard_log_level";
pub const TOAST_DURATION_KEY: &str = "dashboard_toast_duration_ms";
pub const KPI_EASING_KEY: &str = "dashboard_kpi_easing";

pub fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| storage.get_item(key).ok().flatten());
        }

        settings
    }

    /// Applies the `dashboard_*` overrides `lookup` knows about. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(LOG_LEVEL_KEY).as_deref().and_then(parse_log_level) {
            self.log_level = level;
        }

        if let Some(duration) = lookup(TOAST_DURATION_KEY).and_then(|raw| raw.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }

        if let Some(easing) = lookup(KPI_EASING_KEY).as_deref().and_then(Easing::from_name) {
            self.kpi_easing = easing;
        }
    }
}

thread_local! {
    static SETTINGS: RefCell<Option<AppSettings>> = const { RefCell::new(None) };
}

/// Reads the environment once. Later calls keep the first result.
pub fn init_settings() {
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        if settings.is_none() {
            *settings = Some(AppSettings::from_environment());
        }
    });
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone().unwrap_or_default())
}
