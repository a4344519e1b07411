use gold_forecast::{ControllerConfig, StalePolicy};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Origin of the prediction backend (e.g., "https://api.example.com").
    /// Empty means the page's own origin.
    pub api_base: String,

    /// Path of the prediction endpoint
    pub predict_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Delay before an error message hides itself, in milliseconds
    pub error_dismiss_ms: u32,

    /// What to do with a response to a superseded request
    pub stale_policy: StalePolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        let controller = ControllerConfig::default();
        Self {
            api_base: String::new(),
            predict_path: "/api/predict".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            error_dismiss_ms: controller.error_dismiss_ms,
            stale_policy: controller.stale_policy,
        }
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
            let read = |key: &str| storage.get_item(key).ok().flatten();

            if let Some(api_base) = read("gold_forecast_api_base") {
                settings.api_base = api_base;
            }

            if let Some(predict_path) = read("gold_forecast_predict_path") {
                settings.predict_path = predict_path;
            }

            if let Some(log_level) = read("gold_forecast_log_level") {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }

            if let Some(dismiss) = read("gold_forecast_error_dismiss_ms") {
                if let Ok(dismiss_ms) = dismiss.parse::<u32>() {
                    settings.error_dismiss_ms = dismiss_ms;
                }
            }

            if let Some(policy) = read("gold_forecast_stale_policy") {
                match policy.parse::<StalePolicy>() {
                    Ok(policy) => settings.stale_policy = policy,
                    Err(e) => log::warn!("Ignoring stored setting: {}", e),
                }
            }
        }

        settings
    }

    /// Full URL of the prediction endpoint
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), self.predict_path)
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            error_dismiss_ms: self.error_dismiss_ms,
            stale_policy: self.stale_policy,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
