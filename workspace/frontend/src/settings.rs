use common::format::DEFAULT_CURRENCY_CODE;
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "cashback_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 3000)
    pub api_port: u16,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// ISO 4217 code used to format amounts
    pub currency_code: String,

    /// Serve the cashback screen from built-in demo data instead of the API
    pub use_mock_data: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3000,
            api_path: "/api/v1".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            use_mock_data: false,
            toast_duration_ms: 5000,
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
            settings.apply(|key| storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten());
        }

        settings
    }

    /// Override fields with values found by `lookup`; unparsable values are ignored.
    pub fn apply<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = lookup("api_host") {
            self.api_host = api_host;
        }
        if let Some(port) = lookup("api_port").and_then(|v| v.parse::<u16>().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = lookup("api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = lookup("api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = lookup("log_level").and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }
        if let Some(code) = lookup("currency_code") {
            if !code.trim().is_empty() {
                self.currency_code = code.trim().to_uppercase();
            }
        }
        if let Some(use_mock) = lookup("use_mock_data") {
            self.use_mock_data = use_mock.to_lowercase() == "true";
        }
        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the base API URL (protocol + host + port)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
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
