use log::Level;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "cropvision_";

/// Application settings, provided to components through a context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Yield service host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Yield service port
    pub api_port: u16,

    /// Path prefix in front of `/analysis` and `/simulate`; empty by default
    pub api_path: String,

    /// Use HTTPS for service requests
    pub api_use_https: bool,

    pub log_level: Level,

    /// Shows the current route in a corner badge
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Splash screen duration on first load
    pub splash_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 4500,
            splash_duration_ms: 1200,
        }
    }
}

impl AppSettings {
    /// Defaults, adjusted for local development and overridden from localStorage.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| read(&storage, key));
        }

        settings
    }

    /// Applies every override `lookup` knows about. Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = lookup("api_host") {
            self.api_host = api_host;
        }

        if let Some(port_val) = lookup("api_port").and_then(|p| p.parse::<u16>().ok()) {
            self.api_port = port_val;
        }

        if let Some(api_path) = lookup("api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = lookup("api_use_https") {
            self.api_use_https = use_https.eq_ignore_ascii_case("true");
        }

        if let Some(log_level) = lookup("log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }
    }

    /// Protocol, host, port and path prefix: `http://localhost:5000` by default.
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            protocol,
            self.api_host,
            self.api_port,
            self.api_path.trim_end_matches('/')
        )
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn read(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_base_url() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "http://localhost:5000");
        assert_eq!(settings.api_url("/analysis"), "http://localhost:5000/analysis");
    }

    #[test]
    fn test_overrides() {
        let stored: HashMap<&str, &str> = [
            ("api_host", "yield.example.org"),
            ("api_port", "8443"),
            ("api_path", "/api/"),
            ("api_use_https", "TRUE"),
            ("log_level", "warn"),
        ]
        .into_iter()
        .collect();

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| stored.get(key).map(|v| v.to_string()));

        assert_eq!(settings.api_url("/simulate"), "https://yield.example.org:8443/api/simulate");
        assert_eq!(settings.log_level, Level::Warn);
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| match key {
            "api_port" => Some("not-a-port".to_string()),
            "log_level" => Some("loud".to_string()),
            _ => None,
        });
        assert_eq!(settings, AppSettings::default());
    }
}
