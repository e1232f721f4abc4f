// Configuration utilities for the summary server
//
// Service sections live under a "services" subtree; a section found at the top
// level is still accepted for older configuration files.

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STATUS_FILE, DEFAULT_TEST_FILE};

/// Helper function to get service configuration with backward compatibility
///
/// This function first tries to find the service in the "services" structure,
/// then falls back to the top-level structure.
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use musicsummary::config::get_service_config;
///
/// let config = json!({
///   "services": {
///     "webserver": { "port": 8069 }
///   }
/// });
///
/// if let Some(webserver) = get_service_config(&config, "webserver") {
///     assert_eq!(webserver["port"], 8069);
/// }
///
/// let old_config = json!({
///   "webserver": { "port": 8080 }
/// });
///
/// if let Some(webserver) = get_service_config(&old_config, "webserver") {
///     assert_eq!(webserver["port"], 8080);
/// }
/// ```
pub fn get_service_config<'a>(config: &'a serde_json::Value, service_name: &str) -> Option<&'a serde_json::Value> {
    if let Some(services) = config.get("services") {
        if let Some(service_config) = services.get(service_name) {
            debug!("Found {} configuration in services section", service_name);
            return Some(service_config);
        }
    }

    if let Some(service_config) = config.get(service_name) {
        debug!("Found {} configuration at top level (legacy structure)", service_name);
        return Some(service_config);
    }

    debug!("No {} configuration found in either services section or top level", service_name);
    None
}

/// Load a JSON configuration file.
///
/// A missing file is not an error: the empty object is returned and every
/// setting takes its default.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value, String> {
    let path = path.as_ref();
    if !path.exists() {
        info!("Configuration file {:?} not found, using defaults", path);
        return Ok(serde_json::json!({}));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {:?}: {}", path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {:?}: {}", path, e))
}

/// Settings the server needs, resolved from the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub enable: bool,
    pub host: String,
    pub port: u16,
    pub status_file: PathBuf,
    pub test_file: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enable: true,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
            test_file: PathBuf::from(DEFAULT_TEST_FILE),
        }
    }
}

impl ServerSettings {
    pub fn from_config(config: &serde_json::Value) -> Self {
        let defaults = ServerSettings::default();
        let webserver = get_service_config(config, "webserver");
        let status = get_service_config(config, "status");

        let enable = webserver
            .and_then(|ws| ws.get("enable"))
            .and_then(|e| e.as_bool())
            .unwrap_or(defaults.enable);

        let host = webserver
            .and_then(|ws| ws.get("host"))
            .and_then(|h| h.as_str())
            .map(|h| h.to_string())
            .unwrap_or(defaults.host);

        let port = webserver
            .and_then(|ws| ws.get("port"))
            .and_then(|p| p.as_u64())
            .and_then(|p| u16::try_from(p).ok())
            .unwrap_or(defaults.port);

        let status_file = status
            .and_then(|s| s.get("file"))
            .and_then(|f| f.as_str())
            .map(PathBuf::from)
            .unwrap_or(defaults.status_file);

        let test_file = status
            .and_then(|s| s.get("test_file"))
            .and_then(|f| f.as_str())
            .map(PathBuf::from)
            .unwrap_or(defaults.test_file);

        ServerSettings {
            enable,
            host,
            port,
            status_file,
            test_file,
        }
    }
}
