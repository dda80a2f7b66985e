//! Client Configuration

use serde::Deserialize;

use crate::error::{SyncError, SyncResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Settings for talking to the task backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Root of the REST API, always ending in `/`
    pub base_url: String,
    /// Surface failed requests to the user, not only to the log
    pub notify_errors: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notify_errors: true,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> SyncResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Default::default()
        })
    }

    pub fn from_json(json: &str) -> SyncResult<Self> {
        let mut config: ClientConfig =
            serde_json::from_str(json).map_err(|e| SyncError::Config(e.to_string()))?;
        config.base_url = normalize_base_url(&config.base_url)?;
        Ok(config)
    }

    /// Absolute URL for a path below the API root
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> SyncResult<String> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SyncError::Config(format!("base url must be http(s): {:?}", url)));
    }
    if url.ends_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("{}/", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("tasks"), "http://localhost:8080/tasks");
        assert!(config.notify_errors);
    }

    #[test]
    fn test_trailing_slash_added() {
        let config = ClientConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1/");
        assert_eq!(config.endpoint("/tasks/1"), "https://api.example.com/v1/tasks/1");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ClientConfig::from_json(r#"{"baseUrl":"http://10.0.0.2:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:9000/");
        assert!(config.notify_errors);

        let config = ClientConfig::from_json(r#"{"notifyErrors":false}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.notify_errors);
    }
}
