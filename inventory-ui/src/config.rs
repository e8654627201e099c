use crate::inventory::request::DEFAULT_COLLECTION;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "INVENTORY_API_URL";
pub const ENV_PREFIX: &str = "INVENTORY_API_PREFIX";
pub const ENV_API_KEY: &str = "INVENTORY_API_KEY";
pub const ENV_TIMEOUT: &str = "INVENTORY_API_TIMEOUT_SECS";

/// Where the inventory API lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub api_key: Option<String>,
    /// Ignored in the browser, where fetch has no timeout.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_COLLECTION.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Defaults overridden by `INVENTORY_API_*` environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// The page's own origin; the API is served next to the form.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&origin)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        if let Some(prefix) = lookup(ENV_PREFIX).filter(|v| !v.is_empty()) {
            config.api_prefix = prefix;
        }
        config.api_key = lookup(ENV_API_KEY).filter(|v| !v.is_empty());
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid {}: {}", ENV_TIMEOUT, timeout),
            }
        }
        config
    }
}

/// Command-line overrides shared by the desktop form and the CLI.
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Base URL of the inventory service [env: INVENTORY_API_URL]
    #[arg(long)]
    pub api_url: Option<String>,

    /// Collection path, e.g. /api/inventory [env: INVENTORY_API_PREFIX]
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Value sent in the X-Api-Key header [env: INVENTORY_API_KEY]
    #[arg(long)]
    pub api_key: Option<String>,

    /// Request timeout in seconds [env: INVENTORY_API_TIMEOUT_SECS]
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiArgs {
    /// Flags win over the environment, which wins over defaults.
    pub fn into_config(self) -> ApiConfig {
        self.apply(ApiConfig::from_env())
    }

    pub fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(url) = self.api_url {
            config.base_url = url;
        }
        if let Some(prefix) = self.api_prefix {
            config.api_prefix = prefix;
        }
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_target_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.api_prefix, "/api/inventory");
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://inventory:8080"),
            (ENV_PREFIX, "/inventory"),
            (ENV_API_KEY, "secret"),
            (ENV_TIMEOUT, "5"),
        ]
        .into_iter()
        .collect();

        let config = ApiConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://inventory:8080");
        assert_eq!(config.api_prefix, "/inventory");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = ApiConfig::from_lookup(|k| match k {
            ENV_API_KEY => Some(String::new()),
            ENV_TIMEOUT => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = ApiArgs {
            api_url: Some("http://other:9000".to_string()),
            api_key: Some("k".to_string()),
            ..ApiArgs::default()
        };
        let config = args.apply(ApiConfig::default().with_prefix("/inventory"));
        assert_eq!(config.base_url, "http://other:9000");
        assert_eq!(config.api_prefix, "/inventory");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
