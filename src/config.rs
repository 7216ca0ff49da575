use serde::Deserialize;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the recommendation service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User whose profile receives selection pushes
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Attempts made by the favorites bootstrap before giving up
    #[serde(default = "default_favorites_retry_attempts")]
    pub favorites_retry_attempts: u32,

    /// Pause between bootstrap attempts, in milliseconds
    #[serde(default = "default_favorites_retry_delay_ms")]
    pub favorites_retry_delay_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_favorites_retry_attempts() -> u32 {
    3
}

fn default_favorites_retry_delay_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_id: default_user_id(),
            favorites_retry_attempts: default_favorites_retry_attempts(),
            favorites_retry_delay_ms: default_favorites_retry_delay_ms(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn favorites_retry_delay(&self) -> Duration {
        Duration::from_millis(self.favorites_retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.user_id, "default");
        assert_eq!(config.favorites_retry_attempts, 3);
        assert_eq!(config.favorites_retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("API_URL".to_string(), "http://recs.internal:8080".to_string()),
            ("FAVORITES_RETRY_ATTEMPTS".to_string(), "5".to_string()),
            ("FAVORITES_RETRY_DELAY_MS".to_string(), "250".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.api_url, "http://recs.internal:8080");
        assert_eq!(config.user_id, "default");
        assert_eq!(config.favorites_retry_attempts, 5);
        assert_eq!(config.favorites_retry_delay(), Duration::from_millis(250));
    }
}
