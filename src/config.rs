// Client configuration, read from the environment (optionally seeded from
// a `.env` file).

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "LAWVRIKSH_API_URL";
pub const ENV_MOCK_MODE: &str = "LAWVRIKSH_MOCK_MODE";
pub const ENV_TIMEOUT: &str = "LAWVRIKSH_API_TIMEOUT_SECS";

/// Paths of the beta endpoints, relative to `base_url`.
pub struct Endpoints;

impl Endpoints {
    pub const SIGNUP: &'static str = "/beta/signup";
    pub const STATS: &'static str = "/beta/stats";
    pub const HEALTH: &'static str = "/beta/health";
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Serve every call from the in-process mock backend.
    pub mock_mode: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            mock_mode: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Defaults with mock mode switched on.
    pub fn mock() -> Self {
        ClientConfig {
            mock_mode: true,
            ..Self::default()
        }
    }

    /// Defaults pointed at a different base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(ClientConfig {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Load from `LAWVRIKSH_*` environment variables, after reading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup. Missing variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = normalize_base_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_MOCK_MODE) {
            config.mock_mode = parse_bool(ENV_MOCK_MODE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: ENV_TIMEOUT,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            var: ENV_BASE_URL,
            value: raw.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(!config.mock_mode);
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://api.lawvriksh.com/api/"),
            (ENV_MOCK_MODE, "Yes"),
            (ENV_TIMEOUT, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.lawvriksh.com/api");
        assert!(config.mock_mode);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.url(Endpoints::SIGNUP),
            "https://api.lawvriksh.com/api/beta/signup"
        );
    }

    #[test]
    fn rejects_bad_values() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_MOCK_MODE, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: ENV_MOCK_MODE,
                value: "maybe".into()
            }
        );
        assert!(ClientConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT, "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, " / ")])).is_err());
    }

    #[test]
    fn mock_preset() {
        let config = ClientConfig::mock();
        assert!(config.mock_mode);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
