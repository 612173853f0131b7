use pw_db::{Store, StoreError};
use serde::Deserialize;

/// Deployment environment, selects log format and security headers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server configuration, read from environment variables
///
/// | variable          | default                 |
/// |-------------------|-------------------------|
/// | `ENV`             | `development`           |
/// | `HOST`            | `0.0.0.0`               |
/// | `PORT`            | `3000`                  |
/// | `ALLOWED_ORIGINS` | `http://localhost:5173` |
/// | `SEED_PATH`       | built-in sample data    |
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// JSON file with the entity tables
    #[serde(default)]
    pub seed_path: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_allowed_origins() -> String {
    "http://localhost:5173".to_string()
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Build the entity store from `SEED_PATH`, or from the sample data when unset
    pub fn load_store(&self) -> Result<Store, StoreError> {
        match &self.seed_path {
            Some(path) => {
                tracing::info!(%path, "Loading store from seed file");
                Store::from_json_file(path)
            }
            None => {
                tracing::info!("Loading built-in sample data");
                Store::seeded()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ApiConfig {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .expect("config should parse")
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.parsed_allowed_origins(), vec!["http://localhost:5173"]);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ENV", "production"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,,"),
        ]);
        assert!(config.env.is_production());
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.parsed_allowed_origins(),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result: Result<ApiConfig, _> =
            envy::from_iter(vec![("PORT".to_string(), "not-a-port".to_string())]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_store_defaults_to_sample_data() {
        let store = config_from(&[]).load_store().unwrap();
        assert!(!store.posts().is_empty());
    }
}
