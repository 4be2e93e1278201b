use super::api::secure_base_url;
use serde::Deserialize;

/// Hosted API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://crafteo.onrender.com";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://crafteo.onrender.com"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_URL.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; the base URL is normalized to HTTPS.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.api.base_url = secure_base_url(&config.api.base_url);
        Ok(config)
    }

    /// Build the configuration at the composition root.
    ///
    /// Starts from the embedded default and applies `api_url` (normally the
    /// build-time `API_URL` value) when it is set and non-blank.
    pub fn load(api_url: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            config.api.base_url = secure_base_url(url);
        }
        Ok(config)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_override_is_forced_to_https() {
        let config = AppConfig::load(Some("http://localhost:8000/")).unwrap();
        assert_eq!(config.api_base_url(), "https://localhost:8000");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig::load(Some("  ")).unwrap();
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_from_toml_rejects_missing_section() {
        assert!(AppConfig::from_toml("[other]\nkey = 1\n").is_err());
    }
}
