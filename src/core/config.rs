//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::map::PublicSiteConfig;

/// Environment variable holding the Google Maps JavaScript API key
pub const MAPS_API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Maps JavaScript API key
    /// Blank values are treated as unset
    pub maps_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(std::env::var(MAPS_API_KEY_VAR).ok())
    }

    /// Build configuration from raw values, dropping blank ones
    pub fn from_values(maps_api_key: Option<String>) -> Self {
        Self {
            maps_api_key: maps_api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
        }
    }

    /// Check if the maps API key is configured
    pub fn has_maps_api_key(&self) -> bool {
        self.maps_api_key.is_some()
    }

    /// Settings that are safe to hand to the browser
    pub fn public(&self) -> PublicSiteConfig {
        PublicSiteConfig {
            maps_api_key: self.maps_api_key.clone(),
        }
    }
}

impl Default for Config {
    /// No maps key; use [`Config::from_env`] to read the environment
    fn default() -> Self {
        Self::from_values(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_key() {
        let config = Config::from_values(Some("AIzaTestKey".to_string()));

        assert!(config.has_maps_api_key());
        assert_eq!(config.maps_api_key.as_deref(), Some("AIzaTestKey"));
    }

    #[test]
    fn test_config_without_key() {
        let config = Config::from_values(None);

        assert!(!config.has_maps_api_key());
        assert_eq!(config.public(), PublicSiteConfig::default());
    }

    #[test]
    fn test_config_with_empty_string_values() {
        assert!(!Config::from_values(Some(String::new())).has_maps_api_key());
        assert!(!Config::from_values(Some("  \t".to_string())).has_maps_api_key());
    }

    #[test]
    fn test_default_config_has_no_key() {
        let config = Config::default();

        assert!(!config.has_maps_api_key());
        assert_eq!(config.public(), PublicSiteConfig::default());
    }

    #[test]
    fn test_config_trims_surrounding_whitespace() {
        let config = Config::from_values(Some("  key-with-spaces \n".to_string()));
        assert_eq!(config.maps_api_key.as_deref(), Some("key-with-spaces"));
    }

    #[test]
    fn test_public_config_exposes_key() {
        let config = Config::from_values(Some("browser-key".to_string()));
        let public = config.public();

        assert_eq!(public.maps_api_key.as_deref(), Some("browser-key"));
        assert_eq!(public.require_maps_key(), Ok("browser-key"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Whatever the environment holds, a blank key never survives
        let config = Config::from_env();
        if let Some(key) = &config.maps_api_key {
            assert!(!key.trim().is_empty());
        }
    }

    #[test]
    fn test_config_clone() {
        let config = Config::from_values(Some("k".to_string()));
        let cloned = config.clone();
        assert_eq!(config.maps_api_key, cloned.maps_api_key);
    }

    #[test]
    fn test_config_debug() {
        let config = Config::from_values(None);
        let debug = format!("{:?}", config);
        assert!(debug.contains("maps_api_key"));
    }
}
