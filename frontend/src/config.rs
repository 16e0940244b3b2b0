const DEFAULT_API_BASE_URL: &str = "http://localhost:5678";

/// Build-time settings. `BILLED_API_URL` picks the API, `BILLED_MEMORY_STORE`
/// swaps the HTTP gateway for the in-memory one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub use_memory_store: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_memory_store: false,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("BILLED_API_URL"),
            option_env!("BILLED_MEMORY_STORE"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, memory_store: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let use_memory_store = memory_store
            .map(|flag| matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            api_base_url,
            use_memory_store,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AppConfig::from_values(None, None), AppConfig::default());
        assert_eq!(AppConfig::from_values(Some("  "), Some("")), AppConfig::default());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.billed.tld/"), None);
        assert_eq!(config.api_base_url, "https://api.billed.tld");
    }

    #[test]
    fn test_memory_store_flag() {
        assert!(AppConfig::from_values(None, Some("1")).use_memory_store);
        assert!(AppConfig::from_values(None, Some("TRUE")).use_memory_store);
        assert!(AppConfig::from_values(None, Some("yes")).use_memory_store);
        assert!(!AppConfig::from_values(None, Some("0")).use_memory_store);
        assert!(!AppConfig::from_values(None, Some("off")).use_memory_store);
    }
}
