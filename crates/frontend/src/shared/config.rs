//! Widget configuration
//!
//! Values are baked in at compile time from the build environment
//! (`ASSISTANT_API_URL`, `ASSISTANT_TOP_K`), the same way a static site gets its
//! public env vars. Anything missing or unparsable falls back to the defaults.

use contracts::shared::ask::DEFAULT_TOP_K;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Viewport width (px) below which the mobile overlay is used
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Duration of the close animation before the overlay unmounts
pub const DEFAULT_CLOSE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the assistant service, without trailing slash
    pub api_base: String,
    pub top_k: u32,
    pub mobile_breakpoint: f64,
    pub close_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            top_k: DEFAULT_TOP_K,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Build the config from the compile-time environment
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ASSISTANT_API_URL"), option_env!("ASSISTANT_TOP_K"))
    }

    pub fn from_values(api_base: Option<&str>, top_k: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base = api_base
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base);

        let top_k = match top_k.map(|s| s.trim().parse::<u32>()) {
            Some(Ok(k)) if k > 0 => k,
            Some(_) => {
                log::warn!("ASSISTANT_TOP_K is not a positive integer, using {}", defaults.top_k);
                defaults.top_k
            }
            None => defaults.top_k,
        };

        Self {
            api_base,
            top_k,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.top_k, 5);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.close_delay_ms, 300);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://assistant.example.mk/api/"), None);
        assert_eq!(config.api_base, "https://assistant.example.mk/api");
    }

    #[test]
    fn test_blank_base_falls_back() {
        let config = AppConfig::from_values(Some("   "), None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_top_k_parsing() {
        assert_eq!(AppConfig::from_values(None, Some("8")).top_k, 8);
        assert_eq!(AppConfig::from_values(None, Some("0")).top_k, 5);
        assert_eq!(AppConfig::from_values(None, Some("many")).top_k, 5);
    }
}
