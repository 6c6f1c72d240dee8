//! Runtime Configuration
//!
//! Built once at startup from the page location.

use log::LevelFilter;
use percent_encoding::percent_decode_str;

/// Rows per listing page; the API is always asked for this many
pub const PAGE_SIZE: u32 = 10;

/// How long a notification stays on screen
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every `/api/...` path, without trailing slash
    pub api_base: String,
    pub notice_ttl_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read config from `window.location`.
    ///
    /// Falls back to same-origin requests when the location is unavailable.
    pub fn from_window() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let origin = location
            .as_ref()
            .and_then(|l| l.origin().ok())
            .unwrap_or_default();
        let search = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .unwrap_or_default();
        Self::from_location(&origin, &search)
    }

    /// Supported query parameters: `api=<base url>`, `log=<level>`
    pub fn from_location(origin: &str, search: &str) -> Self {
        let mut config = AppConfig {
            api_base: origin.trim_end_matches('/').to_string(),
            notice_ttl_ms: NOTICE_TTL_MS,
            log_level: LevelFilter::Info,
        };

        for (key, value) in query_pairs(search) {
            match key.as_str() {
                "api" if !value.is_empty() => {
                    config.api_base = value.trim_end_matches('/').to_string();
                }
                "log" => {
                    if let Ok(level) = value.parse::<LevelFilter>() {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }

        config
    }
}

fn query_pairs(search: &str) -> impl Iterator<Item = (String, String)> + '_ {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_origin() {
        let config = AppConfig::from_location("http://localhost:5000/", "");
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.notice_ttl_ms, 3000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::from_location(
            "http://localhost:8080",
            "?api=https%3A%2F%2Fshop.example.com%2F&log=debug",
        );
        assert_eq!(config.api_base, "https://shop.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_is_ignored() {
        let config = AppConfig::from_location("http://a", "?log=loud&api=");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.api_base, "http://a");
    }
}
