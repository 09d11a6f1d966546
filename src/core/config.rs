//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Listen address and site paths come from `[package.metadata.leptos]`
//! (overridable with `LEPTOS_SITE_ADDR` etc.), not from here.

/// Enables response compression (brotli + gzip)
pub const COMPRESSION_VAR: &str = "OPEN_FIESTA_COMPRESSION";

/// Serve pre-compressed `.br` / `.gz` siblings of the bundle files
pub const PRECOMPRESSED_VAR: &str = "OPEN_FIESTA_PRECOMPRESSED";

/// Errors raised while reading the configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be one of true/false/1/0/yes/no/on/off, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress responses on the fly
    pub compression: bool,
    /// Prefer pre-compressed static assets under `/pkg`
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            compression: parse_bool(COMPRESSION_VAR, lookup(COMPRESSION_VAR), true)?,
            precompressed_assets: parse_bool(PRECOMPRESSED_VAR, lookup(PRECOMPRESSED_VAR), true)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_bool(name: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_disable_compression() {
        let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, "false")])).unwrap();
        assert!(!config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_bool_spellings() {
        for (raw, expected) in [
            ("1", true),
            ("TRUE", true),
            (" yes ", true),
            ("on", true),
            ("0", false),
            ("False", false),
            ("no", false),
            ("OFF", false),
        ] {
            let config = Config::from_lookup(lookup(&[(PRECOMPRESSED_VAR, raw)])).unwrap();
            assert_eq!(config.precompressed_assets, expected, "{raw:?}");
        }
    }

    #[test]
    fn test_empty_value_uses_default() {
        let config = Config::from_lookup(lookup(&[(COMPRESSION_VAR, "  ")])).unwrap();
        assert!(config.compression);
    }

    #[test]
    fn test_invalid_bool_is_rejected() {
        let err = Config::from_lookup(lookup(&[(COMPRESSION_VAR, "sometimes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: COMPRESSION_VAR,
                value: "sometimes".to_string(),
            }
        );
        assert!(err.to_string().contains(COMPRESSION_VAR));
    }
}
