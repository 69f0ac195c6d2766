use std::path::Path;

use crate::market_data::adapters::binance::DEFAULT_BASE_URL;

/// Runtime settings: optional `binx.toml`, then `BINX_*` environment variables.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub const DEFAULT_FILE: &'static str = "binx.toml";

    /// Load settings. A missing file is fine; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(Self::DEFAULT_FILE).required(false),
        };
        config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("BINX"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.base_url, "https://api.binance.com");
        assert_eq!(s.log_filter, "info");
        assert!(s.api_key.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("binx-settings-{}.toml", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "api_key = \"abc\"").unwrap();
        writeln!(f, "base_url = \"https://testnet.binance.vision\"").unwrap();
        drop(f);

        let s = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(s.api_key, "abc");
        assert_eq!(s.base_url, "https://testnet.binance.vision");
        // untouched keys keep their defaults
        assert_eq!(s.log_filter, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("binx-does-not-exist.toml");
        assert!(Settings::load(Some(&path)).is_err());
    }
}
