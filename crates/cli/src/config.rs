//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::Context;

use vendemas_catalog::Catalog;
use vendemas_observability::LogFormat;

pub const CATALOG_VAR: &str = "VENDEMAS_CATALOG";
pub const LOG_FORMAT_VAR: &str = "VENDEMAS_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosConfig {
    /// JSON catalog to load instead of the built-in menu.
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Unparseable `VENDEMAS_LOG_FORMAT` value that was replaced by the default.
    pub rejected_log_format: Option<String>,
}

impl PosConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let (log_format, rejected_log_format) = match lookup(LOG_FORMAT_VAR) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(_) => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            catalog_path,
            log_format,
            rejected_log_format,
        }
    }

    /// Log the values that fell back to defaults. Call once logging is up.
    pub fn warn_fallbacks(&self) {
        if let Some(raw) = &self.rejected_log_format {
            tracing::warn!(
                var = LOG_FORMAT_VAR,
                value = %raw,
                fallback = ?self.log_format,
                "unknown log format; using default"
            );
        }
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("loading catalog from {}", path.display())),
            None => {
                tracing::info!("{CATALOG_VAR} not set; using built-in menu");
                Ok(Catalog::seeded())
            }
        }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PosConfig::from_lookup(|_| None);
        assert_eq!(config, PosConfig::default());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_catalog_path_and_format() {
        let config = PosConfig::from_lookup(lookup_from(&[
            (CATALOG_VAR, "/srv/menu.json"),
            (LOG_FORMAT_VAR, "pretty"),
        ]));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_catalog_path_means_builtin_menu() {
        let config = PosConfig::from_lookup(lookup_from(&[(CATALOG_VAR, "  ")]));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.load_catalog().unwrap(), Catalog::seeded());
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = PosConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "xml")]));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.rejected_log_format.as_deref(), Some("xml"));
        config.warn_fallbacks();
    }

    #[test]
    fn valid_format_records_no_fallback() {
        let config = PosConfig::from_lookup(lookup_from(&[(LOG_FORMAT_VAR, "json")]));
        assert_eq!(config.rejected_log_format, None);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = PosConfig {
            catalog_path: Some(PathBuf::from("/no/such/menu.json")),
            ..PosConfig::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/menu.json"));
    }
}
