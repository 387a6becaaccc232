//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Report rendering configuration.
    pub report: ReportConfig,
    /// PDF export configuration.
    pub export: ExportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted request body in bytes (bank file uploads).
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency whose marker prefixes every amount.
    #[serde(default = "default_currency")]
    pub currency: Currency,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Eur
}

/// PDF export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Text lines placed on one page before breaking.
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
    /// Font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lines_per_page: default_lines_per_page(),
            font_size: default_font_size(),
        }
    }
}

fn default_lines_per_page() -> usize {
    64
}

fn default_font_size() -> f32 {
    9.0
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("JAARREKENING").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "JAARREKENING__SERVER__PORT",
                "JAARREKENING__REPORT__CURRENCY",
                "JAARREKENING__EXPORT__LINES_PER_PAGE",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.max_upload_bytes, 10 * 1024 * 1024);
                assert_eq!(config.report.currency, Currency::Eur);
                assert_eq!(config.export.lines_per_page, 64);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("JAARREKENING__SERVER__PORT", Some("9090")),
                ("JAARREKENING__REPORT__CURRENCY", Some("USD")),
                ("JAARREKENING__EXPORT__LINES_PER_PAGE", Some("40")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.report.currency, Currency::Usd);
                assert_eq!(config.export.lines_per_page, 40);
            },
        );
    }
}
