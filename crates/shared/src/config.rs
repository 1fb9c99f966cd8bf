//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TallyConfig {
    /// Currency registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Currency registry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Fraction digits given to codes that are not registered.
    #[serde(default = "default_unknown_fraction")]
    pub unknown_fraction: u32,
    /// Whether to seed the built-in ISO 4217 table.
    #[serde(default = "default_seed_iso")]
    pub seed_iso: bool,
    /// Extra currencies, registered after the ISO table.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            unknown_fraction: default_unknown_fraction(),
            seed_iso: default_seed_iso(),
            currencies: Vec::new(),
        }
    }
}

fn default_unknown_fraction() -> u32 {
    2
}

fn default_seed_iso() -> bool {
    true
}

/// A currency declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code; normalized to uppercase on registration.
    pub code: String,
    /// Number of minor-unit digits.
    pub fraction: u32,
    /// Symbol substituted for `$` in the template.
    #[serde(default)]
    pub grapheme: String,
    /// Display template, e.g. `$1` or `1 $`.
    #[serde(default = "default_template")]
    pub template: String,
    /// Decimal separator.
    #[serde(default = "default_decimal")]
    pub decimal: String,
    /// Thousands separator.
    #[serde(default = "default_thousand")]
    pub thousand: String,
}

fn default_template() -> String {
    "$1".to_string()
}

fn default_decimal() -> String {
    ".".to_string()
}

fn default_thousand() -> String {
    ",".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "tally=info".to_string()
}

impl TallyConfig {
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
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.registry.unknown_fraction, 2);
        assert!(config.registry.seed_iso);
        assert!(config.registry.currencies.is_empty());
        assert_eq!(config.logging.filter, "tally=info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "TALLY__REGISTRY__UNKNOWN_FRACTION",
                "TALLY__REGISTRY__SEED_ISO",
                "TALLY__LOGGING__FILTER",
                "TALLY__LOGGING__JSON",
            ],
            || {
                let config = TallyConfig::load().unwrap();
                assert_eq!(config.registry.unknown_fraction, 2);
                assert!(config.registry.seed_iso);
                assert_eq!(config.logging.filter, "tally=info");
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("TALLY__REGISTRY__UNKNOWN_FRACTION", Some("3")),
                ("TALLY__REGISTRY__SEED_ISO", Some("false")),
                ("TALLY__LOGGING__FILTER", Some("tally=debug")),
                ("TALLY__LOGGING__JSON", Some("true")),
            ],
            || {
                let config = TallyConfig::load().unwrap();
                assert_eq!(config.registry.unknown_fraction, 3);
                assert!(!config.registry.seed_iso);
                assert_eq!(config.logging.filter, "tally=debug");
                assert!(config.logging.json);
            },
        );
    }

    #[test]
    fn test_currency_config_defaults() {
        let parsed: CurrencyConfig = config::Config::builder()
            .set_override("code", "mock")
            .unwrap()
            .set_override("fraction", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.code, "mock");
        assert_eq!(parsed.fraction, 5);
        assert_eq!(parsed.grapheme, "");
        assert_eq!(parsed.template, "$1");
        assert_eq!(parsed.decimal, ".");
        assert_eq!(parsed.thousand, ",");
    }
}
