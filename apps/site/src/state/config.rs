//! # Site Configuration
//!
//! Settings loaded once at bootstrap.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │  2. site.toml                                                           │
//! │     ~/.config/clinivet/site.toml (Linux)                                │
//! │     ~/Library/Application Support/pe.clinivet.site/site.toml (macOS)    │
//! │  3. Environment variables (CLINIVET_*)                                  │
//! │  4. validate()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! store_name = "Clinivet"
//! currency_symbol = "$"
//! free_shipping_threshold_cents = 50000
//! flat_shipping_fee_cents = 5000
//! theme_poll_interval_secs = 60
//! utc_offset_minutes = -300
//! appointment_reset_delay_ms = 300
//! database_path = "/var/lib/clinivet/clinivet.db"
//! ```
//!
//! Read-only after bootstrap, so no mutex.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use clinivet_core::theme::LIMA_UTC_OFFSET_MINUTES;
use clinivet_core::{Money, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};

const CONFIG_FILE: &str = "site.toml";
const DATABASE_FILE: &str = "clinivet.db";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the navbar and footer.
    pub store_name: String,

    /// Printed before every amount. Amounts always carry two decimals.
    pub currency_symbol: String,

    /// Cart subtotal from which shipping is free. Defaults to the
    /// storefront's advertised $500.00; set only to override it for a
    /// promotion or a test deployment.
    pub free_shipping_threshold_cents: i64,

    /// Shipping charged below the threshold. Defaults to $50.00.
    pub flat_shipping_fee_cents: i64,

    /// How often the automatic theme is re-evaluated.
    pub theme_poll_interval_secs: u64,

    /// The clinic's offset from UTC. Lima is -300.
    pub utc_offset_minutes: i32,

    /// Delay between closing the appointment modal and clearing the form.
    pub appointment_reset_delay_ms: u64,

    /// SQLite file holding preferences. `None` = platform data dir.
    pub database_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            store_name: "Clinivet".to_string(),
            currency_symbol: "$".to_string(),
            free_shipping_threshold_cents: FREE_SHIPPING_THRESHOLD.cents(),
            flat_shipping_fee_cents: FLAT_SHIPPING_FEE.cents(),
            theme_poll_interval_secs: 60,
            utc_offset_minutes: LIMA_UTC_OFFSET_MINUTES,
            appointment_reset_delay_ms: 300,
            database_path: None,
        }
    }
}

impl SiteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// `config_path` overrides the platform location of `site.toml`. A
    /// missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading site config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a single TOML file (no env overrides, no validation).
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.free_shipping_threshold_cents < 0 || self.flat_shipping_fee_cents < 0 {
            return Err(ConfigError::Invalid(
                "shipping amounts must not be negative".into(),
            ));
        }

        if self.theme_poll_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "theme_poll_interval_secs must be greater than 0".into(),
            ));
        }

        if !(-12 * 60..=14 * 60).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_minutes must be within -720..=840, got {}",
                self.utc_offset_minutes
            )));
        }

        Ok(())
    }

    /// Applies `CLINIVET_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("CLINIVET_STORE_NAME") {
            self.store_name = name;
        }

        if let Ok(path) = std::env::var("CLINIVET_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Ok(secs) = std::env::var("CLINIVET_THEME_POLL_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.theme_poll_interval_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring invalid CLINIVET_THEME_POLL_SECS"),
            }
        }

        if let Ok(offset) = std::env::var("CLINIVET_UTC_OFFSET_MINUTES") {
            match offset.parse::<i32>() {
                Ok(o) => self.utc_offset_minutes = o,
                Err(_) => warn!(value = %offset, "Ignoring invalid CLINIVET_UTC_OFFSET_MINUTES"),
            }
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("pe", "clinivet", "site")
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Where the preference database lives.
    ///
    /// ## Platform-Specific Default
    /// - **macOS**: `~/Library/Application Support/pe.clinivet.site/clinivet.db`
    /// - **Windows**: `%APPDATA%\clinivet\site\data\clinivet.db`
    /// - **Linux**: `~/.local/share/site/clinivet.db`
    pub fn resolved_database_path(&self) -> Option<PathBuf> {
        self.database_path
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join(DATABASE_FILE)))
    }

    pub fn free_shipping_threshold(&self) -> Money {
        Money::from_cents(self.free_shipping_threshold_cents)
    }

    pub fn flat_shipping_fee(&self) -> Money {
        Money::from_cents(self.flat_shipping_fee_cents)
    }

    pub fn theme_poll_interval(&self) -> Duration {
        Duration::from_secs(self.theme_poll_interval_secs)
    }

    pub fn appointment_reset_delay(&self) -> Duration {
        Duration::from_millis(self.appointment_reset_delay_ms)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use clinivet_core::Money;
    /// use clinivet_site::state::SiteConfig;
    ///
    /// let config = SiteConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(28_990)), "$289.90");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "clinivet-{}-{}.toml",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_storefront() {
        let config = SiteConfig::default();
        assert_eq!(config.free_shipping_threshold().cents(), 50_000);
        assert_eq!(config.flat_shipping_fee().cents(), 5_000);
        assert_eq!(config.theme_poll_interval(), Duration::from_secs(60));
        assert_eq!(config.appointment_reset_delay(), Duration::from_millis(300));
        assert_eq!(config.utc_offset_minutes, -300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = SiteConfig::default();
        let cents = Money::from_cents;
        assert_eq!(config.format_currency(cents(1234)), "$12.34");
        assert_eq!(config.format_currency(cents(1)), "$0.01");
        assert_eq!(config.format_currency(cents(500)), "$5.00");
        assert_eq!(config.format_currency(cents(-1234)), "-$12.34");
        assert_eq!(
            config.format_currency(cents(1234)),
            cents(1234).to_string()
        );

        let soles = SiteConfig {
            currency_symbol: "S/ ".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(soles.format_currency(cents(5_000)), "S/ 50.00");
    }

    #[test]
    fn test_decimals_key_has_no_effect() {
        let path = temp_file("decimals", "currency_decimals = 0\n");
        let config = SiteConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.format_currency(config.free_shipping_threshold()), "$500.00");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial", "store_name = \"Clinivet Miraflores\"\n");
        let config = SiteConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.store_name, "Clinivet Miraflores");
        assert_eq!(config.free_shipping_threshold_cents, 50_000);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_file("broken", "theme_poll_interval_secs = \"soon\"\n");
        let result = SiteConfig::from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_poll = SiteConfig {
            theme_poll_interval_secs: 0,
            ..SiteConfig::default()
        };
        assert!(zero_poll.validate().is_err());

        let bad_offset = SiteConfig {
            utc_offset_minutes: 20 * 60,
            ..SiteConfig::default()
        };
        assert!(bad_offset.validate().is_err());

        let negative_fee = SiteConfig {
            flat_shipping_fee_cents: -1,
            ..SiteConfig::default()
        };
        assert!(negative_fee.validate().is_err());
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = SiteConfig {
            database_path: Some(PathBuf::from("/tmp/x.db")),
            ..SiteConfig::default()
        };
        assert_eq!(
            config.resolved_database_path(),
            Some(PathBuf::from("/tmp/x.db"))
        );
    }
}
