//! User settings for fibertrack
//!
//! Display preferences (business name, currency prefix, date format) and the
//! audit log toggle.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;

/// User settings for fibertrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name shown in the TUI header
    #[serde(default = "default_business_name")]
    pub business_name: String,

    /// Currency prefix used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Mirror the audit trail to the audit log file
    #[serde(default)]
    pub audit_log_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_business_name() -> String {
    "Kunal Fiber Tech Industries".to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            business_name: default_business_name(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_log_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would fail later while rendering records
    ///
    /// `date_format` must be a non-empty strftime pattern that formats a
    /// plain date; time and zone specifiers such as `%H` have nothing to
    /// format and are refused here.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.date_format.trim().is_empty() {
            return Err(LedgerError::Config("date_format must not be empty".into()));
        }

        let sample = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or(NaiveDate::MIN);
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            return Err(LedgerError::Config(format!(
                "date_format '{}' is not a valid date format",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.business_name, "Kunal Fiber Tech Industries");
        assert!(!settings.audit_log_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "Rs.".into();
        settings.audit_log_enabled = true;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "Rs.");
        assert!(loaded.audit_log_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"business_name": "Shop"}"#).unwrap();
        assert_eq!(settings.business_name, "Shop");
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_time_only_date_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%H:%M"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
        assert!(err.to_string().contains("%H:%M"));
    }

    #[test]
    fn test_validate_date_formats() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.date_format = "%d/%m/%Y".into();
        assert!(settings.validate().is_ok());

        for bad in ["", "  ", "%H:%M", "%Y-%m-%d %z", "%Q"] {
            settings.date_format = bad.into();
            assert!(settings.validate().is_err(), "accepted {:?}", bad);
        }
    }
}
