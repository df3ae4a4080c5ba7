//! Configuration module
//!
//! Reads `~/.config/bts-fare/config.toml` (or the path in `BTS_FARE_CONFIG`).
//! Every section is optional; missing keys fall back to the standard BTS
//! network and fare tables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::{
    BaseFareTable, DomainResult, ExtensionFareFormula, FareCalculator, Topology,
};
use crate::domain::fare::table::{
    DEFAULT_BASE_FARES, DEFAULT_EXTENSION_MINIMUM, DEFAULT_EXTENSION_PER_STATION,
};
use crate::support::errors::InfraError;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BTS_FARE_CONFIG";

/// Default config location: `<config_dir>/bts-fare/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bts-fare")
        .join("config.toml")
}

/// Config path from the environment, or the default one
pub fn config_path_from_env() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub network: NetworkConfig,
    #[validate(nested)]
    pub fares: FareConfig,
    #[validate(nested)]
    pub stations: StationsConfig,
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Station counts of the standard layout
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base zone north stations, `N<n>..N1`
    #[validate(range(min = 1, max = 999))]
    pub base_north_stations: u32,
    /// Base zone east stations, `E1..E<n>`
    #[validate(range(max = 999))]
    pub base_east_stations: u32,
    /// Last extension station ordinal on the north line
    #[validate(range(min = 2, max = 999))]
    pub extension_last_north: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_north_stations: 8,
            base_east_stations: 9,
            extension_last_north: 24,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct FareConfig {
    /// Base zone step fares, see [`BaseFareTable::new`]
    #[validate(length(min = 1, max = 64))]
    pub base_table: Vec<u32>,
    #[validate(range(max = 10000))]
    pub extension_minimum: u32,
    #[validate(range(max = 1000))]
    pub extension_per_station: u32,
    #[validate(length(min = 1))]
    pub currency: String,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_table: DEFAULT_BASE_FARES.to_vec(),
            extension_minimum: DEFAULT_EXTENSION_MINIMUM,
            extension_per_station: DEFAULT_EXTENSION_PER_STATION,
            currency: "Baht".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct StationsConfig {
    /// `code,name` list, one station per line
    pub names_file: PathBuf,
}

impl Default for StationsConfig {
    fn default() -> Self {
        Self {
            names_file: PathBuf::from("bts_station_list.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    #[validate(length(min = 1))]
    pub level: String,
    /// `text` or `json`
    #[validate(custom(function = "validate_log_format"))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    match format.to_lowercase().as_str() {
        "text" | "json" => Ok(()),
        _ => Err(ValidationError::new("unknown_log_format")),
    }
}

impl AppConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, InfraError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn topology(&self) -> DomainResult<Topology> {
        Topology::standard(
            self.network.base_north_stations,
            self.network.base_east_stations,
            self.network.extension_last_north,
        )
    }

    /// Build the fare calculator described by this config.
    pub fn build_calculator(&self) -> DomainResult<FareCalculator> {
        FareCalculator::new(
            self.topology()?,
            BaseFareTable::new(self.fares.base_table.clone())?,
            ExtensionFareFormula::new(
                self.fares.extension_minimum,
                self.fares.extension_per_station,
            )?,
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, StationCode};

    #[test]
    fn defaults_describe_standard_network() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.fares.base_table, vec![16, 23, 26, 30, 33, 37, 40, 44]);
        assert_eq!(cfg.fares.currency, "Baht");

        let calc = cfg.build_calculator().unwrap();
        assert_eq!(calc.topology().base().len(), 18);
        assert_eq!(calc.topology().extension().len(), 16);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.network.extension_last_north, 24);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_sections_are_merged() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [fares]
            extension_per_station = 5

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.fares.extension_per_station, 5);
        assert_eq!(cfg.fares.extension_minimum, 15);
        assert_eq!(cfg.logging.format, "json");

        let calc = cfg.build_calculator().unwrap();
        assert_eq!(
            calc.extension_fare(&StationCode::north(9), &StationCode::north(11)),
            25
        );
    }

    #[test]
    fn validation_rejects_bad_values() {
        let err = AppConfig::from_toml_str("[fares]\nbase_table = []").unwrap_err();
        assert!(matches!(err, InfraError::Validation(_)));

        let err = AppConfig::from_toml_str("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, InfraError::Validation(_)));

        let err = AppConfig::from_toml_str("[network]\nbase_north_stations = 0").unwrap_err();
        assert!(matches!(err, InfraError::Validation(_)));
    }

    #[test]
    fn oversized_fares_are_rejected() {
        let err = AppConfig::from_toml_str("[fares]\nextension_minimum = 4294967295").unwrap_err();
        assert!(matches!(err, InfraError::Validation(_)));

        let cfg = AppConfig::from_toml_str("[fares]\nbase_table = [16, 4294967295]").unwrap();
        assert!(matches!(
            cfg.build_calculator(),
            Err(DomainError::InvalidFareTable(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AppConfig::from_toml_str("[fares\n").unwrap_err();
        assert!(matches!(err, InfraError::Config(_)));
    }

    #[test]
    fn inconsistent_network_fails_at_build() {
        let cfg = AppConfig::from_toml_str(
            "[network]\nbase_north_stations = 8\nextension_last_north = 8",
        )
        .unwrap();
        assert!(cfg.build_calculator().is_err());
    }

    #[test]
    fn decreasing_fares_fail_at_build() {
        let cfg = AppConfig::from_toml_str("[fares]\nbase_table = [20, 10]").unwrap();
        assert!(cfg.build_calculator().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/bts-fare.toml")).unwrap_err();
        assert!(matches!(err, InfraError::Io(_)));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        assert!(default_config_path().ends_with("bts-fare/config.toml"));
    }
}
