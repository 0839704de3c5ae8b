//! Application settings compiled in from `config/daycare.yaml`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use shared::CardRules;

const DEFAULT_CONFIG: &str = include_str!("../config/daycare.yaml");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub daycare_name: String,
    /// Date the calendars highlight and new activity logs are stamped with
    pub today: NaiveDate,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub card_rules: CardRules,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_CONFIG).context("Failed to parse embedded daycare.yaml")
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(yaml).context("Invalid config YAML")?;
        Ok(config)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.daycare_name, "Sunnyview Daycare");
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 11, 11).unwrap());
        assert_eq!(config.card_rules.min_card_digits, 16);
        assert_eq!(config.card_rules.min_cvv_digits, 3);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_optional_fields_default() {
        let config = AppConfig::from_yaml_str("daycare_name: Test\ntoday: 2026-01-05\n").unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.card_rules, CardRules::default());
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config =
            AppConfig::from_yaml_str("daycare_name: Test\ntoday: 2026-01-05\nlog_level: loud\n")
                .unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_today_is_an_error() {
        assert!(AppConfig::from_yaml_str("daycare_name: Test\n").is_err());
    }
}
