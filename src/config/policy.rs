//! Application configuration loading from config.toml
//!
//! The `[reorder]` table holds the policy constants the reorder engine works with:
//! quantity multipliers per action type, the append and arrival windows, and the
//! fallback price used when no supplier product matches an item. The fallback price
//! has no built-in value and must be set explicitly.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Multiplier applied to the minimum threshold for `by-quantity` orders.
pub const BY_QUANTITY_MULTIPLIER: f64 = 2.0;
/// Multiplier applied to the minimum threshold for `next-week` orders.
pub const NEXT_WEEK_MULTIPLIER: f64 = 1.5;
/// Multiplier applied to the minimum threshold for `by-supplier-dates` orders.
pub const SUPPLIER_DATES_MULTIPLIER: f64 = 1.5;
/// Multiplier applied to the minimum threshold for `next-month` orders.
pub const NEXT_MONTH_MULTIPLIER: f64 = 4.0;
/// Days after creation during which items may be appended to an order.
pub const ADD_WINDOW_DAYS: i64 = 7;
/// Days between order creation and projected arrival.
pub const ARRIVAL_DAYS: i64 = 3;
/// Upper bound for `add_window_days` and `arrival_days` (ten years).
pub const MAX_WINDOW_DAYS: i64 = 3650;
/// VAT rate applied to invoices.
pub const VAT_RATE: f64 = 0.17;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reorder engine policy
    pub reorder: ReorderPolicy,
    /// Invoice settings
    #[serde(default)]
    pub finance: FinanceConfig,
}

/// Policy constants for quantity suggestions and order windows.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderPolicy {
    #[serde(default = "default_by_quantity")]
    pub by_quantity_multiplier: f64,
    #[serde(default = "default_next_week")]
    pub next_week_multiplier: f64,
    #[serde(default = "default_supplier_dates")]
    pub supplier_dates_multiplier: f64,
    #[serde(default = "default_next_month")]
    pub next_month_multiplier: f64,
    /// Price used when no supplier product matches; such lines need price confirmation
    pub default_price_per_unit: f64,
    #[serde(default = "default_add_window_days")]
    pub add_window_days: i64,
    #[serde(default = "default_arrival_days")]
    pub arrival_days: i64,
}

const fn default_by_quantity() -> f64 {
    BY_QUANTITY_MULTIPLIER
}
const fn default_next_week() -> f64 {
    NEXT_WEEK_MULTIPLIER
}
const fn default_supplier_dates() -> f64 {
    SUPPLIER_DATES_MULTIPLIER
}
const fn default_next_month() -> f64 {
    NEXT_MONTH_MULTIPLIER
}
const fn default_add_window_days() -> i64 {
    ADD_WINDOW_DAYS
}
const fn default_arrival_days() -> i64 {
    ARRIVAL_DAYS
}

impl ReorderPolicy {
    /// Standard multipliers and windows with the given fallback price.
    #[must_use]
    pub const fn with_default_price(default_price_per_unit: f64) -> Self {
        Self {
            by_quantity_multiplier: BY_QUANTITY_MULTIPLIER,
            next_week_multiplier: NEXT_WEEK_MULTIPLIER,
            supplier_dates_multiplier: SUPPLIER_DATES_MULTIPLIER,
            next_month_multiplier: NEXT_MONTH_MULTIPLIER,
            default_price_per_unit,
            add_window_days: ADD_WINDOW_DAYS,
            arrival_days: ARRIVAL_DAYS,
        }
    }

    /// Checks that the policy keeps suggestions non-negative and ordered by horizon
    /// (`next-month ≥ by-quantity ≥ next-week ≥ 1`), and that the windows and the
    /// fallback price make sense.
    ///
    /// # Errors
    /// Returns `Error::Config` describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        let multipliers = [
            ("by_quantity_multiplier", self.by_quantity_multiplier),
            ("next_week_multiplier", self.next_week_multiplier),
            ("supplier_dates_multiplier", self.supplier_dates_multiplier),
            ("next_month_multiplier", self.next_month_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 1.0 {
                return Err(Error::Config {
                    message: format!("{name} must be a finite number of at least 1, got {value}"),
                });
            }
        }

        if self.next_month_multiplier < self.by_quantity_multiplier
            || self.by_quantity_multiplier < self.next_week_multiplier
        {
            return Err(Error::Config {
                message: "multipliers must satisfy next_month >= by_quantity >= next_week"
                    .to_string(),
            });
        }

        if !self.default_price_per_unit.is_finite() || self.default_price_per_unit < 0.0 {
            return Err(Error::Config {
                message: format!(
                    "default_price_per_unit must be a non-negative number, got {}",
                    self.default_price_per_unit
                ),
            });
        }

        for (name, days) in [
            ("add_window_days", self.add_window_days),
            ("arrival_days", self.arrival_days),
        ] {
            if !(0..=MAX_WINDOW_DAYS).contains(&days) {
                return Err(Error::Config {
                    message: format!("{name} must be between 0 and {MAX_WINDOW_DAYS}, got {days}"),
                });
            }
        }

        Ok(())
    }
}

/// Invoice settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
}

const fn default_vat_rate() -> f64 {
    VAT_RATE
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self { vat_rate: VAT_RATE }
    }
}

/// Parses and validates configuration from a TOML string.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid, a required field is missing or
/// the reorder policy fails validation.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    config.reorder.validate()?;

    if !config.finance.vat_rate.is_finite() || config.finance.vat_rate < 0.0 {
        return Err(Error::Config {
            message: format!("vat_rate must be non-negative, got {}", config.finance.vat_rate),
        });
    }

    Ok(config)
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing (`reorder.default_price_per_unit`)
/// - The reorder policy is inconsistent
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Loads configuration from the default location (./config.toml)
///
/// # Errors
/// See [`load_config`].
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}
