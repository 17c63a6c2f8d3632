/// Database configuration and connection management
pub mod database;

/// Reorder policy and finance settings loaded from config.toml
pub mod policy;

pub use policy::{AppConfig, FinanceConfig, ReorderPolicy, load_config, load_default_config, parse_config};
