//! Unified error type for the reorder engine, the stores and configuration loading.

use crate::entities::purchase_order::OrderStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Any failure talking to the backing store. Nothing is assumed committed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Nothing selected: choose an order action for at least one item")]
    EmptySelection,

    #[error("Cannot move order from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order #{order_number} no longer accepts new items")]
    AppendWindowClosed { order_number: i64 },

    #[error("Inventory item {item_id} was changed by someone else (expected version {expected})")]
    VersionConflict { item_id: i64, expected: i64 },

    #[error("Inventory item not found: {id}")]
    ItemNotFound { id: i64 },

    #[error("Supplier not found: {id}")]
    SupplierNotFound { id: i64 },

    #[error("Supplier product not found: {id}")]
    SupplierProductNotFound { id: i64 },

    #[error("Purchase order not found: {id}")]
    OrderNotFound { id: i64 },

    #[error("Unknown reorder action: '{value}'")]
    UnknownAction { value: String },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Text generation failed: {message}")]
    TextGeneration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
