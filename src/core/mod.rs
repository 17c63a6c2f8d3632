/// Inventory items, suppliers, supplier products and their links
pub mod catalog;

/// Quantity suggestions and per-supplier order drafts
pub mod engine;

/// Invoice VAT and income/expense statistics
pub mod finance;

/// Generated customer messages and financial tips
pub mod insight;

/// Matching inventory items to supplier products
pub mod matching;

/// Purchase orders: creation, status, appended lines
pub mod orders;

/// The user's per-item reorder choices
pub mod selection;

/// Async store traits implemented for the database connection
pub mod store;

/// Turning a selection into purchase orders
pub mod submit;

/// Choosing the fulfilling supplier for an item
pub mod supplier_policy;

/// Monthly hours and salary from work logs
pub mod worklog;

pub use engine::{ReorderEngine, ReorderPlan};
pub use selection::{OrderSelection, ReorderAction};
pub use submit::{SubmissionReport, submit_selection};
