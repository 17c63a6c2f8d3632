//! Supplier product entity - A priced product offered by a supplier.
//!
//! `available_days` holds the delivery weekdays as a comma-separated list of
//! weekday names (e.g. `"sun,tue,thu"`).

use chrono::Weekday;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_products")]
pub struct Model {
    /// Unique identifier for the product offer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the supplier offering this product
    pub supplier_id: i64,
    /// Product name as the supplier lists it
    pub product_name: String,
    /// Price per unit
    pub price: f64,
    /// Unit the price refers to
    pub unit: String,
    /// Smallest quantity the supplier accepts
    pub min_order_quantity: f64,
    /// Comma-separated delivery weekdays
    pub available_days: String,
    /// Unavailable products are hidden from reorder planning
    pub is_available: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Parses `available_days` into weekdays, ignoring entries chrono cannot read.
    #[must_use]
    pub fn available_weekdays(&self) -> Vec<Weekday> {
        self.available_days
            .split(',')
            .filter_map(|day| day.trim().parse::<Weekday>().ok())
            .collect()
    }
}

/// Defines relationships between `SupplierProduct` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
