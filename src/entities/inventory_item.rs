//! Inventory item entity - One stocked ingredient or supply in the restaurant.
//!
//! Each item tracks its on-hand `quantity`, its `min_threshold` and the automation
//! level used when it runs low. Low-stock status is derived, never stored.
//! The `version` column guards against concurrent edits from several sessions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How much automation may be applied when this item needs reordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "kebab-case")]
pub enum OrderMode {
    /// Every order is placed by hand
    #[sea_orm(string_value = "manual")]
    Manual,
    /// Orders are drafted automatically but need confirmation
    #[sea_orm(string_value = "semi-auto")]
    SemiAuto,
    /// Orders may be placed without confirmation
    #[sea_orm(string_value = "full-auto")]
    FullAuto,
}

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Tomatoes", "Olive oil")
    pub name: String,
    /// Current on-hand amount, never negative
    pub quantity: f64,
    /// Unit-of-measure label (e.g., "kg", "liter", "units")
    pub unit: String,
    /// Below this amount the item counts as low stock
    pub min_threshold: f64,
    /// Automation level for reordering
    pub order_mode: OrderMode,
    /// Optimistic concurrency counter, bumped on every update
    pub version: i64,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Whether the on-hand amount is below the minimum threshold.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.quantity < self.min_threshold
    }
}

/// Defines relationships between `InventoryItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One item has many supplier links
    #[sea_orm(has_many = "super::inventory_supplier::Entity")]
    SupplierLinks,
}

impl Related<super::inventory_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierLinks.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        super::inventory_supplier::Relation::Supplier.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::inventory_supplier::Relation::InventoryItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
