//! Inventory supplier entity - Links an inventory item to a supplier that can fulfil it.
//!
//! Links keep their own sequential id so the order in which suppliers were linked
//! to an item is stable; the first linked supplier is the default fulfiller.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Item-to-supplier link database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_suppliers")]
pub struct Model {
    /// Link identifier, increasing in link order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the linked inventory item
    pub inventory_item_id: i64,
    /// ID of the linked supplier
    pub supplier_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each link belongs to one inventory item
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id"
    )]
    InventoryItem,
    /// Each link belongs to one supplier
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
