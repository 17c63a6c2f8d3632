//! Purchase order item entity - One line of a purchase order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase order line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the order this line belongs to
    pub purchase_order_id: i64,
    /// Inventory item this line restocks, if any
    pub inventory_item_id: Option<i64>,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
}

impl Model {
    /// Cost of this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price_per_unit
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one order
    #[sea_orm(
        belongs_to = "super::purchase_order::Entity",
        from = "Column::PurchaseOrderId",
        to = "super::purchase_order::Column::Id"
    )]
    PurchaseOrder,
}

impl Related<super::purchase_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
