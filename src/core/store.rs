//! Store seams used by the submission workflow.
//!
//! Both traits are implemented for [`DatabaseConnection`] by delegating to the
//! catalog and order functions; tests substitute their own implementations.

use crate::{
    core::{
        catalog::{self, ItemWithSuppliers, SupplierWithProducts},
        orders::{self, NewOrderLine, NewPurchaseOrder, OrderWithItems},
    },
    entities::purchase_order::{self, OrderStatus},
    errors::Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Read access to the inventory and supplier catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All items with their linked suppliers in link order.
    async fn list_items(&self) -> Result<Vec<ItemWithSuppliers>>;

    /// All suppliers with their available products.
    async fn list_suppliers_with_products(&self) -> Result<Vec<SupplierWithProducts>>;
}

/// Persistence of purchase orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Creates an order, or returns the existing one for a reused request token.
    async fn create_order(&self, order: NewPurchaseOrder) -> Result<OrderWithItems>;

    async fn set_status(&self, order_id: i64, status: OrderStatus)
    -> Result<purchase_order::Model>;

    async fn append_items(
        &self,
        order_id: i64,
        lines: Vec<NewOrderLine>,
        now: DateTime<Utc>,
    ) -> Result<OrderWithItems>;

    async fn delete_order(&self, order_id: i64) -> Result<()>;

    /// All orders with their lines, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderWithItems>>;
}

#[async_trait]
impl CatalogStore for DatabaseConnection {
    async fn list_items(&self) -> Result<Vec<ItemWithSuppliers>> {
        catalog::list_items(self).await
    }

    async fn list_suppliers_with_products(&self) -> Result<Vec<SupplierWithProducts>> {
        catalog::list_suppliers_with_products(self).await
    }
}

#[async_trait]
impl OrderStore for DatabaseConnection {
    async fn create_order(&self, order: NewPurchaseOrder) -> Result<OrderWithItems> {
        orders::create_order(self, order).await
    }

    async fn set_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<purchase_order::Model> {
        orders::set_status(self, order_id, status).await
    }

    async fn append_items(
        &self,
        order_id: i64,
        lines: Vec<NewOrderLine>,
        now: DateTime<Utc>,
    ) -> Result<OrderWithItems> {
        orders::append_items(self, order_id, lines, now).await
    }

    async fn delete_order(&self, order_id: i64) -> Result<()> {
        orders::delete_order(self, order_id).await
    }

    async fn list_orders(&self) -> Result<Vec<OrderWithItems>> {
        orders::list_orders(self).await
    }
}
