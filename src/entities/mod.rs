//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the back-office tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod inventory_item;
pub mod inventory_supplier;
pub mod purchase_order;
pub mod purchase_order_item;
pub mod supplier;
pub mod supplier_product;

// Re-export specific types to avoid conflicts
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel, OrderMode,
};
pub use inventory_supplier::{
    Column as InventorySupplierColumn, Entity as InventorySupplier,
    Model as InventorySupplierModel,
};
pub use purchase_order::{
    Column as PurchaseOrderColumn, Entity as PurchaseOrder, Model as PurchaseOrderModel,
    OrderStatus,
};
pub use purchase_order_item::{
    Column as PurchaseOrderItemColumn, Entity as PurchaseOrderItem,
    Model as PurchaseOrderItemModel,
};
pub use supplier::{Column as SupplierColumn, Entity as Supplier, Model as SupplierModel};
pub use supplier_product::{
    Column as SupplierProductColumn, Entity as SupplierProduct, Model as SupplierProductModel,
};
