//! Shared test utilities.
//!
//! Database helpers set up an in-memory `SQLite` database and insert rows through the
//! real catalog functions. The plain builders return unsaved models for the pure
//! engine and policy tests.

use crate::{
    core::{
        catalog::{
            self, ItemWithSuppliers, NewInventoryItem, NewSupplierProduct, SupplierContact,
            SupplierWithProducts,
        },
        orders::NewOrderLine,
    },
    entities::{inventory_item, inventory_item::OrderMode, supplier, supplier_product},
    errors::Result,
};
use chrono::{DateTime, Utc, Weekday};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Item input measured in kg with manual ordering.
pub fn new_item(name: &str, quantity: f64, min_threshold: f64) -> NewInventoryItem {
    NewInventoryItem {
        name: name.to_string(),
        quantity,
        unit: "kg".to_string(),
        min_threshold,
        order_mode: OrderMode::Manual,
    }
}

pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    quantity: f64,
    min_threshold: f64,
) -> Result<inventory_item::Model> {
    catalog::add_item(db, new_item(name, quantity, min_threshold)).await
}

pub async fn create_test_supplier(db: &DatabaseConnection, name: &str) -> Result<supplier::Model> {
    catalog::add_supplier(db, name, SupplierContact::default()).await
}

/// Available product sold per kg, delivered Mondays and Thursdays.
pub async fn create_test_product(
    db: &DatabaseConnection,
    supplier_id: i64,
    name: &str,
    price: f64,
) -> Result<supplier_product::Model> {
    catalog::add_supplier_product(
        db,
        NewSupplierProduct {
            supplier_id,
            product_name: name.to_string(),
            price,
            unit: "kg".to_string(),
            min_order_quantity: 1.0,
            available_days: vec![Weekday::Mon, Weekday::Thu],
            is_available: true,
        },
    )
    .await
}

/// Unsaved item at version 1, measured in kg.
pub fn item(id: i64, name: &str, quantity: f64, min_threshold: f64) -> inventory_item::Model {
    inventory_item::Model {
        id,
        name: name.to_string(),
        quantity,
        unit: "kg".to_string(),
        min_threshold,
        order_mode: OrderMode::Manual,
        version: 1,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

pub fn supplier(id: i64, name: &str) -> supplier::Model {
    supplier::Model {
        id,
        name: name.to_string(),
        contact_person: None,
        phone: None,
        email: None,
        address: None,
        notes: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Unsaved available product with no delivery days.
pub fn offer(id: i64, supplier_id: i64, name: &str, price: f64) -> supplier_product::Model {
    offer_on_days(id, supplier_id, name, price, "")
}

/// Unsaved available product; `days` is a comma-separated weekday list such as "mon,thu".
pub fn offer_on_days(
    id: i64,
    supplier_id: i64,
    name: &str,
    price: f64,
    days: &str,
) -> supplier_product::Model {
    supplier_product::Model {
        id,
        supplier_id,
        product_name: name.to_string(),
        price,
        unit: "kg".to_string(),
        min_order_quantity: 1.0,
        available_days: days.to_string(),
        is_available: true,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

pub fn with_suppliers(item: inventory_item::Model, suppliers: Vec<supplier::Model>) -> ItemWithSuppliers {
    ItemWithSuppliers { item, suppliers }
}

pub fn directory_entry(
    supplier: supplier::Model,
    products: Vec<supplier_product::Model>,
) -> SupplierWithProducts {
    SupplierWithProducts { supplier, products }
}

/// Order line in kg not tied to an inventory item.
pub fn line(product_name: &str, quantity: f64, price_per_unit: f64) -> NewOrderLine {
    NewOrderLine {
        inventory_item_id: None,
        product_name: product_name.to_string(),
        quantity,
        unit: "kg".to_string(),
        price_per_unit,
    }
}
