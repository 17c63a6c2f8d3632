//! Catalog business logic - inventory items, suppliers and their priced products.
//!
//! This module provides the read models the reorder engine consumes
//! ([`ItemWithSuppliers`], [`SupplierWithProducts`]) and the create, update, delete and
//! link operations behind the inventory and supplier screens. Item updates are
//! guarded by the optimistic `version` column so concurrent sessions cannot silently
//! overwrite each other.

use crate::{
    entities::{
        InventoryItem, InventorySupplier, PurchaseOrder, Supplier, SupplierProduct,
        inventory_item::{self, OrderMode},
        inventory_supplier, purchase_order, supplier, supplier_product,
    },
    errors::{Error, Result},
};
use chrono::{Utc, Weekday};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// An inventory item together with its linked suppliers, in link order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWithSuppliers {
    /// The item
    pub item: inventory_item::Model,
    /// Linked suppliers, oldest link first
    pub suppliers: Vec<supplier::Model>,
}

/// A supplier together with its available products, ordered by product name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierWithProducts {
    /// The supplier
    pub supplier: supplier::Model,
    /// Its available products
    pub products: Vec<supplier_product::Model>,
}

/// Input for [`add_item`].
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub min_threshold: f64,
    pub order_mode: OrderMode,
}

/// Partial update for [`update_item`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct InventoryItemChanges {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub min_threshold: Option<f64>,
    pub order_mode: Option<OrderMode>,
}

/// Optional supplier contact details.
#[derive(Debug, Clone, Default)]
pub struct SupplierContact {
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Input for [`add_supplier_product`].
#[derive(Debug, Clone)]
pub struct NewSupplierProduct {
    pub supplier_id: i64,
    pub product_name: String,
    pub price: f64,
    pub unit: String,
    pub min_order_quantity: f64,
    pub available_days: Vec<Weekday>,
    pub is_available: bool,
}

/// Partial update for [`update_supplier_product`]; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct SupplierProductChanges {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub min_order_quantity: Option<f64>,
    pub available_days: Option<Vec<Weekday>>,
    pub is_available: Option<bool>,
}

pub(crate) fn require_name(kind: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{kind} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_non_negative(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(amount)
}

fn format_days(days: &[Weekday]) -> String {
    days.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Retrieves all inventory items ordered by name, each with its linked suppliers in
/// the order they were linked.
///
/// # Errors
/// Returns an error if any of the underlying queries fail.
pub async fn list_items<C>(db: &C) -> Result<Vec<ItemWithSuppliers>>
where
    C: ConnectionTrait,
{
    let items = InventoryItem::find()
        .order_by_asc(inventory_item::Column::Name)
        .all(db)
        .await?;
    let links = InventorySupplier::find()
        .order_by_asc(inventory_supplier::Column::Id)
        .all(db)
        .await?;
    let suppliers: HashMap<i64, supplier::Model> = Supplier::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let mut linked: HashMap<i64, Vec<supplier::Model>> = HashMap::new();
    for link in links {
        if let Some(s) = suppliers.get(&link.supplier_id) {
            linked.entry(link.inventory_item_id).or_default().push(s.clone());
        }
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let suppliers = linked.remove(&item.id).unwrap_or_default();
            ItemWithSuppliers { item, suppliers }
        })
        .collect())
}

/// Retrieves a single inventory item by id.
pub async fn get_item<C>(db: &C, item_id: i64) -> Result<Option<inventory_item::Model>>
where
    C: ConnectionTrait,
{
    InventoryItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the items whose quantity is below their minimum threshold, by name.
pub async fn list_low_stock_items<C>(db: &C) -> Result<Vec<inventory_item::Model>>
where
    C: ConnectionTrait,
{
    InventoryItem::find()
        .filter(
            Expr::col(inventory_item::Column::Quantity)
                .lt(Expr::col(inventory_item::Column::MinThreshold)),
        )
        .order_by_asc(inventory_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new inventory item at version 1.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The quantity or minimum threshold is negative or not finite
/// - The database insert fails
#[instrument(skip(db, new_item), fields(name = %new_item.name))]
pub async fn add_item<C>(db: &C, new_item: NewInventoryItem) -> Result<inventory_item::Model>
where
    C: ConnectionTrait,
{
    let name = require_name("Item", &new_item.name)?;
    let quantity = require_non_negative(new_item.quantity)?;
    let min_threshold = require_non_negative(new_item.min_threshold)?;
    let now = Utc::now();

    let item = inventory_item::ActiveModel {
        name: Set(name),
        quantity: Set(quantity),
        unit: Set(new_item.unit.trim().to_string()),
        min_threshold: Set(min_threshold),
        order_mode: Set(new_item.order_mode),
        version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let item = item.insert(db).await?;
    info!(item_id = item.id, "Inventory item created");
    Ok(item)
}

/// Applies `changes` to an item if it is still at `expected_version`, bumping the
/// version by one.
///
/// The version check and the write happen in a single `UPDATE ... WHERE id = ? AND
/// version = ?` statement, so two sessions editing the same item cannot both win.
///
/// # Errors
/// Returns an error if:
/// - A changed name is blank, or a changed amount is negative or not finite
/// - The item does not exist (`ItemNotFound`)
/// - The item was modified since `expected_version` was read (`VersionConflict`)
#[instrument(skip(db, changes))]
pub async fn update_item<C>(
    db: &C,
    item_id: i64,
    expected_version: i64,
    changes: InventoryItemChanges,
) -> Result<inventory_item::Model>
where
    C: ConnectionTrait,
{
    let mut active = inventory_item::ActiveModel {
        version: Set(expected_version + 1),
        updated_at: Set(Utc::now()),
        ..Default::default()
    };
    if let Some(name) = changes.name {
        active.name = Set(require_name("Item", &name)?);
    }
    if let Some(quantity) = changes.quantity {
        active.quantity = Set(require_non_negative(quantity)?);
    }
    if let Some(unit) = changes.unit {
        active.unit = Set(unit.trim().to_string());
    }
    if let Some(min_threshold) = changes.min_threshold {
        active.min_threshold = Set(require_non_negative(min_threshold)?);
    }
    if let Some(order_mode) = changes.order_mode {
        active.order_mode = Set(order_mode);
    }

    let result = InventoryItem::update_many()
        .set(active)
        .filter(inventory_item::Column::Id.eq(item_id))
        .filter(inventory_item::Column::Version.eq(expected_version))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return match get_item(db, item_id).await? {
            Some(current) => {
                warn!(
                    item_id,
                    expected_version,
                    current_version = current.version,
                    "Rejected stale inventory update"
                );
                Err(Error::VersionConflict {
                    item_id,
                    expected: expected_version,
                })
            }
            None => Err(Error::ItemNotFound { id: item_id }),
        };
    }

    get_item(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })
}

/// Adds `delta` (negative to consume) to an item's quantity under the version guard.
///
/// # Errors
/// Returns `InvalidAmount` if the result would be negative, plus the errors of
/// [`update_item`].
pub async fn adjust_quantity<C>(
    db: &C,
    item_id: i64,
    expected_version: i64,
    delta: f64,
) -> Result<inventory_item::Model>
where
    C: ConnectionTrait,
{
    let current = get_item(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;
    if current.version != expected_version {
        return Err(Error::VersionConflict {
            item_id,
            expected: expected_version,
        });
    }

    let quantity = require_non_negative(current.quantity + delta)?;
    update_item(
        db,
        item_id,
        expected_version,
        InventoryItemChanges {
            quantity: Some(quantity),
            ..Default::default()
        },
    )
    .await
}

/// Deletes an item together with its supplier links.
///
/// Existing purchase order lines keep their copy of the item's name and unit.
#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    InventorySupplier::delete_many()
        .filter(inventory_supplier::Column::InventoryItemId.eq(item_id))
        .exec(&txn)
        .await?;
    let result = InventoryItem::delete_by_id(item_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::ItemNotFound { id: item_id });
    }

    txn.commit().await?;
    info!(item_id, "Inventory item deleted");
    Ok(())
}

/// Retrieves all suppliers ordered by name.
pub async fn list_suppliers<C>(db: &C) -> Result<Vec<supplier::Model>>
where
    C: ConnectionTrait,
{
    Supplier::find()
        .order_by_asc(supplier::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a single supplier by id.
pub async fn get_supplier<C>(db: &C, supplier_id: i64) -> Result<Option<supplier::Model>>
where
    C: ConnectionTrait,
{
    Supplier::find_by_id(supplier_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all suppliers ordered by name, each with its available products
/// ordered by product name. Unavailable products are left out.
pub async fn list_suppliers_with_products<C>(db: &C) -> Result<Vec<SupplierWithProducts>>
where
    C: ConnectionTrait,
{
    let suppliers = list_suppliers(db).await?;
    let products = SupplierProduct::find()
        .filter(supplier_product::Column::IsAvailable.eq(true))
        .order_by_asc(supplier_product::Column::ProductName)
        .all(db)
        .await?;

    let mut by_supplier: HashMap<i64, Vec<supplier_product::Model>> = HashMap::new();
    for product in products {
        by_supplier.entry(product.supplier_id).or_default().push(product);
    }

    Ok(suppliers
        .into_iter()
        .map(|supplier| {
            let products = by_supplier.remove(&supplier.id).unwrap_or_default();
            SupplierWithProducts { supplier, products }
        })
        .collect())
}

/// Creates a supplier.
///
/// # Errors
/// Returns an error if the name is blank or the insert fails.
pub async fn add_supplier<C>(
    db: &C,
    name: &str,
    contact: SupplierContact,
) -> Result<supplier::Model>
where
    C: ConnectionTrait,
{
    let supplier = supplier::ActiveModel {
        name: Set(require_name("Supplier", name)?),
        contact_person: Set(contact.contact_person),
        phone: Set(contact.phone),
        email: Set(contact.email),
        address: Set(contact.address),
        notes: Set(contact.notes),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let supplier = supplier.insert(db).await?;
    info!(supplier_id = supplier.id, "Supplier created");
    Ok(supplier)
}

/// Replaces a supplier's name and contact details.
pub async fn update_supplier<C>(
    db: &C,
    supplier_id: i64,
    name: &str,
    contact: SupplierContact,
) -> Result<supplier::Model>
where
    C: ConnectionTrait,
{
    let name = require_name("Supplier", name)?;
    let mut supplier: supplier::ActiveModel = get_supplier(db, supplier_id)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?
        .into();

    supplier.name = Set(name);
    supplier.contact_person = Set(contact.contact_person);
    supplier.phone = Set(contact.phone);
    supplier.email = Set(contact.email);
    supplier.address = Set(contact.address);
    supplier.notes = Set(contact.notes);

    supplier.update(db).await.map_err(Into::into)
}

/// Deletes a supplier with its products and item links.
///
/// # Errors
/// Returns `ValidationFailed` while purchase orders still reference the supplier,
/// and `SupplierNotFound` if it does not exist.
#[instrument(skip(db))]
pub async fn delete_supplier(db: &DatabaseConnection, supplier_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let orders = PurchaseOrder::find()
        .filter(purchase_order::Column::SupplierId.eq(supplier_id))
        .count(&txn)
        .await?;
    if orders > 0 {
        return Err(Error::validation(format!(
            "Supplier {supplier_id} still has {orders} purchase order(s)"
        )));
    }

    InventorySupplier::delete_many()
        .filter(inventory_supplier::Column::SupplierId.eq(supplier_id))
        .exec(&txn)
        .await?;
    SupplierProduct::delete_many()
        .filter(supplier_product::Column::SupplierId.eq(supplier_id))
        .exec(&txn)
        .await?;
    let result = Supplier::delete_by_id(supplier_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::SupplierNotFound { id: supplier_id });
    }

    txn.commit().await?;
    info!(supplier_id, "Supplier deleted");
    Ok(())
}

/// Links an item to a supplier. New links go to the end of the item's supplier list.
///
/// # Errors
/// Returns `ItemNotFound`/`SupplierNotFound` for unknown ids and `ValidationFailed`
/// if the pair is already linked.
pub async fn link_item_to_supplier<C>(db: &C, item_id: i64, supplier_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    get_item(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;
    get_supplier(db, supplier_id)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    let existing = InventorySupplier::find()
        .filter(inventory_supplier::Column::InventoryItemId.eq(item_id))
        .filter(inventory_supplier::Column::SupplierId.eq(supplier_id))
        .count(db)
        .await?;
    if existing > 0 {
        return Err(Error::validation(format!(
            "Item {item_id} is already linked to supplier {supplier_id}"
        )));
    }

    inventory_supplier::ActiveModel {
        inventory_item_id: Set(item_id),
        supplier_id: Set(supplier_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    debug!(item_id, supplier_id, "Linked item to supplier");
    Ok(())
}

/// Removes the link between an item and a supplier. Returns whether a link existed.
pub async fn unlink_item_from_supplier<C>(db: &C, item_id: i64, supplier_id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    let result = InventorySupplier::delete_many()
        .filter(inventory_supplier::Column::InventoryItemId.eq(item_id))
        .filter(inventory_supplier::Column::SupplierId.eq(supplier_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

/// Suppliers linked to one item, in link order.
pub async fn get_item_suppliers<C>(db: &C, item_id: i64) -> Result<Vec<supplier::Model>>
where
    C: ConnectionTrait,
{
    let links = InventorySupplier::find()
        .filter(inventory_supplier::Column::InventoryItemId.eq(item_id))
        .order_by_asc(inventory_supplier::Column::Id)
        .find_also_related(Supplier)
        .all(db)
        .await?;
    Ok(links.into_iter().filter_map(|(_, s)| s).collect())
}

/// Adds a priced product to a supplier.
///
/// # Errors
/// Returns an error if the supplier does not exist, the product name is blank, or
/// the price or minimum order quantity is negative or not finite.
pub async fn add_supplier_product<C>(
    db: &C,
    product: NewSupplierProduct,
) -> Result<supplier_product::Model>
where
    C: ConnectionTrait,
{
    let product_name = require_name("Product", &product.product_name)?;
    let price = require_non_negative(product.price)?;
    let min_order_quantity = require_non_negative(product.min_order_quantity)?;
    get_supplier(db, product.supplier_id)
        .await?
        .ok_or(Error::SupplierNotFound {
            id: product.supplier_id,
        })?;
    let now = Utc::now();

    supplier_product::ActiveModel {
        supplier_id: Set(product.supplier_id),
        product_name: Set(product_name),
        price: Set(price),
        unit: Set(product.unit.trim().to_string()),
        min_order_quantity: Set(min_order_quantity),
        available_days: Set(format_days(&product.available_days)),
        is_available: Set(product.is_available),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Applies a partial update to a supplier product.
pub async fn update_supplier_product<C>(
    db: &C,
    product_id: i64,
    changes: SupplierProductChanges,
) -> Result<supplier_product::Model>
where
    C: ConnectionTrait,
{
    let mut product: supplier_product::ActiveModel = SupplierProduct::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::SupplierProductNotFound { id: product_id })?
        .into();

    if let Some(name) = changes.product_name {
        product.product_name = Set(require_name("Product", &name)?);
    }
    if let Some(price) = changes.price {
        product.price = Set(require_non_negative(price)?);
    }
    if let Some(unit) = changes.unit {
        product.unit = Set(unit.trim().to_string());
    }
    if let Some(min_order_quantity) = changes.min_order_quantity {
        product.min_order_quantity = Set(require_non_negative(min_order_quantity)?);
    }
    if let Some(days) = changes.available_days {
        product.available_days = Set(format_days(&days));
    }
    if let Some(is_available) = changes.is_available {
        product.is_available = Set(is_available);
    }
    product.updated_at = Set(Utc::now());

    product.update(db).await.map_err(Into::into)
}

/// Deletes a supplier product.
pub async fn delete_supplier_product<C>(db: &C, product_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = SupplierProduct::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::SupplierProductNotFound { id: product_id });
    }
    Ok(())
}

/// All products of one supplier, available or not, ordered by product name.
pub async fn get_supplier_products<C>(
    db: &C,
    supplier_id: i64,
) -> Result<Vec<supplier_product::Model>>
where
    C: ConnectionTrait,
{
    SupplierProduct::find()
        .filter(supplier_product::Column::SupplierId.eq(supplier_id))
        .order_by_asc(supplier_product::Column::ProductName)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_add_item_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let blank = add_item(&db, new_item("  ", 1.0, 1.0)).await;
        assert!(matches!(blank, Err(Error::ValidationFailed { .. })));

        let negative = add_item(&db, new_item("Flour", -1.0, 1.0)).await;
        assert!(matches!(negative, Err(Error::InvalidAmount { .. })));

        let nan = add_item(&db, new_item("Flour", 1.0, f64::NAN)).await;
        assert!(matches!(nan, Err(Error::InvalidAmount { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_item_trims_and_starts_at_version_one() -> Result<()> {
        let db = setup_test_db().await?;
        let item = add_item(&db, new_item("  Tomatoes ", 15.0, 10.0)).await?;

        assert_eq!(item.name, "Tomatoes");
        assert_eq!(item.version, 1);
        assert_eq!(item.order_mode, OrderMode::Manual);
        assert!(!item.is_low());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_orders_suppliers_by_link_time() -> Result<()> {
        let db = setup_test_db().await?;
        let flour = create_test_item(&db, "Flour", 5.0, 20.0).await?;
        let eggs = create_test_item(&db, "Eggs", 24.0, 60.0).await?;
        let zed = create_test_supplier(&db, "Zed Mills").await?;
        let acme = create_test_supplier(&db, "Acme").await?;

        link_item_to_supplier(&db, flour.id, zed.id).await?;
        link_item_to_supplier(&db, flour.id, acme.id).await?;

        let items = list_items(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item.id, eggs.id);
        assert!(items[0].suppliers.is_empty());
        assert_eq!(items[1].item.id, flour.id);
        let names: Vec<_> = items[1].suppliers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zed Mills", "Acme"]);

        let direct = get_item_suppliers(&db, flour.id).await?;
        assert_eq!(direct, items[1].suppliers);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_link_rejected_and_unlink() -> Result<()> {
        let db = setup_test_db().await?;
        let flour = create_test_item(&db, "Flour", 5.0, 20.0).await?;
        let mill = create_test_supplier(&db, "Mill").await?;

        link_item_to_supplier(&db, flour.id, mill.id).await?;
        let again = link_item_to_supplier(&db, flour.id, mill.id).await;
        assert!(matches!(again, Err(Error::ValidationFailed { .. })));

        let missing = link_item_to_supplier(&db, 999, mill.id).await;
        assert!(matches!(missing, Err(Error::ItemNotFound { id: 999 })));

        assert!(unlink_item_from_supplier(&db, flour.id, mill.id).await?);
        assert!(!unlink_item_from_supplier(&db, flour.id, mill.id).await?);
        assert!(get_item_suppliers(&db, flour.id).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_bumps_version() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Olive oil", 40.0, 10.0).await?;

        let updated = update_item(
            &db,
            item.id,
            item.version,
            InventoryItemChanges {
                min_threshold: Some(50.0),
                order_mode: Some(OrderMode::SemiAuto),
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(updated.version, 2);
        assert_eq!(updated.min_threshold, 50.0);
        assert_eq!(updated.quantity, 40.0);
        assert_eq!(updated.order_mode, OrderMode::SemiAuto);
        assert!(updated.is_low());
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_update_is_a_version_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Olive oil", 40.0, 10.0).await?;

        // Two sessions read version 1; the first write wins.
        let first = InventoryItemChanges {
            quantity: Some(35.0),
            ..Default::default()
        };
        update_item(&db, item.id, 1, first).await?;

        let second = InventoryItemChanges {
            quantity: Some(30.0),
            ..Default::default()
        };
        let result = update_item(&db, item.id, 1, second).await;
        assert!(matches!(
            result,
            Err(Error::VersionConflict { expected: 1, .. })
        ));

        let current = get_item(&db, item.id).await?.unwrap();
        assert_eq!(current.quantity, 35.0);
        assert_eq!(current.version, 2);

        let missing = update_item(&db, 999, 1, InventoryItemChanges::default()).await;
        assert!(matches!(missing, Err(Error::ItemNotFound { id: 999 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_quantity() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Eggs", 24.0, 60.0).await?;

        let item = adjust_quantity(&db, item.id, item.version, 36.0).await?;
        assert_eq!(item.quantity, 60.0);
        assert!(!item.is_low());

        let too_much = adjust_quantity(&db, item.id, item.version, -61.0).await;
        assert!(matches!(too_much, Err(Error::InvalidAmount { .. })));

        let stale = adjust_quantity(&db, item.id, 1, -1.0).await;
        assert!(matches!(stale, Err(Error::VersionConflict { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_low_stock_listing() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_item(&db, "Tomatoes", 15.0, 10.0).await?;
        create_test_item(&db, "Flour", 5.0, 20.0).await?;
        create_test_item(&db, "Eggs", 24.0, 60.0).await?;
        create_test_item(&db, "Salt", 3.0, 3.0).await?;

        let low = list_low_stock_items(&db).await?;
        let names: Vec<_> = low.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Flour"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_removes_links() -> Result<()> {
        let db = setup_test_db().await?;
        let flour = create_test_item(&db, "Flour", 5.0, 20.0).await?;
        let mill = create_test_supplier(&db, "Mill").await?;
        link_item_to_supplier(&db, flour.id, mill.id).await?;

        delete_item(&db, flour.id).await?;
        assert!(get_item(&db, flour.id).await?.is_none());
        assert_eq!(InventorySupplier::find().count(&db).await?, 0);

        let again = delete_item(&db, flour.id).await;
        assert!(matches!(again, Err(Error::ItemNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_suppliers_with_products_hides_unavailable() -> Result<()> {
        let db = setup_test_db().await?;
        let market = create_test_supplier(&db, "Market").await?;
        let farm = create_test_supplier(&db, "Farm").await?;
        create_test_product(&db, market.id, "Tomatoes", 8.0).await?;
        create_test_product(&db, market.id, "Cucumbers", 6.0).await?;
        let eggs = create_test_product(&db, farm.id, "Eggs", 1.1).await?;

        update_supplier_product(
            &db,
            eggs.id,
            SupplierProductChanges {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await?;

        let directory = list_suppliers_with_products(&db).await?;
        assert_eq!(directory.len(), 2);
        assert_eq!(directory[0].supplier.name, "Farm");
        assert!(directory[0].products.is_empty());
        let names: Vec<_> = directory[1]
            .products
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Cucumbers", "Tomatoes"]);

        // The supplier's own product list still shows unavailable products.
        assert_eq!(get_supplier_products(&db, farm.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_supplier_product_days_and_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let farm = create_test_supplier(&db, "Farm").await?;

        let product = add_supplier_product(
            &db,
            NewSupplierProduct {
                supplier_id: farm.id,
                product_name: "Eggs".to_string(),
                price: 1.1,
                unit: "units".to_string(),
                min_order_quantity: 30.0,
                available_days: vec![Weekday::Sun, Weekday::Wed],
                is_available: true,
            },
        )
        .await?;
        assert_eq!(product.available_weekdays(), vec![Weekday::Sun, Weekday::Wed]);

        let negative = update_supplier_product(
            &db,
            product.id,
            SupplierProductChanges {
                price: Some(-2.0),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(negative, Err(Error::InvalidAmount { .. })));

        let orphan = add_supplier_product(
            &db,
            NewSupplierProduct {
                supplier_id: 999,
                product_name: "Milk".to_string(),
                price: 5.0,
                unit: "liter".to_string(),
                min_order_quantity: 0.0,
                available_days: vec![],
                is_available: true,
            },
        )
        .await;
        assert!(matches!(orphan, Err(Error::SupplierNotFound { id: 999 })));

        delete_supplier_product(&db, product.id).await?;
        let gone = delete_supplier_product(&db, product.id).await;
        assert!(matches!(gone, Err(Error::SupplierProductNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_supplier() -> Result<()> {
        let db = setup_test_db().await?;
        let market = create_test_supplier(&db, "Market").await?;
        create_test_product(&db, market.id, "Tomatoes", 8.0).await?;

        let updated = update_supplier(
            &db,
            market.id,
            "Central Market",
            SupplierContact {
                phone: Some("03-555-0101".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(updated.name, "Central Market");
        assert_eq!(updated.phone.as_deref(), Some("03-555-0101"));

        delete_supplier(&db, market.id).await?;
        assert!(get_supplier(&db, market.id).await?.is_none());
        assert!(get_supplier_products(&db, market.id).await?.is_empty());
        Ok(())
    }
}
