//! Purchase order business logic.
//!
//! Orders are created once per supplier with an initial set of lines, can take more
//! lines while their append window is open, and move forward through the status
//! machine defined on [`OrderStatus`]. `total_cost` is recomputed from the lines on
//! every change. Creation is idempotent on the caller's request token.

use crate::{
    core::catalog::{get_supplier, require_name},
    entities::{
        PurchaseOrder, PurchaseOrderItem,
        purchase_order::{self, OrderStatus},
        purchase_order_item,
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::OnConflict};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, instrument, warn};

/// One line to put on a purchase order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    /// Inventory item the line restocks, if any
    pub inventory_item_id: Option<i64>,
    /// Name printed on the order
    pub product_name: String,
    /// Ordered quantity in `unit`
    pub quantity: f64,
    /// Unit of measure
    pub unit: String,
    /// Price per unit
    pub price_per_unit: f64,
}

/// Input for [`create_order`].
#[derive(Debug, Clone)]
pub struct NewPurchaseOrder {
    /// Supplier the order goes to
    pub supplier_id: i64,
    /// Initial lines; at least one
    pub lines: Vec<NewOrderLine>,
    /// Creation timestamp recorded as the order date
    pub ordered_at: DateTime<Utc>,
    /// Last instant at which lines may be appended
    pub can_add_until: DateTime<Utc>,
    /// Idempotency key; re-submitting the same token returns the existing order
    pub request_token: String,
}

/// A purchase order with its lines in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderWithItems {
    /// The order row
    pub order: purchase_order::Model,
    /// Its lines
    pub items: Vec<purchase_order_item::Model>,
}

/// Sum of `quantity × price_per_unit` over the given lines.
#[must_use]
pub fn total_cost(items: &[purchase_order_item::Model]) -> f64 {
    items.iter().map(purchase_order_item::Model::line_total).sum()
}

fn validate_lines(lines: &[NewOrderLine]) -> Result<()> {
    if lines.is_empty() {
        return Err(Error::validation("A purchase order needs at least one line"));
    }
    for line in lines {
        require_name("Product", &line.product_name)?;
        for (field, value) in [("quantity", line.quantity), ("price", line.price_per_unit)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::validation(format!(
                    "Line '{}' has an invalid {field}: {value}",
                    line.product_name
                )));
            }
        }
    }
    Ok(())
}

async fn insert_lines<C>(
    db: &C,
    order_id: i64,
    lines: Vec<NewOrderLine>,
) -> Result<Vec<purchase_order_item::Model>>
where
    C: ConnectionTrait,
{
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = purchase_order_item::ActiveModel {
            purchase_order_id: Set(order_id),
            inventory_item_id: Set(line.inventory_item_id),
            product_name: Set(line.product_name.trim().to_string()),
            quantity: Set(line.quantity),
            unit: Set(line.unit),
            price_per_unit: Set(line.price_per_unit),
            ..Default::default()
        }
        .insert(db)
        .await?;
        items.push(item);
    }
    Ok(items)
}

async fn items_for_order<C>(db: &C, order_id: i64) -> Result<Vec<purchase_order_item::Model>>
where
    C: ConnectionTrait,
{
    PurchaseOrderItem::find()
        .filter(purchase_order_item::Column::PurchaseOrderId.eq(order_id))
        .order_by_asc(purchase_order_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The order already created for `request_token`, if any.
///
/// A token belongs to one supplier; finding it under another supplier is a
/// `ValidationFailed`.
async fn order_for_token<C>(
    db: &C,
    request_token: &str,
    supplier_id: i64,
) -> Result<Option<OrderWithItems>>
where
    C: ConnectionTrait,
{
    let Some(order) = PurchaseOrder::find()
        .filter(purchase_order::Column::RequestToken.eq(request_token))
        .one(db)
        .await?
    else {
        return Ok(None);
    };
    if order.supplier_id != supplier_id {
        return Err(Error::validation(format!(
            "Request token '{request_token}' was already used for supplier {}",
            order.supplier_id
        )));
    }
    let items = items_for_order(db, order.id).await?;
    Ok(Some(OrderWithItems { order, items }))
}

/// Creates a purchase order in state `pending` with the next sequential order number.
///
/// If an order with the same request token already exists it is returned unchanged,
/// so a double submit never creates a second order. The insert itself skips on a
/// token conflict, which also covers two submissions racing past the lookup.
///
/// # Errors
/// Returns an error if:
/// - The line list is empty, or a line has a blank name or a negative/non-finite
///   quantity or price (`ValidationFailed`)
/// - The request token is blank, or was already used for another supplier
/// - The supplier does not exist
/// - Any database operation fails (`StoreUnavailable`); nothing is committed then
#[instrument(skip(db, new_order), fields(supplier_id = new_order.supplier_id))]
pub async fn create_order(
    db: &DatabaseConnection,
    new_order: NewPurchaseOrder,
) -> Result<OrderWithItems> {
    validate_lines(&new_order.lines)?;
    if new_order.request_token.trim().is_empty() {
        return Err(Error::validation("A request token is required"));
    }
    let NewPurchaseOrder {
        supplier_id,
        lines,
        ordered_at,
        can_add_until,
        request_token,
    } = new_order;

    let txn = db.begin().await?;

    if let Some(existing) = order_for_token(&txn, &request_token, supplier_id).await? {
        info!(
            order_number = existing.order.order_number,
            "Duplicate submission, returning existing order"
        );
        return Ok(existing);
    }

    get_supplier(&txn, supplier_id)
        .await?
        .ok_or(Error::SupplierNotFound { id: supplier_id })?;

    let order_number = PurchaseOrder::find()
        .order_by_desc(purchase_order::Column::OrderNumber)
        .one(&txn)
        .await?
        .map_or(1, |last| last.order_number + 1);

    let total: f64 = lines
        .iter()
        .map(|line| line.quantity * line.price_per_unit)
        .sum();

    let inserted = PurchaseOrder::insert(purchase_order::ActiveModel {
        order_number: Set(order_number),
        supplier_id: Set(supplier_id),
        order_date: Set(ordered_at),
        can_add_until: Set(can_add_until),
        status: Set(OrderStatus::Pending),
        total_cost: Set(total),
        request_token: Set(request_token.clone()),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(purchase_order::Column::RequestToken)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(&txn)
    .await?;

    if inserted == 0 {
        // Another submission with this token committed after the lookup above.
        let existing = order_for_token(&txn, &request_token, supplier_id)
            .await?
            .ok_or_else(|| Error::validation(format!("Request token '{request_token}' conflicted")))?;
        info!(
            order_number = existing.order.order_number,
            "Concurrent duplicate submission, returning existing order"
        );
        return Ok(existing);
    }

    let order = PurchaseOrder::find()
        .filter(purchase_order::Column::RequestToken.eq(request_token.as_str()))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::validation(format!("Order for token '{request_token}' vanished")))?;
    let items = insert_lines(&txn, order.id, lines).await?;
    txn.commit().await?;

    info!(order_number, lines = items.len(), total, "Purchase order created");
    Ok(OrderWithItems { order, items })
}

/// All purchase orders with their lines, newest first.
pub async fn list_orders<C>(db: &C) -> Result<Vec<OrderWithItems>>
where
    C: ConnectionTrait,
{
    let orders = PurchaseOrder::find()
        .order_by_desc(purchase_order::Column::OrderDate)
        .order_by_desc(purchase_order::Column::Id)
        .all(db)
        .await?;
    let mut items: HashMap<i64, Vec<purchase_order_item::Model>> = HashMap::new();
    for item in PurchaseOrderItem::find()
        .order_by_asc(purchase_order_item::Column::Id)
        .all(db)
        .await?
    {
        items.entry(item.purchase_order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = items.remove(&order.id).unwrap_or_default();
            OrderWithItems { order, items }
        })
        .collect())
}

/// One purchase order with its lines.
pub async fn get_order<C>(db: &C, order_id: i64) -> Result<Option<OrderWithItems>>
where
    C: ConnectionTrait,
{
    let Some(order) = PurchaseOrder::find_by_id(order_id).one(db).await? else {
        return Ok(None);
    };
    let items = items_for_order(db, order.id).await?;
    Ok(Some(OrderWithItems { order, items }))
}

/// Moves an order to `status` if that is an edge of the order state machine.
///
/// # Errors
/// Returns `InvalidTransition` (order unchanged) for any other move, including
/// every move out of `received` or `cancelled`, and `OrderNotFound` for unknown ids.
#[instrument(skip(db))]
pub async fn set_status<C>(db: &C, order_id: i64, status: OrderStatus) -> Result<purchase_order::Model>
where
    C: ConnectionTrait,
{
    let order = PurchaseOrder::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if !order.status.can_transition_to(status) {
        warn!(from = %order.status, to = %status, "Rejected order status change");
        return Err(Error::InvalidTransition {
            from: order.status,
            to: status,
        });
    }

    // Compare-and-set on the status that was checked, so a concurrent change wins
    // cleanly instead of being overwritten.
    let result = PurchaseOrder::update_many()
        .set(purchase_order::ActiveModel {
            status: Set(status),
            ..Default::default()
        })
        .filter(purchase_order::Column::Id.eq(order_id))
        .filter(purchase_order::Column::Status.eq(order.status))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        let current = PurchaseOrder::find_by_id(order_id)
            .one(db)
            .await?
            .ok_or(Error::OrderNotFound { id: order_id })?;
        warn!(
            expected = %order.status,
            current = %current.status,
            to = %status,
            "Order status changed concurrently, rejecting"
        );
        return Err(Error::InvalidTransition {
            from: current.status,
            to: status,
        });
    }

    let order = PurchaseOrder::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    info!(order_number = order.order_number, status = %status, "Order status changed");
    Ok(order)
}

/// Appends lines to an order and recomputes its total.
///
/// Allowed only while the order is `pending` or `confirmed` and `now` is not past
/// `can_add_until`.
///
/// # Errors
/// Returns `AppendWindowClosed` outside that window, `ValidationFailed` for bad
/// lines and `OrderNotFound` for unknown ids.
#[instrument(skip(db, lines))]
pub async fn append_items(
    db: &DatabaseConnection,
    order_id: i64,
    lines: Vec<NewOrderLine>,
    now: DateTime<Utc>,
) -> Result<OrderWithItems> {
    validate_lines(&lines)?;
    let txn = db.begin().await?;

    let order = PurchaseOrder::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    if !order.accepts_items_at(now) {
        return Err(Error::AppendWindowClosed {
            order_number: order.order_number,
        });
    }

    insert_lines(&txn, order.id, lines).await?;
    let items = items_for_order(&txn, order.id).await?;

    // The total is only written while the order is still open; if it was received
    // or cancelled meanwhile, the transaction rolls back with the new lines.
    let result = PurchaseOrder::update_many()
        .set(purchase_order::ActiveModel {
            total_cost: Set(total_cost(&items)),
            ..Default::default()
        })
        .filter(purchase_order::Column::Id.eq(order.id))
        .filter(purchase_order::Column::Status.is_in([OrderStatus::Pending, OrderStatus::Confirmed]))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        warn!(order_number = order.order_number, "Order closed while appending, rolling back");
        return Err(Error::AppendWindowClosed {
            order_number: order.order_number,
        });
    }

    let order = PurchaseOrder::find_by_id(order.id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    txn.commit().await?;

    info!(
        order_number = order.order_number,
        total = order.total_cost,
        "Lines appended to order"
    );
    Ok(OrderWithItems { order, items })
}

/// Deletes an order with its lines.
#[instrument(skip(db))]
pub async fn delete_order(db: &DatabaseConnection, order_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    PurchaseOrderItem::delete_many()
        .filter(purchase_order_item::Column::PurchaseOrderId.eq(order_id))
        .exec(&txn)
        .await?;
    let result = PurchaseOrder::delete_by_id(order_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(Error::OrderNotFound { id: order_id });
    }

    txn.commit().await?;
    info!(order_id, "Purchase order deleted");
    Ok(())
}
