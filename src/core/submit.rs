//! Submission workflow: selection → plan → one purchase order per supplier.

use crate::{
    core::{
        catalog::{ItemWithSuppliers, SupplierWithProducts},
        engine::{DraftLine, ReorderEngine, SkippedItem},
        orders::{NewOrderLine, NewPurchaseOrder, OrderWithItems},
        selection::OrderSelection,
        store::OrderStore,
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

/// What happened to one supplier group.
#[derive(Debug)]
pub enum GroupOutcome {
    /// The purchase order was created (or already existed for the token)
    Created {
        /// Supplier of the group
        supplier_id: i64,
        /// The stored order with its lines
        order: OrderWithItems,
        /// Items covered by the order
        item_ids: Vec<i64>,
    },
    /// Creating the order failed; its items stay in the selection
    Failed {
        /// Supplier of the group
        supplier_id: i64,
        /// Supplier name, for reporting
        supplier_name: String,
        /// Items that were not ordered
        item_ids: Vec<i64>,
        /// Why creation failed
        error: Error,
    },
}

impl GroupOutcome {
    #[must_use]
    pub const fn supplier_id(&self) -> i64 {
        match self {
            Self::Created { supplier_id, .. } | Self::Failed { supplier_id, .. } => *supplier_id,
        }
    }

    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Per-supplier results of a submission.
#[derive(Debug, Default)]
pub struct SubmissionReport {
    /// One entry per supplier group, in plan order
    pub outcomes: Vec<GroupOutcome>,
    /// Selected items that produced no line
    pub skipped: Vec<SkippedItem>,
    /// Lines that went out at the default price
    pub unresolved_prices: Vec<DraftLine>,
}

impl SubmissionReport {
    pub fn created_orders(&self) -> impl Iterator<Item = &OrderWithItems> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            GroupOutcome::Created { order, .. } => Some(order),
            GroupOutcome::Failed { .. } => None,
        })
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_created()).count()
    }

    #[must_use]
    pub fn all_created(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Turns the chosen entries of `selection` into purchase orders, one per supplier.
///
/// Each supplier's order is created independently with the request token
/// `"{request_token}:{supplier_id}"`, so re-submitting after a partial failure
/// returns the already-created orders instead of duplicating them. Entries whose
/// order was created are removed from `selection`; skipped and failed entries stay.
///
/// # Errors
/// Returns `EmptySelection` (before any store call) when nothing is chosen, and
/// `ValidationFailed` for a blank request token. Store failures are reported per
/// group in the returned [`SubmissionReport`].
#[instrument(skip(store, engine, items, suppliers, selection))]
pub async fn submit_selection<S>(
    store: &S,
    engine: &ReorderEngine,
    items: &[ItemWithSuppliers],
    suppliers: &[SupplierWithProducts],
    selection: &mut OrderSelection,
    request_token: &str,
    now: DateTime<Utc>,
) -> Result<SubmissionReport>
where
    S: OrderStore + ?Sized,
{
    ReorderEngine::validate_before_submit(selection)?;
    if request_token.trim().is_empty() {
        return Err(Error::validation("A request token is required"));
    }

    let plan = engine.group_selections_by_supplier(items, suppliers, selection);
    let can_add_until = engine.append_deadline(now);
    let mut report = SubmissionReport {
        unresolved_prices: plan.unresolved_prices().cloned().collect(),
        skipped: plan.skipped,
        outcomes: Vec::with_capacity(plan.groups.len()),
    };

    for group in plan.groups {
        let item_ids: Vec<i64> = group.lines.iter().map(|l| l.inventory_item_id).collect();
        let new_order = NewPurchaseOrder {
            supplier_id: group.supplier_id,
            lines: group.lines.iter().map(NewOrderLine::from).collect(),
            ordered_at: now,
            can_add_until,
            request_token: format!("{request_token}:{}", group.supplier_id),
        };

        match store.create_order(new_order).await {
            Ok(order) => {
                info!(
                    supplier = %group.supplier_name,
                    order_number = order.order.order_number,
                    lines = order.items.len(),
                    "Purchase order created"
                );
                for id in &item_ids {
                    selection.remove(*id);
                }
                report.outcomes.push(GroupOutcome::Created {
                    supplier_id: group.supplier_id,
                    order,
                    item_ids,
                });
            }
            Err(e) => {
                error!(supplier = %group.supplier_name, "Failed to create purchase order: {}", e);
                report.outcomes.push(GroupOutcome::Failed {
                    supplier_id: group.supplier_id,
                    supplier_name: group.supplier_name,
                    item_ids,
                    error: e,
                });
            }
        }
    }

    Ok(report)
}
