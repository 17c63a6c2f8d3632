//! Reorder engine - turns "reorder this item" choices into per-supplier order drafts.
//!
//! The engine is pure computation: it never talks to a store. Callers load the
//! catalog, hand it the user's [`OrderSelection`], and persist the resulting
//! [`ReorderPlan`] one supplier group at a time.
//!
//! Quantities follow a fixed policy table driven by the item's minimum threshold
//! (see [`ReorderEngine::suggested_quantity`]). The multipliers stand in for demand
//! forecasting and live in [`ReorderPolicy`] rather than in code.

use crate::{
    config::ReorderPolicy,
    core::{
        catalog::{ItemWithSuppliers, SupplierWithProducts},
        matching::{ProductMatcher, SubstringMatcher},
        orders::NewOrderLine,
        selection::{OrderSelection, ReorderAction},
        supplier_policy::{Candidate, FirstLinkedSupplier, SupplierSelectionPolicy},
    },
    entities::{inventory_item, supplier_product},
    errors::{Error, Result},
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// `at` plus `days`, saturating at the latest representable instant.
fn add_days(at: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Where a draft line's price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceSource {
    /// Taken from a matching product of the chosen supplier
    Matched {
        /// The supplier product the price was read from
        supplier_product_id: i64,
    },
    /// No product matched; the configured default price was used and must be
    /// confirmed before the order is trusted
    Unresolved,
}

/// An unsaved purchase order line produced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftLine {
    /// Item being reordered
    pub inventory_item_id: i64,
    /// Item name, copied onto the order line
    pub product_name: String,
    /// Suggested quantity for the chosen action
    pub quantity: f64,
    /// Item unit
    pub unit: String,
    /// Supplier price, or the default price when unresolved
    pub price_per_unit: f64,
    /// The action chosen for the item
    pub action: ReorderAction,
    /// Where `price_per_unit` came from
    pub price_source: PriceSource,
}

impl DraftLine {
    /// True when the price is the configured default rather than a supplier price.
    #[must_use]
    pub const fn needs_price_confirmation(&self) -> bool {
        matches!(self.price_source, PriceSource::Unresolved)
    }

    /// `quantity × price_per_unit`
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price_per_unit
    }
}

impl From<&DraftLine> for NewOrderLine {
    fn from(line: &DraftLine) -> Self {
        Self {
            inventory_item_id: Some(line.inventory_item_id),
            product_name: line.product_name.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            price_per_unit: line.price_per_unit,
        }
    }
}

/// Draft lines for one supplier; becomes exactly one purchase order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierDraft {
    /// Supplier the order goes to
    pub supplier_id: i64,
    /// Supplier name, for reporting
    pub supplier_name: String,
    /// Lines in selection order
    pub lines: Vec<DraftLine>,
}

impl SupplierDraft {
    /// Sum of the line totals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(DraftLine::line_total).sum()
    }
}

/// Why a selected item produced no draft line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The item has no linked supplier
    NoSupplierLinked,
    /// The supplier selection policy chose none of the linked suppliers
    PolicyDeclined,
    /// The selection names an item id missing from the catalog
    NotInCatalog,
}

/// A selected item left out of every group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    /// Id from the selection
    pub item_id: i64,
    /// Catalog name; `None` when the item is not in the catalog
    pub item_name: Option<String>,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Result of grouping a selection: supplier groups in order of first appearance,
/// plus the items that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReorderPlan {
    /// One draft per supplier
    pub groups: Vec<SupplierDraft>,
    /// Items that produced no line
    pub skipped: Vec<SkippedItem>,
}

impl ReorderPlan {
    /// The group for one supplier, if any line went to it.
    #[must_use]
    pub fn group_for(&self, supplier_id: i64) -> Option<&SupplierDraft> {
        self.groups.iter().find(|g| g.supplier_id == supplier_id)
    }

    /// Lines priced with the default price, across all groups.
    pub fn unresolved_prices(&self) -> impl Iterator<Item = &DraftLine> {
        self.groups
            .iter()
            .flat_map(|g| g.lines.iter())
            .filter(|line| line.needs_price_confirmation())
    }

    /// Number of lines across all groups.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }
}

/// Computes low-stock status, suggested quantities and per-supplier drafts.
pub struct ReorderEngine {
    policy: ReorderPolicy,
    supplier_policy: Box<dyn SupplierSelectionPolicy>,
    matcher: Box<dyn ProductMatcher>,
}

impl ReorderEngine {
    /// Engine with the given policy, first-linked supplier selection and substring
    /// product matching.
    #[must_use]
    pub fn new(policy: ReorderPolicy) -> Self {
        Self {
            policy,
            supplier_policy: Box::new(FirstLinkedSupplier),
            matcher: Box::new(SubstringMatcher),
        }
    }

    /// Replaces the supplier selection policy.
    #[must_use]
    pub fn with_supplier_policy(mut self, policy: impl SupplierSelectionPolicy + 'static) -> Self {
        self.supplier_policy = Box::new(policy);
        self
    }

    /// Replaces the product matcher.
    #[must_use]
    pub fn with_matcher(mut self, matcher: impl ProductMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// The policy constants in use.
    #[must_use]
    pub const fn policy(&self) -> &ReorderPolicy {
        &self.policy
    }

    /// `quantity < min_threshold`.
    #[must_use]
    pub fn is_low_stock(item: &inventory_item::Model) -> bool {
        item.is_low()
    }

    /// Suggested reorder quantity for `action`:
    ///
    /// | action | quantity |
    /// |---|---|
    /// | `immediate` | `max(0, min_threshold - quantity)` |
    /// | `by-quantity` | `min_threshold × by_quantity_multiplier` |
    /// | `by-supplier-dates` | `min_threshold × supplier_dates_multiplier` |
    /// | `next-week` | `min_threshold × next_week_multiplier` |
    /// | `next-month` | `min_threshold × next_month_multiplier` |
    ///
    /// A zero threshold gives zero for every horizon action.
    #[must_use]
    pub fn suggested_quantity(&self, item: &inventory_item::Model, action: ReorderAction) -> f64 {
        let threshold = item.min_threshold;
        match action {
            ReorderAction::Immediate => (threshold - item.quantity).max(0.0),
            ReorderAction::ByQuantity => threshold * self.policy.by_quantity_multiplier,
            ReorderAction::BySupplierDates => threshold * self.policy.supplier_dates_multiplier,
            ReorderAction::NextWeek => threshold * self.policy.next_week_multiplier,
            ReorderAction::NextMonth => threshold * self.policy.next_month_multiplier,
        }
    }

    /// Groups the chosen entries of `selection` into per-supplier drafts.
    ///
    /// Entries are processed in selection order. Items without a linked supplier,
    /// or missing from `items`, are reported in [`ReorderPlan::skipped`] and the rest
    /// of the batch carries on. Each placed item appears in exactly one group.
    #[must_use]
    pub fn group_selections_by_supplier(
        &self,
        items: &[ItemWithSuppliers],
        suppliers: &[SupplierWithProducts],
        selection: &OrderSelection,
    ) -> ReorderPlan {
        let catalog: HashMap<i64, &ItemWithSuppliers> =
            items.iter().map(|entry| (entry.item.id, entry)).collect();
        let products: HashMap<i64, &[supplier_product::Model]> = suppliers
            .iter()
            .map(|entry| (entry.supplier.id, entry.products.as_slice()))
            .collect();

        let mut plan = ReorderPlan::default();
        for (item_id, action) in selection.chosen() {
            let Some(entry) = catalog.get(&item_id) else {
                warn!(item_id, "Selected item is not in the catalog, skipping");
                plan.skipped.push(SkippedItem {
                    item_id,
                    item_name: None,
                    reason: SkipReason::NotInCatalog,
                });
                continue;
            };
            let item = &entry.item;
            if entry.suppliers.is_empty() {
                warn!(item_id, item = %item.name, "No supplier linked, skipping");
                plan.skipped.push(SkippedItem {
                    item_id,
                    item_name: Some(item.name.clone()),
                    reason: SkipReason::NoSupplierLinked,
                });
                continue;
            }

            let candidates: Vec<Candidate<'_>> = entry
                .suppliers
                .iter()
                .map(|supplier| Candidate {
                    supplier,
                    offer: products
                        .get(&supplier.id)
                        .and_then(|offers| self.matcher.find(&item.name, offers)),
                })
                .collect();

            let Some(chosen) = self
                .supplier_policy
                .choose(item, &candidates)
                .and_then(|index| candidates.get(index))
            else {
                warn!(
                    item_id,
                    item = %item.name,
                    candidates = candidates.len(),
                    "Supplier policy chose no candidate, skipping"
                );
                plan.skipped.push(SkippedItem {
                    item_id,
                    item_name: Some(item.name.clone()),
                    reason: SkipReason::PolicyDeclined,
                });
                continue;
            };

            let (price_per_unit, price_source) = match chosen.offer {
                Some(offer) => (
                    offer.price,
                    PriceSource::Matched {
                        supplier_product_id: offer.id,
                    },
                ),
                None => {
                    warn!(
                        item_id,
                        supplier_id = chosen.supplier.id,
                        "No matching supplier product, using default price"
                    );
                    (self.policy.default_price_per_unit, PriceSource::Unresolved)
                }
            };

            let line = DraftLine {
                inventory_item_id: item.id,
                product_name: item.name.clone(),
                quantity: self.suggested_quantity(item, action),
                unit: item.unit.clone(),
                price_per_unit,
                action,
                price_source,
            };

            match plan
                .groups
                .iter_mut()
                .find(|g| g.supplier_id == chosen.supplier.id)
            {
                Some(group) => group.lines.push(line),
                None => plan.groups.push(SupplierDraft {
                    supplier_id: chosen.supplier.id,
                    supplier_name: chosen.supplier.name.clone(),
                    lines: vec![line],
                }),
            }
        }

        debug!(
            groups = plan.groups.len(),
            lines = plan.line_count(),
            skipped = plan.skipped.len(),
            "Built reorder plan"
        );
        plan
    }

    /// Projected arrival of an order created at `order_created_at`.
    #[must_use]
    pub fn project_arrival(&self, order_created_at: DateTime<Utc>) -> DateTime<Utc> {
        add_days(order_created_at, self.policy.arrival_days)
    }

    /// Last instant at which items may be appended to an order created at
    /// `order_created_at`.
    #[must_use]
    pub fn append_deadline(&self, order_created_at: DateTime<Utc>) -> DateTime<Utc> {
        add_days(order_created_at, self.policy.add_window_days)
    }

    /// Whole days until `arrival`, rounded up; 0 once the arrival is not in the future.
    #[must_use]
    pub fn days_until_arrival(arrival: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        let remaining = (arrival - now).num_milliseconds();
        if remaining <= 0 {
            return 0;
        }
        (remaining + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }

    /// Rejects a selection in which no item has an action chosen.
    ///
    /// # Errors
    /// Returns `Error::EmptySelection`.
    pub fn validate_before_submit(selection: &OrderSelection) -> Result<()> {
        if selection.has_no_choice() {
            return Err(Error::EmptySelection);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::matching::ExactNameMatcher;
    use crate::core::supplier_policy::CheapestSupplier;
    use crate::test_utils::{directory_entry, item, offer, supplier, with_suppliers};
    use chrono::TimeZone;

    fn engine() -> ReorderEngine {
        ReorderEngine::new(ReorderPolicy::with_default_price(10.0))
    }

    #[test]
    fn test_is_low_stock_matches_definition() {
        let cases = [(5.0, 20.0), (15.0, 10.0), (10.0, 10.0), (0.0, 0.0), (0.0, 0.5)];
        for (quantity, threshold) in cases {
            let it = item(1, "x", quantity, threshold);
            assert_eq!(ReorderEngine::is_low_stock(&it), quantity < threshold);
        }
    }

    #[test]
    fn test_by_quantity_doubles_threshold() {
        let flour = item(2, "Flour", 5.0, 20.0);
        assert_eq!(engine().suggested_quantity(&flour, ReorderAction::ByQuantity), 40.0);
    }

    #[test]
    fn test_immediate_above_threshold_is_zero() {
        let tomatoes = item(1, "Tomatoes", 15.0, 10.0);
        assert_eq!(engine().suggested_quantity(&tomatoes, ReorderAction::Immediate), 0.0);
        assert!(!ReorderEngine::is_low_stock(&tomatoes));
    }

    #[test]
    fn test_immediate_covers_exact_deficit() {
        let eggs = item(4, "Eggs", 24.0, 60.0);
        assert_eq!(engine().suggested_quantity(&eggs, ReorderAction::Immediate), 36.0);

        let plenty = item(5, "Oil", 1000.0, 10.0);
        assert_eq!(engine().suggested_quantity(&plenty, ReorderAction::Immediate), 0.0);
    }

    #[test]
    fn test_horizon_quantities_are_ordered() {
        let engine = engine();
        for (quantity, threshold) in [(0.0, 1.0), (5.0, 20.0), (100.0, 20.0), (3.0, 3.5)] {
            let it = item(1, "x", quantity, threshold);
            let q = |action| engine.suggested_quantity(&it, action);

            assert_eq!(q(ReorderAction::NextMonth), 4.0 * threshold);
            assert!(q(ReorderAction::NextMonth) >= q(ReorderAction::ByQuantity));
            assert!(q(ReorderAction::ByQuantity) >= q(ReorderAction::NextWeek));
            assert!(q(ReorderAction::NextWeek) >= q(ReorderAction::Immediate));
            assert_eq!(q(ReorderAction::NextWeek), q(ReorderAction::BySupplierDates));
        }
    }

    #[test]
    fn test_zero_threshold_gives_zero() {
        let engine = engine();
        let it = item(1, "Napkins", 7.0, 0.0);
        for action in ReorderAction::ALL {
            assert_eq!(engine.suggested_quantity(&it, action), 0.0);
        }
    }

    #[test]
    fn test_custom_multipliers_are_used() {
        let mut policy = ReorderPolicy::with_default_price(10.0);
        policy.next_month_multiplier = 6.0;
        let engine = ReorderEngine::new(policy);
        let it = item(1, "Rice", 0.0, 10.0);
        assert_eq!(engine.suggested_quantity(&it, ReorderAction::NextMonth), 60.0);
    }

    #[test]
    fn test_grouping_by_supplier_keeps_selection_order() {
        let s1 = supplier(1, "S1");
        let s2 = supplier(2, "S2");
        let items = vec![
            with_suppliers(item(10, "Flour", 5.0, 20.0), vec![s1.clone()]),
            with_suppliers(item(11, "Eggs", 24.0, 60.0), vec![s2.clone()]),
            with_suppliers(item(12, "Sugar", 1.0, 5.0), vec![s1.clone(), s2.clone()]),
        ];
        let directory = vec![
            directory_entry(s1, vec![offer(100, 1, "Flour", 3.0), offer(101, 1, "Sugar", 4.0)]),
            directory_entry(s2, vec![offer(200, 2, "Eggs", 1.2)]),
        ];

        let mut selection = OrderSelection::new();
        selection.choose(12, ReorderAction::Immediate);
        selection.choose(11, ReorderAction::NextWeek);
        selection.choose(10, ReorderAction::ByQuantity);

        let plan = engine().group_selections_by_supplier(&items, &directory, &selection);

        assert_eq!(plan.groups.len(), 2);
        assert!(plan.skipped.is_empty());

        let first = &plan.groups[0];
        assert_eq!(first.supplier_id, 1);
        let ids: Vec<_> = first.lines.iter().map(|l| l.inventory_item_id).collect();
        assert_eq!(ids, vec![12, 10]);
        assert_eq!(first.lines[0].quantity, 4.0);
        assert_eq!(first.lines[0].price_per_unit, 4.0);
        assert_eq!(first.lines[1].quantity, 40.0);
        assert_eq!(first.total(), 4.0 * 4.0 + 40.0 * 3.0);

        let second = plan.group_for(2).unwrap();
        assert_eq!(second.lines.len(), 1);
        assert_eq!(second.lines[0].quantity, 90.0);
        assert_eq!(second.lines[0].unit, "kg");
        assert_eq!(
            second.lines[0].price_source,
            PriceSource::Matched {
                supplier_product_id: 200
            }
        );
    }

    #[test]
    fn test_grouping_partitions_selection_exactly() {
        let s1 = supplier(1, "S1");
        let items = vec![
            with_suppliers(item(1, "A", 0.0, 1.0), vec![s1.clone()]),
            with_suppliers(item(2, "B", 0.0, 1.0), vec![]),
            with_suppliers(item(3, "C", 0.0, 1.0), vec![s1.clone()]),
            with_suppliers(item(4, "D", 0.0, 1.0), vec![s1.clone()]),
        ];
        let selection =
            OrderSelection::from_raw([(1, "immediate"), (2, "next-week"), (3, ""), (4, "next-month"), (9, "immediate")])
                .unwrap();

        let plan = engine().group_selections_by_supplier(&items, &[], &selection);

        let placed: Vec<_> = plan
            .groups
            .iter()
            .flat_map(|g| g.lines.iter().map(|l| l.inventory_item_id))
            .collect();
        assert_eq!(placed, vec![1, 4]);
        assert_eq!(
            plan.skipped,
            vec![
                SkippedItem {
                    item_id: 2,
                    item_name: Some("B".to_string()),
                    reason: SkipReason::NoSupplierLinked,
                },
                SkippedItem {
                    item_id: 9,
                    item_name: None,
                    reason: SkipReason::NotInCatalog,
                },
            ]
        );
    }

    struct FixedChoice(Option<usize>);

    impl SupplierSelectionPolicy for FixedChoice {
        fn choose(&self, _item: &inventory_item::Model, _candidates: &[Candidate<'_>]) -> Option<usize> {
            self.0
        }
    }

    #[test]
    fn test_declining_policy_is_not_reported_as_unlinked() {
        let s1 = supplier(1, "S1");
        let items = vec![
            with_suppliers(item(1, "A", 0.0, 1.0), vec![s1.clone()]),
            with_suppliers(item(2, "B", 0.0, 1.0), vec![]),
        ];
        let mut selection = OrderSelection::new();
        selection.choose(1, ReorderAction::Immediate);
        selection.choose(2, ReorderAction::Immediate);

        for choice in [None, Some(5)] {
            let plan = engine()
                .with_supplier_policy(FixedChoice(choice))
                .group_selections_by_supplier(&items, &[], &selection);
            assert!(plan.groups.is_empty());
            let reasons: Vec<_> = plan.skipped.iter().map(|s| (s.item_id, s.reason)).collect();
            assert_eq!(
                reasons,
                vec![(1, SkipReason::PolicyDeclined), (2, SkipReason::NoSupplierLinked)]
            );
        }
    }

    #[test]
    fn test_unmatched_product_uses_default_price_and_is_flagged() {
        let s1 = supplier(1, "S1");
        let items = vec![with_suppliers(item(1, "Saffron", 0.0, 2.0), vec![s1.clone()])];
        let directory = vec![directory_entry(s1, vec![offer(100, 1, "Flour", 3.0)])];
        let mut selection = OrderSelection::new();
        selection.choose(1, ReorderAction::Immediate);

        let plan = engine().group_selections_by_supplier(&items, &directory, &selection);

        let line = &plan.groups[0].lines[0];
        assert_eq!(line.price_per_unit, 10.0);
        assert!(line.needs_price_confirmation());
        assert_eq!(plan.unresolved_prices().count(), 1);
    }

    #[test]
    fn test_supplier_policy_and_matcher_are_swappable() {
        let s1 = supplier(1, "Dear");
        let s2 = supplier(2, "Cheap");
        let items = vec![with_suppliers(item(1, "Olive oil", 2.0, 10.0), vec![s1.clone(), s2.clone()])];
        let directory = vec![
            directory_entry(s1, vec![offer(100, 1, "Olive oil", 40.0)]),
            directory_entry(s2, vec![offer(200, 2, "Olive oil extra virgin", 30.0)]),
        ];
        let mut selection = OrderSelection::new();
        selection.choose(1, ReorderAction::ByQuantity);

        let cheapest = engine().with_supplier_policy(CheapestSupplier);
        let plan = cheapest.group_selections_by_supplier(&items, &directory, &selection);
        assert_eq!(plan.groups[0].supplier_id, 2);
        assert_eq!(plan.groups[0].lines[0].price_per_unit, 30.0);

        // Exact matching no longer sees the cheaper product, so the first supplier wins.
        let exact = engine()
            .with_supplier_policy(CheapestSupplier)
            .with_matcher(ExactNameMatcher);
        let plan = exact.group_selections_by_supplier(&items, &directory, &selection);
        assert_eq!(plan.groups[0].supplier_id, 1);
    }

    #[test]
    fn test_draft_line_converts_to_order_line() {
        let line = DraftLine {
            inventory_item_id: 7,
            product_name: "Flour".to_string(),
            quantity: 40.0,
            unit: "kg".to_string(),
            price_per_unit: 3.0,
            action: ReorderAction::ByQuantity,
            price_source: PriceSource::Unresolved,
        };
        let order_line = NewOrderLine::from(&line);
        assert_eq!(order_line.inventory_item_id, Some(7));
        assert_eq!(order_line.quantity, 40.0);
        assert_eq!(order_line.price_per_unit, 3.0);
    }

    #[test]
    fn test_arrival_projection_and_countdown() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let arrival = engine().project_arrival(created);
        assert_eq!(arrival, created + Duration::days(3));

        assert_eq!(ReorderEngine::days_until_arrival(arrival, created), 3);
        assert_eq!(
            ReorderEngine::days_until_arrival(arrival, created + Duration::hours(30)),
            2
        );
        assert_eq!(
            ReorderEngine::days_until_arrival(arrival, arrival - Duration::minutes(1)),
            1
        );
        assert_eq!(ReorderEngine::days_until_arrival(arrival, arrival), 0);
        assert_eq!(
            ReorderEngine::days_until_arrival(arrival, arrival + Duration::days(5)),
            0
        );
    }

    #[test]
    fn test_append_deadline_is_a_week() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(engine().append_deadline(created), created + Duration::days(7));
    }

    #[test]
    fn test_oversized_windows_saturate() {
        let mut policy = ReorderPolicy::with_default_price(10.0);
        policy.arrival_days = i64::MAX;
        policy.add_window_days = 3_000_000_000;
        let engine = ReorderEngine::new(policy);
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(engine.project_arrival(created), DateTime::<Utc>::MAX_UTC);
        assert_eq!(engine.append_deadline(created), DateTime::<Utc>::MAX_UTC);
        assert!(ReorderEngine::days_until_arrival(engine.project_arrival(created), created) > 0);
    }

    #[test]
    fn test_validate_before_submit() {
        assert!(matches!(
            ReorderEngine::validate_before_submit(&OrderSelection::new()),
            Err(Error::EmptySelection)
        ));

        let blank = OrderSelection::from_raw([(1, "")]).unwrap();
        assert!(matches!(
            ReorderEngine::validate_before_submit(&blank),
            Err(Error::EmptySelection)
        ));

        let chosen = OrderSelection::from_raw([(1, ""), (2, "immediate")]).unwrap();
        assert!(ReorderEngine::validate_before_submit(&chosen).is_ok());
    }
}
