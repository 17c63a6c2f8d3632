//! Supplier selection - picks which linked supplier fulfils a reordered item.
//!
//! The historical behaviour is to take the first linked supplier without comparing
//! prices or delivery days. That rule is [`FirstLinkedSupplier`] and stays the
//! default, but it is one policy among several.

use crate::entities::{inventory_item, supplier, supplier_product};
use chrono::Weekday;

/// A supplier linked to the item being reordered, with the product offer the
/// [`ProductMatcher`](super::matching::ProductMatcher) found for it, if any.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The linked supplier
    pub supplier: &'a supplier::Model,
    /// Its product matching the item, if one was found
    pub offer: Option<&'a supplier_product::Model>,
}

/// Strategy choosing the fulfilling supplier among an item's candidates.
pub trait SupplierSelectionPolicy: Send + Sync {
    /// Index into `candidates` of the chosen supplier. Candidates are in link order.
    /// `None` or an out-of-range index declines the item, which is then skipped.
    fn choose(&self, item: &inventory_item::Model, candidates: &[Candidate<'_>]) -> Option<usize>;
}

/// Always the first linked supplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLinkedSupplier;

impl SupplierSelectionPolicy for FirstLinkedSupplier {
    fn choose(&self, _item: &inventory_item::Model, candidates: &[Candidate<'_>]) -> Option<usize> {
        (!candidates.is_empty()).then_some(0)
    }
}

/// The supplier whose matched offer has the lowest price. Ties go to the earlier link;
/// when no candidate has a matched offer, falls back to the first linked supplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestSupplier;

impl SupplierSelectionPolicy for CheapestSupplier {
    fn choose(&self, item: &inventory_item::Model, candidates: &[Candidate<'_>]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let Some(offer) = candidate.offer else {
                continue;
            };
            if best.is_none_or(|(_, price)| offer.price < price) {
                best = Some((index, offer.price));
            }
        }
        best.map(|(index, _)| index)
            .or_else(|| FirstLinkedSupplier.choose(item, candidates))
    }
}

/// The supplier whose matched offer is delivered soonest counting from `today`
/// (a delivery day equal to `today` counts as zero days away).
#[derive(Debug, Clone, Copy)]
pub struct SoonestDeliverySupplier {
    pub today: Weekday,
}

impl SoonestDeliverySupplier {
    #[must_use]
    pub const fn new(today: Weekday) -> Self {
        Self { today }
    }

    fn days_until(&self, day: Weekday) -> u32 {
        (day.num_days_from_monday() + 7 - self.today.num_days_from_monday()) % 7
    }
}

impl SupplierSelectionPolicy for SoonestDeliverySupplier {
    fn choose(&self, item: &inventory_item::Model, candidates: &[Candidate<'_>]) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, candidate) in candidates.iter().enumerate() {
            let soonest = candidate.offer.and_then(|offer| {
                offer
                    .available_weekdays()
                    .into_iter()
                    .map(|day| self.days_until(day))
                    .min()
            });
            let Some(days) = soonest else {
                continue;
            };
            if best.is_none_or(|(_, best_days)| days < best_days) {
                best = Some((index, days));
            }
        }
        best.map(|(index, _)| index)
            .or_else(|| FirstLinkedSupplier.choose(item, candidates))
    }
}
