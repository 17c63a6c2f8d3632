//! Product matching - decides which supplier product prices an inventory item.
//!
//! Matching is an explicit capability so callers and tests can pin the exact
//! semantics. When nothing matches, the engine falls back to the configured default
//! price and flags the line for price confirmation.

use crate::entities::supplier_product;

/// Decides whether a supplier product corresponds to an inventory item.
pub trait ProductMatcher: Send + Sync {
    /// Whether `product_name` names the same goods as `item_name`.
    fn matches(&self, item_name: &str, product_name: &str) -> bool;

    /// First product in `products` matching `item_name`, in the given order.
    fn find<'a>(
        &self,
        item_name: &str,
        products: &'a [supplier_product::Model],
    ) -> Option<&'a supplier_product::Model> {
        products
            .iter()
            .find(|product| self.matches(item_name, &product.product_name))
    }
}

/// Case-insensitive substring match in either direction.
///
/// `"tomato"` matches `"Cherry Tomatoes"`, and `"Olive oil extra virgin"` matches
/// `"olive oil"`. Multi-word overlaps that are not substrings (`"red onion"` vs
/// `"onion red"`) do not match. Blank names never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl ProductMatcher for SubstringMatcher {
    fn matches(&self, item_name: &str, product_name: &str) -> bool {
        let item = item_name.trim().to_lowercase();
        let product = product_name.trim().to_lowercase();
        if item.is_empty() || product.is_empty() {
            return false;
        }
        item.contains(&product) || product.contains(&item)
    }
}

/// Case-insensitive equality after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameMatcher;

impl ProductMatcher for ExactNameMatcher {
    fn matches(&self, item_name: &str, product_name: &str) -> bool {
        let item = item_name.trim();
        !item.is_empty() && item.to_lowercase() == product_name.trim().to_lowercase()
    }
}
