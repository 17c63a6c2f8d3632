//! Reorder actions and the caller-owned selection of items to reorder.
//!
//! An [`OrderSelection`] is short-lived session state: it maps inventory item ids to
//! the action the user picked, keeps the order in which items were selected, and is
//! never persisted by the engine.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which quantity-suggestion policy to apply when reordering an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReorderAction {
    /// Cover exactly the current deficit
    Immediate,
    /// Stock a full cycle plus buffer
    ByQuantity,
    /// Bridge to the supplier's next scheduled delivery
    BySupplierDates,
    /// Bridge to next week
    NextWeek,
    /// Bulk order for the month ahead
    NextMonth,
}

impl ReorderAction {
    /// All actions, shortest horizon first.
    pub const ALL: [Self; 5] = [
        Self::Immediate,
        Self::NextWeek,
        Self::BySupplierDates,
        Self::ByQuantity,
        Self::NextMonth,
    ];

    /// Wire name of the action (e.g. `"by-quantity"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ByQuantity => "by-quantity",
            Self::BySupplierDates => "by-supplier-dates",
            Self::NextWeek => "next-week",
            Self::NextMonth => "next-month",
        }
    }

    /// Parses a possibly blank action name; a blank name means "no action chosen".
    ///
    /// # Errors
    /// Returns `Error::UnknownAction` for a non-blank name that is not an action.
    pub fn parse_optional(value: &str) -> Result<Option<Self>> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for ReorderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReorderAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownAction {
                value: s.to_string(),
            })
    }
}

/// Ordered mapping of inventory item id to the chosen action, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSelection {
    entries: Vec<(i64, Option<ReorderAction>)>,
}

impl OrderSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from raw `(item id, action name)` pairs as the UI sends them.
    ///
    /// # Errors
    /// Returns `Error::UnknownAction` if any non-blank action name is unknown.
    pub fn from_raw<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, &'a str)>,
    {
        let mut selection = Self::new();
        for (item_id, raw) in pairs {
            selection.set(item_id, ReorderAction::parse_optional(raw)?);
        }
        Ok(selection)
    }

    /// Sets the action for an item. Re-selecting an item keeps its original position.
    pub fn set(&mut self, item_id: i64, action: Option<ReorderAction>) {
        if let Some(entry) = self.entries.iter_mut().find(|(id, _)| *id == item_id) {
            entry.1 = action;
        } else {
            self.entries.push((item_id, action));
        }
    }

    /// Shorthand for `set(item_id, Some(action))`.
    pub fn choose(&mut self, item_id: i64, action: ReorderAction) {
        self.set(item_id, Some(action));
    }

    /// Action chosen for an item, if any.
    #[must_use]
    pub fn action_for(&self, item_id: i64) -> Option<ReorderAction> {
        self.entries
            .iter()
            .find(|(id, _)| *id == item_id)
            .and_then(|(_, action)| *action)
    }

    pub fn remove(&mut self, item_id: i64) {
        self.entries.retain(|(id, _)| *id != item_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries that have an action chosen, in selection order.
    pub fn chosen(&self) -> impl Iterator<Item = (i64, ReorderAction)> + '_ {
        self.entries
            .iter()
            .filter_map(|(id, action)| action.map(|a| (*id, a)))
    }

    /// True when no entry has an action chosen.
    #[must_use]
    pub fn has_no_choice(&self) -> bool {
        self.chosen().next().is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
