//! Finance helpers - invoice VAT and totals, income/expense statistics.
//!
//! Everything here is pure arithmetic over values the caller already holds; the
//! VAT rate comes from [`FinanceConfig`].

use crate::{
    config::FinanceConfig,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A sales invoice as entered on the finance screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub date: NaiveDate,
    pub before_vat: f64,
    pub vat: f64,
    pub tip: f64,
}

impl Invoice {
    /// Builds an invoice whose VAT is derived from `before_vat` at the configured rate.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for a negative or non-finite amount or tip.
    pub fn new(
        number: impl Into<String>,
        date: NaiveDate,
        before_vat: f64,
        tip: f64,
        config: &FinanceConfig,
    ) -> Result<Self> {
        for amount in [before_vat, tip] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::InvalidAmount { amount });
            }
        }
        Ok(Self {
            number: number.into(),
            date,
            before_vat,
            vat: vat_for(before_vat, config),
            tip,
        })
    }

    /// Before VAT + VAT + tip.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.before_vat + self.vat + self.tip
    }
}

/// VAT owed on `before_vat`.
#[must_use]
pub fn vat_for(before_vat: f64, config: &FinanceConfig) -> f64 {
    before_vat * config.vat_rate
}

/// Column totals over a batch of invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InvoiceTotals {
    pub before_vat: f64,
    pub vat: f64,
    pub tips: f64,
    pub grand_total: f64,
}

#[must_use]
pub fn invoice_totals(invoices: &[Invoice]) -> InvoiceTotals {
    let mut totals = invoices
        .iter()
        .fold(InvoiceTotals::default(), |mut acc, invoice| {
            acc.before_vat += invoice.before_vat;
            acc.vat += invoice.vat;
            acc.tips += invoice.tip;
            acc
        });
    totals.grand_total = totals.before_vat + totals.vat + totals.tips;
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

/// A bookkeeping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub kind: RecordKind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Inclusive date bounds; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FinancialStats {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`
    pub profit: f64,
    pub record_count: usize,
}

/// Income, expenses and profit over the records falling inside `range`.
#[must_use]
pub fn financial_stats(records: &[FinancialRecord], range: DateRange) -> FinancialStats {
    let mut stats = FinancialStats::default();
    for record in records.iter().filter(|r| range.contains(r.date)) {
        match record.kind {
            RecordKind::Income => stats.income += record.amount,
            RecordKind::Expense => stats.expenses += record.amount,
        }
        stats.record_count += 1;
    }
    stats.profit = stats.income - stats.expenses;
    stats
}
