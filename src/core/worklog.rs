//! Monthly salary aggregation from employee work-log entries.

use crate::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub hourly_rate: f64,
}

/// Hours one employee worked on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLogEntry {
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub hours_worked: f64,
    pub notes: Option<String>,
}

impl WorkLogEntry {
    /// # Errors
    /// Returns `InvalidAmount` unless `hours_worked` is finite and positive.
    pub fn new(employee_id: i64, work_date: NaiveDate, hours_worked: f64) -> Result<Self> {
        if !hours_worked.is_finite() || hours_worked <= 0.0 {
            return Err(Error::InvalidAmount {
                amount: hours_worked,
            });
        }
        Ok(Self {
            employee_id,
            work_date,
            hours_worked,
            notes: None,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EmployeeMonth {
    /// One per entry, so two entries on the same day count twice
    pub days: u32,
    pub hours: f64,
    pub salary: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    /// Keyed by employee id; employees without entries are absent
    pub employees: BTreeMap<i64, EmployeeMonth>,
    pub total_hours: f64,
    pub total_salary: f64,
}

impl MonthSummary {
    /// Figures for one employee, zero when they logged nothing.
    #[must_use]
    pub fn for_employee(&self, employee_id: i64) -> EmployeeMonth {
        self.employees.get(&employee_id).copied().unwrap_or_default()
    }
}

/// Aggregates `entries` falling in `year`/`month`. Entries for employees not in
/// `employees` are paid at a zero rate.
#[must_use]
pub fn month_summary(
    employees: &[Employee],
    entries: &[WorkLogEntry],
    year: i32,
    month: u32,
) -> MonthSummary {
    let rates: BTreeMap<i64, f64> = employees.iter().map(|e| (e.id, e.hourly_rate)).collect();
    let mut summary = MonthSummary {
        year,
        month,
        ..MonthSummary::default()
    };

    for entry in entries
        .iter()
        .filter(|e| e.work_date.year() == year && e.work_date.month() == month)
    {
        let rate = rates.get(&entry.employee_id).copied().unwrap_or(0.0);
        let pay = entry.hours_worked * rate;
        let stats = summary.employees.entry(entry.employee_id).or_default();
        stats.days += 1;
        stats.hours += entry.hours_worked;
        stats.salary += pay;
        summary.total_hours += entry.hours_worked;
        summary.total_salary += pay;
    }

    summary
}
