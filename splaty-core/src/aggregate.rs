//! Per-month principal and interest sums for one loan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar::{month_span, MonthKey};
use crate::group::LoanGroup;

/// Zero-filled monthly sums for one loan. All three vectors share indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub loan_id: String,
    pub months: Vec<MonthKey>,
    pub principal: Vec<f64>,
    pub interest: Vec<f64>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn total_principal(&self) -> f64 {
        self.principal.iter().sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.interest.iter().sum()
    }

    /// (principal, interest) summed over every month.
    pub fn totals(&self) -> (f64, f64) {
        (self.total_principal(), self.total_interest())
    }

    /// `(month, principal, interest)` rows in calendar order.
    pub fn rows(&self) -> impl Iterator<Item = (MonthKey, f64, f64)> + '_ {
        self.months
            .iter()
            .zip(&self.principal)
            .zip(&self.interest)
            .map(|((m, p), i)| (*m, *p, *i))
    }
}

/// Sum principal and interest per calendar month.
///
/// Operations with an unparseable order date are left out of both the span
/// and the sums. Returns `None` when no operation has a usable date.
pub fn aggregate(group: &LoanGroup) -> Option<MonthlySeries> {
    let days = group.order_days();
    if days.is_empty() {
        return None;
    }
    let months = month_span(&days);

    let mut sums: BTreeMap<MonthKey, (f64, f64)> =
        months.iter().map(|m| (*m, (0.0, 0.0))).collect();

    for op in &group.operations {
        let Some(day) = op.order_day() else {
            trace!(loan_id = %group.loan_id, order_date = %op.order_date, "unparseable order date, skipping");
            continue;
        };
        let slot = sums.entry(MonthKey::from_date(day)).or_insert((0.0, 0.0));
        slot.0 += op.principal();
        slot.1 += op.interest();
    }

    let (principal, interest): (Vec<f64>, Vec<f64>) = months.iter().map(|m| sums[m]).unzip();

    Some(MonthlySeries {
        loan_id: group.loan_id.clone(),
        months,
        principal,
        interest,
    })
}
