//! Transaction records on both sides of extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extract::ExtractedFields;
use crate::numeric::parse_amount;

/// Date format used by the account history export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Currency-tagged amount exactly as exported, e.g. `PLN` / `-1 234,56`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: String,
}

impl Amount {
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }

    /// Numeric value, 0.0 when malformed.
    pub fn parsed(&self) -> f64 {
        parse_amount(&self.value)
    }
}

/// One entry of the account history, before any interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// YYYY-MM-DD
    pub order_date: String,
    /// YYYY-MM-DD
    pub exec_date: String,
    pub category: String,
    pub description: String,
    pub amount: Amount,
    pub ending_balance: Amount,
}

/// A loan repayment: the source transaction joined with its extracted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOperation {
    pub order_date: String,
    pub exec_date: String,
    pub category: String,
    pub amount: Amount,
    pub ending_balance: Amount,
    pub fields: ExtractedFields,
}

impl LoanOperation {
    pub fn new(txn: &RawTransaction, fields: ExtractedFields) -> Self {
        Self {
            order_date: txn.order_date.clone(),
            exec_date: txn.exec_date.clone(),
            category: txn.category.clone(),
            amount: txn.amount.clone(),
            ending_balance: txn.ending_balance.clone(),
            fields,
        }
    }

    pub fn loan_id(&self) -> &str {
        &self.fields.loan_id
    }

    /// Order date, `None` when it is not a valid YYYY-MM-DD date.
    pub fn order_day(&self) -> Option<NaiveDate> {
        parse_date(&self.order_date)
    }

    pub fn principal(&self) -> f64 {
        parse_amount(&self.fields.principal)
    }

    pub fn interest(&self) -> f64 {
        parse_amount(&self.fields.interest)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}
