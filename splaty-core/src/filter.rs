//! Selects loan repayment transactions and joins them with their extracted fields.

use anyhow::Result;
use tracing::{debug, trace};

use crate::extract::DescriptionExtractor;
use crate::model::{LoanOperation, RawTransaction};

/// Category label the bank uses for loan repayments.
pub const LOAN_REPAYMENT_CATEGORY: &str = "Spłata kredytu";

pub struct TransactionFilter {
    category: String,
    extractor: DescriptionExtractor,
}

impl TransactionFilter {
    pub fn new() -> Result<Self> {
        Self::with_category(LOAN_REPAYMENT_CATEGORY)
    }

    pub fn with_category(category: impl Into<String>) -> Result<Self> {
        Ok(Self {
            category: category.into().trim().to_string(),
            extractor: DescriptionExtractor::new()?,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Keep matching transactions, in input order.
    pub fn apply(&self, txns: &[RawTransaction]) -> Vec<LoanOperation> {
        let ops: Vec<LoanOperation> = txns.iter().filter_map(|txn| self.select(txn)).collect();
        debug!(
            seen = txns.len(),
            matched = ops.len(),
            category = %self.category,
            "filtered loan repayments"
        );
        ops
    }

    fn select(&self, txn: &RawTransaction) -> Option<LoanOperation> {
        if txn.category.trim() != self.category {
            return None;
        }
        match self.extractor.extract(&txn.description) {
            Some(fields) => Some(LoanOperation::new(txn, fields)),
            None => {
                trace!(order_date = %txn.order_date, "description did not match, skipping");
                None
            }
        }
    }
}
