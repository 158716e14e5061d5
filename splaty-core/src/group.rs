//! Partition loan operations by loan identifier.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::LoanOperation;

/// All operations for one loan. Never empty once built by [`group_by_loan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanGroup {
    pub loan_id: String,
    pub operations: Vec<LoanOperation>,
}

impl LoanGroup {
    /// Stable sort by order date. Unparseable dates go first; ties keep input order.
    pub fn sort_by_date(&mut self) {
        self.operations.sort_by_key(|op| op.order_day());
    }

    /// Successfully parsed order dates, in current operation order.
    pub fn order_days(&self) -> Vec<NaiveDate> {
        self.operations.iter().filter_map(|op| op.order_day()).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Group operations by exact loan id, keeping first-seen order inside each group.
pub fn group_by_loan(ops: Vec<LoanOperation>) -> BTreeMap<String, LoanGroup> {
    let mut groups: BTreeMap<String, LoanGroup> = BTreeMap::new();

    for op in ops {
        groups
            .entry(op.loan_id().to_string())
            .or_insert_with_key(|id| LoanGroup {
                loan_id: id.clone(),
                operations: Vec::new(),
            })
            .operations
            .push(op);
    }

    groups
}
