//! End-to-end run: filter, group, sort, aggregate.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{aggregate, MonthlySeries};
use crate::filter::TransactionFilter;
use crate::group::group_by_loan;
use crate::model::RawTransaction;

/// Counters from one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub transactions: usize,
    pub operations: usize,
    pub loans: usize,
    pub series: usize,
}

pub struct Pipeline {
    filter: TransactionFilter,
}

impl Pipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            filter: TransactionFilter::new()?,
        })
    }

    pub fn with_category(category: impl Into<String>) -> Result<Self> {
        Ok(Self {
            filter: TransactionFilter::with_category(category)?,
        })
    }

    /// One series per loan id, ordered by id.
    pub fn run(&self, txns: &[RawTransaction]) -> Vec<MonthlySeries> {
        self.run_with_stats(txns).0
    }

    pub fn run_with_stats(&self, txns: &[RawTransaction]) -> (Vec<MonthlySeries>, PipelineStats) {
        let ops = self.filter.apply(txns);
        let operations = ops.len();

        // Grouping must see every operation before any group is sorted.
        let groups = group_by_loan(ops);
        let loans = groups.len();

        let mut out = Vec::with_capacity(loans);
        for (loan_id, mut group) in groups {
            group.sort_by_date();
            match aggregate(&group) {
                Some(series) => out.push(series),
                None => warn!(%loan_id, operations = group.len(), "no valid order dates, loan skipped"),
            }
        }

        let stats = PipelineStats {
            transactions: txns.len(),
            operations,
            loans,
            series: out.len(),
        };
        debug!(?stats, "pipeline finished");
        (out, stats)
    }
}
