//! splaty-core: loan repayment extraction and monthly aggregation

pub mod model;
pub mod numeric;
pub mod extract;
pub mod filter;
pub mod group;
pub mod calendar;
pub mod aggregate;
pub mod pipeline;

pub use model::{Amount, LoanOperation, RawTransaction};
pub use numeric::parse_amount;
pub use extract::{DescriptionExtractor, ExtractedFields, DEFAULT_PENALTY_INTEREST};
pub use filter::{TransactionFilter, LOAN_REPAYMENT_CATEGORY};
pub use group::{LoanGroup, group_by_loan};
pub use calendar::{MonthKey, month_span};
pub use aggregate::{MonthlySeries, aggregate};
pub use pipeline::{Pipeline, PipelineStats};
