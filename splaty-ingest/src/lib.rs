//! splaty-ingest: account history readers producing core `RawTransaction`s.

pub mod account_history;

pub use account_history::parse_account_history_str;
