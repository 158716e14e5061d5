//! Calendar months and gap-free month spans.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month with no day component. Displays and serializes as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("invalid month key '{s}'"))?;
        let year: i32 = y.parse().map_err(|e| anyhow!("invalid year in '{s}': {e}"))?;
        let month: u32 = m.parse().map_err(|e| anyhow!("invalid month in '{s}': {e}"))?;
        MonthKey::new(year, month).ok_or_else(|| anyhow!("month out of range in '{s}'"))
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Every month from the earliest to the latest date, inclusive.
///
/// Callers must pass at least one date; an empty slice panics.
pub fn month_span(dates: &[NaiveDate]) -> Vec<MonthKey> {
    let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
        panic!("month_span requires at least one date");
    };
    let end = MonthKey::from_date(*last);

    let mut months = Vec::new();
    let mut cur = MonthKey::from_date(*first);
    while cur <= end {
        months.push(cur);
        cur = cur.next();
    }
    months
}
