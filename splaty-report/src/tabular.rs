//! CSV and JSON renderings of a monthly series.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use splaty_core::{MonthKey, MonthlySeries};

/// `month,principal,interest` with one row per calendar month.
pub fn render_csv(series: &MonthlySeries) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["month", "principal", "interest"])?;
    for (month, principal, interest) in series.rows() {
        wtr.write_record([
            month.to_string(),
            format!("{principal:.2}"),
            format!("{interest:.2}"),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("flush csv for loan {}: {}", series.loan_id, e))?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}

#[derive(Serialize)]
struct SeriesReport<'a> {
    loan_id: &'a str,
    months: &'a [MonthKey],
    principal: &'a [f64],
    interest: &'a [f64],
    total_principal: f64,
    total_interest: f64,
}

/// Pretty JSON with the series and its totals.
pub fn render_json(series: &MonthlySeries) -> Result<String> {
    let (total_principal, total_interest) = series.totals();
    let report = SeriesReport {
        loan_id: &series.loan_id,
        months: &series.months,
        principal: &series.principal,
        interest: &series.interest,
        total_principal,
        total_interest,
    };
    serde_json::to_string_pretty(&report)
        .with_context(|| format!("serialize series for loan {}", series.loan_id))
}
