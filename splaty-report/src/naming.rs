//! Output formats and file names for per-loan reports.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILE_PREFIX: &str = "splaty_bar_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Interactive stacked bar chart
    #[default]
    Html,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Make a loan id safe to use inside a file name.
pub fn sanitize_file_name(s: &str) -> String {
    s.replace([' ', '/', '\\'], "_")
}

pub fn report_file_name(prefix: &str, loan_id: &str, format: ReportFormat) -> String {
    format!("{}{}.{}", prefix, sanitize_file_name(loan_id), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_file_name("70012345"), "70012345");
        assert_eq!(sanitize_file_name("a b/c\\d"), "a_b_c_d");
        assert_eq!(sanitize_file_name("../x"), ".._x");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            report_file_name(DEFAULT_FILE_PREFIX, "999", ReportFormat::Html),
            "splaty_bar_999.html"
        );
        assert_eq!(report_file_name("loan-", "1 2", ReportFormat::Csv), "loan-1_2.csv");
        assert_eq!(report_file_name("", "7", ReportFormat::Json), "7.json");
    }

    #[test]
    fn test_format_serde_names() {
        let f: ReportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(f, ReportFormat::Csv);
        assert_eq!(serde_json::to_string(&ReportFormat::Html).unwrap(), "\"html\"");
    }
}
