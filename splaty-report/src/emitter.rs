//! Report emitter: turns each loan's monthly series into a named artifact.

use anyhow::Result;
use splaty_core::MonthlySeries;

use crate::html::{render_html, HtmlOptions};
use crate::naming::{report_file_name, ReportFormat, DEFAULT_FILE_PREFIX};
use crate::tabular::{render_csv, render_json};

/// A rendered report, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub loan_id: String,
    pub file_name: String,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct ReportEmitter {
    pub format: ReportFormat,
    pub file_prefix: String,
    pub html: HtmlOptions,
}

impl Default for ReportEmitter {
    fn default() -> Self {
        Self {
            format: ReportFormat::Html,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            html: HtmlOptions::default(),
        }
    }
}

impl ReportEmitter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn file_name(&self, loan_id: &str) -> String {
        report_file_name(&self.file_prefix, loan_id, self.format)
    }

    pub fn render(&self, series: &MonthlySeries) -> Result<String> {
        match self.format {
            ReportFormat::Html => render_html(series, &self.html),
            ReportFormat::Csv => render_csv(series),
            ReportFormat::Json => render_json(series),
        }
    }

    pub fn emit(&self, series: &MonthlySeries) -> Result<RenderedReport> {
        Ok(RenderedReport {
            loan_id: series.loan_id.clone(),
            file_name: self.file_name(&series.loan_id),
            contents: self.render(series)?,
        })
    }
}
