//! splaty-report: per-loan report rendering (HTML chart, CSV, JSON) and file naming

pub mod naming;
pub mod html;
pub mod tabular;
pub mod emitter;

pub use naming::{ReportFormat, report_file_name, sanitize_file_name, DEFAULT_FILE_PREFIX};
pub use html::{HtmlOptions, render_html};
pub use tabular::{render_csv, render_json};
pub use emitter::{RenderedReport, ReportEmitter};
