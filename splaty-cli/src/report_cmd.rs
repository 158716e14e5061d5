use anyhow::{bail, Context, Result};
use splaty_core::{MonthlySeries, RawTransaction};
use splaty_ingest::parse_account_history_str;
use splaty_report::ReportEmitter;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::{error, info};

/// A report file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub loan_id: String,
    pub path: PathBuf,
}

pub async fn load_transactions(path: &Path) -> Result<Vec<RawTransaction>> {
    if !path.exists() {
        bail!("input not found: {} (pass --input <path>)", path.display());
    }
    let xml = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let txns = parse_account_history_str(&xml)
        .with_context(|| format!("parsing {}", path.display()))?;
    info!(count = txns.len(), path = %path.display(), "loaded account history");
    Ok(txns)
}

/// Files written plus the number of loans whose report failed.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub written: Vec<WrittenReport>,
    pub failed: usize,
}

/// Render and write one file per series, concurrently. A failing loan is
/// logged and counted; the others are still written.
pub async fn write_reports(
    series: &[MonthlySeries],
    emitter: &ReportEmitter,
    out_dir: &Path,
) -> Result<ReportOutcome> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("create {}", out_dir.display()))?;

    let mut failed = 0usize;
    let mut tasks = JoinSet::new();

    for s in series {
        let report = match emitter.emit(s) {
            Ok(r) => r,
            Err(e) => {
                error!(loan_id = %s.loan_id, "render failed: {e:#}");
                failed += 1;
                continue;
            }
        };
        let path = out_dir.join(&report.file_name);
        tasks.spawn(async move {
            tokio::fs::write(&path, report.contents)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            Ok::<_, anyhow::Error>(WrittenReport {
                loan_id: report.loan_id,
                path,
            })
        });
    }

    let mut written = Vec::with_capacity(series.len());
    while let Some(joined) = tasks.join_next().await {
        match joined.context("report writer task panicked")? {
            Ok(w) => written.push(w),
            Err(e) => {
                error!("{e:#}");
                failed += 1;
            }
        }
    }
    written.sort_by(|a, b| a.loan_id.cmp(&b.loan_id));

    Ok(ReportOutcome { written, failed })
}
