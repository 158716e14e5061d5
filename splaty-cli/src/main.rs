use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use splaty_core::Pipeline;
use splaty_report::ReportFormat;
use std::path::PathBuf;
use tracing::info;

mod config;
mod logging;
mod report_cmd;
mod state;

use config::{init_config, load_config, Config};
use report_cmd::{load_transactions, write_reports};

#[derive(Parser, Debug)]
#[command(
    name = "splaty",
    version,
    about = "Split loan repayments from a bank account history into monthly principal/interest reports"
)]
struct Cli {
    /// Config file (default: ~/.splaty/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one report file per loan
    Report {
        /// Account history XML (default from config: operations.xml)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Transaction type label marking loan repayments
        #[arg(long)]
        category: Option<String>,
    },

    /// Print per-loan totals without writing files
    Summary {
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Report {
            input,
            out_dir,
            format,
            category,
        } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            if let Some(p) = input {
                cfg.input.path = p;
            }
            if let Some(d) = out_dir {
                cfg.report.out_dir = d;
            }
            if let Some(f) = format {
                cfg.report.format = f;
            }
            if let Some(c) = category {
                cfg.input.category = c;
            }
            run_report(&cfg).await?;
        }

        Command::Summary { input, category } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            if let Some(p) = input {
                cfg.input.path = p;
            }
            if let Some(c) = category {
                cfg.input.category = c;
            }
            run_summary(&cfg).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init { force } => {
                init_config(cli.config.as_deref(), force)?;
            }
            ConfigCommand::Show => {
                let cfg = load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

async fn run_report(cfg: &Config) -> Result<()> {
    let txns = load_transactions(&cfg.input.path).await?;
    let (series, stats) = Pipeline::with_category(&cfg.input.category)?.run_with_stats(&txns);
    info!(
        operations = stats.operations,
        loans = stats.loans,
        "matched loan repayments"
    );

    if series.is_empty() {
        println!(
            "No '{}' transactions with a loan breakdown in {}",
            cfg.input.category,
            cfg.input.path.display()
        );
        return Ok(());
    }

    let emitter = cfg.report.emitter();
    let outcome = write_reports(&series, &emitter, &cfg.report.out_dir).await?;

    for w in &outcome.written {
        println!("Wygenerowano plik dla ID: {} -> {}", w.loan_id, w.path.display());
    }
    if outcome.failed > 0 {
        bail!("{} of {} reports failed", outcome.failed, series.len());
    }
    Ok(())
}

async fn run_summary(cfg: &Config) -> Result<()> {
    let txns = load_transactions(&cfg.input.path).await?;
    let (series, stats) = Pipeline::with_category(&cfg.input.category)?.run_with_stats(&txns);

    println!(
        "Parsed {} transactions from {} ({} loan repayments, {} loans)\n",
        stats.transactions,
        cfg.input.path.display(),
        stats.operations,
        stats.loans
    );

    println!(
        "{:<20} {:>7} {:<17} {:>14} {:>14}",
        "loan", "months", "span", "principal", "interest"
    );
    for s in &series {
        let span = match (s.months.first(), s.months.last()) {
            (Some(a), Some(b)) => format!("{a}..{b}"),
            _ => String::new(),
        };
        let (principal, interest) = s.totals();
        println!(
            "{:<20} {:>7} {:<17} {:>14.2} {:>14.2}",
            s.loan_id,
            s.len(),
            span,
            principal,
            interest
        );
    }
    Ok(())
}
