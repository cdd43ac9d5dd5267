use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tally_core::{Currency, PlanningEntry, PlanningKind, SUGGESTED_AREAS};
use tally_finance::{PlanningSummary, StatementSummary};
use tally_ingest::parse_statement;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Monthly budget planning and credit-card statement analysis"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a statement CSV with date,title,amount columns
    Analyze {
        /// Path to the statement CSV
        file: PathBuf,

        /// Number of merchants to rank (default: from config, 6)
        #[arg(long)]
        top: Option<usize>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Also write the mapped records to this CSV
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Predicted expenses and incomes
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },

    /// Show or change display settings
    Config {
        /// Display currency (BRL, USD, EUR, GBP, JPY)
        #[arg(long)]
        currency: Option<String>,

        /// Default number of top merchants
        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Subcommand, Debug)]
enum PlanCommand {
    /// Add a predicted monthly expense
    AddPrediction {
        /// Spending area, e.g. Housing
        #[arg(long)]
        area: String,

        #[arg(long)]
        amount: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Add a monthly income
    AddIncome {
        /// Income source, e.g. Salary
        #[arg(long)]
        source: String,

        #[arg(long)]
        amount: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove one entry by id
    Remove { id: String },

    /// Remove every entry of one list
    Clear { list: ListKind },

    /// Print both lists
    List,

    /// Totals, net balance and per-area shares
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// Print the suggested spending areas
    Areas,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListKind {
    Predictions,
    Incomes,
}

impl From<ListKind> for PlanningKind {
    fn from(k: ListKind) -> Self {
        match k {
            ListKind::Predictions => PlanningKind::Prediction,
            ListKind::Incomes => PlanningKind::Income,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Analyze {
            file,
            top,
            json,
            export,
        } => {
            analyze(&file, top, json, export.as_deref()).await?;
        }

        Command::Plan { command } => plan(command)?,

        Command::Config { currency, top } => {
            configure(currency, top)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    // RUST_LOG > --verbose > warn
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Label for record ids: the file name, or the whole path if it has none.
fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

async fn analyze(file: &Path, top: Option<usize>, json: bool, export: Option<&Path>) -> Result<()> {
    if !file.exists() {
        bail!("CSV not found: {}", file.display());
    }

    let cfg = config::load_config(&config::config_path()?)?;
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("read {}", file.display()))?;

    let import = parse_statement(&text, &source_label(file))?;
    if import.amounts_zeroed > 0 {
        info!("{} amount(s) could not be read and count as 0", import.amounts_zeroed);
    }

    let summary = StatementSummary::build(&import, top.unwrap_or(cfg.display.top_merchants));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::statement(&summary, cfg.display.currency));
    }

    if let Some(out) = export {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("create {}", out.display()))?;
        for r in &import.records {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
        eprintln!("Wrote {} records to {}", import.records.len(), out.display());
    }

    Ok(())
}

fn plan(command: PlanCommand) -> Result<()> {
    let path = state::planning_path()?;
    let mut book = state::read_book(&path)?;
    let currency = config::load_config(&config::config_path()?)?.display.currency;

    match command {
        PlanCommand::AddPrediction { area, amount, notes } => {
            let entry = PlanningEntry::from_input(PlanningKind::Prediction, &area, &amount, &notes)?;
            println!("Added prediction {} ({})", entry.label, render::money(entry.amount, currency));
            book.add(entry);
            state::write_book(&path, &book)?;
        }

        PlanCommand::AddIncome {
            source,
            amount,
            notes,
        } => {
            let entry = PlanningEntry::from_input(PlanningKind::Income, &source, &amount, &notes)?;
            println!("Added income {} ({})", entry.label, render::money(entry.amount, currency));
            book.add(entry);
            state::write_book(&path, &book)?;
        }

        PlanCommand::Remove { id } => {
            if !book.remove(&id) {
                bail!("no entry with id {}", id);
            }
            state::write_book(&path, &book)?;
            println!("Removed {}", id);
        }

        PlanCommand::Clear { list } => {
            let n = book.clear(list.into());
            state::write_book(&path, &book)?;
            println!("Removed {} entries", n);
        }

        PlanCommand::List => {
            for (title, kind) in [("Predictions", PlanningKind::Prediction), ("Incomes", PlanningKind::Income)] {
                print!("{}", render::entries(title, book.entries(kind), currency));
                println!();
            }
        }

        PlanCommand::Summary { json } => {
            let summary = PlanningSummary::from_book(&book);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::planning(&summary, currency));
            }
        }

        PlanCommand::Areas => {
            for area in SUGGESTED_AREAS {
                println!("{}", area);
            }
        }
    }

    Ok(())
}

fn configure(currency: Option<String>, top: Option<usize>) -> Result<()> {
    let path = config::config_path()?;
    let mut cfg = config::load_config(&path)?;

    if currency.is_none() && top.is_none() {
        println!("currency = {} ({})", cfg.display.currency, cfg.display.currency.label());
        println!("top_merchants = {}", cfg.display.top_merchants);
        println!("\nConfig file: {}", path.display());
        return Ok(());
    }

    if let Some(code) = currency {
        cfg.display.currency = code.parse::<Currency>().map_err(anyhow::Error::msg)?;
    }
    if let Some(n) = top {
        cfg.display.top_merchants = n;
    }

    config::save_config(&path, &cfg)?;
    println!("Wrote {}", path.display());
    Ok(())
}
