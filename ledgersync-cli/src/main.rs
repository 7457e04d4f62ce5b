use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use ledgersync_batch::{PreparedBatch, prepare_batch, read_statement_rows};
use ledgersync_core::UserSlot;
use ledgersync_ingest::Issuer;
use log::info;
use std::path::{Path, PathBuf};

mod config;
#[cfg(feature = "gsheets")]
mod google_sheets;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "ledgersync",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LEDGERSYNC_BUILD_SHA"), ")"),
    about = "Normalize bank CSV exports into the household ledger sheet"
)]
struct Cli {
    /// Config file (default: ~/.ledgersync/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a statement and print the rows that would be written
    Prepare {
        #[command(flatten)]
        batch: BatchArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Normalize a statement and write it to the ledger spreadsheet
    Upload {
        #[command(flatten)]
        batch: BatchArgs,

        /// Worksheet keyword, matched against tab titles (e.g. "Dec")
        #[arg(long)]
        keyword: String,

        /// Spreadsheet id (default: [sheet].spreadsheet_id)
        #[arg(long)]
        spreadsheet_id: Option<String>,

        /// Service-account JSON key (default: [sheet].key_file)
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// First row to search for free space (default: [sheet].start_row)
        #[arg(long)]
        start_row: Option<u32>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Statement CSV export
    #[arg(long)]
    file: PathBuf,

    /// Card issuer that produced the export (tangerine or cibc)
    #[arg(long)]
    bank: Issuer,

    /// Whose spending this is (1 or 2)
    #[arg(long)]
    user: UserSlot,

    /// Drop the first CSV record as a header
    #[arg(long)]
    has_headers: bool,

    /// Skip rows with malformed amounts instead of failing
    #[arg(long)]
    skip_malformed: bool,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Prepare { batch, json } => {
            let cfg = config::load_config(config_path)?;
            let prepared = run_batch(&batch, &cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prepared)?);
            } else {
                print_table(&prepared);
            }
        }

        Command::Upload {
            batch,
            keyword,
            spreadsheet_id,
            key_file,
            start_row,
        } => {
            let cfg = config::load_config(config_path)?;
            let spreadsheet_id = spreadsheet_id
                .or_else(|| cfg.sheet.spreadsheet_id.clone())
                .context(
                    "no spreadsheet id (pass --spreadsheet-id or set [sheet].spreadsheet_id)",
                )?;
            let key_file = key_file
                .or_else(|| cfg.sheet.key_file.clone())
                .context("no service account key (pass --key-file or set [sheet].key_file)")?;
            let start_row = start_row.unwrap_or(cfg.sheet.start_row);

            let prepared = run_batch(&batch, &cfg)?;
            if prepared.is_empty() {
                info!("No applicable rows found to upload.");
                return Ok(());
            }
            upload(&prepared, &spreadsheet_id, &keyword, &key_file, start_row).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_path)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_path)?;
                print!("{}", config::render_config(&cfg)?);
            }
        },
    }

    Ok(())
}

fn run_batch(args: &BatchArgs, cfg: &Config) -> Result<PreparedBatch> {
    if !args.file.exists() {
        bail!("CSV not found: {} (pass --file <path>)", args.file.display());
    }

    let has_headers = args.has_headers || cfg.pipeline.has_headers;
    let rows = read_statement_rows(&args.file, has_headers)?;
    info!("Read {} rows from CSV file '{}'", rows.len(), args.file.display());

    let options = cfg.pipeline_options(args.skip_malformed);
    let prepared = prepare_batch(&rows, args.bank, args.user, &options)
        .with_context(|| format!("processing {}", args.file.display()))?;

    info!(
        "{} rows ready, {} discarded, {} skipped",
        prepared.rows.len(),
        prepared.discarded,
        prepared.skipped.len()
    );
    for s in &prepared.skipped {
        log::warn!("skipped line {}: malformed amount '{}'", s.line, s.raw_amount);
    }
    Ok(prepared)
}

fn print_table(prepared: &PreparedBatch) {
    for row in &prepared.rows {
        println!("{}", row.cells().join(" | "));
    }
    println!(
        "\nRows: {} (discarded: {}, skipped: {})",
        prepared.rows.len(),
        prepared.discarded,
        prepared.skipped.len()
    );
}

#[cfg(feature = "gsheets")]
async fn upload(
    prepared: &PreparedBatch,
    spreadsheet_id: &str,
    keyword: &str,
    key_file: &Path,
    start_row: u32,
) -> Result<()> {
    let target = google_sheets::SheetTarget {
        spreadsheet_id,
        keyword,
        key_file,
        start_row,
    };
    google_sheets::append_rows(&target, &prepared.rows).await?;
    info!("All applicable rows processed and uploaded to Google Sheet.");
    Ok(())
}

#[cfg(not(feature = "gsheets"))]
async fn upload(
    _prepared: &PreparedBatch,
    _spreadsheet_id: &str,
    _keyword: &str,
    _key_file: &Path,
    _start_row: u32,
) -> Result<()> {
    bail!("built without Google Sheets support; rebuild with `--features gsheets`")
}
