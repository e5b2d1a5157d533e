use acsreport::{
    config::Config,
    coverage::CoverageTable,
    fetch::with_retry,
    table::{pretty, write_parquet},
    AcsError, ApiDownloader, CachedFetcher, DiskCache, ReportBuilder,
};
use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::exit, time::Instant};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "acsreport", about = "Language, poverty and assistance indicators from the ACS")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Write every produced table here as parquet
    #[arg(long, global = true)]
    out: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Coverage, detailed languages and counties for one state
    State {
        /// Display name or two-digit FIPS code
        state: String,
    },
    /// Population and language shares for one tribal area
    Tribal {
        /// Tribal area name as the Census Bureau spells it
        area: String,
    },
    /// The full county table
    Counties,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,acsreport=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    info!(dataset = %config.dataset, year = config.year, "startup");

    let downloader = ApiDownloader::from_config(&config).context("building API client")?;
    let mut fetcher = CachedFetcher::new(downloader);
    if let Some(dir) = &config.cache_dir {
        let disk = DiskCache::new(dir)
            .with_context(|| format!("opening cache dir {}", dir.display()))?;
        info!(dir = %dir.display(), "disk cache enabled");
        fetcher = fetcher.with_disk_cache(disk);
    }
    let coverage = config
        .coverage_path
        .as_ref()
        .map(|p| {
            CoverageTable::from_csv(p).with_context(|| format!("reading coverage {}", p.display()))
        })
        .transpose()?;

    let mut builder =
        ReportBuilder::new(&fetcher, config.dataset.as_str(), config.year).with_division(config.division);
    if let Some(coverage) = &coverage {
        builder = builder.with_coverage(coverage);
    }

    // ─── 3) build the report ─────────────────────────────────────────
    let start = Instant::now();
    let retrying = |op: &dyn Fn() -> acsreport::Result<Vec<(String, RecordBatch)>>| {
        with_retry(config.max_retries, config.retry_backoff(), op)
    };
    let outcome = match &cli.command {
        Command::State { state } => retrying(&|| builder.state_report(state)?.batches()),
        Command::Tribal { area } => retrying(&|| builder.tribal_report(area)?.batches()),
        Command::Counties => retrying(&|| {
            Ok(vec![("counties".to_string(), builder.county_table()?.to_record_batch()?)])
        }),
    };
    let batches = match outcome {
        Ok(b) => b,
        Err(AcsError::NoMatchingGeography(what)) => {
            error!(input = %what, "no matching geography");
            eprintln!("no state or tribal area matches `{}`", what);
            exit(2);
        }
        Err(e) => return Err(e).context("building report"),
    };
    info!(tables = batches.len(), elapsed = ?start.elapsed(), "report built");

    // ─── 4) print & persist ──────────────────────────────────────────
    for (name, batch) in &batches {
        println!("== {} ==", name);
        println!("{}", pretty(batch)?);
        if let Some(out) = &cli.out {
            let path = out.join(format!("{}.parquet", name));
            write_parquet(batch, &path).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), rows = batch.num_rows(), "wrote table");
        }
    }

    info!("all done");
    Ok(())
}
