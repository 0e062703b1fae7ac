use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{info, warn};

use odds_bands::config::{AppConfig, load_dotenv};
use odds_bands::dataset::Dataset;
use odds_bands::export::export_query_xlsx;
use odds_bands::query::Selection;
use odds_bands::record::OddsBucket;
use odds_bands::report::{render_table, summary_lines};
use odds_bands::sources::SourceLocation;

#[derive(Parser)]
#[command(
    name = "odds_bands",
    about = "Home-team results grouped by opening-odds bucket"
)]
struct Cli {
    /// Match-history CSV (URL or path); repeat for several sources
    #[arg(
        long = "source",
        global = true,
        env = "ODDS_SOURCES",
        value_delimiter = ','
    )]
    sources: Vec<SourceLocation>,

    /// Drop rows with missing or non-numeric values instead of aborting
    #[arg(long, global = true, env = "ODDS_SKIP_INVALID")]
    skip_invalid: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List home teams present in the data
    Teams,
    /// List odds buckets present in the data
    Buckets,
    /// Show the matches and summary for one team and bucket
    Query {
        /// Home team, exactly as listed by `teams`
        #[arg(long)]
        team: String,

        /// Bucket label, e.g. "1.50 - 1.60" or "Other"
        #[arg(long)]
        bucket: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the result to an .xlsx workbook
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.sources, cli.skip_invalid);
    let derivation = odds_bands::load_dataset(&config.sources, config.invalid_rows)
        .context("failed to build dataset")?;
    let dataset = derivation.dataset;

    match cli.command {
        Command::Teams => {
            for team in dataset.teams() {
                println!("{team}");
            }
        }
        Command::Buckets => {
            for bucket in dataset.buckets() {
                println!("{bucket}");
            }
        }
        Command::Query {
            team,
            bucket,
            json,
            xlsx,
        } => run_query(&dataset, team, &bucket, json, xlsx)?,
    }

    Ok(())
}

fn run_query(
    dataset: &Dataset,
    team: String,
    bucket: &str,
    json: bool,
    xlsx: Option<PathBuf>,
) -> Result<()> {
    let bucket = OddsBucket::from_label(bucket)
        .ok_or_else(|| anyhow!("unknown odds bucket '{bucket}' (see `buckets`)"))?;
    if !dataset.records().iter().any(|r| r.home_team == team) {
        warn!("no home matches for '{team}' in the loaded data");
    }

    let selection = Selection::new(team, bucket);
    let result = dataset.query(&selection);

    if json {
        let out = serde_json::to_string_pretty(&result).context("serialize query result")?;
        println!("{out}");
    } else {
        println!("Results:");
        println!("{}", render_table(&result.rows));
        println!();
        println!("Summary:");
        for line in summary_lines(&result.selection, &result.summary) {
            println!("- {line}");
        }
    }

    if let Some(path) = xlsx {
        let report = export_query_xlsx(&path, &result)?;
        info!(
            "wrote {} match(es) and {} summary row(s) to {}",
            report.matches,
            report.summary_rows,
            path.display()
        );
    }

    Ok(())
}
