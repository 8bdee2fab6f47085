use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::Timestamp;
use jiff::civil::Date;
use prothex_cli::aws::build_aws_config;
use prothex_cli::commands;
use prothex_cli::config::{default_config_path, init_config, load_config};
use prothex_cli::store::JsonStore;
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use prothex_narrative::bedrock::BedrockNarrator;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "prothex",
    version,
    about = "Prosthetic wearer assessment: record analysis, weekly summaries and cohort triage."
)]
struct Cli {
    /// Config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a metric record against a clinical profile.
    Analyze {
        #[arg(long)]
        record: PathBuf,
        #[arg(long)]
        profile: PathBuf,
    },
    /// Store or replace a patient's clinical profile.
    Profile {
        #[arg(long)]
        file: PathBuf,
    },
    /// Classify a day's metrics and append the record to the store.
    Submit {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        metrics: PathBuf,
        /// Measurement date. Defaults to today (UTC).
        #[arg(long)]
        date: Option<Date>,
    },
    /// Summarize the 7 days ending at `--end`. Defaults to the most recent
    /// Monday 00:00 UTC, i.e. the last complete week.
    Weekly {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        end: Option<Timestamp>,
        /// Add a clinical narrative from Bedrock.
        #[arg(long)]
        narrate: bool,
    },
    /// Latest record, its alerts, recent trends and the latest weekly summary.
    Dashboard {
        #[arg(long)]
        patient: Uuid,
    },
    /// Triage distribution across all stored patients.
    Cohort,
    /// Manage the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = load_config(cli.config.as_deref())?;
    let store = JsonStore::new(config.data_dir()?);
    tracing::debug!(data_dir = %store.root().display(), region = %config.region, "config loaded");

    match cli.command {
        Command::Analyze { record, profile } => {
            print_json(&commands::analyze_files(&record, &profile)?)?;
        }
        Command::Profile { file } => {
            let profile: ClinicalProfile = commands::read_json(&file)?;
            commands::import_profile(&store, &profile).await?;
            print_json(&profile)?;
        }
        Command::Submit {
            patient,
            metrics,
            date,
        } => {
            let metrics: MetricSet = commands::read_json(&metrics)?;
            print_json(&commands::submit(&store, patient, metrics, date).await?)?;
        }
        Command::Weekly {
            patient,
            end,
            narrate,
        } => {
            let end = match end {
                Some(end) => end,
                None => commands::default_week_end(Timestamp::now())?,
            };
            if narrate {
                let sdk_config = build_aws_config(&config.region, &config.credentials).await;
                let narrator = BedrockNarrator::new(&sdk_config, config.model_id.as_str());
                tracing::info!(
                    patient_id = %patient,
                    model_id = narrator.model_id(),
                    %end,
                    "generating narrated weekly report"
                );
                let report = commands::weekly_narrated(&store, &narrator, patient, end).await?;
                print_json(&report)?;
            } else {
                print_json(&commands::weekly(&store, patient, end).await?)?;
            }
        }
        Command::Dashboard { patient } => {
            print_json(&commands::dashboard(&store, patient).await?)?;
        }
        Command::Cohort => {
            print_json(&commands::cohort(&store).await?)?;
        }
        Command::Config {
            action: ConfigAction::Init { force },
        } => {
            let path = match cli.config {
                Some(path) => path,
                None => default_config_path()?,
            };
            print_json(&init_config(&path, force)?)?;
        }
    }

    Ok(())
}
