use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dra_core::{
    classify, resolve_vocabulary, Clock, CoreConfig, FixedClock, Gender, PatientId, RecordStore,
    ReportService, SystemClock,
};

#[derive(Parser)]
#[command(name = "dra")]
#[command(about = "Diabetes risk assessment CLI")]
struct Cli {
    /// YAML list of trigger terms replacing the built-in vocabulary
    #[arg(long, global = true)]
    terms: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the risk report for a patient in a records file
    Report {
        /// Patient ID
        patient_id: PatientId,
        /// YAML records file holding patients and notes
        #[arg(long)]
        records: PathBuf,
        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Classify an age, gender and trigger count
    Classify {
        #[arg(long)]
        age: u32,
        /// M, F, MALE or FEMALE
        #[arg(long)]
        gender: Gender,
        /// Number of distinct trigger terms
        #[arg(long)]
        triggers: usize,
    },
    /// List the trigger terms found in a piece of text
    Scan {
        text: String,
    },
    /// List the active trigger vocabulary
    Terms,
}

async fn execute(
    terms: Option<PathBuf>,
    command: Commands,
) -> Result<String, Box<dyn std::error::Error>> {
    let vocabulary = resolve_vocabulary(terms)?;

    let output = match command {
        Commands::Report {
            patient_id,
            records,
            as_of,
        } => {
            let store = Arc::new(RecordStore::load(&records)?);
            let clock: Arc<dyn Clock> = match as_of {
                Some(date) => Arc::new(FixedClock(date)),
                None => Arc::new(SystemClock),
            };
            let service = ReportService::new(
                Arc::new(CoreConfig::new(vocabulary)),
                store.clone(),
                store,
                clock,
            );
            let report = service.compute_report(patient_id).await?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Classify {
            age,
            gender,
            triggers,
        } => classify(age, gender, triggers).to_string(),
        Commands::Scan { text } => {
            let found = vocabulary.extract_triggers(Some(text.as_str()));
            vocabulary
                .terms()
                .filter(|term| found.contains(term))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Commands::Terms => vocabulary.terms().collect::<Vec<_>>().join("\n"),
    };

    Ok(output)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'dra --help' for commands");
        return Ok(());
    };

    match execute(cli.terms, command).await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
