use clap::{Parser, Subcommand};
use intake_engine::application::routing::FaxRouter;
use intake_engine::domain::ports::{EligibilityJobStoreBox, FaxLineStoreBox};
use intake_engine::infrastructure::in_memory::{InMemoryFaxLineStore, InMemoryJobStore};
use intake_engine::interfaces::csv::{
    AssignmentLogWriter, AssignmentRow, TriageReportWriter, TriageRow,
};
use intake_engine::interfaces::json;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Benefits triage and fax routing reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute patient responsibility and schedulability for a batch of
    /// eligibility jobs (JSON in, CSV report out)
    Report {
        /// JSON file holding an array of eligibility jobs
        jobs: PathBuf,
    },
    /// Simulate routing of inbound documents across configured fax lines
    /// (JSON in, CSV assignment log out)
    Route {
        /// JSON file holding an array of fax lines
        lines: PathBuf,
        /// Number of inbound documents to simulate per line
        #[arg(long, default_value_t = 1)]
        documents: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Report { jobs } => report(jobs).await,
        Command::Route { lines, documents } => route(lines, documents).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn report(jobs_path: PathBuf) -> Result<()> {
    let file = File::open(jobs_path).into_diagnostic()?;
    let store: EligibilityJobStoreBox = Box::new(InMemoryJobStore::new());
    for job in json::read_jobs(file).into_diagnostic()? {
        store.store(job).await.into_diagnostic()?;
    }

    let stdout = io::stdout();
    let mut writer = TriageReportWriter::new(stdout.lock());

    let jobs = store.all().await.into_diagnostic()?;
    let mut rows = Vec::with_capacity(jobs.len());
    for job in &jobs {
        match TriageRow::from_job(job) {
            Ok(row) => rows.push(row),
            Err(e) => eprintln!("Error reporting job '{}': {}", job.id, e),
        }
    }
    writer.write_rows(rows).into_diagnostic()?;

    Ok(())
}

async fn route(lines_path: PathBuf, documents: usize) -> Result<()> {
    let file = File::open(lines_path).into_diagnostic()?;
    let lines = json::read_lines(file).into_diagnostic()?;
    let line_ids: Vec<String> = lines.iter().map(|line| line.id.clone()).collect();

    let store: FaxLineStoreBox = Box::new(InMemoryFaxLineStore::with_lines(lines).await);
    let router = FaxRouter::new(store);

    let stdout = io::stdout();
    let mut writer = AssignmentLogWriter::new(stdout.lock());

    for line_id in &line_ids {
        for document in 1..=documents {
            match router.assign(line_id).await {
                Ok(assignment) => writer
                    .write_row(AssignmentRow::new(line_id, document, &assignment))
                    .into_diagnostic()?,
                Err(e) => {
                    eprintln!("Error routing document on line '{}': {}", line_id, e);
                    break;
                }
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
