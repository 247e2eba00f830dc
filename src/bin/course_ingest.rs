//! Course ingestion validation driver
//!
//! Run with: cargo run --features cli -- <course-root>
//!
//! Walks a course tree, prints every validation outcome, and exits non-zero
//! when the report has failures. Whether to abort ingestion on failure is a
//! driver decision; the library only reports.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use course_ingest::{CourseWalker, OverallStatus, WalkConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "course-ingest", about = "Validate and classify a course document tree")]
struct Args {
    /// Course root directory (e.g. data/raw/CS240)
    course_root: PathBuf,

    /// Optional TOML walk configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the full report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => WalkConfig::from_toml_file(path)?,
        None => WalkConfig::default(),
    };

    let walker = CourseWalker::new(config);
    let report = walker.walk(&args.course_root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for doc in report.accepted() {
            println!("  ok   {} [{}, {}]", doc.path.display(), doc.source_type, doc.format);
        }
        for (path, reason) in report.failures() {
            eprintln!("  FAIL {}: {}", path.display(), reason);
        }
        let summary = report.summary();
        println!(
            "{} candidates: {} accepted, {} rejected",
            summary.total,
            summary.accepted,
            summary.total - summary.accepted
        );
    }

    match report.overall_status() {
        OverallStatus::AllValid => Ok(ExitCode::SUCCESS),
        OverallStatus::HasFailures => Ok(ExitCode::FAILURE),
    }
}
