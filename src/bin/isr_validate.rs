//! ISR certificate checker CLI.
//!
//! ```bash
//! isr-validate graph.col start_target.dat answer.dat
//! ```
//!
//! Prints `Validation success` on stdout and exits 0 when the answer is
//! accepted; the success code and its summary (`[Code01] (Answer: YES) ...`)
//! go to stderr. A rejected answer prints `ValidationError: [CodeNN] <reason>` on
//! stderr and exits 1; unreadable or malformed input exits 2.
//!
//! ## Configuration
//!
//! Environment variables (logging only, logs go to stderr):
//! - `RUST_LOG`: Log level filter (default: warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for humans (default: pretty)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use isr_checker::{
    instance_fingerprint, load_certificate, load_endpoints, load_graph, Certificate, Endpoints,
    Graph, LoadError, ReconfigurationValidator, SUCCESS_MESSAGE,
};

#[derive(Parser, Debug)]
#[command(name = "isr-validate")]
#[command(about = "Check an Independent Set Reconfiguration answer", version)]
struct Args {
    /// Graph file (DIMACS: p/e lines)
    graph: PathBuf,

    /// Start/target file (s/t lines)
    start_target: PathBuf,

    /// Answer file (a lines)
    answer: PathBuf,
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "isr_validate=warn,isr_checker=warn".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let (graph, endpoints, certificate) = match load_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    info!(
        vertices = graph.vertex_count(),
        edges = graph.num_edges(),
        states = certificate.len(),
        sequence_exists = certificate.sequence_exists,
        "inputs loaded"
    );
    match instance_fingerprint(&graph, &endpoints, &certificate) {
        Ok(fingerprint) => info!(fingerprint = %fingerprint, "instance fingerprint"),
        Err(e) => warn!(error = %e, "could not fingerprint instance"),
    }

    match ReconfigurationValidator::new(&graph, &endpoints).validate(&certificate) {
        Ok(verdict) => {
            eprintln!("[{}] {}", verdict.code(), verdict.summary());
            for w in verdict.warnings() {
                println!("Warning: {}", w);
            }
            println!("{}", SUCCESS_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ValidationError: [{}] {}", e.code(), e);
            ExitCode::from(1)
        }
    }
}

fn load_inputs(args: &Args) -> Result<(Graph, Endpoints, Certificate), LoadError> {
    Ok((
        load_graph(&args.graph)?,
        load_endpoints(&args.start_target)?,
        load_certificate(&args.answer)?,
    ))
}
