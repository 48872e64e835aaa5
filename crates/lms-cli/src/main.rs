//! # lms CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lms_cli::audit::{run_audit, AuditArgs};
use lms_cli::resolve::{run_resolve, ResolveArgs};

/// Enum metadata toolkit.
///
/// Resolves descriptions and messages declared for enum members in YAML or
/// JSON manifests, and audits manifests for ambiguous or missing annotations.
#[derive(Parser, Debug)]
#[command(name = "lms", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one member's description or message.
    Resolve(ResolveArgs),

    /// Report every ambiguous or missing annotation in a manifest.
    Audit(AuditArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "lms starting");

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(&args),
        Commands::Audit(args) => run_audit(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("ERROR: {e:#}");
            ExitCode::from(2)
        }
    }
}
