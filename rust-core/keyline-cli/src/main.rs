// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//!
//! keyline — command-line front end for the Keyline record store.
//!
//! Opens the store (`--dir`/`KEYLINE_DIR`, or the home directory), runs one
//! operation and closes it again. Exit status is 0 on success, 2 for
//! ordinary outcomes such as a missing or duplicate key, and 1 when the
//! store could not be used at all (lock held elsewhere, corruption, I/O).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use keyline_store::{RecordStore, StoreError, StoreResult};

/// Keyline version string, pulled from Cargo.toml at compile time.
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

/// keyline — single-file JSON record store.
#[derive(Parser, Debug)]
#[command(name = "keyline", version = VERSION, about = "Single-file JSON record store")]
struct Cli {
    /// Directory holding the `data` file. Defaults to the home directory.
    #[arg(long, env = "KEYLINE_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Insert a record. VALUE is JSON text.
    Create { key: String, value: String },
    /// Print the value stored under KEY.
    Read { key: String },
    /// Remove the record stored under KEY.
    Delete { key: String },
    /// Print the path of the backing file.
    Path,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error);
            ExitCode::from(exit_code(&error))
        }
    }
}

/// Open the store, execute the command and close the store.
fn run(cli: &Cli) -> anyhow::Result<String> {
    let mut store =
        RecordStore::open(cli.dir.as_deref()).context("failed to open record store")?;
    tracing::debug!(path = %store.path().display(), command = ?cli.command, "Running command");

    let output = execute(&mut store, &cli.command);
    store.close().context("failed to close record store")?;
    Ok(output?)
}

/// Execute one command against an open store and render its success line.
fn execute(store: &mut RecordStore, command: &Command) -> StoreResult<String> {
    match command {
        Command::Create { key, value } => Ok(format!("SUCCESS: {}", store.create(key, value)?)),
        Command::Read { key } => store.read(key),
        Command::Delete { key } => Ok(format!("SUCCESS: {}", store.delete(key)?)),
        Command::Path => Ok(store.path().display().to_string()),
    }
}

fn report(error: &anyhow::Error) {
    if let Some(StoreError::LockUnavailable { code, message, .. }) =
        error.downcast_ref::<StoreError>()
    {
        if let Some(code) = code {
            eprintln!("Error Number: {code}");
        }
        eprintln!("Error message: {message}");
        eprintln!("File is being used by another process.");
        return;
    }
    eprintln!("ERROR: {error:#}");
}

/// 2 for recoverable store outcomes, 1 for everything else.
fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<StoreError>() {
        Some(store_error) if !store_error.is_fatal() => 2,
        _ => 1,
    }
}
