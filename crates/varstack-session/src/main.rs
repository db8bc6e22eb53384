//! varstack CLI entry point.
//!
//! Usage:
//!   varstack                  # handshake + command loop over stdin/stdout
//!   varstack <transcript>     # replay a recorded command file (no handshake)

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use varstack_session::Session;

fn main() -> ExitCode {
    // Logs go to stderr so the stdout protocol stream stays clean.
    // Respects the RUST_LOG env var.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            // No args: serve the handshake protocol on stdin/stdout.
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock());
            session.run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("varstack {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some(path) if !path.starts_with('-') => run_transcript(path),

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'varstack --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"varstack v{}

Usage:
  varstack                  Serve the handshake protocol on stdin/stdout
  varstack <transcript>     Replay a recorded command file (no handshake)

Options:
  -h, --help                Show this help
  -V, --version             Show version

Protocol:
  The process prints `ready` and expects the literal line `ready` back
  before entering the command loop. Commands, one per line:

  get size <name>             Print the top version's element count
  get at <index> <name>       Print the element, or 0 if out of range
  set size <name> <n>         Truncate or zero-pad the top version to n
  set at <index> <name> <v>   Replace the element at index with v
  dup <name>                  Push a copy of the top version
  pop <name>                  Drop the top version (never below one)
  exit                        Terminate with success
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Replay a recorded command transcript, printing `get` outputs.
fn run_transcript(path: &str) -> Result<ExitCode> {
    let file = File::open(path).with_context(|| format!("opening transcript: {path}"))?;

    let stdout = io::stdout();
    let mut session = Session::new(BufReader::new(file), stdout.lock());
    session.run_script()?;

    Ok(ExitCode::SUCCESS)
}
