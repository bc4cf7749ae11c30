//! istrings - strings(1) replacement filtered by letter runs
//!
//! Prints the printable ASCII strings found in a binary file, keeping only
//! those with a long enough run of letters, each distinct string once.

use anyhow::{Context, Result};
use clap::Parser;
use istrings::args::Invocation;
use istrings::{load_file, open_output, scan_to_writer, ScanError, ScanOptions};
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Arguments are positional (`<input-file> [output-file] [--min=N]`), so
/// clap only collects them; `Invocation` decides what they mean.
#[derive(Parser, Debug)]
#[command(name = "istrings", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments with a `--` escape in front of them, so
    /// every user argument, including a literal `--`, lands in `args`.
    fn from_env() -> Self {
        let mut raw = std::env::args_os();
        let prog = raw.next().unwrap_or_else(|| OsString::from("istrings"));
        Cli::parse_from(
            std::iter::once(prog)
                .chain(std::iter::once(OsString::from("--")))
                .chain(raw),
        )
    }
}

fn help_text() -> String {
    let prog = env!("CARGO_PKG_NAME");
    format!(
        "
Usage:
 $ {prog} <input-file> [output-file] [options]
 Tries to find printable strings inside a binary file.
 If no output file is provided output is printed to stdout.
 Options are:
  -h, --help  Prints this message and exits.
  --min=<N>   Minimum sequence of letters (aA-zZ) for a string to be considered. Defaults to 4.

{prog} {}
",
        env!("CARGO_PKG_VERSION")
    )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (input, output, min_sequence) = match Invocation::from_args(&cli.args) {
        Invocation::Usage { failed } => {
            print!("{}", help_text());
            return Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
        Invocation::InvalidFilename(name) => return Err(ScanError::InvalidFilename(name).into()),
        Invocation::Scan {
            input,
            output,
            min_sequence,
        } => (input, output, min_sequence),
    };

    let data = load_file(&input)?;
    let mut out = open_output(output.as_deref())?;

    let opts = ScanOptions::default().with_min_sequence(min_sequence);
    let written = scan_to_writer(&data, &opts, &mut out).context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    tracing::debug!(
        "{} strings written from {} (min={})",
        written,
        input.display(),
        min_sequence
    );

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::from_env()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
