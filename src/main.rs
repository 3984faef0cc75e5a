mod commands;

use crate::commands::{calculate, info};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dhondt::OutputType;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[clap(name = "dhondt", version, about = "D'Hondt seat apportionment")]
struct Opts {
    /// Verbosity level (-v, -vv, -vvv)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about an election.
    Info {
        /// Election file (JSON with `districts` and `committees`).
        election: PathBuf,
    },
    /// Apportion seats and print the report.
    Calculate {
        /// Election file (JSON with `districts` and `committees`).
        election: PathBuf,
        /// Report shape: raw, detailed-committees, simplified-committees,
        /// detailed-districts, simplified-districts, or code 0-4.
        #[clap(short, long, default_value = "detailed-committees")]
        output: OutputType,
        /// Write the report to this file instead of stdout.
        #[clap(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let opts = Opts::parse();

    let filter = match opts.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match opts.command {
        Command::Info { election } => info(&election),
        Command::Calculate {
            election,
            output,
            out,
        } => calculate(&election, output, out.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "❌".red(), e.to_string().red());
        std::process::exit(1);
    }
}
