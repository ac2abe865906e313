use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod classify;
mod models;

use classify::{ClassifyOptions, classify_lines};

#[derive(Parser, Debug)]
#[command(name = "wayclass-cli", author, version, about, long_about = None)]
struct Cli {
    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify ways into car, bike and foot access
    ///
    /// Each input line is a JSON object like
    /// `{"id": 42, "tags": [["highway", "residential"], ["oneway", "yes"]]}`.
    /// Tags may also be given as an object.
    /// One JSON object is written to stdout per classified way.
    Classify {
        /// Path to the input file (JSON lines). Reads stdin when omitted or "-".
        #[arg(env)]
        input: Option<PathBuf>,

        /// Also write ways that no mode can use.
        #[arg(env, long)]
        keep_inaccessible: bool,

        /// Write bike and foot access as numeric codes instead of names.
        #[arg(env, long)]
        numeric_codes: bool,
    },
}

fn open_input(path: Option<PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            info!(path = path.to_str(), "Reading ways from file");
            let file = File::open(&path)
                .with_context(|| format!("Failed to open input at {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => {
            info!("Reading ways from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable.
        // Stdout is reserved for output records.
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            keep_inaccessible,
            numeric_codes,
        } => {
            let reader = open_input(input)?;
            let writer = BufWriter::new(io::stdout().lock());
            let summary = classify_lines(
                reader,
                writer,
                ClassifyOptions {
                    keep_inaccessible,
                    numeric_codes,
                },
            )?;

            info!(
                read = summary.read,
                written = summary.written,
                diagnostics = summary.diagnostics,
                "Done classifying ways"
            );
            Ok(())
        }
    }
}
