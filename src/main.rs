//! CLI entry point for the Pixels cleaner.
//!
//! Provides subcommands for cleaning an export into a gap-filled table,
//! summarizing it, comparing scores on days whose notes mention a term, and
//! listing the most common words in notes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pixels_cleaner::analysis::{compare_term, matching_notes};
use pixels_cleaner::config::Settings;
use pixels_cleaner::frequency::{top_bigrams, top_words};
use pixels_cleaner::output::{print_json, print_pretty, to_csv_bytes, to_json_bytes, write_output};
use pixels_cleaner::stats::TableSummary;
use pixels_cleaner::{CleanTable, run};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "pixels_cleaner")]
#[command(about = "Clean and summarize a Pixels daily-tracking export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Clean an export and write the gap-filled table
    Clean {
        /// Path to the JSON export (defaults to $PIXELS_INPUT)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// File to write (defaults to $PIXELS_OUTPUT_DIR/pixels_clean.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Gzip compress the output file
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Clean an export and log a summary of the resulting table
    Summary {
        /// Path to the JSON export (defaults to $PIXELS_INPUT)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Compare average scores on days whose notes mention a term
    Term {
        /// Search term, matched case-insensitively
        #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
        term: String,

        /// Path to the JSON export (defaults to $PIXELS_INPUT)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// How many matching notes to log
        #[arg(short = 'n', long, default_value_t = 0)]
        print_notes: usize,
    },
    /// Log the most common words and bigrams in notes
    Words {
        /// Path to the JSON export (defaults to $PIXELS_INPUT)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// How many words and bigrams to list
        #[arg(short = 'n', long, default_value_t = 20)]
        top: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("pixels_cleaner.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            format,
            gzip,
        } => {
            let table = load_table(input, &settings)?;

            let bytes = match format {
                Format::Csv => to_csv_bytes(&table)?,
                Format::Json => to_json_bytes(&table)?,
            };
            let path = output.unwrap_or_else(|| {
                settings
                    .output_dir
                    .join(format!("pixels_clean.{}", format.extension()))
            });

            let written = write_output(&path, bytes, gzip)?;
            info!(path = %written.display(), rows = table.len(), "Cleaned table written");
        }
        Commands::Summary { input } => {
            let table = load_table(input, &settings)?;
            let summary = TableSummary::from_table(&table);

            print_pretty(&summary);
            print_json(&summary)?;
            info!(gap_pct = summary.gap_pct(), "Share of calendar synthesized");
        }
        Commands::Term {
            term,
            input,
            print_notes,
        } => {
            let table = load_table(input, &settings)?;
            let comparison = compare_term(&table, &term);
            print_json(&comparison)?;

            let notes = matching_notes(&table, &term, print_notes);
            for row in &notes {
                info!(
                    date = %row.date,
                    score = ?row.average_score,
                    note = row.notes.as_deref().unwrap_or_default(),
                    "Matching note"
                );
            }

            if print_notes > 0 {
                info!(printed = notes.len(), "Matching notes listed");
            }
        }
        Commands::Words { input, top } => {
            let table = load_table(input, &settings)?;

            for word in top_words(&table, top) {
                info!(word = %word.term, count = word.count, "Common word");
            }
            for bigram in top_bigrams(&table, top) {
                info!(bigram = %bigram.term, count = bigram.count, "Common bigram");
            }
        }
    }

    Ok(())
}

/// Resolves the input path from the CLI or settings and runs the pipeline once.
fn load_table(input: Option<PathBuf>, settings: &Settings) -> Result<CleanTable> {
    let Some(path) = input.or_else(|| settings.input.clone()) else {
        bail!("no input given: pass INPUT or set PIXELS_INPUT");
    };

    run(&path).with_context(|| format!("cleaning {} failed", path.display()))
}
