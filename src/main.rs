use anyhow::{Context, bail};
use charts::{Binning, ChartData};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{LoggingSettings, MAX_BINS, MAX_PRECISION, OutputFormat, Settings};
use core_types::Sample;
use ingest::CsvSource;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod render;

/// The main entry point for the statlens command-line tool.
fn main() -> ExitCode {
    // Load STATLENS__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = match configuration::load_config(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    // Keeps the file writer flushing until main returns.
    let _log_guard = init_tracing(&settings.logging);

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &settings),
        Commands::Columns(args) => handle_columns(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed.");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Descriptive statistics and Tukey-fence outlier detection for a list of numbers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./statlens.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics and detect outliers.
    Analyze(AnalyzeArgs),
    /// List the numeric columns of a CSV file.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Comma-separated numbers (e.g., "5, 7, 8, 9, 10, 10, 25, 30, 100").
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    values: Option<String>,

    /// A CSV file with a header row.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// The CSV column to analyze. Defaults to the first numeric column.
    #[arg(long, requires = "csv")]
    column: Option<String>,

    /// Output format. Overrides `report.format`.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Fixed number of histogram bins. Overrides `histogram.bins`.
    #[arg(long)]
    bins: Option<usize>,

    /// Decimal places in table output. Overrides `report.precision`.
    #[arg(long)]
    precision: Option<usize>,
}

#[derive(Parser)]
struct ColumnsArgs {
    /// A CSV file with a header row.
    #[arg(long)]
    csv: PathBuf,
}

// ==============================================================================
// Logging
// ==============================================================================

/// File name of the optional log file inside `logging.directory`.
const LOG_FILE_NAME: &str = "statlens.log";

/// Installs the global subscriber: stderr always, plus a log file when
/// `logging.directory` is configured and can be opened. `RUST_LOG` takes
/// precedence over `logging.level`.
fn init_tracing(logging: &LoggingSettings) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    // stdout is reserved for the report itself.
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let mut open_error = None;
    let (file_layer, guard) = match logging.directory.as_deref().map(open_log_file) {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        Some(Err(e)) => {
            open_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // Reported once the subscriber exists; an unwritable log directory is not fatal.
    if let (Some(e), Some(dir)) = (open_error, &logging.directory) {
        tracing::warn!(error = %e, dir = %dir.display(), "Could not open log file; logging to stderr only.");
    }
    guard
}

/// Opens (creating directories as needed) `statlens.log` in `dir`, never rotated.
fn open_log_file(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Ingests the sample, runs the analysis and prints the report.
fn handle_analyze(args: AnalyzeArgs, settings: &Settings) -> anyhow::Result<()> {
    let precision = args.precision.unwrap_or(settings.report.precision);
    if precision > MAX_PRECISION {
        bail!("--precision must be at most {}", MAX_PRECISION);
    }
    let binning = match args.bins.or(settings.histogram.bins) {
        Some(0) => bail!("--bins must be at least 1"),
        Some(k) if k > MAX_BINS => bail!("--bins must be at most {}", MAX_BINS),
        Some(k) => Binning::Fixed(k),
        None => Binning::Sturges,
    };
    let format = args.format.unwrap_or(settings.report.format);

    let sample = load_sample(&args)?;
    tracing::info!(count = sample.len(), "Sample loaded.");

    let report = analyzer::analyze(&sample).context("Analysis failed")?;
    let charts = ChartData::build(&sample, &report, binning);

    match format {
        OutputFormat::Table => println!("{}", render::render_report(&report, &charts, precision)),
        OutputFormat::Json => println!("{}", render::render_json(&report, &charts)?),
    }
    Ok(())
}

fn load_sample(args: &AnalyzeArgs) -> anyhow::Result<Sample> {
    match (&args.values, &args.csv) {
        (Some(text), _) => Ok(ingest::parse_values(text).context("Invalid --values input")?),
        (None, Some(path)) => {
            let source = CsvSource::from_path(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let sample = source
                .column_sample(args.column.as_deref())
                .with_context(|| format!("No usable data in {}", path.display()))?;
            Ok(sample)
        }
        (None, None) => bail!("Provide either --values or --csv"),
    }
}

/// Prints the numeric columns that `analyze --column` accepts.
fn handle_columns(args: ColumnsArgs) -> anyhow::Result<()> {
    let source = CsvSource::from_path(&args.csv)
        .with_context(|| format!("Failed to read {}", args.csv.display()))?;
    let columns = source.numeric_columns();
    if columns.is_empty() {
        bail!("{} has no numeric columns", args.csv.display());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["#", "Column"]);
    for (i, name) in columns.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), name.clone()]);
    }
    println!("{table}");
    println!("{} rows", source.row_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created_in_a_writable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        assert!(open_log_file(&dir).is_ok());
        assert!(dir.join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn unusable_log_directory_is_an_error_not_a_panic() {
        // A regular file cannot have children, so the directory cannot exist.
        let file = tempfile::NamedTempFile::new().unwrap();
        let dir = file.path().join("logs");
        assert!(open_log_file(&dir).is_err());
    }

    #[test]
    fn bin_limit_matches_the_chart_cap() {
        assert_eq!(MAX_BINS, charts::MAX_BINS);
    }

    #[test]
    fn oversized_bins_are_rejected_before_analysis() {
        let args = AnalyzeArgs {
            values: Some("1, 2, 3".to_string()),
            csv: None,
            column: None,
            format: None,
            bins: Some(4611686018427387903),
            precision: None,
        };
        let err = handle_analyze(args, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("--bins must be at most"));
    }
}
