//! CLI entry point for the interactive CSV cleaning tool.

use anyhow::{Result, anyhow};
use clap::Parser;
use csv_janitor::{
    AnalysisReport, CleanerConfig, CleaningAction, CleaningSummary, DataCleaner, QualityAnalyzer,
    advisor, dataset,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Inspect a CSV dataset for data-quality issues and optionally clean it",
    long_about = "Inspects a CSV dataset for missing values, duplicated values per column\n\
                  and fully-duplicated rows, then applies the cleaning steps you select\n\
                  and writes a cleaned copy next to the input.\n\n\
                  EXAMPLES:\n  \
                  # Interactive session\n  \
                  csv-janitor data.csv\n\n  \
                  # Apply every suggested step without prompting\n  \
                  csv-janitor data.csv --yes\n\n  \
                  # Machine-readable report only\n  \
                  csv-janitor data.csv --json"
)]
struct Args {
    /// Path to the CSV file to inspect (prompted for when omitted)
    input: Option<String>,

    /// Explicit output path for the cleaned dataset
    ///
    /// If not specified, the output filename is the input filename with the
    /// prefix prepended, in the input's directory
    #[arg(short, long)]
    output: Option<String>,

    /// Prefix used to derive the output filename from the input
    #[arg(long, default_value = "cleaned_")]
    prefix: String,

    /// Apply these suggested steps without prompting (comma-separated
    /// 1-based step numbers, e.g. --select 1,2)
    #[arg(short, long)]
    select: Option<String>,

    /// Apply every suggested step without prompting
    #[arg(short = 'y', long, conflicts_with = "select")]
    yes: bool,

    /// Report issues and suggestions without cleaning anything
    #[arg(long)]
    analyze_only: bool,

    /// Output the analysis report as JSON on stdout instead of the
    /// interactive session
    ///
    /// Disables all logging; only JSON is written to stdout. Combine with
    /// --select or --yes to also clean non-interactively.
    #[arg(long)]
    json: bool,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.quiet, args.json);

    let mut config = CleanerConfig::builder()
        .output_prefix(&args.prefix)
        .analyze_only(args.analyze_only);
    if let Some(ref output) = args.output {
        config = config.output_path(output);
    }
    let config = config.build()?;

    let input = resolve_input(&args)?;
    if !input.exists() {
        return Err(anyhow!("Input file not found: {}", input.display()));
    }

    info!("Loading dataset from: {}", input.display());
    let df = dataset::read_dataset(&input)?;
    info!("Dataset loaded: {} rows x {} columns", df.height(), df.width());

    let report = QualityAnalyzer::analyze(&df)?;
    let suggested = advisor::suggest(&report);

    // user-facing output goes through println!, not the logger, so it is
    // visible regardless of log level
    if !args.json {
        if report.is_empty() {
            println!("No issues found in the data.");
        } else {
            println!("Issues found in the data:");
            print!("{report}");
        }

        if suggested.is_empty() {
            println!("No cleaning and preprocessing steps suggested.");
        } else {
            println!();
            println!("Cleaning and preprocessing steps suggested:");
            for (i, action) in suggested.iter().enumerate() {
                println!("{}. {}", i + 1, action);
            }
        }
    }

    let selected = choose_actions(&args, &config, &suggested)?;

    if selected.is_empty() {
        if args.json {
            let analysis = AnalysisReport::build(&input.display().to_string(), &df, &report, &suggested);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else if !suggested.is_empty() && !config.analyze_only {
            println!("No cleaning steps applied; dataset left unchanged.");
        }
        return Ok(());
    }

    let analysis = AnalysisReport::build(&input.display().to_string(), &df, &report, &suggested);
    let (mut cleaned, summary) = DataCleaner.apply(df, &selected)?;

    let output = config.resolve_output_path(&input);
    dataset::write_dataset(&mut cleaned, &output)?;

    if args.json {
        let analysis = analysis.with_cleaning(summary, output.display().to_string());
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("Cleaned data written to {}", output.display());
        print_summary(&summary);
    }

    Ok(())
}

/// Take the input path from the CLI or prompt for it.
fn resolve_input(args: &Args) -> Result<PathBuf> {
    let raw = match &args.input {
        Some(path) => path.clone(),
        None => prompt("Enter the filename of the raw dataset (CSV format): ")?,
    };
    Ok(PathBuf::from(raw.trim()))
}

/// Decide which actions to apply, from flags or by prompting.
fn choose_actions(
    args: &Args,
    config: &CleanerConfig,
    suggested: &[CleaningAction],
) -> Result<Vec<CleaningAction>> {
    if suggested.is_empty() || config.analyze_only {
        return Ok(Vec::new());
    }
    if args.yes {
        return Ok(suggested.to_vec());
    }
    if let Some(ref selection) = args.select {
        return Ok(advisor::parse_selection(selection, suggested)?);
    }
    if args.json {
        // no explicit selection in JSON mode means analyze only
        return Ok(Vec::new());
    }

    let input = prompt(
        "Enter the numbers of the cleaning and preprocessing steps to apply (separated by commas): ",
    )?;
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(advisor::parse_selection(&input, suggested)?)
}

/// Print a prompt and read one line from stdin.
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Print a human-readable summary of the cleaning results.
fn print_summary(summary: &CleaningSummary) {
    println!();
    println!("Cleaning summary:");
    println!(
        "  Rows: {} -> {} ({} removed)",
        summary.rows_before, summary.rows_after, summary.rows_removed
    );
    if summary.cells_filled > 0 {
        println!("  Cells filled: {}", summary.cells_filled);
    }
    for action in &summary.actions {
        println!("  - {action}");
    }
}
