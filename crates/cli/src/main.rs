//! # trendbreak-cli
//!
//! Command-line interface for trend-break revenue analysis.

mod render;

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use trendbreak_facade::{
    BreakEstimator, ConservativeEstimate, Period, ReportRenderer, RevenueSeries,
    TrendBreakEstimator, TrendBreakReport,
};

use render::TextRenderer;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "trendbreak")]
#[command(about = "Revenue trend-break analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a revenue series around a structural break
    Analyze {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Split point: a numeric index or a period label like "Dec 2023"
        #[arg(short, long)]
        split: String,

        /// Commission/share multiplier applied to the total gap
        #[arg(short, long, default_value = "0.35")]
        multiplier: f64,

        /// Starting period for inputs that carry amounts only (e.g. "Feb 2023")
        #[arg(long)]
        start_period: Option<String>,

        /// Externally supplied conservative loss figure to report alongside
        #[arg(long)]
        conservative_loss: Option<f64>,

        /// Output file for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load a revenue series from a CSV file with `period` and `revenue` columns.
fn load_csv_series(path: &PathBuf) -> CliResult<RevenueSeries> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let period_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("period") || h.eq_ignore_ascii_case("month"))
        .ok_or_else(|| "No 'period' or 'month' column found".to_string())?;
    let amount_idx = headers
        .iter()
        .position(|h| {
            h.eq_ignore_ascii_case("revenue")
                || h.eq_ignore_ascii_case("amount")
                || h.eq_ignore_ascii_case("value")
        })
        .ok_or_else(|| "No 'revenue', 'amount', or 'value' column found".to_string())?;

    let mut periods = Vec::new();
    let mut amounts = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let label = record
            .get(period_idx)
            .ok_or_else(|| "Missing period field".to_string())?;
        let amount = record
            .get(amount_idx)
            .ok_or_else(|| "Missing amount field".to_string())?;

        periods.push(label.trim().parse::<Period>().map_err(|e| e.to_string())?);
        amounts.push(
            amount
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("Bad amount '{}': {}", amount, e))?,
        );
    }

    RevenueSeries::new(periods, amounts).map_err(|e| e.to_string())
}

/// Load a revenue series from a JSON file.
///
/// Accepts an array of `{period, revenue}` objects, an object with `periods`
/// and `revenues` arrays, or a bare array of numbers (which needs
/// `start_period` to synthesize consecutive months).
fn load_json_series(path: &PathBuf, start_period: Option<&str>) -> CliResult<RevenueSeries> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if let Some(arr) = json.as_array() {
        // Bare array of numbers
        if arr.iter().all(|v| v.is_number()) {
            let amounts: Vec<f64> = arr.iter().filter_map(|v| v.as_f64()).collect();
            let start = start_period
                .ok_or_else(|| {
                    "Input carries amounts only; pass --start-period to label them".to_string()
                })?
                .parse::<Period>()
                .map_err(|e| e.to_string())?;
            return RevenueSeries::from_start(start, amounts).map_err(|e| e.to_string());
        }

        // Array of objects
        let mut periods = Vec::new();
        let mut amounts = Vec::new();
        for obj in arr {
            let label = obj
                .get("period")
                .or_else(|| obj.get("month"))
                .and_then(|v| v.as_str())
                .ok_or_else(|| "Object entry is missing a 'period' field".to_string())?;
            let amount = ["revenue", "amount", "value"]
                .iter()
                .find_map(|k| obj.get(*k).and_then(|v| v.as_f64()))
                .ok_or_else(|| "Object entry is missing a numeric amount field".to_string())?;
            periods.push(label.parse::<Period>().map_err(|e| e.to_string())?);
            amounts.push(amount);
        }
        if !periods.is_empty() {
            return RevenueSeries::new(periods, amounts).map_err(|e| e.to_string());
        }
    }

    if let Some(obj) = json.as_object() {
        let labels = obj
            .get("periods")
            .or_else(|| obj.get("months"))
            .and_then(|v| v.as_array());
        let values = ["revenues", "amounts", "values"]
            .iter()
            .find_map(|k| obj.get(*k).and_then(|v| v.as_array()));
        if let (Some(labels), Some(values)) = (labels, values) {
            let periods = labels
                .iter()
                .map(|l| {
                    l.as_str()
                        .ok_or_else(|| "Period labels must be strings".to_string())
                        .and_then(|s| s.parse::<Period>().map_err(|e| e.to_string()))
                })
                .collect::<CliResult<Vec<Period>>>()?;
            let amounts: Vec<f64> = values.iter().filter_map(|v| v.as_f64()).collect();
            return RevenueSeries::new(periods, amounts).map_err(|e| e.to_string());
        }
    }

    Err("Could not extract a revenue series from JSON".to_string())
}

/// Load a series from file (auto-detect format)
fn load_series(path: &PathBuf, start_period: Option<&str>) -> CliResult<RevenueSeries> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_series(path),
        "json" => load_json_series(path, start_period),
        _ => load_csv_series(path).or_else(|_| load_json_series(path, start_period)),
    }
}

/// Resolve a split argument: a numeric index, or a period label.
fn resolve_split(series: &RevenueSeries, split: &str) -> CliResult<usize> {
    if let Ok(index) = split.parse::<usize>() {
        return Ok(index);
    }
    let period = split.parse::<Period>().map_err(|e| e.to_string())?;
    series
        .position_of(period)
        .ok_or_else(|| format!("Period '{}' is not in the series", split))
}

/// Write the JSON report to file, if requested
fn write_report(
    report: &TrendBreakReport,
    conservative: Option<&ConservativeEstimate>,
    output: Option<&PathBuf>,
) -> CliResult<()> {
    let json = serde_json::json!({
        "report": report,
        "conservative_estimate": conservative,
    });

    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Report written to {:?}", path);
    }

    Ok(())
}

/// Run analyze command
fn run_analyze(
    input: PathBuf,
    split: String,
    multiplier: f64,
    start_period: Option<String>,
    conservative_loss: Option<f64>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let series = load_series(&input, start_period.as_deref())?;
    println!(
        "Loaded {} months from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let split_index = resolve_split(&series, &split)?;
    let split = series.split_at(split_index).map_err(|e| e.to_string())?;

    let estimator = TrendBreakEstimator::new(multiplier).map_err(|e| e.to_string())?;
    let report = estimator
        .estimate(&series, split)
        .map_err(|e| e.to_string())?;

    let text = TextRenderer
        .render(&series, &report)
        .map_err(|e| e.to_string())?;
    println!("\n{}", text);

    let conservative =
        conservative_loss.map(|loss| ConservativeEstimate::from_loss(loss, multiplier));
    if let Some(ref estimate) = conservative {
        println!(
            "Conservative estimate (supplied): revenue {:.2}, commission {:.2}",
            estimate.loss, estimate.scaled_loss
        );
    }

    write_report(&report, conservative.as_ref(), output.as_ref())?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            split,
            multiplier,
            start_period,
            conservative_loss,
            output,
        } => run_analyze(
            input,
            split,
            multiplier,
            start_period,
            conservative_loss,
            output,
        ),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
