//! nestcut - CLI tool to nest pieces and generate router G-code.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use nestcut::{parse_job_file, run_job, validate_request, NestingMethod};

/// Nest rectangular pieces on a sheet and generate CNC router G-code.
#[derive(Parser, Debug)]
#[command(name = "nestcut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output G-code file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the nesting method from the job file (greedy|shelf|guillotine)
    #[arg(short, long)]
    method: Option<String>,

    /// Generate the program without comments
    #[arg(long)]
    no_comments: bool,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print the estimated machining time and exit
    #[arg(long)]
    estimate: bool,

    /// Output the full result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Parse the job file
    let mut request = parse_job_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    if let Some(method) = &args.method {
        request.method = parse_method(method)?;
    }
    if args.no_comments {
        request.include_comments = false;
    }

    info!(
        "Job: {} piece(s), sheet {}x{} mm, method {}",
        request.pieces.len(),
        request.sheet.width,
        request.sheet.height,
        request.method
    );

    // Validate
    let validation = validate_request(&request);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Run the pipeline
    let output = run_job(&request);

    for piece in &output.nesting.unplaced {
        warn!(
            "Piece {} ({} x {}) did not fit on the sheet",
            piece.label(),
            piece.width,
            piece.height
        );
    }

    info!(
        "Placed {} piece(s), efficiency {:.2}%, estimated time {}",
        output.nesting.placed.len(),
        output.nesting.metrics.efficiency,
        output.estimate_formatted
    );

    if args.estimate {
        println!("{}", output.estimate_formatted);
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("nc");
        path
    });

    std::fs::write(&output_path, &output.gcode)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Generated: {} ({} lines, {} bytes)",
        output_path.display(),
        output.line_count,
        output.size_bytes
    );

    Ok(())
}

/// Parse a method name given on the command line.
fn parse_method(name: &str) -> Result<NestingMethod> {
    match name.trim().to_lowercase().as_str() {
        "greedy" => Ok(NestingMethod::Greedy),
        "shelf" => Ok(NestingMethod::Shelf),
        "guillotine" => Ok(NestingMethod::Guillotine),
        other => anyhow::bail!("Unknown nesting method: {other}"),
    }
}
