//! nestcut - rectangular nesting and G-code generation for CNC routers.
//!
//! This library places rectangular pieces onto a fixed-size sheet using
//! one of three interchangeable heuristics, estimates the machining
//! time of the resulting layout, and emits a multi-pass cutting program
//! for a CNC router. All core operations are synchronous pure functions
//! over in-memory values; file handling exists only at the job-parsing
//! boundary and in the CLI.
//!
//! # Example
//!
//! ```
//! use nestcut::{run_job, CutKind, JobRequest, Piece};
//!
//! let request = JobRequest::new(vec![
//!     Piece::new("1", 300.0, 200.0, CutKind::Outside),
//!     Piece::new("2", 450.0, 450.0, CutKind::Outside),
//! ]);
//!
//! let output = run_job(&request);
//! assert!(output.gcode.contains("G21"));
//! assert!(output.nesting.unplaced.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod generator;
pub mod model;
pub mod nesting;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{CutConfig, RampApplication, RampKind, SheetConfig, ToolConfig};
pub use error::{NestError, Result};
pub use estimator::{estimate, format_duration, TimeEstimate};
pub use generator::{generate_gcode, strip_comments};
pub use model::{CutKind, JobRequest, NestingMethod, Piece, PositionedPiece};
pub use nesting::{nest, NestingMetrics, NestingResult};
pub use parser::{parse_job, parse_job_file};
pub use validation::{validate_request, ValidationResult};

use serde::Serialize;

/// Output of one full job run: the program plus the metadata a caller
/// needs to present it.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutput {
    /// The generated program (or a textual error program).
    pub gcode: String,
    /// Placement outcome and area metrics.
    #[serde(rename = "nesting")]
    pub nesting: NestingResult,
    /// Machining time estimate for the placed pieces.
    #[serde(rename = "tempoEstimado")]
    pub estimate: TimeEstimate,
    /// Human-readable form of the total estimate.
    #[serde(rename = "tempoFormatado")]
    pub estimate_formatted: String,
    /// Line count of the generated program.
    #[serde(rename = "linhas")]
    pub line_count: usize,
    /// Size of the generated program in bytes.
    #[serde(rename = "tamanhoBytes")]
    pub size_bytes: usize,
}

/// Run the full pipeline: nesting, program emission and time estimate.
///
/// This never fails: pieces that do not fit are reported in
/// `nesting.unplaced` and inconsistent cut parameters surface as a
/// textual error program, so the caller decides what is fatal.
pub fn run_job(request: &JobRequest) -> JobOutput {
    let edge_margin = if request.cut.same_edge_margin {
        None
    } else {
        Some(request.cut.edge_margin)
    };

    let nesting = nest(
        &request.pieces,
        request.sheet.width,
        request.sheet.height,
        request.cut.spacing,
        request.method,
        edge_margin,
    );

    let gcode = generate_gcode(
        &nesting.placed,
        &request.sheet,
        &request.cut,
        request.tool.as_ref(),
        request.include_comments,
    );

    let estimate = estimator::estimate(&nesting.placed, &request.sheet, &request.cut);

    JobOutput {
        line_count: gcode.lines().count(),
        size_bytes: gcode.len(),
        estimate_formatted: format_duration(estimate.total_s),
        gcode,
        nesting,
        estimate,
    }
}
