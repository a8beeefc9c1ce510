//! Nesting engine: places rectangular pieces onto a bounded sheet.
//!
//! Three interchangeable heuristics implement the same placement
//! contract and are selected by [`NestingMethod`]. Placement is
//! deterministic: pieces are processed in descending priority with
//! stable input order, and every tie-break inside a heuristic is
//! stable, so repeated calls with identical input produce identical
//! coordinates.

mod greedy;
mod guillotine;
mod shelf;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{float_cmp, EPS};
use crate::model::{NestingMethod, Piece, PositionedPiece};

/// Area and timing metrics of one nesting run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestingMetrics {
    /// Summed area of every input piece, placed or not.
    #[serde(rename = "areaTotal")]
    pub area_total: f64,
    /// Summed area of the placed pieces.
    #[serde(rename = "areaUtilizada")]
    pub area_used: f64,
    /// Placed area over sheet area, as a percentage (0..=100).
    #[serde(rename = "eficiencia")]
    pub efficiency: f64,
    /// Wall-clock cost of the heuristic, in milliseconds.
    #[serde(rename = "tempo")]
    pub elapsed_ms: f64,
}

/// Outcome of one nesting run. Every input piece appears in exactly one
/// of `placed`/`unplaced`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NestingResult {
    #[serde(rename = "posicionadas")]
    pub placed: Vec<PositionedPiece>,
    #[serde(rename = "naoCouberam")]
    pub unplaced: Vec<Piece>,
    #[serde(rename = "metricas")]
    pub metrics: NestingMetrics,
}

/// The margin-shrunk placement region plus the inter-piece spacing.
///
/// For both fit and overlap purposes a piece occupies its
/// spacing-inflated footprint `(width + spacing) x (height + spacing)`,
/// which must lie inside the region. This guarantees a gap of at least
/// `spacing` between any two pieces and between a piece and the margin
/// boundary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacementFrame {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub spacing: f64,
}

impl PlacementFrame {
    fn new(sheet_width: f64, sheet_height: f64, spacing: f64, margin: f64) -> Self {
        Self {
            min_x: margin,
            min_y: margin,
            max_x: sheet_width - margin,
            max_y: sheet_height - margin,
            spacing,
        }
    }

    /// Check whether a piece's inflated footprint fits at `(x, y)`.
    pub fn fits_at(&self, x: f64, y: f64, piece: &Piece) -> bool {
        x >= self.min_x - EPS
            && y >= self.min_y - EPS
            && float_cmp::leq(x + piece.width + self.spacing, self.max_x)
            && float_cmp::leq(y + piece.height + self.spacing, self.max_y)
    }
}

/// Check whether an inflated footprint at `(x, y)` collides with any
/// already placed piece.
pub(crate) fn collides_with_placed(
    placed: &[PositionedPiece],
    x: f64,
    y: f64,
    piece: &Piece,
    spacing: f64,
) -> bool {
    placed.iter().any(|q| {
        x < q.x_max() + spacing - EPS
            && q.x < x + piece.width + spacing - EPS
            && y < q.y_max() + spacing - EPS
            && q.y < y + piece.height + spacing - EPS
    })
}

/// Place pieces onto the sheet using the selected heuristic.
///
/// `edge_margin` defaults to `spacing` when `None`, so the sheet border
/// gets the same clearance as the gap between pieces. Pieces that cannot
/// be placed (including degenerate inputs such as non-positive
/// dimensions) end up in `unplaced`; this is a reportable outcome, not
/// an error.
pub fn nest(
    pieces: &[Piece],
    sheet_width: f64,
    sheet_height: f64,
    spacing: f64,
    method: NestingMethod,
    edge_margin: Option<f64>,
) -> NestingResult {
    let start = Instant::now();

    if pieces.is_empty() {
        return NestingResult::default();
    }

    let margin = edge_margin.unwrap_or(spacing);
    let frame = PlacementFrame::new(sheet_width, sheet_height, spacing, margin);

    // Degenerate dimensions never fit; keep them out of the heuristics
    // so the engine reports them instead of misplacing them.
    let (valid, degenerate): (Vec<Piece>, Vec<Piece>) = order_by_priority(pieces)
        .into_iter()
        .partition(|p| p.width > 0.0 && p.height > 0.0);

    let (placed, mut unplaced) = match method {
        NestingMethod::Greedy => greedy::place(&valid, &frame),
        NestingMethod::Shelf => shelf::place(&valid, &frame),
        NestingMethod::Guillotine => guillotine::place(&valid, &frame),
    };
    unplaced.extend(degenerate);

    debug!(
        method = %method,
        placed = placed.len(),
        unplaced = unplaced.len(),
        "nesting finished"
    );
    if !unplaced.is_empty() {
        warn!(count = unplaced.len(), "pieces did not fit on the sheet");
    }

    let area_total: f64 = pieces.iter().map(Piece::area).sum();
    let area_used: f64 = placed.iter().map(|p| p.piece.area()).sum();
    let sheet_area = sheet_width * sheet_height;
    let efficiency = if sheet_area > 0.0 {
        round2((area_used / sheet_area * 100.0).min(100.0))
    } else {
        0.0
    };

    NestingResult {
        placed,
        unplaced,
        metrics: NestingMetrics {
            area_total,
            area_used,
            efficiency,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}

/// Stable placement order: higher priority first, input order on ties.
fn order_by_priority(pieces: &[Piece]) -> Vec<Piece> {
    let mut ordered = pieces.to_vec();
    ordered.sort_by(|a, b| b.placement_priority().cmp(&a.placement_priority()));
    ordered
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
