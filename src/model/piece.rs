//! Piece definitions: the caller-supplied rectangle and its placed form.

use serde::{Deserialize, Serialize};

/// How the tool relates to the drawn rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CutKind {
    /// Cut around the outside of the rectangle (the piece is kept).
    #[default]
    #[serde(rename = "externo")]
    Outside,
    /// Cut around the inside (the rectangle is a pocket or opening).
    #[serde(rename = "interno")]
    Inside,
    /// Cut centered on the rectangle outline.
    #[serde(rename = "na-linha")]
    OnLine,
}

impl CutKind {
    /// Wire/display name of the cut kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CutKind::Outside => "externo",
            CutKind::Inside => "interno",
            CutKind::OnLine => "na-linha",
        }
    }
}

/// A single rectangular workpiece requested by the caller.
///
/// Pieces are immutable inputs: the nesting engine never changes them, it
/// only attaches coordinates by wrapping them in [`PositionedPiece`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Caller-supplied unique identifier.
    pub id: String,
    /// Piece width in mm.
    #[serde(rename = "largura")]
    pub width: f64,
    /// Piece height in mm.
    #[serde(rename = "altura")]
    pub height: f64,
    /// Tool position relative to the outline.
    #[serde(rename = "tipoCorte")]
    pub cut_kind: CutKind,
    /// Placement priority, 1..10; higher values are placed first.
    #[serde(rename = "prioridade", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Human-readable piece name.
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Marker carried through from the caller's piece list.
    #[serde(rename = "ignorada", default, skip_serializing_if = "Option::is_none")]
    pub ignored: Option<bool>,
    /// Original sequence number in the caller's drawing.
    #[serde(
        rename = "numeroOriginal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_number: Option<i64>,
}

impl Piece {
    /// Create a piece with just the required fields.
    pub fn new(id: impl Into<String>, width: f64, height: f64, cut_kind: CutKind) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            cut_kind,
            priority: None,
            name: None,
            ignored: None,
            original_number: None,
        }
    }

    /// Piece surface area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Display label: the name when present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Priority used for placement ordering (missing priority sorts last).
    pub fn placement_priority(&self) -> u8 {
        self.priority.unwrap_or(0)
    }
}

/// A piece with its placement on the sheet attached.
///
/// `x`/`y` locate the bottom-left corner in sheet coordinates, origin at
/// the sheet's bottom-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPiece {
    #[serde(flatten)]
    pub piece: Piece,
    pub x: f64,
    pub y: f64,
}

impl PositionedPiece {
    /// Attach a placement to a piece.
    pub fn new(piece: Piece, x: f64, y: f64) -> Self {
        Self { piece, x, y }
    }

    /// Right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.x + self.piece.width
    }

    /// Top edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.y + self.piece.height
    }

    /// Check whether the spacing-inflated footprints of two placements
    /// overlap. Footprints that merely touch (gap exactly `spacing`) do
    /// not count as overlapping.
    pub fn inflated_overlaps(&self, other: &Self, spacing: f64) -> bool {
        use crate::config::EPS;

        let x_overlap = self.x < other.x_max() + spacing - EPS
            && other.x < self.x_max() + spacing - EPS;
        let y_overlap = self.y < other.y_max() + spacing - EPS
            && other.y < self.y_max() + spacing - EPS;
        x_overlap && y_overlap
    }
}
