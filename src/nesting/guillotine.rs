//! Guillotine placement with best-area-fit free rectangles.
//!
//! Free regions live in a flat growable vector; the consumed region is
//! removed by swap-and-pop. Each placement splits its region with a
//! guillotine cut into a right remainder (at the piece's inflated
//! height) and a top remainder (across the full region width). Adjacent
//! free rectangles are not merged; this affects nesting quality only,
//! never correctness.

use super::PlacementFrame;
use crate::config::{float_cmp, EPS};
use crate::model::{Piece, PositionedPiece};

/// One free rectangular region of the sheet.
#[derive(Debug, Clone, Copy)]
struct FreeRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl FreeRect {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn holds(&self, w: f64, h: f64) -> bool {
        float_cmp::leq(w, self.width) && float_cmp::leq(h, self.height)
    }
}

pub(super) fn place(
    pieces: &[Piece],
    frame: &PlacementFrame,
) -> (Vec<PositionedPiece>, Vec<Piece>) {
    let mut placed: Vec<PositionedPiece> = Vec::with_capacity(pieces.len());
    let mut unplaced: Vec<Piece> = Vec::new();

    let mut free: Vec<FreeRect> = vec![FreeRect {
        x: frame.min_x,
        y: frame.min_y,
        width: frame.max_x - frame.min_x,
        height: frame.max_y - frame.min_y,
    }];

    for piece in pieces {
        let inflated_w = piece.width + frame.spacing;
        let inflated_h = piece.height + frame.spacing;

        match best_area_fit(&free, inflated_w, inflated_h) {
            None => unplaced.push(piece.clone()),
            Some(index) => {
                let region = free.swap_remove(index);
                placed.push(PositionedPiece::new(piece.clone(), region.x, region.y));

                let right = FreeRect {
                    x: region.x + inflated_w,
                    y: region.y,
                    width: region.width - inflated_w,
                    height: inflated_h,
                };
                let top = FreeRect {
                    x: region.x,
                    y: region.y + inflated_h,
                    width: region.width,
                    height: region.height - inflated_h,
                };
                if right.width > EPS && right.height > EPS {
                    free.push(right);
                }
                if top.width > EPS && top.height > EPS {
                    free.push(top);
                }
            }
        }
    }

    (placed, unplaced)
}

/// Index of the free rectangle leaving the least waste, lowest index on
/// ties.
fn best_area_fit(free: &[FreeRect], w: f64, h: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, region) in free.iter().enumerate() {
        if !region.holds(w, h) {
            continue;
        }
        let leftover = region.area() - w * h;
        match best {
            Some((_, b)) if leftover >= b - EPS => {}
            _ => best = Some((i, leftover)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CutKind;
    use pretty_assertions::assert_eq;

    fn piece(id: &str, w: f64, h: f64) -> Piece {
        Piece::new(id, w, h, CutKind::Outside)
    }

    fn frame(w: f64, h: f64, spacing: f64, margin: f64) -> PlacementFrame {
        PlacementFrame {
            min_x: margin,
            min_y: margin,
            max_x: w - margin,
            max_y: h - margin,
            spacing,
        }
    }

    #[test]
    fn test_first_piece_lands_at_region_origin() {
        let f = frame(1000.0, 1000.0, 10.0, 10.0);
        let (placed, unplaced) = place(&[piece("1", 100.0, 100.0)], &f);
        assert_eq!(unplaced.len(), 0);
        assert_eq!((placed[0].x, placed[0].y), (10.0, 10.0));
    }

    #[test]
    fn test_split_produces_right_then_top_regions() {
        let f = frame(1000.0, 1000.0, 0.0, 0.0);
        let pieces = vec![
            piece("base", 600.0, 400.0),
            // Fits the right remainder (400 x 400) more tightly than the top
            piece("right", 380.0, 380.0),
            // Fits only the top remainder (1000 x 600)
            piece("top", 900.0, 500.0),
        ];
        let (placed, unplaced) = place(&pieces, &f);
        assert_eq!(unplaced.len(), 0);
        assert_eq!((placed[1].x, placed[1].y), (600.0, 0.0));
        assert_eq!((placed[2].x, placed[2].y), (0.0, 400.0));
    }

    #[test]
    fn test_best_area_fit_prefers_tightest_region() {
        let regions = vec![
            FreeRect { x: 0.0, y: 0.0, width: 500.0, height: 500.0 },
            FreeRect { x: 0.0, y: 500.0, width: 120.0, height: 120.0 },
        ];
        // Both hold 100x100; the small region wastes less
        assert_eq!(best_area_fit(&regions, 100.0, 100.0), Some(1));
        // Only the large one holds 200x200
        assert_eq!(best_area_fit(&regions, 200.0, 200.0), Some(0));
        // Nothing holds 600x600
        assert_eq!(best_area_fit(&regions, 600.0, 600.0), None);
    }

    #[test]
    fn test_consumed_region_is_not_reused() {
        let f = frame(300.0, 300.0, 0.0, 0.0);
        let pieces = vec![
            piece("a", 300.0, 300.0),
            piece("b", 10.0, 10.0),
        ];
        let (placed, unplaced) = place(&pieces, &f);
        assert_eq!(placed.len(), 1);
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].id, "b");
    }
}
