//! Shelf placement: fixed-height rows packed left to right.
//!
//! The current shelf grows to the tallest inflated piece assigned to
//! it. When a piece does not fit the remaining shelf width, a new shelf
//! opens above the previous one; a piece too tall for the remaining
//! sheet height is reported as unplaced and later pieces continue on
//! the current shelf.

use super::PlacementFrame;
use crate::config::float_cmp;
use crate::model::{Piece, PositionedPiece};

pub(super) fn place(
    pieces: &[Piece],
    frame: &PlacementFrame,
) -> (Vec<PositionedPiece>, Vec<Piece>) {
    let mut placed: Vec<PositionedPiece> = Vec::with_capacity(pieces.len());
    let mut unplaced: Vec<Piece> = Vec::new();

    let mut cursor_x = frame.min_x;
    let mut shelf_y = frame.min_y;
    let mut shelf_height: f64 = 0.0;

    for piece in pieces {
        let inflated_w = piece.width + frame.spacing;
        let inflated_h = piece.height + frame.spacing;

        // Wider than a fresh shelf: can never fit with this method.
        if !float_cmp::leq(frame.min_x + inflated_w, frame.max_x) {
            unplaced.push(piece.clone());
            continue;
        }

        let needs_new_shelf = !float_cmp::leq(cursor_x + inflated_w, frame.max_x);
        let (x, y) = if needs_new_shelf {
            (frame.min_x, shelf_y + shelf_height)
        } else {
            (cursor_x, shelf_y)
        };

        // Height check happens before the shelf advance commits, so a
        // too-tall piece does not burn the remainder of the current row.
        if !float_cmp::leq(y + inflated_h, frame.max_y) {
            unplaced.push(piece.clone());
            continue;
        }

        if needs_new_shelf {
            shelf_y += shelf_height;
            shelf_height = 0.0;
        }

        placed.push(PositionedPiece::new(piece.clone(), x, y));
        cursor_x = x + inflated_w;
        shelf_height = shelf_height.max(inflated_h);
    }

    (placed, unplaced)
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
    fn test_pieces_fill_a_row_left_to_right() {
        let f = frame(1000.0, 1000.0, 10.0, 0.0);
        let pieces = vec![piece("1", 200.0, 100.0), piece("2", 200.0, 100.0)];
        let (placed, unplaced) = place(&pieces, &f);
        assert_eq!(unplaced.len(), 0);
        assert_eq!((placed[0].x, placed[0].y), (0.0, 0.0));
        assert_eq!((placed[1].x, placed[1].y), (210.0, 0.0));
    }

    #[test]
    fn test_new_shelf_rises_by_tallest_piece() {
        let f = frame(500.0, 1000.0, 10.0, 0.0);
        let pieces = vec![
            piece("short", 200.0, 100.0),
            piece("tall", 200.0, 180.0),
            piece("next-row", 200.0, 100.0),
        ];
        let (placed, unplaced) = place(&pieces, &f);
        assert_eq!(unplaced.len(), 0);
        // Shelf height follows the tallest inflated piece (180 + 10)
        assert_eq!((placed[2].x, placed[2].y), (0.0, 190.0));
    }

    #[test]
    fn test_too_tall_piece_fails_without_burning_the_row() {
        let f = frame(1000.0, 300.0, 0.0, 0.0);
        let pieces = vec![
            piece("a", 400.0, 200.0),
            piece("giant", 400.0, 500.0),
            piece("b", 400.0, 200.0),
        ];
        let (placed, unplaced) = place(&pieces, &f);
        assert_eq!(unplaced.len(), 1);
        assert_eq!(unplaced[0].id, "giant");
        // "b" still lands on the first shelf next to "a"
        assert_eq!((placed[1].x, placed[1].y), (400.0, 0.0));
    }

    #[test]
    fn test_full_sheet_piece_fits_with_zero_clearances() {
        let f = frame(1000.0, 1000.0, 0.0, 0.0);
        let (placed, unplaced) = place(&[piece("1", 1000.0, 1000.0)], &f);
        assert_eq!(unplaced.len(), 0);
        assert_eq!((placed[0].x, placed[0].y), (0.0, 0.0));
    }
}
