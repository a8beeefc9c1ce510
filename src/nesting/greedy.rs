//! Greedy anchor-scan placement.
//!
//! Candidate anchors are the region origin plus, for every placed
//! piece, the points just past its right edge and just above its top
//! edge (inflated by the spacing). Anchors are scanned bottom-left
//! first, sorted by `(y, x)`; the first anchor where the piece fits
//! wins and the piece is never repositioned afterwards.

use super::{collides_with_placed, PlacementFrame};
use crate::model::{Piece, PositionedPiece};

pub(super) fn place(
    pieces: &[Piece],
    frame: &PlacementFrame,
) -> (Vec<PositionedPiece>, Vec<Piece>) {
    let mut placed: Vec<PositionedPiece> = Vec::with_capacity(pieces.len());
    let mut unplaced: Vec<Piece> = Vec::new();
    let mut anchors: Vec<(f64, f64)> = vec![(frame.min_x, frame.min_y)];

    for piece in pieces {
        anchors.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.total_cmp(&b.0)));

        let spot = anchors.iter().copied().find(|&(x, y)| {
            frame.fits_at(x, y, piece)
                && !collides_with_placed(&placed, x, y, piece, frame.spacing)
        });

        match spot {
            Some((x, y)) => {
                anchors.push((x + piece.width + frame.spacing, y));
                anchors.push((x, y + piece.height + frame.spacing));
                placed.push(PositionedPiece::new(piece.clone(), x, y));
            }
            None => unplaced.push(piece.clone()),
        }
    }

    (placed, unplaced)
}
