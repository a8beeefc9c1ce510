//! Machining time estimation for a placed layout.
//!
//! The model mirrors the emitter's motion plan: every piece is cut
//! along its full perimeter once per depth pass, each pass starts with
//! a plunge, and rapid positioning follows the emission order starting
//! from the machine origin, including the Z approach and retract legs
//! at the emitter's safe height.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CutConfig, SheetConfig, MIN_TO_SEC, SAFE_Z_HEIGHT};
use crate::model::PositionedPiece;

/// Estimated machining duration, broken down by motion class.
///
/// All values are seconds; `total_s` is always the exact sum of the
/// three components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeEstimate {
    #[serde(rename = "tempoTotal")]
    pub total_s: f64,
    #[serde(rename = "tempoCorte")]
    pub cutting_s: f64,
    #[serde(rename = "tempoMergulho")]
    pub plunge_s: f64,
    #[serde(rename = "tempoPosicionamento")]
    pub positioning_s: f64,
}

/// Estimate the machining time for the placed pieces.
///
/// Empty input yields an all-zero estimate. The estimate is monotonic
/// in the piece count: adding a piece never lowers the total.
pub fn estimate(
    placed: &[PositionedPiece],
    sheet: &SheetConfig,
    cut: &CutConfig,
) -> TimeEstimate {
    if placed.is_empty() {
        return TimeEstimate::default();
    }

    debug!(
        pieces = placed.len(),
        sheet_width = sheet.width,
        sheet_height = sheet.height,
        "estimating machining time"
    );

    let passes = cut.pass_count() as f64;
    let mut cutting = 0.0;
    let mut plunge = 0.0;
    let mut positioning = 0.0;

    // Rapids begin at the machine origin.
    let (mut last_x, mut last_y) = (0.0_f64, 0.0_f64);

    for piece in placed {
        let perimeter = 2.0 * (piece.piece.width + piece.piece.height);
        cutting += perimeter / cut.feedrate * MIN_TO_SEC * passes;
        plunge += cut.depth_per_pass / cut.plunge_rate * MIN_TO_SEC * passes;

        let travel = ((piece.x - last_x).powi(2) + (piece.y - last_y).powi(2)).sqrt();
        let z_legs = SAFE_Z_HEIGHT + (cut.depth + SAFE_Z_HEIGHT);
        positioning += (travel + z_legs) / cut.rapids_speed * MIN_TO_SEC;

        last_x = piece.x;
        last_y = piece.y;
    }

    let cutting_s = round2(cutting);
    let plunge_s = round2(plunge);
    let positioning_s = round2(positioning);

    TimeEstimate {
        total_s: cutting_s + plunge_s + positioning_s,
        cutting_s,
        plunge_s,
        positioning_s,
    }
}

/// Render a duration in seconds as a compact human-readable string.
///
/// Minutes and seconds are remainders, zero-padded to two digits when a
/// larger unit precedes them: `125` is `"2min 05s"`, `3665` is
/// `"1h 01min 05s"`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if total < 60 {
        format!("{secs}s")
    } else if total < 3600 {
        format!("{minutes}min {secs:02}s")
    } else {
        format!("{hours}h {minutes:02}min {secs:02}s")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutKind, Piece};
    use pretty_assertions::assert_eq;

    fn placed(id: &str, w: f64, h: f64, x: f64, y: f64) -> PositionedPiece {
        PositionedPiece::new(Piece::new(id, w, h, CutKind::Outside), x, y)
    }

    fn configs() -> (SheetConfig, CutConfig) {
        (
            SheetConfig {
                width: 1000.0,
                height: 1000.0,
                thickness: 15.0,
            },
            CutConfig {
                depth: 15.0,
                depth_per_pass: 5.0,
                spacing: 10.0,
                ..CutConfig::default()
            },
        )
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let (sheet, cut) = configs();
        let t = estimate(&[], &sheet, &cut);
        assert_eq!(t, TimeEstimate::default());
    }

    #[test]
    fn test_single_piece_has_all_components() {
        let (sheet, cut) = configs();
        let t = estimate(&[placed("1", 100.0, 100.0, 0.0, 0.0)], &sheet, &cut);
        assert!(t.cutting_s > 0.0);
        assert!(t.plunge_s > 0.0);
        // Even at the origin, the Z approach and retract cost time
        assert!(t.positioning_s > 0.0);
        assert_eq!(t.total_s, t.cutting_s + t.plunge_s + t.positioning_s);
    }

    #[test]
    fn test_known_cutting_time() {
        let (sheet, cut) = configs();
        // 400mm perimeter at 1500mm/min over 3 passes: 48s
        let t = estimate(&[placed("1", 100.0, 100.0, 0.0, 0.0)], &sheet, &cut);
        assert_eq!(t.cutting_s, 48.0);
        // 5mm plunge at 500mm/min over 3 passes: 1.8s
        assert_eq!(t.plunge_s, 1.8);
    }

    #[test]
    fn test_monotonic_in_piece_count() {
        let (sheet, cut) = configs();
        let one = vec![placed("1", 100.0, 100.0, 0.0, 0.0)];
        let two = vec![
            placed("1", 100.0, 100.0, 0.0, 0.0),
            placed("2", 100.0, 100.0, 200.0, 0.0),
        ];
        let t1 = estimate(&one, &sheet, &cut);
        let t2 = estimate(&two, &sheet, &cut);
        assert!(t2.total_s > t1.total_s);
        assert!(t2.cutting_s >= t1.cutting_s);
        assert!(t2.positioning_s >= t1.positioning_s);
    }

    #[test]
    fn test_format_duration_exact_strings() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(45.0), "45s");
        assert_eq!(format_duration(125.0), "2min 05s");
        assert_eq!(format_duration(3665.0), "1h 01min 05s");
    }

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(59.0), "59s");
        assert_eq!(format_duration(60.0), "1min 00s");
        assert_eq!(format_duration(3599.0), "59min 59s");
        assert_eq!(format_duration(3600.0), "1h 00min 00s");
        assert_eq!(format_duration(7322.0), "2h 02min 02s");
    }

    #[test]
    fn test_wire_names() {
        let (sheet, cut) = configs();
        let t = estimate(&[placed("1", 100.0, 100.0, 0.0, 0.0)], &sheet, &cut);
        let json = serde_json::to_string(&t).expect("estimate should serialize");
        for key in ["tempoTotal", "tempoCorte", "tempoMergulho", "tempoPosicionamento"] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }
}
