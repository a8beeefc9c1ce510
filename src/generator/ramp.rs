//! Ramp entry paths: gradual tool descent instead of a vertical plunge.
//!
//! Both strategies walk along the piece's bottom edge, folding the
//! direction back whenever the edge runs out, and finish with a closing
//! waypoint at the entry corner at the target depth so the outline pass
//! always starts from the same point.

use crate::config::EPS;

/// One waypoint of a ramp descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Constant-angle descent along the bottom edge.
///
/// The horizontal run for each step follows from the entry angle; steps
/// never descend more than `max_step_z`. When the required run exceeds
/// the edge length the path folds back and forth, descending
/// proportionally over the available room.
pub fn linear_ramp(
    start_x: f64,
    start_y: f64,
    edge_len: f64,
    z_from: f64,
    z_to: f64,
    angle_deg: f64,
    max_step_z: f64,
) -> Vec<RampPoint> {
    let descent = z_from - z_to;
    if descent <= EPS || edge_len <= EPS || angle_deg <= 0.0 {
        return vec![RampPoint {
            x: start_x,
            y: start_y,
            z: z_to,
        }];
    }

    let slope = angle_deg.to_radians().tan();
    let step_cap = if max_step_z > EPS { max_step_z } else { descent };

    let mut points = Vec::new();
    let mut remaining = descent;
    let mut z = z_from;
    let mut offset = 0.0_f64;
    let mut dir = 1.0_f64;

    while remaining > EPS {
        let step_dz = remaining.min(step_cap);
        let travel = step_dz / slope;
        let room = if dir > 0.0 { edge_len - offset } else { offset };
        if room <= EPS {
            dir = -dir;
            continue;
        }

        // Fold at the edge end: descend only as far as the room allows.
        let (dz_here, move_len) = if travel > room {
            (step_dz * room / travel, room)
        } else {
            (step_dz, travel)
        };

        offset += dir * move_len;
        z -= dz_here;
        remaining -= dz_here;
        points.push(RampPoint {
            x: start_x + offset,
            y: start_y,
            z,
        });
    }

    points.push(RampPoint {
        x: start_x,
        y: start_y,
        z: z_to,
    });
    points
}

/// Oscillating descent near the entry corner.
///
/// Each step advances `pitch` along the bottom edge while the Y
/// coordinate alternates between the edge and `amplitude` into the
/// piece; every step descends at most `max_step_z`.
pub fn zigzag_ramp(
    start_x: f64,
    start_y: f64,
    edge_len: f64,
    z_from: f64,
    z_to: f64,
    amplitude: f64,
    pitch: f64,
    max_step_z: f64,
) -> Vec<RampPoint> {
    let descent = z_from - z_to;
    if descent <= EPS || edge_len <= EPS || pitch <= EPS {
        return vec![RampPoint {
            x: start_x,
            y: start_y,
            z: z_to,
        }];
    }

    let step_cap = if max_step_z > EPS { max_step_z } else { descent };

    let mut points = Vec::new();
    let mut remaining = descent;
    let mut z = z_from;
    let mut offset = 0.0_f64;
    let mut dir = 1.0_f64;
    let mut inward = false;

    while remaining > EPS {
        let room = if dir > 0.0 { edge_len - offset } else { offset };
        if room <= EPS {
            dir = -dir;
            continue;
        }

        let step_dz = remaining.min(step_cap);
        offset += dir * pitch.min(room);
        z -= step_dz;
        remaining -= step_dz;
        inward = !inward;

        points.push(RampPoint {
            x: start_x + offset,
            y: if inward { start_y + amplitude } else { start_y },
            z,
        });
    }

    points.push(RampPoint {
        x: start_x,
        y: start_y,
        z: z_to,
    });
    points
}
