//! G-code program emission for a placed layout.

use tracing::debug;

use super::gcode::{format_coord, ProgramWriter};
use super::ramp::{linear_ramp, zigzag_ramp, RampPoint};
use crate::config::{
    CutConfig, RampApplication, RampKind, SheetConfig, ToolConfig, EPS, SAFE_Z_HEIGHT,
};
use crate::model::PositionedPiece;

/// Generate a complete cutting program for the placed pieces.
///
/// Inconsistent depth parameters produce a textual error program (lines
/// carrying the `ERRO` marker and no motion commands) instead of an
/// `Err`; the caller can write either outcome to a file or surface it
/// as a diagnostic. A valid invocation always yields a program with the
/// literal `G21`, `G90` and `M30` directives, even for an empty layout.
pub fn generate_gcode(
    placed: &[PositionedPiece],
    sheet: &SheetConfig,
    cut: &CutConfig,
    tool: Option<&ToolConfig>,
    include_comments: bool,
) -> String {
    if cut.depth <= 0.0 {
        return error_program(&format!(
            "Profundidade invalida: {}",
            format_coord(cut.depth)
        ));
    }
    if cut.depth_per_pass <= 0.0 {
        return error_program(&format!(
            "Profundidade por passada invalida: {}",
            format_coord(cut.depth_per_pass)
        ));
    }
    if cut.depth_per_pass > cut.depth {
        return error_program(&format!(
            "Profundidade por passada ({}) maior que profundidade total ({})",
            format_coord(cut.depth_per_pass),
            format_coord(cut.depth)
        ));
    }

    debug!(pieces = placed.len(), comments = include_comments, "emitting program");

    let depths = pass_depths(cut);
    let mut w = ProgramWriter::new(include_comments);

    // Header
    w.comment("==================================================");
    w.comment(&format!(
        "Programa CNC gerado por nestcut v{}",
        env!("CARGO_PKG_VERSION")
    ));
    w.comment(&format!(
        "Chapa: {} x {} x {} mm",
        format_coord(sheet.width),
        format_coord(sheet.height),
        format_coord(sheet.thickness)
    ));
    w.comment(&format!(
        "Pecas: {} | Profundidade: {} mm em {} passada(s) de {} mm",
        placed.len(),
        format_coord(cut.depth),
        depths.len(),
        format_coord(cut.depth_per_pass)
    ));
    w.comment("==================================================");
    w.blank();

    w.code_commented("G21", "unidades em milimetros");
    w.code_commented("G90", "posicionamento absoluto");
    w.code_commented("G17", "plano XY");
    if let Some(tool) = tool {
        w.code_commented(
            &format!("T{} M6", tool.tool_number),
            &format!("ferramenta de {} mm", format_coord(tool.diameter)),
        );
    }
    w.code_commented(
        &format!("M3 S{}", format_coord(cut.spindle_speed)),
        "liga o spindle",
    );
    w.rapid_z(SAFE_Z_HEIGHT);

    // Pieces, in placement order
    for (index, piece) in placed.iter().enumerate() {
        emit_piece(&mut w, piece, index, placed.len(), cut, &depths);
    }

    // Footer
    w.blank();
    w.code_commented("M5", "desliga o spindle");
    w.code_commented("G0 X0 Y0", "retorno a origem");
    w.code_commented("M30", "fim de programa");

    w.take_output()
}

/// Emit the full multi-pass cut of one piece.
fn emit_piece(
    w: &mut ProgramWriter,
    piece: &PositionedPiece,
    index: usize,
    total: usize,
    cut: &CutConfig,
    depths: &[f64],
) {
    let p = &piece.piece;
    let numbering = p
        .original_number
        .map(|n| format!(" [#{n}]"))
        .unwrap_or_default();

    w.blank();
    w.comment(&format!(
        "--- Peca {}/{}: {}{} ({} x {} mm, corte {}) ---",
        index + 1,
        total,
        p.label(),
        numbering,
        format_coord(p.width),
        format_coord(p.height),
        p.cut_kind.as_str()
    ));

    w.rapid_xy(piece.x, piece.y);

    for (pass, &target) in depths.iter().enumerate() {
        w.inline_comment(&format!(
            "Passe {}/{}: Z-{}",
            pass + 1,
            depths.len(),
            format_coord(target)
        ));

        let z_to = -target;
        let ramped = cut.use_ramp
            && (cut.ramp_application == RampApplication::AllPasses || pass == 0);

        if ramped {
            // The first pass descends from the surface; later passes
            // start where the previous outline loop finished.
            let z_from = if pass == 0 { 0.0 } else { -depths[pass - 1] };
            if pass == 0 {
                w.plunge_z(0.0, cut.plunge_rate);
            }
            emit_ramp(w, piece, cut, z_from, z_to);
        } else {
            w.plunge_z(z_to, cut.plunge_rate);
        }

        // Rectangle outline, counter-clockwise from the entry corner.
        w.feed_xy(piece.x_max(), piece.y, Some(cut.feedrate));
        w.feed_xy(piece.x_max(), piece.y_max(), None);
        w.feed_xy(piece.x, piece.y_max(), None);
        w.feed_xy(piece.x, piece.y, None);
    }

    w.rapid_z(SAFE_Z_HEIGHT);
}

/// Emit the ramp waypoints for one pass.
fn emit_ramp(w: &mut ProgramWriter, piece: &PositionedPiece, cut: &CutConfig, z_from: f64, z_to: f64) {
    let points: Vec<RampPoint> = match cut.ramp_kind {
        RampKind::Linear => linear_ramp(
            piece.x,
            piece.y,
            piece.piece.width,
            z_from,
            z_to,
            cut.ramp_angle,
            cut.max_ramp_step_z,
        ),
        RampKind::ZigZag => zigzag_ramp(
            piece.x,
            piece.y,
            piece.piece.width,
            z_from,
            z_to,
            cut.zigzag_amplitude,
            cut.zigzag_pitch,
            cut.max_ramp_step_z,
        ),
    };

    for (i, point) in points.iter().enumerate() {
        let feed = if i == 0 { Some(cut.plunge_rate) } else { None };
        w.feed_xyz(point.x, point.y, point.z, feed);
    }
}

/// Z targets of each depth pass, the last one clipped to the full depth.
fn pass_depths(cut: &CutConfig) -> Vec<f64> {
    let mut depths = Vec::new();
    let mut z = 0.0;
    while z < cut.depth - EPS {
        z = (z + cut.depth_per_pass).min(cut.depth);
        depths.push(z);
    }
    depths
}

/// Build the textual error program for invalid cut parameters.
fn error_program(message: &str) -> String {
    let mut out = String::new();
    out.push_str("; ==================================================\n");
    out.push_str(&format!("; ERRO: {}\n", message));
    out.push_str("; Nenhum codigo de movimento foi gerado\n");
    out.push_str("; ==================================================\n");
    out
}

/// Remove every comment from a generated program.
///
/// Strips `;`-to-end-of-line spans, `(...)` spans and the blank lines
/// left behind; motion commands keep their order and content.
pub fn strip_comments(program: &str) -> String {
    let mut out = String::new();

    for line in program.lines() {
        let mut cleaned = String::new();
        let mut in_paren = false;

        for ch in line.chars() {
            match ch {
                '(' if !in_paren => in_paren = true,
                ')' if in_paren => in_paren = false,
                ';' if !in_paren => break,
                c if !in_paren => cleaned.push(c),
                _ => {}
            }
        }

        let trimmed = cleaned.trim();
        if !trimmed.is_empty() {
            out.push_str(trimmed);
            out.push('\n');
        }
    }

    out
}
