//! Low-level G-code writing utilities.

use std::fmt::Write;

/// G-code program writer.
///
/// All annotation output (line comments, inline comments, blank
/// separator lines) is gated on the `comments` flag, so the same
/// emission code produces either an annotated or a bare program with
/// identical motion lines.
pub struct ProgramWriter {
    /// Output buffer.
    buffer: String,
    /// Whether annotation lines are written at all.
    comments: bool,
}

impl ProgramWriter {
    /// Create a new writer.
    pub fn new(comments: bool) -> Self {
        Self {
            buffer: String::new(),
            comments,
        }
    }

    /// Get the generated program.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated program.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a motion/command line.
    pub fn code(&mut self, content: &str) {
        writeln!(self.buffer, "{}", content).unwrap();
    }

    /// Write a command line with a `;` annotation when comments are on.
    pub fn code_commented(&mut self, content: &str, note: &str) {
        if self.comments {
            writeln!(self.buffer, "{} ; {}", content, note).unwrap();
        } else {
            writeln!(self.buffer, "{}", content).unwrap();
        }
    }

    /// Write a `;` comment line. No-op when comments are off.
    pub fn comment(&mut self, text: &str) {
        if self.comments {
            writeln!(self.buffer, "; {}", text).unwrap();
        }
    }

    /// Write a `(...)` comment line. No-op when comments are off.
    pub fn inline_comment(&mut self, text: &str) {
        if self.comments {
            writeln!(self.buffer, "({})", text).unwrap();
        }
    }

    /// Write a blank separator line. No-op when comments are off.
    pub fn blank(&mut self) {
        if self.comments {
            writeln!(self.buffer).unwrap();
        }
    }

    // === Movement commands ===

    /// Rapid XY move (G0).
    pub fn rapid_xy(&mut self, x: f64, y: f64) {
        self.code(&format!("G0 X{} Y{}", format_coord(x), format_coord(y)));
    }

    /// Rapid Z move (G0).
    pub fn rapid_z(&mut self, z: f64) {
        self.code(&format!("G0 Z{}", format_coord(z)));
    }

    /// Feed XY move (G1), with an optional feed rate word.
    pub fn feed_xy(&mut self, x: f64, y: f64, feed: Option<f64>) {
        match feed {
            Some(f) => self.code(&format!(
                "G1 X{} Y{} F{}",
                format_coord(x),
                format_coord(y),
                format_coord(f)
            )),
            None => self.code(&format!("G1 X{} Y{}", format_coord(x), format_coord(y))),
        }
    }

    /// Feed XYZ move (G1) for ramp descents.
    pub fn feed_xyz(&mut self, x: f64, y: f64, z: f64, feed: Option<f64>) {
        match feed {
            Some(f) => self.code(&format!(
                "G1 X{} Y{} Z{} F{}",
                format_coord(x),
                format_coord(y),
                format_coord(z),
                format_coord(f)
            )),
            None => self.code(&format!(
                "G1 X{} Y{} Z{}",
                format_coord(x),
                format_coord(y),
                format_coord(z)
            )),
        }
    }

    /// Vertical plunge (G1 Z) at the given feed rate.
    pub fn plunge_z(&mut self, z: f64, rate: f64) {
        self.code(&format!("G1 Z{} F{}", format_coord(z), format_coord(rate)));
    }
}

/// Format a coordinate value for G-code output.
///
/// Whole numbers print without a decimal point; fractional values are
/// rounded to 3 decimals (a micrometre, below any router's resolution)
/// and trailing zeros are trimmed.
pub fn format_coord(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e12 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
