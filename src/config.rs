//! Configuration types, defaults and numeric constants.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Clearance height for rapid traversals above the sheet surface, in mm.
pub const SAFE_Z_HEIGHT: f64 = 5.0;

/// Maximum number of pieces accepted in a single job.
pub const MAX_PIECES_PER_JOB: usize = 1000;

/// Conversion factor from per-minute feed values to per-second times.
pub const MIN_TO_SEC: f64 = 60.0;

/// Sheet (raw panel) configuration.
///
/// Thickness does not participate in 2D placement; it is only checked
/// against the cut depth during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Sheet width in mm.
    #[serde(rename = "largura", default = "default_sheet_width")]
    pub width: f64,
    /// Sheet height in mm.
    #[serde(rename = "altura", default = "default_sheet_height")]
    pub height: f64,
    /// Sheet thickness in mm.
    #[serde(rename = "espessura", default = "default_sheet_thickness")]
    pub thickness: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            width: default_sheet_width(),
            height: default_sheet_height(),
            thickness: default_sheet_thickness(),
        }
    }
}

fn default_sheet_width() -> f64 {
    2850.0
}
fn default_sheet_height() -> f64 {
    1500.0
}
fn default_sheet_thickness() -> f64 {
    15.0
}

/// Plunge ramp geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RampKind {
    /// Constant-angle descent along the first edge.
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// Oscillating descent near the entry corner.
    #[serde(rename = "zigzag")]
    ZigZag,
}

/// Which depth passes receive the ramp entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RampApplication {
    /// Ramp the first pass only; later passes plunge vertically.
    #[default]
    #[serde(rename = "primeira-passada")]
    FirstPass,
    /// Ramp every depth pass.
    #[serde(rename = "todas-passadas")]
    AllPasses,
}

/// Cutting parameters: depth control, clearances, feeds and ramping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutConfig {
    /// Total cut depth in mm.
    #[serde(rename = "profundidade", default = "default_depth")]
    pub depth: f64,
    /// Minimum clearance between pieces, in mm.
    #[serde(rename = "espacamento", default = "default_spacing")]
    pub spacing: f64,
    /// Depth removed per pass, in mm.
    #[serde(rename = "profundidadePorPassada", default = "default_depth_per_pass")]
    pub depth_per_pass: f64,
    /// Cutting feed rate in mm/min.
    #[serde(rename = "feedrate", default = "default_feedrate")]
    pub feedrate: f64,
    /// Vertical plunge feed rate in mm/min.
    #[serde(rename = "plungeRate", default = "default_plunge_rate")]
    pub plunge_rate: f64,
    /// Rapid traversal speed in mm/min (used by the time estimator).
    #[serde(rename = "rapidsSpeed", default = "default_rapids_speed")]
    pub rapids_speed: f64,
    /// Spindle speed in RPM.
    #[serde(rename = "spindleSpeed", default = "default_spindle_speed")]
    pub spindle_speed: f64,
    /// Whether plunges use a ramp entry instead of a vertical drop.
    #[serde(rename = "usarRampa", default)]
    pub use_ramp: bool,
    /// Ramp geometry.
    #[serde(rename = "tipoRampa", default)]
    pub ramp_kind: RampKind,
    /// Ramp entry angle in degrees (1..10).
    #[serde(rename = "anguloRampa", default = "default_ramp_angle")]
    pub ramp_angle: f64,
    /// Which passes are ramped.
    #[serde(rename = "aplicarRampaEm", default)]
    pub ramp_application: RampApplication,
    /// Zigzag oscillation amplitude in mm.
    #[serde(rename = "zigZagAmplitude", default = "default_zigzag_amplitude")]
    pub zigzag_amplitude: f64,
    /// Zigzag advance per oscillation in mm.
    #[serde(rename = "zigZagPitch", default = "default_zigzag_pitch")]
    pub zigzag_pitch: f64,
    /// Maximum descent per ramp step in mm.
    #[serde(rename = "maxRampStepZ", default = "default_max_ramp_step_z")]
    pub max_ramp_step_z: f64,
    /// When true, the edge margin equals the piece spacing.
    #[serde(rename = "usarMesmoEspacamentoBorda", default = "default_true")]
    pub same_edge_margin: bool,
    /// Explicit edge margin in mm (ignored when `same_edge_margin` is set).
    #[serde(rename = "margemBorda", default = "default_edge_margin")]
    pub edge_margin: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            spacing: default_spacing(),
            depth_per_pass: default_depth_per_pass(),
            feedrate: default_feedrate(),
            plunge_rate: default_plunge_rate(),
            rapids_speed: default_rapids_speed(),
            spindle_speed: default_spindle_speed(),
            use_ramp: false,
            ramp_kind: RampKind::default(),
            ramp_angle: default_ramp_angle(),
            ramp_application: RampApplication::default(),
            zigzag_amplitude: default_zigzag_amplitude(),
            zigzag_pitch: default_zigzag_pitch(),
            max_ramp_step_z: default_max_ramp_step_z(),
            same_edge_margin: true,
            edge_margin: default_edge_margin(),
        }
    }
}

impl CutConfig {
    /// Number of depth passes needed to reach the full depth.
    ///
    /// Returns zero when the depth configuration is not usable; the
    /// emitter rejects such configurations before getting here.
    pub fn pass_count(&self) -> u32 {
        if self.depth <= 0.0 || self.depth_per_pass <= 0.0 {
            return 0;
        }
        (self.depth / self.depth_per_pass).ceil() as u32
    }

    /// Effective margin between pieces and the sheet border.
    pub fn effective_edge_margin(&self) -> f64 {
        if self.same_edge_margin {
            self.spacing
        } else {
            self.edge_margin
        }
    }
}

fn default_depth() -> f64 {
    15.0
}
fn default_spacing() -> f64 {
    50.0
}
fn default_depth_per_pass() -> f64 {
    4.0
}
fn default_feedrate() -> f64 {
    1500.0
}
fn default_plunge_rate() -> f64 {
    500.0
}
fn default_rapids_speed() -> f64 {
    4000.0
}
fn default_spindle_speed() -> f64 {
    18000.0
}
fn default_ramp_angle() -> f64 {
    3.0
}
fn default_zigzag_amplitude() -> f64 {
    2.0
}
fn default_zigzag_pitch() -> f64 {
    5.0
}
fn default_max_ramp_step_z() -> f64 {
    0.5
}
fn default_edge_margin() -> f64 {
    50.0
}
fn default_true() -> bool {
    true
}

/// Router tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Tool diameter in mm.
    #[serde(rename = "diametro", default = "default_tool_diameter")]
    pub diameter: f64,
    /// Tool slot number for the change command.
    #[serde(rename = "numeroFerramenta", default = "default_tool_number")]
    pub tool_number: u32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            diameter: default_tool_diameter(),
            tool_number: default_tool_number(),
        }
    }
}

fn default_tool_diameter() -> f64 {
    6.0
}
fn default_tool_number() -> u32 {
    1
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if `a <= b` with epsilon tolerance.
    #[inline]
    pub fn leq(a: f64, b: f64) -> bool {
        a <= b + EPS
    }

    /// Check if `a < b` with epsilon tolerance.
    #[inline]
    pub fn lt(a: f64, b: f64) -> bool {
        a < b - EPS
    }
}
