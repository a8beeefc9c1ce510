//! G-code program generator module.

mod gcode;
mod program;
mod ramp;

pub use gcode::{format_coord, ProgramWriter};
pub use program::{generate_gcode, strip_comments};
