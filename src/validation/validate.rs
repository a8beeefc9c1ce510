//! Data-level validation of job requests.
//!
//! The checks here mirror what a schema layer in front of the crate
//! would enforce; they exist so a caller without one can still reject
//! inconsistent jobs with precise messages instead of discovering the
//! problem as an unplaced piece or an error program.

use crate::config::MAX_PIECES_PER_JOB;
use crate::model::JobRequest;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a job request.
///
/// Errors make the request unusable; warnings flag conditions the
/// pipeline will survive but the operator probably wants to know about.
pub fn validate_request(request: &JobRequest) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if request.pieces.is_empty() {
        result.add_error("Nenhuma peca informada");
    }
    if request.pieces.len() > MAX_PIECES_PER_JOB {
        result.add_error(format!(
            "Numero de pecas ({}) excede o maximo de {}",
            request.pieces.len(),
            MAX_PIECES_PER_JOB
        ));
    }

    let sheet = &request.sheet;
    if sheet.width <= 0.0 || sheet.height <= 0.0 {
        result.add_error(format!(
            "Dimensoes de chapa invalidas ({} x {})",
            sheet.width, sheet.height
        ));
    }
    if sheet.thickness <= 0.0 {
        result.add_warning("Espessura de chapa ausente ou zero");
    }

    for (index, piece) in request.pieces.iter().enumerate() {
        if piece.id.is_empty() {
            result.add_error(format!("Peca {}: id vazio", index + 1));
        }
        if piece.width <= 0.0 || piece.height <= 0.0 {
            result.add_error(format!(
                "Peca {} ({}): dimensoes invalidas ({} x {})",
                index + 1,
                piece.label(),
                piece.width,
                piece.height
            ));
        } else if piece.width > sheet.width || piece.height > sheet.height {
            result.add_warning(format!(
                "Peca {} ({}): maior que a chapa, nao vai caber",
                index + 1,
                piece.label()
            ));
        }
        if let Some(priority) = piece.priority {
            if !(1..=10).contains(&priority) {
                result.add_error(format!(
                    "Peca {} ({}): prioridade {} fora do intervalo 1..10",
                    index + 1,
                    piece.label(),
                    priority
                ));
            }
        }
    }

    let cut = &request.cut;
    if cut.depth <= 0.0 {
        result.add_error(format!("Profundidade invalida: {}", cut.depth));
    }
    if cut.depth_per_pass <= 0.0 {
        result.add_error(format!(
            "Profundidade por passada invalida: {}",
            cut.depth_per_pass
        ));
    }
    if cut.depth > 0.0 && cut.depth_per_pass > cut.depth {
        result.add_error(format!(
            "Profundidade por passada ({}) maior que profundidade total ({})",
            cut.depth_per_pass, cut.depth
        ));
    }
    if cut.spacing < 0.0 {
        result.add_error(format!("Espacamento negativo: {}", cut.spacing));
    }
    for (name, value) in [
        ("feedrate", cut.feedrate),
        ("plungeRate", cut.plunge_rate),
        ("rapidsSpeed", cut.rapids_speed),
        ("spindleSpeed", cut.spindle_speed),
    ] {
        if value <= 0.0 {
            result.add_error(format!("Parametro {} invalido: {}", name, value));
        }
    }
    if cut.use_ramp && !(1.0..=10.0).contains(&cut.ramp_angle) {
        result.add_error(format!(
            "Angulo de rampa {} fora do intervalo 1..10",
            cut.ramp_angle
        ));
    }
    if sheet.thickness > 0.0 && cut.depth > sheet.thickness {
        result.add_warning(format!(
            "Profundidade ({}) maior que a espessura da chapa ({}), corte vai alem do material",
            cut.depth, sheet.thickness
        ));
    }

    if let Some(tool) = &request.tool {
        if tool.diameter <= 0.0 {
            result.add_error(format!("Diametro de ferramenta invalido: {}", tool.diameter));
        }
        if tool.tool_number == 0 {
            result.add_error("Numero de ferramenta deve ser positivo");
        }
    }

    if request.pieces.iter().any(|p| p.ignored == Some(true)) {
        result.add_warning("Lista contem pecas marcadas como ignoradas");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutKind, Piece};

    fn basic_request() -> JobRequest {
        JobRequest::new(vec![Piece::new("1", 100.0, 100.0, CutKind::Outside)])
    }

    #[test]
    fn test_valid_request_passes() {
        let result = validate_request(&basic_request());
        assert!(result.passed, "errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_piece_list_fails() {
        let request = JobRequest::new(vec![]);
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Nenhuma peca")));
    }

    #[test]
    fn test_piece_cap_enforced() {
        let piece = Piece::new("p", 10.0, 10.0, CutKind::Outside);
        let request = JobRequest::new(vec![piece; MAX_PIECES_PER_JOB + 1]);
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("maximo")));
    }

    #[test]
    fn test_negative_piece_dimensions_fail() {
        let mut request = basic_request();
        request.pieces[0].width = -10.0;
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("dimensoes invalidas")));
    }

    #[test]
    fn test_oversized_piece_is_only_a_warning() {
        let mut request = basic_request();
        request.pieces[0].width = 5000.0;
        let result = validate_request(&request);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("nao vai caber")));
    }

    #[test]
    fn test_priority_range_checked() {
        let mut request = basic_request();
        request.pieces[0].priority = Some(11);
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("prioridade")));
    }

    #[test]
    fn test_pass_exceeding_depth_fails() {
        let mut request = basic_request();
        request.cut.depth = 5.0;
        request.cut.depth_per_pass = 10.0;
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("maior que profundidade total")));
    }

    #[test]
    fn test_depth_beyond_thickness_warns() {
        let mut request = basic_request();
        request.sheet.thickness = 10.0;
        request.cut.depth = 15.0;
        let result = validate_request(&request);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("espessura")));
    }

    #[test]
    fn test_ramp_angle_checked_only_when_ramping() {
        let mut request = basic_request();
        request.cut.ramp_angle = 45.0;
        let result = validate_request(&request);
        assert!(result.passed);

        request.cut.use_ramp = true;
        let result = validate_request(&request);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Angulo de rampa")));
    }
}
