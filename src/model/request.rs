//! Job request: the full input of one nesting + generation run.

use serde::{Deserialize, Serialize};

use super::Piece;
use crate::config::{CutConfig, SheetConfig, ToolConfig};

/// Placement heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMethod {
    /// Anchor-point scan; first position that fits wins.
    Greedy,
    /// Fixed-height rows packed left to right.
    Shelf,
    /// Free-rectangle bookkeeping with best-area-fit selection.
    #[default]
    Guillotine,
}

impl std::fmt::Display for NestingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NestingMethod::Greedy => write!(f, "greedy"),
            NestingMethod::Shelf => write!(f, "shelf"),
            NestingMethod::Guillotine => write!(f, "guillotine"),
        }
    }
}

/// A complete job description as received from the caller.
///
/// Every section except the piece list is optional in the wire format;
/// missing sections and missing fields take the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Pieces to place and cut.
    #[serde(rename = "pecas")]
    pub pieces: Vec<Piece>,
    /// Sheet dimensions.
    #[serde(rename = "configChapa", default)]
    pub sheet: SheetConfig,
    /// Cutting parameters.
    #[serde(rename = "configCorte", default)]
    pub cut: CutConfig,
    /// Tool description; omitted when the machine's current tool is used.
    #[serde(
        rename = "configFerramenta",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tool: Option<ToolConfig>,
    /// Placement heuristic.
    #[serde(rename = "metodoNesting", default)]
    pub method: NestingMethod,
    /// Whether the emitted program carries human-readable annotations.
    #[serde(rename = "incluirComentarios", default = "default_include_comments")]
    pub include_comments: bool,
}

impl JobRequest {
    /// Build a request for the given pieces with every config defaulted.
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self {
            pieces,
            sheet: SheetConfig::default(),
            cut: CutConfig::default(),
            tool: None,
            method: NestingMethod::default(),
            include_comments: true,
        }
    }
}

fn default_include_comments() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_request_takes_defaults() {
        let json = r#"{
            "pecas": [
                { "id": "1", "largura": 100, "altura": 100, "tipoCorte": "externo" }
            ]
        }"#;
        let req: JobRequest = serde_json::from_str(json).expect("request should parse");
        assert_eq!(req.pieces.len(), 1);
        assert_eq!(req.sheet.width, 2850.0);
        assert_eq!(req.cut.spacing, 50.0);
        assert_eq!(req.method, NestingMethod::Guillotine);
        assert!(req.tool.is_none());
        assert!(req.include_comments);
    }

    #[test]
    fn test_partial_config_merges_with_defaults() {
        let json = r#"{
            "pecas": [
                { "id": "1", "largura": 100, "altura": 100, "tipoCorte": "externo" }
            ],
            "configChapa": { "largura": 1000 },
            "configCorte": { "espacamento": 10, "usarMesmoEspacamentoBorda": false },
            "metodoNesting": "shelf",
            "incluirComentarios": false
        }"#;
        let req: JobRequest = serde_json::from_str(json).expect("request should parse");
        assert_eq!(req.sheet.width, 1000.0);
        // Untouched sheet fields keep their defaults
        assert_eq!(req.sheet.height, 1500.0);
        assert_eq!(req.cut.spacing, 10.0);
        assert_eq!(req.cut.feedrate, 1500.0);
        assert!(!req.cut.same_edge_margin);
        assert_eq!(req.method, NestingMethod::Shelf);
        assert!(!req.include_comments);
    }

    #[test]
    fn test_method_wire_names() {
        for (name, method) in [
            ("greedy", NestingMethod::Greedy),
            ("shelf", NestingMethod::Shelf),
            ("guillotine", NestingMethod::Guillotine),
        ] {
            let parsed: NestingMethod =
                serde_json::from_str(&format!("\"{name}\"")).expect("method should parse");
            assert_eq!(parsed, method);
            assert_eq!(method.to_string(), name);
        }
    }
}
