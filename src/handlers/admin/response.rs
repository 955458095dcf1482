//! Import response DTOs

use serde::{Deserialize, Serialize};

/// One detected problem with an import record, keyed to its source position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportError {
    /// 1-based position of the record in the submitted batch
    pub row: i32,
    pub field: String,
    pub message: String,
}

/// Outcome of an import request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportResult {
    pub ok: bool,
    pub inserted: i64,
    pub slugs: Vec<String>,
    pub errors: Vec<ImportError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_defaults() {
        let error = ImportError::default();
        assert_eq!(error.row, 0);
        assert_eq!(error.field, "");
        assert_eq!(error.message, "");
    }

    #[test]
    fn test_import_error_round_trip() {
        let error = ImportError {
            row: 3,
            field: "testCases[0].input".to_string(),
            message: "Test case input cannot be empty".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        let back: ImportError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn test_import_result_round_trip() {
        let result = ImportResult {
            ok: true,
            inserted: 2,
            slugs: vec!["two-sum".to_string(), "three-sum".to_string()],
            errors: Vec::new(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ImportResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.slugs, vec!["two-sum", "three-sum"]);
    }
}
