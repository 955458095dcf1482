//! Import request DTOs
//!
//! These shapes mirror the documents the problem authoring tools export:
//! camelCase keys, every field optional with a permissive default. The batch
//! validator decides what is actually acceptable.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validation;

/// One externally supplied problem definition to be imported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportedProblem {
    #[validate(custom(function = slug_rules))]
    pub slug: String,

    #[validate(custom(function = title_rules))]
    pub title: String,

    #[validate(custom(function = description_rules))]
    pub description: String,

    #[validate(custom(function = difficulty_rules))]
    pub difficulty: String,

    pub is_public: bool,

    pub is_active: bool,

    /// Execution time budget in milliseconds
    #[validate(range(min = 1, message = "Time limit must be positive"))]
    pub time_limit_ms: i32,

    /// Execution memory budget in megabytes
    #[validate(range(min = 1, message = "Memory limit must be positive"))]
    pub memory_limit_mb: i32,

    pub tags: Vec<String>,

    #[validate(
        length(min = 1, message = "At least one test case required"),
        nested
    )]
    pub test_cases: Vec<ImportedTestCase>,
}

impl Default for ImportedProblem {
    fn default() -> Self {
        Self {
            slug: String::new(),
            title: String::new(),
            description: String::new(),
            difficulty: String::new(),
            is_public: true,
            is_active: true,
            time_limit_ms: 0,
            memory_limit_mb: 0,
            tags: Vec::new(),
            test_cases: Vec::new(),
        }
    }
}

/// One input/output pair used to verify a submitted solution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportedTestCase {
    #[validate(custom(function = test_input_rules))]
    pub input: String,

    #[validate(custom(function = test_output_rules))]
    pub expected_output: String,

    /// Sample cases are shown to end users; the rest stay hidden for grading
    pub is_sample: bool,
}

fn import_rule(result: Result<(), &'static str>) -> Result<(), ValidationError> {
    result.map_err(|message| {
        let mut error = ValidationError::new("import");
        error.message = Some(message.into());
        error
    })
}

fn slug_rules(slug: &str) -> Result<(), ValidationError> {
    import_rule(validation::validate_slug(slug))
}

fn title_rules(title: &str) -> Result<(), ValidationError> {
    import_rule(validation::validate_title(title))
}

fn description_rules(description: &str) -> Result<(), ValidationError> {
    import_rule(validation::validate_description(description))
}

fn difficulty_rules(difficulty: &str) -> Result<(), ValidationError> {
    import_rule(validation::validate_difficulty(difficulty))
}

fn test_input_rules(input: &str) -> Result<(), ValidationError> {
    import_rule(if input.trim().is_empty() {
        Err("Test case input cannot be empty")
    } else {
        Ok(())
    })
}

fn test_output_rules(expected_output: &str) -> Result<(), ValidationError> {
    import_rule(if expected_output.trim().is_empty() {
        Err("Test case expected output cannot be empty")
    } else {
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_problem() -> ImportedProblem {
        ImportedProblem {
            slug: "two-sum".to_string(),
            title: "Two Sum".to_string(),
            description: "Given two integers, print their sum.".to_string(),
            difficulty: "easy".to_string(),
            time_limit_ms: 1000,
            memory_limit_mb: 256,
            tags: vec!["array".to_string(), "sorting".to_string()],
            test_cases: vec![ImportedTestCase {
                input: "1 2".to_string(),
                expected_output: "3".to_string(),
                is_sample: true,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_problem_defaults() {
        let problem = ImportedProblem::default();
        assert_eq!(problem.slug, "");
        assert_eq!(problem.title, "");
        assert_eq!(problem.description, "");
        assert_eq!(problem.difficulty, "");
        assert!(problem.is_public);
        assert!(problem.is_active);
        assert_eq!(problem.time_limit_ms, 0);
        assert_eq!(problem.memory_limit_mb, 0);
        assert!(problem.tags.is_empty());
        assert!(problem.test_cases.is_empty());
    }

    #[test]
    fn test_test_case_defaults() {
        let test_case = ImportedTestCase::default();
        assert_eq!(test_case.input, "");
        assert_eq!(test_case.expected_output, "");
        assert!(!test_case.is_sample);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let problem: ImportedProblem = serde_json::from_str(r#"{"slug": "two-sum"}"#).unwrap();
        assert_eq!(problem.slug, "two-sum");
        assert!(problem.is_public);
        assert!(problem.is_active);
        assert_eq!(problem.time_limit_ms, 0);
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let problem: ImportedProblem = serde_json::from_str(
            r#"{
                "slug": "two-sum",
                "timeLimitMs": 2000,
                "memoryLimitMb": 128,
                "isPublic": false,
                "testCases": [{"input": "1 2", "expectedOutput": "3", "isSample": true}]
            }"#,
        )
        .unwrap();
        assert_eq!(problem.time_limit_ms, 2000);
        assert_eq!(problem.memory_limit_mb, 128);
        assert!(!problem.is_public);
        assert!(problem.test_cases[0].is_sample);
        assert_eq!(problem.test_cases[0].expected_output, "3");
    }

    #[test]
    fn test_round_trip_preserves_order_and_flags() {
        let problem = valid_problem();
        let json = serde_json::to_string(&problem).unwrap();
        let back: ImportedProblem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, problem);
        assert_eq!(back.tags, vec!["array", "sorting"]);
        assert!(back.test_cases[0].is_sample);
    }

    #[test]
    fn test_valid_problem_passes_validation() {
        assert!(valid_problem().validate().is_ok());
    }

    #[test]
    fn test_default_problem_fails_validation() {
        let errors = ImportedProblem::default().validate().unwrap_err();
        assert!(errors.errors().contains_key("slug"));
        assert!(errors.errors().contains_key("title"));
        assert!(errors.errors().contains_key("test_cases"));
    }

    #[test]
    fn test_blank_test_case_fails_validation() {
        let mut problem = valid_problem();
        problem.test_cases[0].input = "   ".to_string();
        assert!(problem.validate().is_err());
    }
}
