//! Input validation utilities

use crate::constants::{
    difficulties, MAX_NUMERIC_DIFFICULTY, MAX_PROBLEM_TITLE_LENGTH, MAX_SLUG_LENGTH,
    MIN_NUMERIC_DIFFICULTY, MIN_SLUG_LENGTH,
};

const SLUG_SHAPE_MESSAGE: &str =
    "Slug must be 2-100 lowercase letters, digits, hyphens, underscores, or dots";

/// Validate slug format
pub fn validate_slug(slug: &str) -> Result<(), &'static str> {
    if slug.trim().is_empty() {
        return Err("Slug is required");
    }
    // Charset is ASCII, so byte length equals character count
    if slug.len() < MIN_SLUG_LENGTH || slug.len() > MAX_SLUG_LENGTH {
        return Err(SLUG_SHAPE_MESSAGE);
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
    {
        return Err(SLUG_SHAPE_MESSAGE);
    }
    Ok(())
}

/// Validate problem title
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    if title.chars().count() > MAX_PROBLEM_TITLE_LENGTH {
        return Err("Title must be 200 characters or less");
    }
    Ok(())
}

/// Validate problem description
pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.trim().is_empty() {
        return Err("Description is required");
    }
    Ok(())
}

/// Validate difficulty: a named level or a numeric rating
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    let trimmed = difficulty.trim();
    if trimmed.is_empty() {
        return Err("Difficulty is required");
    }

    let normalized = trimmed.to_ascii_lowercase();
    if difficulties::ALL.contains(&normalized.as_str()) {
        return Ok(());
    }

    if let Ok(rating) = trimmed.parse::<i32>() {
        if (MIN_NUMERIC_DIFFICULTY..=MAX_NUMERIC_DIFFICULTY).contains(&rating) {
            return Ok(());
        }
    }

    Err("Difficulty must be easy, medium, hard, or a numeric rating from 1 to 5")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("two-sum").is_ok());
        assert!(validate_slug("graph_3.shortest-path").is_ok());
        assert!(validate_slug("").is_err()); // Required
        assert!(validate_slug("a").is_err()); // Too short
        assert!(validate_slug("Two-Sum").is_err()); // Uppercase
        assert!(validate_slug("two sum").is_err()); // Space
        assert!(validate_slug(&"a".repeat(101)).is_err()); // Too long
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Two Sum").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(200)).is_ok());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty("easy").is_ok());
        assert!(validate_difficulty("Medium").is_ok()); // Case-insensitive
        assert!(validate_difficulty("HARD").is_ok());
        assert!(validate_difficulty("3").is_ok());
        assert!(validate_difficulty("").is_err());
        assert!(validate_difficulty("expert").is_err());
        assert!(validate_difficulty("0").is_err());
        assert!(validate_difficulty("6").is_err());
    }
}
