use once_cell::sync::Lazy;
use regex::Regex;

use super::error_handling::{BoardError, BoardResult};
use crate::domain::project::MAX_PROGRESS;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Size limits for user-provided text
pub struct SizeLimits;

impl SizeLimits {
    pub const MAX_TITLE_LENGTH: usize = 200;
    pub const MAX_DESCRIPTION_LENGTH: usize = 10000;
}

/// Input validation for all user-provided data
pub struct InputValidator;

impl InputValidator {
    /// Trims `value` and rejects it when empty or too long.
    pub fn validate_required(field: &'static str, value: &str, empty_message: &str) -> BoardResult<String> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(BoardError::validation(field, empty_message));
        }

        if trimmed.chars().count() > SizeLimits::MAX_TITLE_LENGTH {
            return Err(BoardError::validation(
                field,
                format!("{} cannot exceed {} characters", capitalize(field), SizeLimits::MAX_TITLE_LENGTH),
            ));
        }

        Ok(strip_control(trimmed))
    }

    pub fn validate_description(description: &str) -> BoardResult<String> {
        let trimmed = description.trim();

        if trimmed.chars().count() > SizeLimits::MAX_DESCRIPTION_LENGTH {
            return Err(BoardError::validation(
                "description",
                format!("Description cannot exceed {} characters", SizeLimits::MAX_DESCRIPTION_LENGTH),
            ));
        }

        Ok(strip_control(trimmed))
    }

    pub fn validate_email(email: &str) -> BoardResult<String> {
        let trimmed = email.trim();

        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(BoardError::validation("email", "Please enter a valid email address"));
        }

        Ok(trimmed.to_string())
    }

    pub fn validate_progress(progress: u8) -> BoardResult<u8> {
        if progress > MAX_PROGRESS {
            return Err(BoardError::InvalidPatch {
                kind: "Project",
                reason: format!("progress must be between 0 and {}", MAX_PROGRESS),
            });
        }
        Ok(progress)
    }
}

fn strip_control(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect()
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validation() {
        assert_eq!(
            InputValidator::validate_required("title", "  Ship it ", "empty").unwrap(),
            "Ship it"
        );
        assert_eq!(
            InputValidator::validate_required("title", "   ", "Task title cannot be empty"),
            Err(BoardError::validation("title", "Task title cannot be empty"))
        );

        let long_title = "x".repeat(201);
        let err = InputValidator::validate_required("title", &long_title, "empty").unwrap_err();
        assert_eq!(err.to_string(), "Title cannot exceed 200 characters");
    }

    #[test]
    fn test_control_characters_are_removed() {
        assert_eq!(
            InputValidator::validate_required("name", "Road\u{7}map", "empty").unwrap(),
            "Roadmap"
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(InputValidator::validate_email("jane@example.com").is_ok());
        assert_eq!(InputValidator::validate_email(" jane@example.com ").unwrap(), "jane@example.com");
        assert!(InputValidator::validate_email("jane").is_err());
        assert!(InputValidator::validate_email("jane@example").is_err());
        assert!(InputValidator::validate_email("ja ne@example.com").is_err());
    }

    #[test]
    fn test_progress_validation() {
        assert_eq!(InputValidator::validate_progress(0).unwrap(), 0);
        assert_eq!(InputValidator::validate_progress(100).unwrap(), 100);
        assert!(InputValidator::validate_progress(101).is_err());
    }
}
