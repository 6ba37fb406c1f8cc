//! Input validation helpers shared by the state operations.

use crate::error::ValidationError;

/// Trimmed, non-empty text.
pub fn require_text(field: &str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Non-negative whole number. Empty input counts as missing.
pub fn parse_count(field: &str, raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    trimmed.parse::<u32>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", "  Ann ").unwrap(), "Ann");
        assert!(matches!(
            require_text("name", "   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn parse_count_rejects_non_numbers() {
        assert_eq!(parse_count("pages", " 42 ").unwrap(), 42);
        assert!(matches!(
            parse_count("pages", "forty"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_count("pages", "-3"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_count("pages", ""),
            Err(ValidationError::EmptyField { .. })
        ));
    }
}
