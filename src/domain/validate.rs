use std::fmt;

use super::Category;

/// Field-level validation failure. Recoverable: the caller is expected to ask
/// for the value again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidDate(String),
    InvalidCategory(String),
    InvalidAmount(String),
    InvalidDescription(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidDate(s) => {
                write!(f, "invalid date '{}': use the YYYY-MM-DD format", s)
            }
            ValidationError::InvalidCategory(s) => write!(
                f,
                "invalid category '{}': must be '{}' or '{}'",
                s,
                Category::INCOME_LABEL,
                Category::EXPENSE_LABEL
            ),
            ValidationError::InvalidAmount(s) => {
                write!(f, "invalid amount '{}': must be a number greater than zero", s)
            }
            ValidationError::InvalidDescription(s) => {
                write!(f, "invalid description '{}': must not contain line breaks", s)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a textual date: exactly 10 characters, 4 digits, '-', 2 digits,
/// '-', 2 digits. Deliberately no calendar check ("9999-99-99" passes);
/// anything stricter would reject dates the format has always accepted.
pub fn validate_date(date: &str) -> Result<String, ValidationError> {
    let bytes = date.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if well_formed {
        Ok(date.to_string())
    } else {
        Err(ValidationError::InvalidDate(date.to_string()))
    }
}

/// Validate a category label, returning the case-folded canonical form.
pub fn validate_category(category: &str) -> Result<String, ValidationError> {
    Category::from_label(category)
        .map(|c| c.as_str().to_string())
        .ok_or_else(|| ValidationError::InvalidCategory(category.to_string()))
}

/// Validate an amount: must parse as a number and be strictly positive.
pub fn validate_amount(amount: &str) -> Result<f64, ValidationError> {
    let parsed: f64 = amount
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;

    if parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(ValidationError::InvalidAmount(amount.to_string()))
    }
}

/// Validate a description: a line break would introduce the record separator
/// and corrupt the file format.
pub fn validate_description(description: &str) -> Result<String, ValidationError> {
    if description.contains(['\n', '\r']) {
        Err(ValidationError::InvalidDescription(description.to_string()))
    } else {
        Ok(description.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("2024-01-05"), Ok("2024-01-05".to_string()));
        assert!(validate_date("2024-1-5").is_err());
        assert!(validate_date("2024-01-055").is_err());
        assert!(validate_date("2024/01/05").is_err());
        assert!(validate_date("").is_err());
        assert!(validate_date("сегодня").is_err());
    }

    #[test]
    fn test_validate_date_is_lenient_about_the_calendar() {
        // Digit-pattern only, no calendar validity check.
        assert_eq!(validate_date("9999-99-99"), Ok("9999-99-99".to_string()));
        assert_eq!(validate_date("2024-13-01"), Ok("2024-13-01".to_string()));
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category("доход"), Ok("доход".to_string()));
        assert_eq!(validate_category("РАСХОД"), Ok("расход".to_string()));
        assert!(validate_category("зарплата").is_err());
        assert!(validate_category("").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("12.5"), Ok(12.5));
        assert_eq!(validate_amount("100"), Ok(100.0));
        assert_eq!(validate_amount(" 50.0 "), Ok(50.0));
        assert!(validate_amount("-5").is_err());
        assert!(validate_amount("0").is_err());
        assert!(validate_amount("abc").is_err());
        assert!(validate_amount("").is_err());
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(validate_description("Salary"), Ok("Salary".to_string()));
        assert_eq!(validate_description(""), Ok(String::new()));
        assert!(validate_description("two\nlines").is_err());
    }
}
