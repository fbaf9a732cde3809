use crate::utils::error::{BookingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BookingError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookingError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BookingError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Money amounts must be finite and non-negative.
pub fn validate_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BookingError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Amount must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./reports").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("passenger_capacity", 5, 1).is_ok());
        assert!(validate_positive_number("passenger_capacity", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("package.name", "Its Vacation Time").is_ok());
        assert!(validate_non_empty_string("package.name", "   ").is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("cost", 0.0).is_ok());
        assert!(validate_amount("cost", 49.5).is_ok());
        assert!(validate_amount("cost", -1.0).is_err());
        assert!(validate_amount("cost", f64::NAN).is_err());
        assert!(validate_amount("cost", f64::INFINITY).is_err());
    }
}
