//! Input validation functions
//!
//! Custom validators for the decimal fields the `validator` derive macros
//! cannot range-check directly, plus a few helpers used by the services.

use rust_decimal::Decimal;
use validator::ValidationError;

fn range_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validate a member height in cm (0-300, matching the original DTO bounds)
pub fn validate_member_height(height: &Decimal) -> Result<(), ValidationError> {
    if *height < Decimal::ZERO || *height > Decimal::from(300) {
        return Err(range_error("height", "Height must be between 0 and 300 cm"));
    }
    Ok(())
}

/// Validate a member or query bodyweight in kg (0-500)
pub fn validate_member_weight(weight: &Decimal) -> Result<(), ValidationError> {
    if *weight < Decimal::ZERO || *weight > Decimal::from(500) {
        return Err(range_error("weight", "Weight must be between 0 and 500 kg"));
    }
    Ok(())
}

/// Validate a bodyweight used for standard selection (same bounds as members)
pub fn validate_body_weight(weight: &Decimal) -> Result<(), ValidationError> {
    validate_member_weight(weight)
}

/// Validate a measured exercise value (non-negative)
pub fn validate_measured_value(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(range_error("value", "Measured value cannot be negative"));
    }
    Ok(())
}

/// Validate an age coefficient (positive, numeric(4,3) keeps it under 10)
pub fn validate_coefficient(coefficient: &Decimal) -> Result<(), ValidationError> {
    if *coefficient <= Decimal::ZERO || *coefficient >= Decimal::from(10) {
        return Err(range_error(
            "coefficient",
            "Coefficient must be positive and less than 10",
        ));
    }
    Ok(())
}

/// Validate an email address (services double-check beyond the derive)
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 100 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn weight_bounds() {
        assert!(validate_member_weight(&dec("80.5")).is_ok());
        assert!(validate_member_weight(&dec("0")).is_ok());
        assert!(validate_member_weight(&dec("500")).is_ok());
        assert!(validate_member_weight(&dec("-1")).is_err());
        assert!(validate_member_weight(&dec("500.01")).is_err());
    }

    #[test]
    fn coefficient_bounds() {
        assert!(validate_coefficient(&dec("1.045")).is_ok());
        assert!(validate_coefficient(&dec("0")).is_err());
        assert!(validate_coefficient(&dec("10")).is_err());
    }

    #[test]
    fn email_format() {
        assert!(validate_email("gym@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
    }

    #[test]
    fn password_length() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }
}
