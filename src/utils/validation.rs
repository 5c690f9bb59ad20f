use crate::utils::error::{ProfileError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_date_format(field_name: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Date cannot be empty".to_string(),
        });
    }

    match NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        Ok(_) => Ok(()),
        Err(e) => Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected dd/mm/yyyy: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ProfileError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format("date_of_birth", "17/08/1990").is_ok());
        assert!(validate_date_format("date_of_birth", " 17/08/1990 ").is_ok());
        assert!(validate_date_format("date_of_birth", "").is_err());
        assert!(validate_date_format("date_of_birth", "1990-08-17").is_err());
        assert!(validate_date_format("date_of_birth", "32/01/1990").is_err());
        assert!(validate_date_format("date_of_birth", "29/02/2023").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        let absent: Option<String> = None;
        assert_eq!(
            validate_required_field("field", &present).unwrap(),
            "value"
        );
        assert!(validate_required_field("field", &absent).is_err());
    }
}
