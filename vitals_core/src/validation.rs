//! Boundary validation of user-entered measurements.
//!
//! Invalid values do not stop editing; they only block saving a profile
//! or logging a measurement.

use crate::{Error, UserProfile};
use std::fmt;

/// Per-field validation messages
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub height: Option<String>,
    pub weight: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.weight.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [&self.height, &self.weight]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::Validation(errors.to_string())
    }
}

/// Check that height and weight are strictly positive
pub fn validate_measurements(height_cm: f64, weight_kg: f64) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    // NaN fails the comparison too
    if !(height_cm > 0.0) {
        errors.height = Some("Height must be > 0".into());
    }
    if !(weight_kg > 0.0) {
        errors.weight = Some("Weight must be > 0".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl UserProfile {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        validate_measurements(self.height, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_measurements_pass() {
        assert!(validate_measurements(170.0, 70.0).is_ok());
    }

    #[test]
    fn test_each_field_reported() {
        let errors = validate_measurements(0.0, 70.0).unwrap_err();
        assert_eq!(errors.height.as_deref(), Some("Height must be > 0"));
        assert!(errors.weight.is_none());

        let errors = validate_measurements(-1.0, 0.0).unwrap_err();
        assert!(errors.height.is_some());
        assert!(errors.weight.is_some());
        assert_eq!(
            errors.to_string(),
            "Height must be > 0; Weight must be > 0"
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(validate_measurements(f64::NAN, 70.0).is_err());
    }

    #[test]
    fn test_into_core_error() {
        let err: Error = validate_measurements(170.0, 0.0).unwrap_err().into();
        assert!(matches!(err, Error::Validation(ref m) if m == "Weight must be > 0"));
    }
}
