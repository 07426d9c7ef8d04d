//! Field validators gating form submission
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^@]+@[^@.]+\.[a-z]+$").expect("email pattern is valid")
});
static CARD_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{13,16}$").expect("card number pattern is valid"));
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}$").expect("zip pattern is valid"));
static CVV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}$").expect("cvv pattern is valid"));

/// Form fields that carry a valid/invalid visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Name,
    Email,
    Activities,
    CardNumber,
    CardZip,
    CardCvv,
}

impl Field {
    /// Stable identifier matching the control's element id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Activities => "activities",
            Self::CardNumber => "cc-num",
            Self::CardZip => "zip",
            Self::CardCvv => "cvv",
        }
    }

    #[must_use]
    pub const fn is_card_field(self) -> bool {
        matches!(self, Self::CardNumber | Self::CardZip | Self::CardCvv)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("name must contain at least one non-whitespace character")]
    NameRequired,
    #[error("email must look like name@example.com")]
    EmailFormat,
    #[error("at least one activity must be selected")]
    NoActivities,
    #[error("card number must be 13-16 digits")]
    CardNumberFormat,
    #[error("zip code must be exactly 5 digits")]
    ZipFormat,
    #[error("cvv must be exactly 3 digits")]
    CvvFormat,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailFormat => Field::Email,
            Self::NoActivities => Field::Activities,
            Self::CardNumberFormat => Field::CardNumber,
            Self::ZipFormat => Field::CardZip,
            Self::CvvFormat => Field::CardCvv,
        }
    }
}

/// Name: at least one non-whitespace character.
///
/// # Errors
///
/// Returns [`FieldError::NameRequired`] for empty or whitespace-only input.
pub fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::NameRequired)
    } else {
        Ok(())
    }
}

/// Email: a single `@` separating a local part from a dotless domain
/// with an alphabetic top-level domain.
///
/// # Errors
///
/// Returns [`FieldError::EmailFormat`] when the shape does not match.
pub fn check_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::EmailFormat)
    }
}

/// Card number: 13 to 16 digits, no separators.
///
/// # Errors
///
/// Returns [`FieldError::CardNumberFormat`] on any other input.
pub fn check_card_number(value: &str) -> Result<(), FieldError> {
    if CARD_NUMBER_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::CardNumberFormat)
    }
}

/// Zip code: exactly 5 digits.
///
/// # Errors
///
/// Returns [`FieldError::ZipFormat`] on any other input.
pub fn check_card_zip(value: &str) -> Result<(), FieldError> {
    if ZIP_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::ZipFormat)
    }
}

/// CVV: exactly 3 digits.
///
/// # Errors
///
/// Returns [`FieldError::CvvFormat`] on any other input.
pub fn check_cvv(value: &str) -> Result<(), FieldError> {
    if CVV_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::CvvFormat)
    }
}

/// Outcome of validating a whole [`crate::Registration`].
///
/// Card fields only appear in the evaluated set when the payment method
/// collects card details; [`ValidationReport::field_state`] is `None` for
/// fields that were not evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationReport {
    issues: Vec<FieldError>,
    card_evaluated: bool,
}

impl ValidationReport {
    #[must_use]
    pub fn new(issues: Vec<FieldError>, card_evaluated: bool) -> Self {
        Self {
            issues,
            card_evaluated,
        }
    }

    /// Submission may proceed only when no field failed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issues(&self) -> &[FieldError] {
        &self.issues
    }

    /// Per-field verdict: `Some(true)` valid, `Some(false)` invalid,
    /// `None` when the field was not part of this validation pass.
    #[must_use]
    pub fn field_state(&self, field: Field) -> Option<bool> {
        if field.is_card_field() && !self.card_evaluated {
            return None;
        }
        Some(!self.issues.iter().any(|issue| issue.field() == field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_distinguishes_unevaluated_card_fields() {
        let report = ValidationReport::new(vec![FieldError::EmailFormat], false);
        assert!(!report.is_ok());
        assert_eq!(report.field_state(Field::Email), Some(false));
        assert_eq!(report.field_state(Field::Name), Some(true));
        assert_eq!(report.field_state(Field::CardNumber), None);

        let card_report = ValidationReport::new(vec![FieldError::CvvFormat], true);
        assert_eq!(card_report.field_state(Field::CardNumber), Some(true));
        assert_eq!(card_report.field_state(Field::CardCvv), Some(false));
    }

    #[test]
    fn field_error_maps_back_to_its_field() {
        assert_eq!(FieldError::NameRequired.field(), Field::Name);
        assert_eq!(FieldError::ZipFormat.field().as_str(), "zip");
        assert!(FieldError::CardNumberFormat.field().is_card_field());
        assert!(!Field::Activities.is_card_field());
    }
}
