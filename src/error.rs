//! Errors raised when an input case cannot be valued

use thiserror::Error;

/// Rejection reasons for an input case
///
/// The permissive engine (`valuation::calculate`) never produces these; they
/// come from parsing text inputs and from `valuation::validate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// A date field could not be parsed as YYYY-MM-DD
    #[error("{field}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    /// Gender other than male/female
    #[error("unknown gender '{0}' (expected 'male' or 'female')")]
    UnknownGender(String),

    /// The division date precedes a date that must come before it
    #[error("divisionDate must not precede {earlier}")]
    DateOrder { earlier: &'static str },

    /// Negative, non-finite, or outside the field's documented range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// Rented floor area larger than the whole building
    #[error("rentalArea ({rental}) exceeds buildingArea ({building})")]
    RentalAreaExceedsBuilding { rental: f64, building: f64 },

    /// Leasehold ratio not one of 30, 40, ..., 90
    #[error("leaseRatio must be one of 30, 40, 50, 60, 70, 80, 90 (got {0})")]
    LeaseRatio(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValuationError::InvalidDate { field: "spouseBirthday", value: "1960-13-01".into() };
        assert_eq!(err.to_string(), "spouseBirthday: invalid date '1960-13-01' (expected YYYY-MM-DD)");

        let err = ValuationError::DateOrder { earlier: "inheritanceDate" };
        assert!(err.to_string().contains("inheritanceDate"));
    }
}
