//! Input case data structures matching the valuation form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValuationError;

/// Default ownership share when the decedent owned the whole property
fn default_full_ownership() -> f64 {
    100.0
}

/// Gender of the surviving spouse, selecting the life expectancy column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Gender::Male),
            "female" | "f" | "女" => Ok(Gender::Female),
            _ => Err(ValuationError::UnknownGender(s.to_string())),
        }
    }
}

/// Parse a YYYY-MM-DD date, naming the field on failure
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValuationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValuationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A single valuation case as entered on the form
///
/// Percentages are stored as entered (0-100), not as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputCase {
    /// Date of death of the decedent (相続開始日)
    pub inheritance_date: NaiveDate,

    /// Date of the estate division; the valuation date (遺産分割日)
    pub division_date: NaiveDate,

    /// Date the building was newly built (新築年月日)
    pub construction_date: NaiveDate,

    /// Construction type name, keyed into the useful life table
    pub structure: String,

    /// Fixed-asset tax assessment of the building (yen)
    pub building_value: f64,

    /// Total floor area (m²)
    pub building_area: f64,

    /// Floor area let to tenants (m²)
    pub rental_area: f64,

    /// Occupancy of the rented part at the inheritance date (%)
    pub rental_ratio: f64,

    /// Site area (m²)
    pub land_area: f64,

    /// Road price per m² (路線価)
    pub road_price: f64,

    /// Land correction rate (%)
    pub land_correction: f64,

    /// Leasehold interest ratio (%), one of 30..=90 in steps of 10
    pub lease_ratio: f64,

    pub spouse_birthday: NaiveDate,

    pub spouse_gender: Gender,

    /// Decedent's share of the building (%)
    #[serde(default = "default_full_ownership")]
    pub building_ownership_ratio: f64,

    /// Decedent's share of the land (%)
    #[serde(default = "default_full_ownership")]
    pub land_ownership_ratio: f64,
}
