//! Valuation output structures

use serde::{Deserialize, Serialize};

use crate::case::InputCase;

/// Every intermediate and final quantity of one valuation
///
/// Monetary fields are whole yen, each rounded at the step that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    // Spouse
    pub spouse_age: i32,
    /// Remaining life (years) used as the right's duration
    pub life: u32,
    /// Present value factor for `life` years
    pub pvf: f64,

    // Building term
    pub elapsed_years: i32,
    pub useful_life: u32,
    /// Useful life left after elapsed years, floored at 0
    pub remaining_years: i32,

    // Areas and ratios
    pub residential_area: f64,
    pub residential_ratio: f64,
    pub rental_area_ratio: f64,
    /// Occupancy of the rented part as a fraction
    pub rental_ratio: f64,

    // Building (yen)
    pub building_tax_value: i64,
    /// Residential share of the assessed value before the term discount
    pub base_value: i64,
    /// Spouse's residence right on the building
    pub building_right: i64,
    /// Remainder owner's building ownership
    pub setting_building: i64,

    // Land (yen)
    pub land_value: i64,
    /// Spouse's right to use the site
    pub land_use: i64,
    /// Discount for land under let buildings (貸家建付地)
    pub land_reduction: i64,
    /// Remainder owner's land ownership
    pub land_owner: i64,

    // Totals (yen)
    pub spouse_right_total: i64,
    pub remaining_assets_total: i64,
    pub total: i64,
}

impl ResultRecord {
    /// Whether the totals add up from their parts
    pub fn totals_consistent(&self) -> bool {
        self.spouse_right_total == self.building_right + self.land_use
            && self.remaining_assets_total == self.setting_building + self.land_owner
            && self.total == self.spouse_right_total + self.remaining_assets_total
    }
}

/// A case together with its results, as posted to analytics and returned over HTTP
///
/// Serializes flat: the input fields followed by a `results` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    #[serde(flatten)]
    pub case: InputCase,
    pub results: ResultRecord,
}

impl CalculationRecord {
    pub fn new(case: InputCase, results: ResultRecord) -> Self {
        Self { case, results }
    }
}
