//! Input checks applied before valuing a case
//!
//! The engine itself clamps and guards; these checks reject what it would
//! otherwise value silently: reversed dates, negative magnitudes,
//! percentages outside their range, and leasehold ratios off the scale.

use log::warn;

use crate::case::InputCase;
use crate::error::ValuationError;
use crate::tables::is_known_structure;
use super::engine::calculate;
use super::result::ResultRecord;

/// Leasehold ratios published on the road price maps (%)
pub const LEASE_RATIOS: [f64; 7] = [30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

fn non_negative(field: &'static str, value: f64) -> Result<(), ValuationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValuationError::OutOfRange { field, value })
    }
}

fn percentage(field: &'static str, value: f64) -> Result<(), ValuationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValuationError::OutOfRange { field, value })
    }
}

/// Check a case for values the valuation cannot meaningfully use
pub fn validate(case: &InputCase) -> Result<(), ValuationError> {
    // The division date is the valuation date: everything else precedes it
    if case.division_date < case.inheritance_date {
        return Err(ValuationError::DateOrder { earlier: "inheritanceDate" });
    }
    if case.division_date < case.construction_date {
        return Err(ValuationError::DateOrder { earlier: "constructionDate" });
    }
    if case.division_date < case.spouse_birthday {
        return Err(ValuationError::DateOrder { earlier: "spouseBirthday" });
    }

    non_negative("buildingValue", case.building_value)?;
    non_negative("buildingArea", case.building_area)?;
    non_negative("rentalArea", case.rental_area)?;
    non_negative("landArea", case.land_area)?;
    non_negative("roadPrice", case.road_price)?;
    non_negative("landCorrection", case.land_correction)?;

    percentage("rentalRatio", case.rental_ratio)?;
    percentage("buildingOwnershipRatio", case.building_ownership_ratio)?;
    percentage("landOwnershipRatio", case.land_ownership_ratio)?;

    if case.rental_area > case.building_area {
        return Err(ValuationError::RentalAreaExceedsBuilding {
            rental: case.rental_area,
            building: case.building_area,
        });
    }

    if !LEASE_RATIOS.contains(&case.lease_ratio) {
        return Err(ValuationError::LeaseRatio(case.lease_ratio));
    }

    Ok(())
}

/// Validate, then value the case
///
/// An unknown structure is not rejected (the engine values it with a useful
/// life of 0) but is logged.
pub fn calculate_checked(case: &InputCase) -> Result<ResultRecord, ValuationError> {
    validate(case)?;

    if !is_known_structure(&case.structure) {
        warn!(
            "structure '{}' has no useful life entry; building right equals its base value",
            case.structure
        );
    }

    Ok(calculate(case))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Gender;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_case() -> InputCase {
        InputCase {
            inheritance_date: ymd(2024, 1, 1),
            division_date: ymd(2024, 4, 1),
            construction_date: ymd(2000, 1, 1),
            structure: "鉄骨鉄筋コンクリート造又は鉄筋コンクリート造".to_string(),
            building_value: 30_000_000.0,
            building_area: 100.0,
            rental_area: 20.0,
            rental_ratio: 80.0,
            land_area: 120.0,
            road_price: 200_000.0,
            land_correction: 100.0,
            lease_ratio: 90.0,
            spouse_birthday: ymd(1960, 1, 1),
            spouse_gender: Gender::Female,
            building_ownership_ratio: 100.0,
            land_ownership_ratio: 100.0,
        }
    }

    #[test]
    fn test_valid_case_passes() {
        assert_eq!(validate(&valid_case()), Ok(()));
        let result = calculate_checked(&valid_case()).unwrap();
        assert_eq!(result, calculate(&valid_case()));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let case = InputCase { division_date: ymd(2023, 12, 31), ..valid_case() };
        assert_eq!(validate(&case), Err(ValuationError::DateOrder { earlier: "inheritanceDate" }));

        let case = InputCase { construction_date: ymd(2024, 5, 1), ..valid_case() };
        assert_eq!(validate(&case), Err(ValuationError::DateOrder { earlier: "constructionDate" }));

        let case = InputCase { spouse_birthday: ymd(2024, 4, 2), ..valid_case() };
        assert_eq!(validate(&case), Err(ValuationError::DateOrder { earlier: "spouseBirthday" }));
    }

    #[test]
    fn test_same_day_dates_allowed() {
        let case = InputCase {
            inheritance_date: ymd(2024, 4, 1),
            construction_date: ymd(2024, 4, 1),
            ..valid_case()
        };
        assert!(validate(&case).is_ok());
    }

    #[test]
    fn test_out_of_range_values() {
        let case = InputCase { building_value: -1.0, ..valid_case() };
        assert_eq!(
            validate(&case),
            Err(ValuationError::OutOfRange { field: "buildingValue", value: -1.0 })
        );

        let case = InputCase { rental_ratio: 100.5, ..valid_case() };
        assert!(matches!(
            validate(&case),
            Err(ValuationError::OutOfRange { field: "rentalRatio", .. })
        ));

        let case = InputCase { land_area: f64::NAN, ..valid_case() };
        assert!(matches!(
            validate(&case),
            Err(ValuationError::OutOfRange { field: "landArea", .. })
        ));

        let case = InputCase { land_ownership_ratio: -0.01, ..valid_case() };
        assert!(matches!(
            validate(&case),
            Err(ValuationError::OutOfRange { field: "landOwnershipRatio", .. })
        ));
    }

    #[test]
    fn test_land_correction_above_hundred_allowed() {
        let case = InputCase { land_correction: 120.0, ..valid_case() };
        assert!(validate(&case).is_ok());
    }

    #[test]
    fn test_rental_area_exceeds_building() {
        let case = InputCase { rental_area: 100.5, ..valid_case() };
        assert!(matches!(
            validate(&case),
            Err(ValuationError::RentalAreaExceedsBuilding { .. })
        ));
    }

    #[test]
    fn test_lease_ratio_scale() {
        for ratio in LEASE_RATIOS {
            let case = InputCase { lease_ratio: ratio, ..valid_case() };
            assert!(validate(&case).is_ok());
        }

        let case = InputCase { lease_ratio: 65.0, ..valid_case() };
        assert_eq!(validate(&case), Err(ValuationError::LeaseRatio(65.0)));
    }

    #[test]
    fn test_unknown_structure_still_valued() {
        let case = InputCase { structure: "木造".to_string(), ..valid_case() };
        let result = calculate_checked(&case).unwrap();
        assert_eq!(result.useful_life, 0);
    }
}
