//! Valuation engine: splits building and land values between the spouse's
//! residence right and the remainder owner

use log::debug;

use crate::case::InputCase;
use crate::dates::{attained_age, elapsed_years};
use crate::tables::{life_expectancy, present_value_factor, useful_life};
use super::result::ResultRecord;

/// Tenancy right ratio (借家権割合), applied to let floor area and let land
pub const TENANCY_RIGHT_RATIO: f64 = 0.3;

/// Round to whole yen, half away from zero
fn round_yen(amount: f64) -> i64 {
    amount.round() as i64
}

/// Value one case
///
/// Pure and infallible: out-of-range ages and terms are clamped by the
/// tables, zero building area gives a zero rental ratio, and an unknown
/// structure gives a useful life of 0 (so the building right equals the base
/// value). Use `calculate_checked` to reject inconsistent inputs first.
///
/// Each monetary step is rounded where it is produced. Do not fold steps
/// together: the intermediate rounding is part of the statutory result.
pub fn calculate(case: &InputCase) -> ResultRecord {
    // Area ratios
    let rental_area_ratio = if case.building_area > 0.0 {
        case.rental_area / case.building_area
    } else {
        0.0
    };
    let residential_ratio = 1.0 - rental_area_ratio;
    let residential_area = case.building_area * residential_ratio;
    let occupancy_rate = case.rental_ratio / 100.0;

    // Assessed building value, let floor area discounted by the tenancy right
    let building_tax_value = round_yen(
        case.building_value * (1.0 - rental_area_ratio * TENANCY_RIGHT_RATIO)
            * case.building_ownership_ratio / 100.0,
    );

    // Building term
    let elapsed = elapsed_years(case.construction_date, case.division_date);
    let useful = useful_life(&case.structure);

    // Spouse
    let spouse_age = attained_age(case.spouse_birthday, case.division_date);
    let life = life_expectancy(spouse_age, case.spouse_gender);
    let pvf = present_value_factor(life as i32);

    // Residence right on the building
    let base_value = round_yen(
        case.building_value * residential_ratio * (case.building_ownership_ratio / 100.0),
    );
    let remaining_years = (useful as i32 - elapsed).max(0);
    let building_right = if remaining_years > 0 {
        let remaining_ratio = (f64::from(life) / f64::from(remaining_years)).min(1.0);
        round_yen(base_value as f64 * (1.0 - (1.0 - remaining_ratio) * pvf))
    } else {
        // Useful life used up: no depreciation over the right's term
        base_value
    };
    let setting_building = building_tax_value - building_right;

    // Land
    let land_value = round_yen(case.road_price * case.land_area * (case.land_correction / 100.0));
    let lower_ownership_ratio = case.building_ownership_ratio.min(case.land_ownership_ratio);
    let land_use = round_yen(
        land_value as f64 * residential_ratio * (lower_ownership_ratio / 100.0) * (1.0 - pvf),
    );

    // Land under let buildings: leasehold ratio × tenancy right × let share × occupancy
    let rental_land_ratio = (case.lease_ratio / 100.0) * TENANCY_RIGHT_RATIO;
    let land_reduction = round_yen(
        land_value as f64 * rental_land_ratio * rental_area_ratio * occupancy_rate,
    );
    let land_owner = round_yen(
        land_value as f64 * lower_ownership_ratio / 100.0
            - land_reduction as f64
            - land_use as f64,
    );

    // Totals
    let spouse_right_total = building_right + land_use;
    let remaining_assets_total = setting_building + land_owner;
    let total = spouse_right_total + remaining_assets_total;

    debug!(
        "age={} life={} pvf={} elapsed={} useful={} building_right={} land_use={} total={}",
        spouse_age, life, pvf, elapsed, useful, building_right, land_use, total
    );

    ResultRecord {
        spouse_age,
        life,
        pvf,
        elapsed_years: elapsed,
        useful_life: useful,
        remaining_years,
        residential_area,
        residential_ratio,
        rental_area_ratio,
        rental_ratio: occupancy_rate,
        building_tax_value,
        base_value,
        building_right,
        setting_building,
        land_value,
        land_use,
        land_reduction,
        land_owner,
        spouse_right_total,
        remaining_assets_total,
        total,
    }
}
