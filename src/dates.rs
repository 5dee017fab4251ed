//! Calendar arithmetic for ages and building terms
//!
//! Both functions return signed values: a reference date before the start
//! date yields a negative result rather than an error. Rejecting reversed
//! dates is the job of `valuation::validate`.

use chrono::{Datelike, NaiveDate};

/// Age in completed years (満年齢) on `reference`
///
/// One year is subtracted when the reference month/day falls before the
/// birthday's month/day. A Feb-29 birthday is therefore reached on Mar-1 in
/// common years.
pub fn attained_age(birthday: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birthday.year();
    if (reference.month(), reference.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age
}

/// Elapsed years of a building between `start` and `end`
///
/// Spreadsheet formula: `=ROUND(ROUND(DATEDIF(start, end, "M") - 1, 0) / 12, 0)`,
/// where the month count ignores the day of month. Rounding is half away from
/// zero, so 18 months less one (17/12 = 1.42) gives 1 but 19 months gives 2.
pub fn elapsed_years(start: NaiveDate, end: NaiveDate) -> i32 {
    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    let adjusted = f64::from(months - 1).round();
    (adjusted / 12.0).round() as i32
}
