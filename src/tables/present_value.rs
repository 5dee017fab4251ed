//! Compound present value factors (複利現価率) at the statutory interest rate
//!
//! Values are the published three-decimal factors `1 / (1 + r)^n` for
//! n = 1..=70. They are reference data and are not recomputed at runtime,
//! since the published rounding is what the valuation must reproduce.

/// Statutory interest rate (法定利率) the factors below are based on
pub const STATUTORY_RATE: f64 = 0.03;

/// Shortest term in the table (years)
pub const MIN_YEARS: i32 = 1;

/// Longest term in the table (years)
pub const MAX_YEARS: i32 = 70;

/// Factors by term, index 0 = 1 year
static PRESENT_VALUE_FACTORS: [f64; 70] = [
    0.971, 0.943, 0.915, 0.888, 0.863, // 1-5
    0.837, 0.813, 0.789, 0.766, 0.744, // 6-10
    0.722, 0.701, 0.681, 0.661, 0.642, // 11-15
    0.623, 0.605, 0.587, 0.570, 0.554, // 16-20
    0.538, 0.522, 0.507, 0.492, 0.478, // 21-25
    0.464, 0.450, 0.437, 0.424, 0.412, // 26-30
    0.400, 0.388, 0.377, 0.366, 0.355, // 31-35
    0.345, 0.335, 0.325, 0.316, 0.307, // 36-40
    0.298, 0.289, 0.281, 0.272, 0.264, // 41-45
    0.257, 0.249, 0.242, 0.235, 0.228, // 46-50
    0.221, 0.215, 0.209, 0.203, 0.197, // 51-55
    0.191, 0.185, 0.180, 0.175, 0.170, // 56-60
    0.165, 0.160, 0.155, 0.151, 0.146, // 61-65
    0.142, 0.138, 0.134, 0.130, 0.126, // 66-70
];

/// Present value factor for a whole number of years
pub fn present_value_factor(years: i32) -> f64 {
    let idx = (years.clamp(MIN_YEARS, MAX_YEARS) - MIN_YEARS) as usize;
    PRESENT_VALUE_FACTORS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamps_at_boundaries() {
        assert_eq!(present_value_factor(0), present_value_factor(1));
        assert_eq!(present_value_factor(-3), present_value_factor(1));
        assert_eq!(present_value_factor(71), present_value_factor(70));
        assert_eq!(present_value_factor(200), present_value_factor(70));
    }

    #[test]
    fn test_published_values() {
        assert_eq!(present_value_factor(1), 0.971);
        assert_eq!(present_value_factor(10), 0.744);
        assert_eq!(present_value_factor(26), 0.464);
        assert_eq!(present_value_factor(70), 0.126);
    }

    #[test]
    fn test_matches_statutory_rate_to_three_decimals() {
        for n in MIN_YEARS..=MAX_YEARS {
            let exact = (1.0 + STATUTORY_RATE).powi(-n);
            assert_abs_diff_eq!(present_value_factor(n), exact, epsilon = 0.0005 + 1e-12);
        }
    }

    #[test]
    fn test_in_unit_interval_and_decreasing() {
        for n in MIN_YEARS..MAX_YEARS {
            let v = present_value_factor(n);
            assert!(v > 0.0 && v <= 1.0);
            assert!(present_value_factor(n + 1) < v);
        }
    }
}
