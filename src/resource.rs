use crate::constants::{ALL_OUT_WICKETS, MAX_OVERS};
use crate::resource_table::RESOURCE_TABLE;

/// Round to the nearest integer, with halves going up.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, with halves going up.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Resource percentage remaining with `overs_remaining` overs left and
/// `wickets_lost` wickets down.
///
/// Wickets are rounded to a whole number and clamped to 0-10; overs are
/// clamped to 0-50. Fractional overs interpolate linearly between the two
/// neighbouring table rows.
///
/// # Arguments
/// * `overs_remaining` - Decimal overs left in the innings
/// * `wickets_lost` - Wickets already fallen
///
/// # Returns
/// Percentage of run-scoring resource still available (0.0-100.0)
pub fn resource_percentage(overs_remaining: f64, wickets_lost: f64) -> f64 {
    let wickets = round_half_up(wickets_lost).clamp(0.0, ALL_OUT_WICKETS as f64);
    // NaN falls through the clamp and casts to column 0
    let wickets = wickets as usize;
    if wickets == ALL_OUT_WICKETS as usize {
        return 0.0;
    }

    let overs = if overs_remaining.is_nan() {
        0.0
    } else {
        overs_remaining.clamp(0.0, MAX_OVERS as f64)
    };

    let lower = overs.floor() as usize;
    let upper = overs.ceil() as usize;
    if lower == upper || upper > MAX_OVERS as usize {
        return RESOURCE_TABLE[lower.min(MAX_OVERS as usize)][wickets];
    }

    let fraction = overs - lower as f64;
    let lower_val = RESOURCE_TABLE[lower][wickets];
    let upper_val = RESOURCE_TABLE[upper][wickets];
    lower_val + fraction * (upper_val - lower_val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rows() {
        assert_eq!(resource_percentage(50.0, 0.0), 100.0);
        assert_eq!(resource_percentage(30.0, 0.0), 63.0);
        assert_eq!(resource_percentage(15.0, 2.0), 36.3);
        assert_eq!(resource_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_all_out_has_no_resource() {
        for overs in [0.0, 0.5, 10.0, 33.3, 50.0, 80.0] {
            assert_eq!(resource_percentage(overs, 10.0), 0.0);
        }
    }

    #[test]
    fn test_interpolates_between_rows() {
        // halfway between 20 (47.8) and 21 (49.5) overs at 0 wickets
        let value = resource_percentage(20.5, 0.0);
        assert!((value - 48.65).abs() < 1e-10);
    }

    #[test]
    fn test_clamps_out_of_range_overs() {
        assert_eq!(resource_percentage(75.0, 0.0), 100.0);
        assert_eq!(resource_percentage(-3.0, 0.0), 0.0);
    }

    #[test]
    fn test_wickets_rounded_and_clamped() {
        assert_eq!(resource_percentage(30.0, 2.4), resource_percentage(30.0, 2.0));
        assert_eq!(resource_percentage(30.0, 2.5), resource_percentage(30.0, 3.0));
        assert_eq!(resource_percentage(30.0, -4.0), resource_percentage(30.0, 0.0));
        assert_eq!(resource_percentage(30.0, 14.0), 0.0);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_half_up(176.4), 176.0);
        assert_eq!(round_half_up(210.5), 211.0);
        assert_eq!(round_to_tenth(83.84), 83.8);
        assert_eq!(round_to_tenth(63.0), 63.0);
    }
}
