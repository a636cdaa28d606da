//! Cricket overs notation.
//!
//! Scorecards write overs as `completed.balls`, so `19.3` means 19 overs and
//! 3 balls (19.5 overs in decimal), and `19.6` is the same as `20`.

use crate::constants::BALLS_PER_OVER;
use crate::resource::round_half_up;

/// Convert cricket notation to decimal overs.
///
/// The first decimal digit is read as a ball count. A count of 6 or more
/// completes the over.
pub fn to_decimal_overs(overs: f64) -> f64 {
    let whole = overs.floor();
    let balls = round_half_up((overs - whole) * 10.0);
    if balls >= BALLS_PER_OVER as f64 {
        return whole + 1.0;
    }
    whole + balls / BALLS_PER_OVER as f64
}

/// Split decimal overs into whole overs and a legal ball count (0-5).
fn split_overs(decimal_overs: f64) -> (f64, u32) {
    let whole = decimal_overs.floor();
    let balls = round_half_up((decimal_overs - whole) * BALLS_PER_OVER as f64) as u32;
    if balls >= BALLS_PER_OVER {
        (whole + 1.0, 0)
    } else {
        (whole, balls)
    }
}

/// Render decimal overs as `"W"` or `"W.B"`.
pub fn format_overs_display(decimal_overs: f64) -> String {
    let (whole, balls) = split_overs(decimal_overs);
    if balls == 0 {
        format!("{}", whole as i64)
    } else {
        format!("{}.{}", whole as i64, balls)
    }
}

/// Convert decimal overs back to cricket notation (19.5 -> 19.3).
pub fn decimal_to_notation(decimal_overs: f64) -> f64 {
    let (whole, balls) = split_overs(decimal_overs);
    (whole * 10.0 + balls as f64) / 10.0
}
