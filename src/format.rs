/// Tie-breaking rule applied when a result is rounded to a fixed number of decimals.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties go to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    #[default]
    HalfEven,
    /// Ties go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
}

/// Beyond this many decimals an f64 carries no further significant digits.
const MAX_ROUNDED_PLACES: u32 = 15;

/// Largest magnitude below which every f64 still has a fractional part to round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

pub fn round_to(value: f64, decimal_places: u32, mode: RoundingMode) -> f64 {
    if decimal_places > MAX_ROUNDED_PLACES {
        return value;
    }

    let scale = 10f64.powi(decimal_places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    let rounded = match mode {
        RoundingMode::HalfEven => scaled.round_ties_even(),
        RoundingMode::HalfAwayFromZero => scaled.round(),
    } / scale;

    // collapse -0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Shortest decimal text that reads back as `value`, without trailing zeros.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
