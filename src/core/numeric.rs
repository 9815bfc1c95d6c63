// src/core/numeric.rs

use num::ToPrimitive;

/// Largest magnitude a raw number can hold while still being an exact integer (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// True when `value` is finite, has no fractional part and fits the safe integer range.
pub fn is_safe_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER
}

/// Converts a raw number to `i64`, or `None` if it is not a safe integer.
pub fn to_integer(value: f64) -> Option<i64> {
    if is_safe_integer(value) {
        value.to_i64()
    } else {
        None
    }
}
