// src/lamps/simulator.rs

use log::debug;
use num::ToPrimitive;

use crate::core::error::InvalidArgument;
use crate::lamps::lamp_array::{LampArray, LAMP_COUNT};

/// Exactly eight values, each exactly 0 or 1.
pub fn validate_lamp_array(lamps: &[f64]) -> bool {
    lamps.len() == LAMP_COUNT && lamps.iter().all(|&v| v == 0.0 || v == 1.0)
}

/// Structural check: a number greater than zero.
pub fn validate_day_count(days: f64) -> bool {
    !days.is_nan() && days > 0.0
}

/// Runs the lamps rule over `lamps` for `days` days and returns the final row.
pub fn simulate(lamps: &[f64], days: f64) -> Result<LampArray, InvalidArgument> {
    if !validate_lamp_array(lamps) {
        debug!("Rejected lamp array {:?}", lamps);
        return Err(InvalidArgument::new(
            "Invalid argument, first argument is not an array length 8 and consisting of 1's and 0's",
        ));
    }

    if !validate_day_count(days) {
        debug!("Rejected day count {}", days);
        return Err(InvalidArgument::new("Invalid argument, second argument is not a valid number"));
    }

    if !days.is_finite() || days.fract() != 0.0 {
        debug!("Rejected fractional day count {}", days);
        return Err(InvalidArgument::new("Invalid argument, second argument is not a whole number of days"));
    }

    // Any whole day count up to u64::MAX is accepted; `advance` cuts long runs down to one cycle.
    let whole_days = days
        .to_u64()
        .ok_or_else(|| InvalidArgument::new("Invalid argument, second argument is too large a number of days"))?;

    let start = LampArray::from_raw(lamps)
        .ok_or_else(|| InvalidArgument::new("Invalid argument, first argument is not an array length 8 and consisting of 1's and 0's"))?;

    debug!("Simulating {} for {} days", start, whole_days);
    Ok(start.advance(whole_days))
}
