// src/integer_math/gcd.rs

use log::{debug, trace};

use crate::core::error::InvalidArgument;
use crate::core::numeric::{is_safe_integer, to_integer};

/// `Some(value)`, or `None` when the fold compared two zeros and no GCD exists.
pub type GcdOutcome = Option<i64>;

pub struct GCD;

impl GCD {
    /// A prefix count must be a positive integer.
    pub fn validate_count(count: f64) -> bool {
        is_safe_integer(count) && count > 0.0
    }

    /// Every element must be an integer. Sign is unrestricted.
    pub fn validate_sequence(sequence: &[f64]) -> bool {
        sequence.iter().all(|&element| is_safe_integer(element))
    }

    /// Euclidean GCD of two integers.
    ///
    /// Operands are reduced to their magnitudes first, so every result is non-negative and
    /// `find_gcd_pair(a, b) == find_gcd_pair(b, a)` for all inputs. `(0, 0)` has no GCD and
    /// yields `None`.
    pub fn find_gcd_pair(left: i64, right: i64) -> Option<u64> {
        let mut a = left.unsigned_abs();
        let mut b = right.unsigned_abs();

        if a == 0 && b == 0 {
            return None;
        }

        while b != 0 {
            let remainder = a % b;
            a = b;
            b = remainder;
        }

        Some(a)
    }

    /// GCD of the first `count` elements of `sequence`.
    ///
    /// Inputs are raw numbers as handed over by a form field, so `count` and the elements are
    /// checked for integrality here. Fails with [`InvalidArgument`] when `count` is not a
    /// positive integer, when an element is not an integer, or when `count` exceeds the
    /// sequence length. With `count == 1` the first element comes back unchanged.
    pub fn find_gcd(count: f64, sequence: &[f64]) -> Result<GcdOutcome, InvalidArgument> {
        if !Self::validate_count(count) {
            debug!("Rejected prefix count {}", count);
            return Err(InvalidArgument::new("N should be a non-zero positive number"));
        }

        if !Self::validate_sequence(sequence) {
            debug!("Rejected sequence {:?}", sequence);
            return Err(InvalidArgument::new("Array should be an array of numbers"));
        }

        if count > sequence.len() as f64 {
            debug!("Prefix count {} exceeds sequence length {}", count, sequence.len());
            return Err(InvalidArgument::new("N should not be greater than the length of the array"));
        }

        // Both checks above passed, so every conversion succeeds.
        let integers: Vec<i64> = sequence.iter().filter_map(|&element| to_integer(element)).collect();
        Ok(Self::fold_prefix(&integers[..count as usize]))
    }

    /// Same contract as [`GCD::find_gcd`] for callers that already hold integers.
    ///
    /// `i64::MIN` is rejected: its magnitude has no non-negative `i64` representation.
    pub fn find_gcd_of(count: usize, sequence: &[i64]) -> Result<GcdOutcome, InvalidArgument> {
        if count == 0 {
            return Err(InvalidArgument::new("N should be a non-zero positive number"));
        }

        if sequence.contains(&i64::MIN) {
            debug!("Rejected sequence containing i64::MIN");
            return Err(InvalidArgument::new("Array elements should be greater than the minimum integer"));
        }

        if count > sequence.len() {
            return Err(InvalidArgument::new("N should not be greater than the length of the array"));
        }

        Ok(Self::fold_prefix(&sequence[..count]))
    }

    fn fold_prefix(prefix: &[i64]) -> GcdOutcome {
        let (&first, rest) = prefix.split_first()?;
        let mut result = first;

        for &value in rest {
            // Without i64::MIN every magnitude is at most i64::MAX.
            result = Self::find_gcd_pair(result, value)? as i64;
            trace!("Running GCD after {}: {}", value, result);

            if result == 1 {
                return Some(1);
            }
        }

        Some(result)
    }
}
