// tests/lamps_tests.rs

use gcd_lamps::lamps::{simulate, LampArray};
use proptest::prelude::*;

#[cfg(test)]
mod lamps_tests {
    use super::*;

    fn raw(values: [u8; 8]) -> Vec<f64> {
        values.iter().map(|&v| v as f64).collect()
    }

    fn run(values: [u8; 8], days: f64) -> Vec<u8> {
        simulate(&raw(values), days).unwrap().to_vec()
    }

    #[test]
    fn test_single_day() {
        // 0|0 -> 0, 1|0 -> 1, 0|0 -> 0, 0|0 -> 0, 0|0 -> 0, 0|1 -> 1, 0|0 -> 0, 1|0 -> 1
        assert_eq!(run([1, 0, 0, 0, 0, 0, 1, 0], 1.0), vec![0, 1, 0, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_two_days_use_previous_state() {
        // Day 1: [0,1,0,0,0,1,0,1]; day 2 from that state.
        assert_eq!(run([1, 0, 0, 0, 0, 0, 1, 0], 2.0), vec![1, 0, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_all_off_is_fixed_point() {
        for days in [1.0, 2.0, 7.0, 100.0, 1e12] {
            assert_eq!(run([0; 8], days), vec![0; 8], "days {}", days);
        }
    }

    #[test]
    fn test_all_on() {
        assert_eq!(run([1; 8], 1.0), vec![1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_very_long_run_matches_period() {
        let start = raw([1, 1, 0, 1, 0, 0, 1, 1]);
        let long = simulate(&start, 1_000_000_007.0).unwrap();

        let mut state = LampArray::from_raw(&start).unwrap();
        let mut seen = vec![state];
        loop {
            state = state.step();
            if let Some(pos) = seen.iter().position(|&s| s == state) {
                let period = (seen.len() - pos) as u64;
                let index = pos as u64 + (1_000_000_007 - pos as u64) % period;
                assert_eq!(long, seen[index as usize]);
                break;
            }
            seen.push(state);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(simulate(&[0.0; 7], 1.0).is_err());
        assert!(simulate(&[0.0; 9], 1.0).is_err());
        assert!(simulate(&[], 1.0).is_err());
    }

    #[test]
    fn test_rejects_non_binary_values() {
        let err = simulate(&[0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1.0).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid argument, first argument is not an array length 8 and consisting of 1's and 0's"
        );
    }

    #[test]
    fn test_rejects_non_positive_days() {
        for days in [0.0, -1.0, f64::NAN] {
            let err = simulate(&[0.0; 8], days).unwrap_err();
            assert_eq!(err.message, "Invalid argument, second argument is not a valid number");
        }
    }

    #[test]
    fn test_rejects_fractional_days() {
        assert!(simulate(&[1.0; 8], 0.5).is_err());
        assert!(simulate(&[1.0; 8], 2.25).is_err());
        assert!(simulate(&[1.0; 8], f64::INFINITY).is_err());
    }

    proptest! {
        #[test]
        fn advance_matches_repeated_steps(bits in any::<u8>(), days in 1u64..1_000) {
            let values: Vec<f64> = (0..8).map(|i| ((bits >> i) & 1) as f64).collect();
            let start = LampArray::from_raw(&values).unwrap();

            let mut naive = start;
            for _ in 0..days {
                naive = naive.step();
            }
            prop_assert_eq!(simulate(&values, days as f64).unwrap(), naive);
        }
    }
}
