use proptest::prelude::*;
use scalediv::core::{ceil_125, floor_125};

const TOLERANCE: f64 = 1e-9;
const BOUND_SLACK: f64 = 1e-8;

fn is_nice(value: f64) -> bool {
    let exponent = value.log10().floor() as i32;
    let mantissa = value / 10_f64.powi(exponent);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|nice| (mantissa - nice).abs() <= nice * TOLERANCE)
}

proptest! {
    #[test]
    fn ceil_125_is_nice_and_not_below_input(x in 1e-6f64..1e6) {
        let rounded = ceil_125(x);
        prop_assert!(rounded >= x * (1.0 - BOUND_SLACK));
        prop_assert!(rounded <= x * 2.5 * (1.0 + BOUND_SLACK));
        prop_assert!(is_nice(rounded));
    }

    #[test]
    fn floor_125_is_nice_and_not_above_input(x in 1e-6f64..1e6) {
        let rounded = floor_125(x);
        prop_assert!(rounded <= x * (1.0 + BOUND_SLACK));
        prop_assert!(rounded * 2.5 * (1.0 + BOUND_SLACK) >= x);
        prop_assert!(is_nice(rounded));
    }

    #[test]
    fn negative_inputs_mirror_positive_ones(x in 1e-6f64..1e6) {
        prop_assert_eq!(ceil_125(-x), -ceil_125(x));
        prop_assert_eq!(floor_125(-x), -floor_125(x));
    }
}
