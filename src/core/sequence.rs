//! Evenly spaced value sequences and small slice utilities.

use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

/// Ordering reported by [`check_mono`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    NotMonotonic,
}

/// Returns `n` values evenly spaced over `[xmin, xmax]`.
///
/// Both endpoints are exact: the first element is `xmin` and the last one is
/// forced to `xmax`. `n == 1` yields `[xmin]`, `n == 0` an empty vector.
#[must_use]
pub fn lin_space(n: usize, xmin: f64, xmax: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![xmin],
        _ => {
            let last = n - 1;
            let step = (xmax - xmin) / last as f64;
            let mut values: Vec<f64> = (0..n).map(|i| xmin + i as f64 * step).collect();
            values[last] = xmax;
            values
        }
    }
}

/// Returns `n` values evenly spaced in `log10` over `[xmin, xmax]`.
///
/// Both bounds must be finite and strictly positive. Endpoints are exact as in
/// [`lin_space`].
pub fn log_space(n: usize, xmin: f64, xmax: f64) -> ScaleResult<Vec<f64>> {
    if !xmin.is_finite() || !xmax.is_finite() || xmin <= 0.0 || xmax <= 0.0 {
        return Err(ScaleError::InvalidLogBounds { x1: xmin, x2: xmax });
    }

    match n {
        0 => Ok(Vec::new()),
        1 => Ok(vec![xmin]),
        _ => {
            let last = n - 1;
            let lxmin = xmin.log10();
            let step = (xmax.log10() - lxmin) / last as f64;
            let mut values: Vec<f64> = (0..n)
                .map(|i| 10_f64.powf(lxmin + i as f64 * step))
                .collect();
            values[0] = xmin;
            values[last] = xmax;
            Ok(values)
        }
    }
}

#[must_use]
pub fn array_min(values: &[f64]) -> Option<f64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |min, value| min.min(*value)))
}

#[must_use]
pub fn array_max(values: &[f64]) -> Option<f64> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(*first, |max, value| max.max(*value)))
}

/// Classifies `values` as strictly increasing, strictly decreasing or neither.
///
/// Slices shorter than two elements count as increasing.
#[must_use]
pub fn check_mono(values: &[f64]) -> Monotonicity {
    let Some(first_pair) = values.windows(2).next() else {
        return Monotonicity::Increasing;
    };

    let expected = if first_pair[1] > first_pair[0] {
        Monotonicity::Increasing
    } else if first_pair[1] < first_pair[0] {
        Monotonicity::Decreasing
    } else {
        return Monotonicity::NotMonotonic;
    };

    let consistent = values.windows(2).all(|pair| match expected {
        Monotonicity::Increasing => pair[1] > pair[0],
        _ => pair[1] < pair[0],
    });
    if consistent {
        expected
    } else {
        Monotonicity::NotMonotonic
    }
}

/// Reverses `values` in place.
pub fn twist_array(values: &mut [f64]) {
    values.reverse();
}
