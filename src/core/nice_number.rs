//! Rounding to the `{1, 2, 5} × 10^n` sequence used for axis step widths.

/// Relative slack applied when the mantissa is compared against a breakpoint.
const MANTISSA_EPS: f64 = 1e-9;
/// Lifts subnormal inputs into the normal range, where every decade is representable.
const SUBNORMAL_SCALE: f64 = 1e300;

/// Rounds `x` up (in magnitude) to the next value of the form `{1, 2, 5} × 10^n`.
///
/// The sign of `x` is preserved, so `ceil_125(-3.0) == -5.0`. Zero and
/// non-finite inputs are returned unchanged.
#[must_use]
pub fn ceil_125(x: f64) -> f64 {
    if x.is_subnormal() {
        return ceil_125(x * SUBNORMAL_SCALE) / SUBNORMAL_SCALE;
    }
    let Some((sign, mantissa, decade)) = decompose(x) else {
        return x;
    };

    let nice = if mantissa <= 1.0 + MANTISSA_EPS {
        1.0
    } else if mantissa <= 2.0 * (1.0 + MANTISSA_EPS) {
        2.0
    } else if mantissa <= 5.0 * (1.0 + MANTISSA_EPS) {
        5.0
    } else {
        10.0
    };
    sign * nice * decade
}

/// Rounds `x` down (in magnitude) to the previous value of the form `{1, 2, 5} × 10^n`.
///
/// The sign of `x` is preserved, so `floor_125(-3.0) == -2.0`. Zero and
/// non-finite inputs are returned unchanged.
#[must_use]
pub fn floor_125(x: f64) -> f64 {
    if x.is_subnormal() {
        return floor_125(x * SUBNORMAL_SCALE) / SUBNORMAL_SCALE;
    }
    let Some((sign, mantissa, decade)) = decompose(x) else {
        return x;
    };

    let nice = if mantissa >= 10.0 * (1.0 - MANTISSA_EPS) {
        10.0
    } else if mantissa >= 5.0 * (1.0 - MANTISSA_EPS) {
        5.0
    } else if mantissa >= 2.0 * (1.0 - MANTISSA_EPS) {
        2.0
    } else {
        1.0
    };
    sign * nice * decade
}

/// Splits `x` into `(sign, mantissa, 10^exponent)` with `mantissa` in `[1, 10)`
/// up to rounding noise. Only normal inputs decompose.
fn decompose(x: f64) -> Option<(f64, f64, f64)> {
    if !x.is_normal() {
        return None;
    }

    let magnitude = x.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    // log10 may land on the wrong side of an exact power of ten.
    if magnitude / 10_f64.powi(exponent) < 1.0 {
        exponent -= 1;
    } else if magnitude / 10_f64.powi(exponent) >= 10.0 {
        exponent += 1;
    }
    let decade = 10_f64.powi(exponent);
    Some((x.signum(), magnitude / decade, decade))
}
