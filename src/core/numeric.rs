/// Returns `1` when `x` is positive, `-1` when negative and `0` otherwise.
///
/// `NaN` compares neither greater nor less than zero and yields `0`.
#[must_use]
pub fn sign<T>(x: T) -> i32
where
    T: PartialOrd + From<u8>,
{
    let zero = T::from(0);
    if x > zero {
        1
    } else if x < zero {
        -1
    } else {
        0
    }
}

/// Clamps `val` into the interval spanned by `bound1` and `bound2`, in either order.
#[must_use]
pub fn value_limits<T>(val: T, bound1: T, bound2: T) -> T
where
    T: PartialOrd + Copy,
{
    let (min, max) = sort_values(bound1, bound2);
    if val > max {
        max
    } else if val < min {
        min
    } else {
        val
    }
}

/// Returns `(x1, x2)` ordered ascending. Equal inputs keep their order.
#[must_use]
pub fn sort_values<T: PartialOrd>(x1: T, x2: T) -> (T, T) {
    if x2 < x1 { (x2, x1) } else { (x1, x2) }
}

/// Checks `val` against the interval spanned by `v1` and `v2` with boundary slack.
///
/// Values inside the interval are returned as-is. Values outside it but within
/// `max(|eps_rel * bound|, |eps_abs|)` of the nearest bound are snapped onto
/// that bound. Anything further out yields `None`.
#[must_use]
pub fn range_limits(val: f64, v1: f64, v2: f64, eps_rel: f64, eps_abs: f64) -> Option<f64> {
    let (min, max) = sort_values(v1, v2);
    if val < min {
        let slack = (eps_rel * min).abs().max(eps_abs.abs());
        (val >= min - slack).then_some(min)
    } else if val > max {
        let slack = (eps_rel * max).abs().max(eps_abs.abs());
        (val <= max + slack).then_some(max)
    } else {
        Some(val)
    }
}
