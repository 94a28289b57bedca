//! Numeric helpers shared by the relations and the estimators.
//!
//! Nothing here knows about compounds; these are plain functions over `f64`.

/// Assert that the deviation between two values is less than a threshold
///
/// Calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if !(actual_deviation < max_dev) {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if !(actual_deviation < max_dev) {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Linear interpolation between two values
///
/// # Examples
/// ```
/// use compound_catalog::math_utils::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
/// ```
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}

/// Inverse linear interpolation - find the ratio for a given value
///
/// # Examples
/// ```
/// use compound_catalog::math_utils::inverse_lerp;
///
/// let ratio = inverse_lerp(100.0, 200.0, 150.0);
/// assert_eq!(ratio, 0.5);
/// ```
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if (b - a).abs() < f64::EPSILON {
        0.0 // Avoid division by zero
    } else {
        (value - a) / (b - a)
    }
}

/// Finds a root of `f` between `lo` and `hi` by bisection.
///
/// Returns NaN when `f` does not change sign over the bracket, which downstream
/// plausibility checks treat as "no estimate".
pub fn bisect(f: impl Fn(f64) -> f64, lo: f64, hi: f64, iterations: usize) -> f64 {
    let (mut lo, mut hi) = (lo, hi);
    let (mut f_lo, f_hi) = (f(lo), f(hi));
    if !(f_lo * f_hi <= 0.0) {
        return f64::NAN;
    }
    for _ in 0..iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    0.5 * (lo + hi)
}

/// Central difference estimate of df/dx at `x` with absolute step `h`.
pub fn central_difference(f: impl Fn(f64) -> f64, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Calculate the percentage deviation between two values
///
/// Uses the expected value as the reference (base) for the percentage calculation.
///
/// # Examples
/// ```
/// use compound_catalog::math_utils::deviation;
///
/// // 105 is 5% higher than 100
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(100.0, 200.0, 0.25), 125.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(100.0, 200.0, 200.0), 1.0);
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn test_bisect_finds_square_root() {
        let root = bisect(|x| x * x - 2.0, 0.0, 2.0, 60);
        assert_abs_diff_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_bisect_without_sign_change_is_nan() {
        assert!(bisect(|x| x * x + 1.0, -1.0, 1.0, 60).is_nan());
    }

    #[test]
    fn test_central_difference() {
        let slope = central_difference(|x| x.powi(3), 2.0, 1e-4);
        assert_abs_diff_eq!(slope, 12.0, epsilon = 1e-6);
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation(100.0, 100.0), 0.0);
        assert!((deviation(1530.0, 1500.0) - 2.0).abs() < 0.001);
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(10.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_assert_deviation_macro() {
        assert_deviation!(105.0, 100.0, 10.0);
        assert_deviation!(1530.0, 1500.0, 5.0, "Temperature should be within 5%");
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_fails() {
        assert_deviation!(120.0, 100.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "assertion failed: deviation")]
    fn test_assert_deviation_macro_rejects_nan() {
        assert_deviation!(f64::NAN, 100.0, 10.0);
    }
}
