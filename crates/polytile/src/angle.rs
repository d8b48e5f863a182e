//! Angle conversion and rounding helpers.

/// Degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Round half toward +∞ (`-2.5 → -2`, `2.5 → 3`).
///
/// `f64::round` rounds half away from zero, which shifts negative outline
/// coordinates that land exactly on a `.5` step.
#[inline]
pub fn js_round(x: f64) -> f64 {
    let f = x.floor();
    if x - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}

/// Round `value` to the nearest `1 / granularity`.
///
/// `granularity = 100` means two decimals. This is multiply-round-divide, not a
/// decimal-place count. `f64::EPSILON` is added first so values such as
/// `1.005` that sit just under a `.5` step after scaling still round up.
#[inline]
pub fn round_to_granularity(value: f64, granularity: f64) -> f64 {
    js_round((value + f64::EPSILON) * granularity) / granularity
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn radians_of_quarter_turns() {
        assert_eq!(to_radians(0.0), 0.0);
        assert!((to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((to_radians(-360.0) + std::f64::consts::TAU).abs() < 1e-15);
    }

    #[test]
    fn js_round_breaks_ties_upward() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.51), -3.0);
        assert_eq!(js_round(0.49), 0.0);
        assert_eq!(js_round(-0.0), 0.0);
    }

    #[test]
    fn granularity_is_multiply_round_divide() {
        assert_eq!(round_to_granularity(0.8660254037844386, 100.0), 0.87);
        assert_eq!(round_to_granularity(-0.49999999999999994, 100.0), -0.5);
        assert_eq!(round_to_granularity(1.005, 100.0), 1.01);
        assert_eq!(round_to_granularity(12.34, 10.0), 12.3);
        assert_eq!(round_to_granularity(7.0, 1.0), 7.0);
    }

    proptest! {
        #[test]
        fn rounding_is_idempotent(x in -1.0e6f64..1.0e6) {
            let once = round_to_granularity(x, 100.0);
            prop_assert_eq!(round_to_granularity(once, 100.0), once);
        }

        #[test]
        fn rounding_moves_at_most_half_a_step(x in -1.0e6f64..1.0e6) {
            let r = round_to_granularity(x, 100.0);
            prop_assert!((r - x).abs() <= 0.005 + 1e-9);
        }
    }
}
