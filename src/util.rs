use crate::float_math::FloatMath;
use std::f64::consts::{PI, TAU};

/// Wraps `angle` (in radians) into the half-open range (-π, π].
///
/// Angles that are already in range are returned bit-for-bit unchanged. Non-finite angles
/// (NaN and ±∞) have no equivalent in range and are also returned unchanged.
///
/// ```
/// use frame2d::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!((normalize_angle(3. * PI / 2.) + PI / 2.).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() || (angle > -PI && angle <= PI) {
        return angle;
    }

    // rem_euclid lands in [-π, π), and may round onto the upper bound of TAU for inputs just
    // below a multiple of it; both ends are fixed up below.
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Returns the signed shortest rotation (in radians) that takes `to` onto `from`.
///
/// The result is in [-π, π] and is independent of how many full turns either input carries.
#[must_use]
pub fn angle_difference(from: f64, to: f64) -> f64 {
    let delta = from - to;
    FloatMath::atan2(FloatMath::sin(delta), FloatMath::cos(delta))
}

#[cfg(test)]
mod tests {
    use super::{angle_difference, normalize_angle};
    use approx::assert_abs_diff_eq;
    use quickcheck::quickcheck;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

    #[rstest]
    #[case(0., 0.)]
    #[case(FRAC_PI_4, FRAC_PI_4)]
    #[case(PI, PI)]
    #[case(-PI, PI)]
    #[case(3. * FRAC_PI_2, -FRAC_PI_2)]
    #[case(-3. * FRAC_PI_2, FRAC_PI_2)]
    #[case(TAU, 0.)]
    #[case(-7. * FRAC_PI_4, FRAC_PI_4)]
    #[case(100. * TAU + 0.5, 0.5)]
    fn normalize_angle_wraps_into_half_open_range(#[case] input: f64, #[case] expected: f64) {
        assert_abs_diff_eq!(normalize_angle(input), expected, epsilon = 1e-9);
    }

    #[test]
    fn normalize_angle_leaves_in_range_values_untouched() {
        for angle in [-3.0, -1.5, 0.1, 2.9, PI] {
            assert_eq!(normalize_angle(angle), angle);
        }
    }

    #[test]
    fn normalize_angle_passes_non_finite_through() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert_eq!(normalize_angle(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize_angle(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[rstest]
    #[case(FRAC_PI_2, 0., FRAC_PI_2)]
    #[case(0., FRAC_PI_2, -FRAC_PI_2)]
    #[case(TAU + 0.25, 0., 0.25)]
    #[case(-PI + 0.1, PI - 0.1, 0.2)]
    fn angle_difference_takes_the_short_way_around(
        #[case] from: f64,
        #[case] to: f64,
        #[case] expected: f64,
    ) {
        assert_abs_diff_eq!(angle_difference(from, to), expected, epsilon = 1e-9);
    }

    quickcheck! {
        fn normalized_angles_are_in_range_and_equivalent(angle: f64) -> bool {
            // quickcheck will give us awkward f64 values -- keep it to a sane number of turns
            if !angle.is_finite() || angle.abs() > 1e6 {
                return true;
            }
            let normalized = normalize_angle(angle);
            normalized > -PI
                && normalized <= PI
                && angle_difference(normalized, angle).abs() < 1e-6
        }
    }
}
