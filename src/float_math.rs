//! Trigonometry that can be backed by either the standard library or `libm`.
//!
//! The transform cache is only as reproducible as the `sin`/`cos` it is computed from, so users
//! who need bit-identical results across platforms can switch to `libm` with the `libm` feature.
//!
//! Call these through the trait (eg, `FloatMath::sin(x)`) since `f64`'s inherent methods of the
//! same name would otherwise take precedence.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "frame2d requires a floating-point math backend. \
     Enable either the `std` feature (default) or the `libm` feature."
);

pub(crate) trait FloatMath {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
}

#[cfg(feature = "std")]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        f64::atan2(self, other)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatMath for f64 {
    #[inline]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FloatMath;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn sin_cos_of_quarter_turn() {
        assert_relative_eq!(FloatMath::sin(FRAC_PI_2), 1.0);
        assert_relative_eq!(FloatMath::cos(0.0_f64), 1.0);
        assert_relative_eq!(FloatMath::sin(FRAC_PI_4), FloatMath::cos(FRAC_PI_4));
    }

    #[test]
    fn atan2_covers_all_quadrants() {
        assert_relative_eq!(FloatMath::atan2(1.0_f64, 1.0), FRAC_PI_4);
        assert_relative_eq!(FloatMath::atan2(1.0_f64, -1.0), 3. * FRAC_PI_4);
        assert_relative_eq!(FloatMath::atan2(-1.0_f64, -1.0), -3. * FRAC_PI_4);
        assert_relative_eq!(FloatMath::atan2(0.0_f64, -1.0), PI);
    }

    #[test]
    fn sqrt() {
        assert_eq!(FloatMath::sqrt(16.0_f64), 4.0);
    }
}
