use crate::error::{Error, Result};
use crate::float_math::FloatMath;
use crate::Vector2;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(doc)]
use crate::Point2D;

/// Defines a displacement (ie, direction with magnitude) in the plane.
///
/// Unlike a [`Point2D`], a vector has no position. The difference of two points is a vector,
/// and a point plus a vector is another point.
///
/// Vectors can be added, subtracted, negated, and scaled with `f64`s. Division by a zero scalar
/// panics rather than silently producing infinities; use [`Vector2D::checked_div`] if the divisor
/// may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub(crate) inner: Vector2,
}

impl Vector2D {
    pub(crate) fn from_nalgebra_vector(inner: Vector2) -> Self {
        Self { inner }
    }

    /// Constructs a vector from its x and y components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_nalgebra_vector(Vector2::new(x, y))
    }

    /// Constructs a vector with zero length.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_nalgebra_vector(Vector2::zeros())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.inner.x = x;
        self.inner.y = y;
        self
    }

    /// Returns the component at `index` (0 is x, 1 is y).
    ///
    /// See also the [`Index`] impl, which panics instead of returning an error.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.inner
            .as_slice()
            .get(index)
            .copied()
            .ok_or(Error::ComponentOutOfRange { index })
    }

    /// Returns a mutable reference to the component at `index` (0 is x, 1 is y).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        self.inner
            .as_mut_slice()
            .get_mut(index)
            .ok_or(Error::ComponentOutOfRange { index })
    }

    #[must_use]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.inner.dot(&rhs.inner)
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.inner.norm_squared()
    }

    #[doc(alias = "norm")]
    #[doc(alias = "magnitude")]
    #[must_use]
    pub fn length(&self) -> f64 {
        FloatMath::sqrt(self.length_squared())
    }

    /// Returns the angle of this vector against the positive x axis, in [-π, π].
    ///
    /// The zero vector has an angle of zero.
    #[must_use]
    pub fn angle(&self) -> f64 {
        FloatMath::atan2(self.inner.y, self.inner.x)
    }

    /// Divides both components by `rhs`, failing if `rhs` is zero.
    pub fn checked_div(self, rhs: f64) -> Result<Self> {
        if rhs == 0. {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_nalgebra_vector(self.inner / rhs))
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}]", p, self.inner.x, p, self.inner.y),
            None => write!(f, "[{}, {}]", self.inner.x, self.inner.y),
        }
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(value: Vector2D) -> Self {
        [value.inner.x, value.inner.y]
    }
}

impl Index<usize> for Vector2D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match self.inner.as_slice().get(index) {
            Some(component) => component,
            None => panic!("{}", Error::ComponentOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for Vector2D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_nalgebra_vector(-self.inner)
    }
}

impl Add<Self> for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_nalgebra_vector(self.inner + rhs.inner)
    }
}

impl AddAssign<Self> for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.inner += rhs.inner;
    }
}

impl Sub<Self> for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_nalgebra_vector(self.inner - rhs.inner)
    }
}

impl SubAssign<Self> for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.inner -= rhs.inner;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_nalgebra_vector(self.inner * rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        self.inner *= rhs;
    }
}

/// # Panics
///
/// Panics if `rhs` is zero. See [`Vector2D::checked_div`].
impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics if `rhs` is zero. See [`Vector2D::checked_div`].
impl DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Vector2D {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        crate::DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Vector2D {
    fn default_max_relative() -> Self::Epsilon {
        Vector2::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector2D;
    use crate::error::Error;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn components() {
        let v = Vector2D::new(1., 2.);
        assert_eq!(v.x(), 1.);
        assert_eq!(v.y(), 2.);
        assert_eq!(v[0], 1.);
        assert_eq!(v[1], 2.);
        assert_eq!(v.get(1), Ok(2.));
    }

    #[test]
    fn out_of_range_component_is_an_error() {
        let mut v = Vector2D::new(1., 2.);
        assert_eq!(v.get(2), Err(Error::ComponentOutOfRange { index: 2 }));
        assert_eq!(
            v.get_mut(7).map(|c| *c),
            Err(Error::ComponentOutOfRange { index: 7 })
        );
    }

    #[test]
    #[should_panic(expected = "component index 2 is out of range")]
    fn out_of_range_index_panics() {
        let v = Vector2D::new(1., 2.);
        let _ = v[2];
    }

    #[test]
    fn index_mut_writes_through() {
        let mut v = Vector2D::new(1., 2.);
        v[0] = 5.;
        *v.get_mut(1).unwrap() = 6.;
        assert_eq!(v, Vector2D::new(5., 6.));
    }

    #[test]
    fn length() {
        let v = Vector2D::new(3., 4.);
        assert_relative_eq!(v.length_squared(), 25.);
        assert_relative_eq!(v.length(), 5.);
    }

    #[rstest]
    #[case(Vector2D::new(1., 0.), 0.)]
    #[case(Vector2D::new(1., 1.), FRAC_PI_4)]
    #[case(Vector2D::new(0., 2.), FRAC_PI_2)]
    #[case(Vector2D::new(-1., 0.), PI)]
    #[case(Vector2D::new(0., -3.), -FRAC_PI_2)]
    #[case(Vector2D::zero(), 0.)]
    fn angle(#[case] v: Vector2D, #[case] expected: f64) {
        assert_relative_eq!(v.angle(), expected);
    }

    #[test]
    fn arithmetic() {
        let a = Vector2D::new(1., 2.);
        let b = Vector2D::new(-3., 0.5);
        assert_eq!(a + b, Vector2D::new(-2., 2.5));
        assert_eq!(a - b, Vector2D::new(4., 1.5));
        assert_eq!(-a, Vector2D::new(-1., -2.));
        assert_eq!(a * 2., Vector2D::new(2., 4.));
        assert_eq!(2. * a, a * 2.);
        assert_eq!(a / 2., Vector2D::new(0.5, 1.));
        assert_relative_eq!(a.dot(&b), -2.);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 4.;
        c /= 2.;
        assert_eq!(c, b * 2.);

        let total: Vector2D = [a, b, -a].into_iter().sum();
        assert_eq!(total, b);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            Vector2D::new(1., 2.).checked_div(0.),
            Err(Error::DivisionByZero)
        );
        assert_abs_diff_eq!(
            Vector2D::new(1., 2.).checked_div(4.).unwrap(),
            Vector2D::new(0.25, 0.5)
        );
    }

    #[test]
    #[should_panic(expected = "division of a vector by zero")]
    fn division_by_zero_panics() {
        let _ = Vector2D::new(1., 2.) / 0.;
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Vector2D::new(1.5, -2.).to_string(), @"[1.5, -2]");
        insta::assert_snapshot!(format!("{:.2}", Vector2D::new(1.5, -2.)), @"[1.50, -2.00]");
    }
}
