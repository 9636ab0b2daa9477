use crate::error::{Error, Result};
use crate::float_math::FloatMath;
use crate::vectors::Vector2D;
use crate::Point2;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

#[cfg(any(test, feature = "approx"))]
use approx::{AbsDiffEq, RelativeEq};

#[cfg(doc)]
use crate::FrameTransform;

/// Defines a point (ie, position) in some frame of the plane.
///
/// A point carries no orientation and no record of which frame it is expressed in; that is
/// tracked by whoever holds it. Points are moved between frames with a [`FrameTransform`], and
/// are what a [`FrameTransform`] stores as its translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub(crate) point: Point2,
}

impl Point2D {
    pub(crate) fn from_nalgebra_point(point: Point2) -> Self {
        Self { point }
    }

    /// Constructs a point at the given cartesian position.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_nalgebra_point(Point2::new(x, y))
    }

    /// Returns the point at (0, 0).
    #[must_use]
    pub fn origin() -> Self {
        Self::from_nalgebra_point(Point2::origin())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.point.x
    }

    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.point.y
    }

    /// Moves the point to the given cartesian position.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.point.x = x;
        self.point.y = y;
        self
    }

    /// Returns the component at `index` (0 is x, 1 is y).
    ///
    /// See also the [`Index`] impl, which panics instead of returning an error.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.point
            .coords
            .as_slice()
            .get(index)
            .copied()
            .ok_or(Error::ComponentOutOfRange { index })
    }

    /// Returns a mutable reference to the component at `index` (0 is x, 1 is y).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        self.point
            .coords
            .as_mut_slice()
            .get_mut(index)
            .ok_or(Error::ComponentOutOfRange { index })
    }

    /// Computes the distance between this point and the given point.
    ///
    /// ```rust
    /// use frame2d::Point2D;
    ///
    /// let p = Point2D::new(3., 1.4);
    /// assert_eq!(p.distance_to(&Point2D::new(1., 1.4)), 2.);
    /// assert_eq!(p.distance_to(&p), 0.);
    /// ```
    #[must_use]
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (*other - *self).length()
    }

    /// Computes the distance between this point and the point at `(x, y)`.
    #[must_use]
    pub fn distance_to_xy(&self, x: f64, y: f64) -> f64 {
        self.distance_to(&Point2D::new(x, y))
    }

    /// Returns the polar angle of this point around the origin, in [-π, π].
    ///
    /// Together with [`Point2D::radius`], this is the point in polar coordinates.
    #[must_use]
    pub fn angle(&self) -> f64 {
        FloatMath::atan2(self.point.y, self.point.x)
    }

    /// Returns the distance of this point from the origin.
    #[doc(alias = "distance_from_origin")]
    #[must_use]
    pub fn radius(&self) -> f64 {
        Vector2D::from(*self).length()
    }

    /// Linearly interpolate between this point and another point.
    ///
    /// Specifically, returns `self * (1.0 - t) + rhs * t`, i.e., the linear blend of the
    /// two points using the scalar value `t`.
    ///
    /// The value for `t` is not restricted to the range [0, 1].
    #[must_use]
    pub fn lerp(&self, rhs: &Self, t: f64) -> Self {
        Self::from_nalgebra_point(self.point.lerp(&rhs.point, t))
    }
}

impl Display for Point2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}]", p, self.point.x, p, self.point.y),
            None => write!(f, "[{}, {}]", self.point.x, self.point.y),
        }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(value: Point2D) -> Self {
        [value.point.x, value.point.y]
    }
}

/// The displacement of the point from the origin.
impl From<Point2D> for Vector2D {
    fn from(value: Point2D) -> Self {
        Vector2D::from_nalgebra_vector(value.point.coords)
    }
}

/// The point reached by displacing the origin by the vector.
impl From<Vector2D> for Point2D {
    fn from(value: Vector2D) -> Self {
        Point2D::from_nalgebra_point(Point2::from(value.inner))
    }
}

impl Index<usize> for Point2D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        match self.point.coords.as_slice().get(index) {
            Some(component) => component,
            None => panic!("{}", Error::ComponentOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for Point2D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(component) => component,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Mirrors the point through the origin.
impl Neg for Point2D {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_nalgebra_point(-self.point)
    }
}

impl Sub<Self> for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2D::from_nalgebra_vector(self.point - rhs.point)
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Vector2D) -> Self::Output {
        Self::from_nalgebra_point(self.point + rhs.inner)
    }
}

impl AddAssign<Vector2D> for Point2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.point += rhs.inner;
    }
}

impl Sub<Vector2D> for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Vector2D) -> Self::Output {
        Self::from_nalgebra_point(self.point - rhs.inner)
    }
}

impl SubAssign<Vector2D> for Point2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.point -= rhs.inner;
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for Point2D {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        crate::DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        // NOTE: this bounds each component separately, not the distance between the points.
        self.point.abs_diff_eq(&other.point, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for Point2D {
    fn default_max_relative() -> Self::Epsilon {
        Point2::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.point.relative_eq(&other.point, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::Point2D;
    use crate::error::Error;
    use crate::vectors::Vector2D;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn accessors() {
        let mut p = Point2D::new(3.0, 1.4);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), 1.4);

        *p.x_mut() = -1.;
        *p.y_mut() = 2.;
        assert_eq!(p, Point2D::new(-1., 2.));

        p.set(7., 8.);
        assert_eq!((p[0], p[1]), (7., 8.));
        assert_eq!(p.get(0), Ok(7.));
    }

    #[test]
    fn out_of_range_component_is_an_error() {
        let mut p = Point2D::new(3.0, 1.4);
        assert_eq!(p.get(2), Err(Error::ComponentOutOfRange { index: 2 }));
        assert!(p.get_mut(usize::MAX).is_err());
    }

    #[test]
    #[should_panic(expected = "component index 3 is out of range")]
    fn out_of_range_index_mut_panics() {
        let mut p = Point2D::origin();
        p[3] = 1.;
    }

    #[rstest]
    #[case(Point2D::new(3.0, 1.4), Point2D::new(1.0, 1.4), 2.)]
    #[case(Point2D::new(0., 0.), Point2D::new(3., 4.), 5.)]
    #[case(Point2D::new(-1., -1.), Point2D::new(-1., -1.), 0.)]
    fn distance_to(#[case] a: Point2D, #[case] b: Point2D, #[case] expected: f64) {
        assert_relative_eq!(a.distance_to(&b), expected);
        assert_relative_eq!(b.distance_to(&a), expected);
        assert_relative_eq!(a.distance_to_xy(b.x(), b.y()), expected);
    }

    #[rstest]
    #[case(Point2D::new(2., 0.), 0., 2.)]
    #[case(Point2D::new(1., 1.), FRAC_PI_4, std::f64::consts::SQRT_2)]
    #[case(Point2D::new(0., -3.), -FRAC_PI_2, 3.)]
    #[case(Point2D::new(-4., 0.), PI, 4.)]
    fn polar(#[case] p: Point2D, #[case] angle: f64, #[case] radius: f64) {
        assert_relative_eq!(p.angle(), angle);
        assert_relative_eq!(p.radius(), radius);
    }

    #[test]
    fn point_vector_arithmetic() {
        let a = Point2D::new(1., 2.);
        let b = Point2D::new(4., -2.);
        let ab = b - a;
        assert_eq!(ab, Vector2D::new(3., -4.));
        assert_eq!(a + ab, b);
        assert_eq!(b - ab, a);
        assert_eq!(-a, Point2D::new(-1., -2.));

        let mut c = a;
        c += ab;
        assert_eq!(c, b);
        c -= ab;
        assert_eq!(c, a);

        assert_eq!(Vector2D::from(a), Vector2D::new(1., 2.));
        assert_eq!(Point2D::from(Vector2D::new(1., 2.)), a);
        assert_eq!(Point2D::from((1., 2.)), a);
        assert_eq!(<[f64; 2]>::from(a), [1., 2.]);
    }

    #[test]
    fn lerp() {
        let a = Point2D::new(0., 0.);
        let b = Point2D::new(2., -4.);
        assert_abs_diff_eq!(a.lerp(&b, 0.5), Point2D::new(1., -2.));
        assert_abs_diff_eq!(a.lerp(&b, 2.), Point2D::new(4., -8.));
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Point2D::new(3., -1.).to_string(), @"[3, -1]");
        insta::assert_snapshot!(format!("{:.3}", Point2D::new(3., -1.)), @"[3.000, -1.000]");
    }
}
