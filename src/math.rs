//! Planar rigid body transforms between parent and child frames.
//!
//! The main type provided by this module is [`FrameTransform`], which describes the pose (ie,
//! position and rotation) of a _child_ frame as seen from its _parent_ frame. It can be applied
//! to a [`Point2D`] to move it between the two frames, composed with other transforms to walk
//! a chain of frames in either direction, and inverted to swap the roles of parent and child.
//!
//! The two directions are always named the same way:
//!
//! - `into_parent` takes something expressed in the child frame and expresses it in the parent
//!   frame (this is also what `*` does);
//! - `into_child` takes something expressed in the parent frame and expresses it in the child
//!   frame (this is also what `/` does).
//!
//! [`FrameTransform`] keeps `cos θ`, `sin θ`, and the translation of its inverse around so that
//! applying the same transform many times does not keep recomputing trigonometry. See
//! [`FrameTransform::ensure_cache`] for how that cache behaves.

use crate::float_math::FloatMath;
use crate::points::Point2D;
use crate::util::normalize_angle;
use crate::{Isometry2, Vector2};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Div, DivAssign, Mul, MulAssign, Neg};
use uom::si::angle::radian;
use uom::si::f64::Angle;

#[cfg(any(test, feature = "approx"))]
use {
    crate::util::angle_difference,
    approx::{AbsDiffEq, RelativeEq},
};

/// Values derived from the rotation and translation of a [`FrameTransform`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrigCache {
    cos: f64,
    sin: f64,
    /// `-R(θ)⁻¹ · t`, ie, the translation of the inverse transform.
    translation_inv: Vector2,
}

impl TrigCache {
    fn compute(translation: &Point2D, rotation: f64) -> Self {
        let cos = FloatMath::cos(rotation);
        let sin = FloatMath::sin(rotation);
        let (x, y) = (translation.x(), translation.y());
        Self {
            cos,
            sin,
            translation_inv: Vector2::new(-(cos * x + sin * y), sin * x - cos * y),
        }
    }
}

/// Defines a [rigid body transform][isometry] from a child frame into its parent frame.
///
/// The canonical state is the translation `(x, y)` of the child's origin in the parent frame
/// and the rotation `θ` (in radians, counter-clockwise) of the child's axes relative to the
/// parent's. A point `p` in the child frame is at `R(θ)·p + t` in the parent frame.
///
/// There are four ways to construct a transform:
///
/// 1. [`FrameTransform::identity`] (also [`Default`]);
/// 2. [`FrameTransform::new`] from `x`, `y`, and `θ`;
/// 3. [`FrameTransform::from_heading`] from a position and a [`uom`] angle;
/// 4. [`FrameTransform::looking_at`] from a position and a second point that the child frame's
///    x axis points towards.
///
/// Transforms are plain values (they are [`Copy`]), and can be chained with `*` and `/` (see
/// [`FrameTransform::into_parent`] and [`FrameTransform::into_child`]) or inverted with
/// [`FrameTransform::inverse`] or unary `-`.
///
/// <div class="warning">
///
/// The rotation is never normalized implicitly. Composing many transforms lets `θ` grow past
/// ±π; call [`FrameTransform::normalize_rotation`] when a canonical range matters.
///
/// </div>
///
/// # Examples
///
/// ```rust
/// use approx::assert_abs_diff_eq;
/// use frame2d::{FrameTransform, Point2D};
/// use std::f64::consts::FRAC_PI_2;
///
/// // a robot at (1, 2) in the world, facing along the world's y axis
/// let world_to_robot = FrameTransform::new(1., 2., FRAC_PI_2);
/// // a sensor mounted half a unit in front of the robot's center
/// let robot_to_sensor = FrameTransform::new(0.5, 0., 0.);
///
/// let world_to_sensor = world_to_robot * robot_to_sensor;
/// assert_abs_diff_eq!(world_to_sensor.translation(), Point2D::new(1., 2.5));
///
/// // something the sensor sees one unit straight ahead is...
/// let seen = Point2D::new(1., 0.);
/// assert_abs_diff_eq!(world_to_sensor.into_parent(seen), Point2D::new(1., 3.5));
/// // ...and back again
/// assert_abs_diff_eq!(world_to_sensor.into_child(Point2D::new(1., 3.5)), seen);
/// ```
///
/// [isometry]: https://en.wikipedia.org/wiki/Rigid_transformation
#[derive(Debug, Clone, Copy)]
pub struct FrameTransform {
    translation: Point2D,
    rotation: f64,
    /// `None` while the canonical state has changed since the last refresh.
    cache: Option<TrigCache>,
}

impl FrameTransform {
    /// Constructs the transform that leaves every point where it is.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Constructs a transform from the child's origin `(x, y)` in the parent frame and the
    /// rotation `rotation` (in radians) of the child's axes relative to the parent's.
    #[must_use]
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            translation: Point2D::new(x, y),
            rotation,
            cache: None,
        }
    }

    /// Constructs a transform from the child's origin `position` in the parent frame and the
    /// `heading` of the child's x axis relative to the parent's.
    #[must_use]
    pub fn from_heading(position: Point2D, heading: impl Into<Angle>) -> Self {
        Self::new(
            position.x(),
            position.y(),
            heading.into().get::<radian>(),
        )
    }

    /// Constructs a transform whose origin is at `position` and whose x axis points from
    /// `position` towards `point_ahead`.
    ///
    /// If the two points coincide, the rotation is zero.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use frame2d::{FrameTransform, Point2D};
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let t = FrameTransform::looking_at(Point2D::new(3., -1.), Point2D::new(4., 0.));
    /// assert_relative_eq!(t.rotation(), FRAC_PI_4);
    /// ```
    #[must_use]
    pub fn looking_at(position: Point2D, point_ahead: Point2D) -> Self {
        Self::new(
            position.x(),
            position.y(),
            (point_ahead - position).angle(),
        )
    }

    /// Overwrites the canonical state with `(x, y, rotation)`.
    pub fn set(&mut self, x: f64, y: f64, rotation: f64) -> &mut Self {
        self.translation.set(x, y);
        self.rotation = rotation;
        self.invalidate()
    }

    /// Overwrites the canonical state with `position` and `rotation` (in radians).
    pub fn set_pose(&mut self, position: Point2D, rotation: f64) -> &mut Self {
        self.set(position.x(), position.y(), rotation)
    }

    /// Overwrites the canonical state with `position` and `heading`.
    ///
    /// See [`FrameTransform::from_heading`].
    pub fn set_heading(&mut self, position: Point2D, heading: impl Into<Angle>) -> &mut Self {
        self.set(position.x(), position.y(), heading.into().get::<radian>())
    }

    /// Overwrites the canonical state to be at `position`, pointing at `point_ahead`.
    ///
    /// See [`FrameTransform::looking_at`].
    pub fn set_looking_at(&mut self, position: Point2D, point_ahead: Point2D) -> &mut Self {
        self.set(
            position.x(),
            position.y(),
            (point_ahead - position).angle(),
        )
    }

    /// Overwrites the canonical state with that of `other`.
    pub fn set_from(&mut self, other: &FrameTransform) -> &mut Self {
        self.set(other.x(), other.y(), other.rotation)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.translation.y()
    }

    /// Returns the rotation in radians, exactly as it was last set or computed.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the rotation as a [`uom`] angle.
    #[must_use]
    pub fn heading(&self) -> Angle {
        Angle::new::<radian>(self.rotation)
    }

    /// Returns the position of the child frame's origin in the parent frame.
    #[doc(alias = "position")]
    #[must_use]
    pub fn translation(&self) -> Point2D {
        self.translation
    }

    /// Mutable access to the x component of the translation.
    ///
    /// This invalidates the cache.
    pub fn x_mut(&mut self) -> &mut f64 {
        self.invalidate();
        self.translation.x_mut()
    }

    /// Mutable access to the y component of the translation.
    ///
    /// This invalidates the cache.
    pub fn y_mut(&mut self) -> &mut f64 {
        self.invalidate();
        self.translation.y_mut()
    }

    /// Mutable access to the rotation.
    ///
    /// This invalidates the cache.
    pub fn rotation_mut(&mut self) -> &mut f64 {
        self.invalidate();
        &mut self.rotation
    }

    /// Mutable access to the translation.
    ///
    /// This invalidates the cache.
    #[doc(alias = "position_mut")]
    pub fn translation_mut(&mut self) -> &mut Point2D {
        self.invalidate();
        &mut self.translation
    }

    /// Wraps the rotation into (-π, π].
    ///
    /// This describes the same rigid motion, but is treated like any other mutation and
    /// invalidates the cache.
    pub fn normalize_rotation(&mut self) -> &mut Self {
        let normalized = normalize_angle(self.rotation);
        if normalized != self.rotation {
            tracing::trace!(
                from = self.rotation,
                to = normalized,
                "wrapped frame transform rotation"
            );
        }
        self.rotation = normalized;
        self.invalidate()
    }

    /// Recomputes `cos θ`, `sin θ`, and the inverse translation from the canonical state,
    /// whether or not they were already up to date.
    pub fn refresh_cache(&mut self) -> &mut Self {
        tracing::trace!(
            x = self.translation.x(),
            y = self.translation.y(),
            rotation = self.rotation,
            "refreshing frame transform cache"
        );
        self.cache = Some(TrigCache::compute(&self.translation, self.rotation));
        self
    }

    /// Recomputes the cached trigonometry only if the canonical state has changed since it was
    /// last computed.
    ///
    /// Every operation that applies or composes a transform reads the cache. If it is out of
    /// date, that operation computes the values it needs on the spot and throws them away again
    /// (it only has `&self`), so results are always correct. Calling `ensure_cache` first is how
    /// to make repeated applications of the same transform pay for `sin`/`cos` once:
    ///
    /// ```rust
    /// use frame2d::{FrameTransform, Point2D};
    ///
    /// let mut t = FrameTransform::new(3., -1., 0.7);
    /// t.ensure_cache();
    /// assert!(t.is_cache_fresh());
    /// let scan: Vec<Point2D> = (0..360)
    ///     .map(|i| t * Point2D::new(f64::from(i).cos(), f64::from(i).sin()))
    ///     .collect();
    /// # assert_eq!(scan.len(), 360);
    /// ```
    pub fn ensure_cache(&mut self) -> &mut Self {
        if self.cache.is_none() {
            self.refresh_cache();
        }
        self
    }

    /// Returns true if the cached trigonometry matches the current canonical state.
    #[must_use]
    pub fn is_cache_fresh(&self) -> bool {
        self.cache.is_some()
    }

    fn invalidate(&mut self) -> &mut Self {
        self.cache = None;
        self
    }

    fn trig(&self) -> TrigCache {
        self.cache
            .unwrap_or_else(|| TrigCache::compute(&self.translation, self.rotation))
    }

    /// Moves an element expressed in the child frame into the parent frame.
    ///
    /// For a [`Point2D`] `p`, this is `R(θ)·p + t`. For a [`FrameTransform`] `src` from this
    /// transform's child frame to some frame `B`, this is the transform from this transform's
    /// parent frame to `B` (and the rotations add up).
    ///
    /// This is equivalent to `self * in_child`.
    #[doc(alias = "transform_into_base")]
    #[doc(alias = "apply")]
    pub fn into_parent<T>(&self, in_child: T) -> <Self as Mul<T>>::Output
    where
        Self: Mul<T>,
    {
        *self * in_child
    }

    /// Moves an element expressed in the parent frame into the child frame.
    ///
    /// For a [`Point2D`] `p`, this is `R(θ)⁻¹·(p - t)`. For a [`FrameTransform`] `src` from this
    /// transform's parent frame to some frame `C`, this is the transform from this transform's
    /// child frame to `C` (and the rotations subtract).
    ///
    /// This is equivalent to (but cheaper than) `self.inverse() * in_parent`, and to
    /// `self / in_parent`.
    #[doc(alias = "undo")]
    pub fn into_child<T>(&self, in_parent: T) -> <Self as Div<T>>::Output
    where
        Self: Div<T>,
    {
        *self / in_parent
    }

    /// Writes the equal-but-opposite transform into `dest`.
    ///
    /// That is, if `self` goes from child to parent, `dest` goes from parent to child. `dest`
    /// can be any transform; its previous state (cache included) is discarded.
    pub fn inverse_into<'a>(&self, dest: &'a mut FrameTransform) -> &'a mut FrameTransform {
        dest.set(0., 0., -self.rotation).refresh_cache();
        // with zero translation, dest * t is just R(-θ)·t
        let rotated = *dest * self.translation;
        *dest.translation_mut() = -rotated;
        dest
    }

    /// Returns the equal-but-opposite transform to this one.
    ///
    /// That is, a transform from this transform's parent frame into its child frame.
    #[must_use]
    pub fn inverse(&self) -> FrameTransform {
        let mut inverse = FrameTransform::identity();
        self.inverse_into(&mut inverse);
        inverse
    }

    /// Replaces this transform with its inverse.
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Returns the equivalent [`nalgebra::Isometry2`].
    #[must_use]
    pub fn to_isometry(&self) -> nalgebra::Isometry2<f64> {
        Isometry2::new(self.translation.point.coords, self.rotation)
    }
}

impl Default for FrameTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compares canonical state only; whether either side has a fresh cache does not matter.
impl PartialEq<Self> for FrameTransform {
    fn eq(&self, other: &Self) -> bool {
        self.translation == other.translation && self.rotation == other.rotation
    }
}

impl Display for FrameTransform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Position: {:.*}, Rotation: {:.*} rad",
                p, self.translation, p, self.rotation
            ),
            None => write!(
                f,
                "Position: {}, Rotation: {} rad",
                self.translation, self.rotation
            ),
        }
    }
}

impl From<nalgebra::Isometry2<f64>> for FrameTransform {
    fn from(value: nalgebra::Isometry2<f64>) -> Self {
        Self::new(
            value.translation.vector.x,
            value.translation.vector.y,
            value.rotation.angle(),
        )
    }
}

impl Neg for FrameTransform {
    type Output = FrameTransform;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

// FrameTransform * Point2D: child -> parent
impl Mul<Point2D> for FrameTransform {
    type Output = Point2D;

    fn mul(self, rhs: Point2D) -> Self::Output {
        let TrigCache { cos, sin, .. } = self.trig();
        Point2D::new(
            rhs.x() * cos - rhs.y() * sin + self.translation.x(),
            rhs.x() * sin + rhs.y() * cos + self.translation.y(),
        )
    }
}

// FrameTransform / Point2D: parent -> child
//
// R(θ)⁻¹ is the transpose of R(θ), and the cached inverse translation already folds in the
// rotated -t, so this is two multiply-adds per axis.
impl Div<Point2D> for FrameTransform {
    type Output = Point2D;

    fn div(self, rhs: Point2D) -> Self::Output {
        let TrigCache {
            cos,
            sin,
            translation_inv,
        } = self.trig();
        Point2D::new(
            rhs.x() * cos + rhs.y() * sin + translation_inv.x,
            -rhs.x() * sin + rhs.y() * cos + translation_inv.y,
        )
    }
}

// (parent -> A) * (A -> B) = (parent -> B)
impl Mul<FrameTransform> for FrameTransform {
    type Output = FrameTransform;

    fn mul(self, rhs: FrameTransform) -> Self::Output {
        let translation = self * rhs.translation;
        FrameTransform::new(
            translation.x(),
            translation.y(),
            self.rotation + rhs.rotation,
        )
    }
}

// (A -> B) / (A -> C) = (B -> C)
impl Div<FrameTransform> for FrameTransform {
    type Output = FrameTransform;

    fn div(self, rhs: FrameTransform) -> Self::Output {
        let translation = self / rhs.translation;
        FrameTransform::new(
            translation.x(),
            translation.y(),
            rhs.rotation - self.rotation,
        )
    }
}

// the right-hand side is evaluated in full before `self` is overwritten, so `t *= t` is fine
impl MulAssign<FrameTransform> for FrameTransform {
    fn mul_assign(&mut self, rhs: FrameTransform) {
        let composed = *self * rhs;
        self.set_from(&composed);
    }
}

impl DivAssign<FrameTransform> for FrameTransform {
    fn div_assign(&mut self, rhs: FrameTransform) {
        let composed = *self / rhs;
        self.set_from(&composed);
    }
}

#[cfg(any(test, feature = "approx"))]
impl AbsDiffEq<Self> for FrameTransform {
    type Epsilon = <f64 as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        crate::DEFAULT_EPSILON
    }

    /// Rotations are compared modulo full turns, since `θ` and `θ + 2π` are the same motion.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.translation.abs_diff_eq(&other.translation, epsilon)
            && angle_difference(self.rotation, other.rotation).abs() <= epsilon
    }
}

#[cfg(any(test, feature = "approx"))]
impl RelativeEq for FrameTransform {
    fn default_max_relative() -> Self::Epsilon {
        Point2D::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        // relative error is meaningless for an angle that wraps around, so that part stays
        // absolute
        self.translation
            .relative_eq(&other.translation, epsilon, max_relative)
            && angle_difference(self.rotation, other.rotation).abs() <= epsilon
    }
}
