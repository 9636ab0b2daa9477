//! This library provides planar rigid body transforms (aka "frame transforms") for code that
//! keeps track of where things are relative to a robot, a sensor, a map, or any other frame in
//! the plane.
//!
//! The main type is [`FrameTransform`], which describes where a _child_ frame sits inside its
//! _parent_ frame: the position of the child's origin (as a [`Point2D`]) and the rotation of the
//! child's axes. With it you can:
//!
//! - move a point from the child frame into the parent frame with
//!   [`into_parent`](FrameTransform::into_parent) (or `*`), and back with
//!   [`into_child`](FrameTransform::into_child) (or `/`);
//! - chain transforms the same way to walk up and down a tree of frames;
//! - [`invert`](FrameTransform::inverse) a transform to swap which frame is the parent.
//!
//! Transforms keep `cos θ` and `sin θ` (and a little more) around between uses, so applying one
//! transform to a large batch of points only pays for the trigonometry once. See
//! [`FrameTransform::ensure_cache`].
//!
//! The [`Vector2D`] type represents displacements, which is what you get when you subtract two
//! points, and the [`normalize_angle`] and [`angle_difference`] helpers deal with rotations that
//! have wound past a full turn.
//!
//! # Examples
//!
//! A robot at `(2, 1)` in a map, turned 90° counter-clockwise, sees an obstacle 3 units straight
//! ahead of it. Where is the obstacle on the map?
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use frame2d::{FrameTransform, Point2D};
//! use uom::si::angle::degree;
//! use uom::si::f64::Angle;
//!
//! let map_to_robot = FrameTransform::from_heading(
//!     Point2D::new(2., 1.),
//!     Angle::new::<degree>(90.),
//! );
//!
//! let obstacle_in_robot = Point2D::new(3., 0.);
//! let obstacle_in_map = map_to_robot * obstacle_in_robot;
//! assert_abs_diff_eq!(obstacle_in_map, Point2D::new(2., 4.));
//!
//! // and going the other way, where is the map's origin from the robot's point of view?
//! let origin_in_robot = map_to_robot / Point2D::origin();
//! assert_abs_diff_eq!(origin_in_robot, Point2D::new(-1., 2.));
//! ```
//!
//! Transforms compose like the frames they connect. If a lidar is mounted half a unit behind the
//! robot's center and facing backwards, the transform from the map to the lidar is the product of
//! the two:
//!
//! ```
//! # use approx::assert_abs_diff_eq;
//! # use frame2d::{FrameTransform, Point2D};
//! # use std::f64::consts::{FRAC_PI_2, PI};
//! let map_to_robot = FrameTransform::new(2., 1., FRAC_PI_2);
//! let robot_to_lidar = FrameTransform::new(-0.5, 0., PI);
//!
//! let mut map_to_lidar = map_to_robot * robot_to_lidar;
//! assert_abs_diff_eq!(map_to_lidar.translation(), Point2D::new(2., 0.5));
//!
//! // the lidar reports points in bulk, so warm up the cached trigonometry once
//! map_to_lidar.ensure_cache();
//! let scan = [Point2D::new(1., 0.), Point2D::new(0., 1.)];
//! let in_map: Vec<_> = scan.iter().map(|&p| map_to_lidar * p).collect();
//! assert_abs_diff_eq!(in_map[0], Point2D::new(2., -0.5));
//! assert_abs_diff_eq!(in_map[1], Point2D::new(3., 0.5));
//!
//! // dividing by the robot's transform recovers where the lidar is on the robot
//! assert_abs_diff_eq!(map_to_robot / map_to_lidar, robot_to_lidar);
//! ```
//!
//! # Features
//!
//! - `std` (default): compute trigonometry with the standard library.
//! - `libm`: compute trigonometry with [`libm`](https://docs.rs/libm) instead. Exactly one of
//!   `std` and `libm` must be enabled.
//! - `approx` (default): implement the [`approx`](https://docs.rs/approx) comparison traits for
//!   the types in this crate.

mod error;
mod float_math;
mod points;
mod util;
mod vectors;

pub mod math;

pub(crate) type Point2 = nalgebra::Point2<f64>;
pub(crate) type Vector2 = nalgebra::Vector2<f64>;
pub(crate) type Isometry2 = nalgebra::Isometry2<f64>;

/// Absolute tolerance used by the [`approx`] comparisons of this crate's types.
#[cfg(any(test, feature = "approx"))]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-9;

pub use error::{Error, Result};
pub use math::FrameTransform;
pub use points::Point2D;
pub use util::{angle_difference, normalize_angle};
pub use vectors::Vector2D;
