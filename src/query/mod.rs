//! Distance and nearest-point queries between static shapes.
//!
//! # General interface
//! Two traits cover every supported shape pair:
//!
//! * [`Distance`]: the shortest Euclidean separation between two shapes
//!   (`0.0` when they overlap), with the derived [`Distance::intersects`]
//!   predicate.
//! * [`NearestPointQuery`]: for the shapes that carry a parametric axis
//!   ([`Ray`](crate::shape::Ray), [`Segment`](crate::shape::Segment),
//!   [`Capsule`](crate::shape::Capsule)), the separation together with the
//!   parameter of the closest point on `self`, as a [`NearestPoint`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the concrete
//! per-pair algorithms the traits dispatch to, named
//! `[operation]_[shape1]_[shape2]`. They are less convenient but can be
//! called directly when both shapes are known at compile time, and the
//! `nearest_point_line_*` family is generic over the boundedness of its
//! first argument.

pub use self::distance::{Distance, NearestPointQuery};
pub use self::nearest_point::NearestPoint;

pub mod distance;
pub mod nearest_point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::distance::{
        distance_parallelepiped_parallelepiped, distance_parallelepiped_plane,
        distance_parallelepiped_point, distance_plane_plane, distance_plane_point,
        distance_plane_sphere, distance_sphere_point, distance_sphere_sphere,
    };
    pub use super::nearest_point::{
        nearest_point_line_line, nearest_point_line_parallelepiped, nearest_point_line_plane,
        nearest_point_line_point,
    };
}
