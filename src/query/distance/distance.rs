use crate::math::{Point3, Real, COLLISION_EPSILON};
use crate::query::nearest_point::{
    nearest_point_line_line, nearest_point_line_parallelepiped, nearest_point_line_plane,
    nearest_point_line_point, NearestPoint,
};
use crate::shape::{Capsule, InfiniteCylinder, Line, Parallelepiped, Plane, Ray, Segment, Sphere};
use crate::utils::subtract_radii;

use super::{
    distance_parallelepiped_parallelepiped, distance_parallelepiped_plane,
    distance_parallelepiped_point, distance_plane_plane, distance_plane_point,
    distance_plane_sphere, distance_sphere_point, distance_sphere_sphere,
};

/// Shortest-distance query between two static shapes.
///
/// The distance is `0.0` when the shapes overlap and their Euclidean
/// separation otherwise. Every implementation is a pure value computation;
/// both orders of a pair are provided, with one direction delegating to the
/// canonical algorithm.
pub trait Distance<Rhs = Self> {
    /// The shortest distance between `self` and `rhs`.
    fn distance(&self, rhs: &Rhs) -> Real;

    /// Whether the two shapes touch, within the collision tolerance.
    #[inline]
    fn intersects(&self, rhs: &Rhs) -> bool {
        self.distance(rhs) < COLLISION_EPSILON
    }
}

/// Nearest-point query for shapes with a parametric axis, reporting where
/// along `self` the closest approach happens.
pub trait NearestPointQuery<Rhs> {
    /// The closest approach between `self` and `rhs`: the separation
    /// distance and the parameter of the closest point on `self`.
    fn nearest_point(&self, rhs: &Rhs) -> NearestPoint;
}

// Rays and segments answer nearest-point queries directly through the
// shared solver; an unbounded line has no meaningful parameter to report,
// so `Line` only answers distance queries below.
macro_rules! impl_line_like_nearest_point {
    ($LineLike:ty) => {
        impl NearestPointQuery<Point3> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Point3) -> NearestPoint {
                nearest_point_line_point(self, rhs)
            }
        }

        impl NearestPointQuery<Sphere> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Sphere) -> NearestPoint {
                nearest_point_line_point(self, &rhs.center).minus_radii(rhs.radius)
            }
        }

        impl NearestPointQuery<Plane> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Plane) -> NearestPoint {
                nearest_point_line_plane(self, rhs)
            }
        }

        impl NearestPointQuery<Line> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Line) -> NearestPoint {
                nearest_point_line_line(self, rhs)
            }
        }

        impl NearestPointQuery<Ray> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Ray) -> NearestPoint {
                nearest_point_line_line(self, rhs)
            }
        }

        impl NearestPointQuery<Segment> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Segment) -> NearestPoint {
                nearest_point_line_line(self, rhs)
            }
        }

        impl NearestPointQuery<Parallelepiped> for $LineLike {
            #[inline]
            fn nearest_point(&self, rhs: &Parallelepiped) -> NearestPoint {
                nearest_point_line_parallelepiped(self, rhs)
            }
        }
    };
}

impl_line_like_nearest_point!(Ray);
impl_line_like_nearest_point!(Segment);

macro_rules! impl_line_like_distance {
    ($LineLike:ty) => {
        impl Distance<Point3> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Point3) -> Real {
                nearest_point_line_point(self, rhs).distance
            }
        }

        impl Distance<Sphere> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Sphere) -> Real {
                subtract_radii(
                    nearest_point_line_point(self, &rhs.center).distance,
                    rhs.radius,
                )
            }
        }

        impl Distance<Plane> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Plane) -> Real {
                nearest_point_line_plane(self, rhs).distance
            }
        }

        impl Distance<Line> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Line) -> Real {
                nearest_point_line_line(self, rhs).distance
            }
        }

        impl Distance<Ray> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Ray) -> Real {
                nearest_point_line_line(self, rhs).distance
            }
        }

        impl Distance<Segment> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Segment) -> Real {
                nearest_point_line_line(self, rhs).distance
            }
        }

        impl Distance<InfiniteCylinder> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &InfiniteCylinder) -> Real {
                rhs.distance(self)
            }
        }

        impl Distance<Capsule> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Capsule) -> Real {
                rhs.distance(self)
            }
        }

        impl Distance<Parallelepiped> for $LineLike {
            #[inline]
            fn distance(&self, rhs: &Parallelepiped) -> Real {
                nearest_point_line_parallelepiped(self, rhs).distance
            }
        }
    };
}

impl_line_like_distance!(Line);
impl_line_like_distance!(Ray);
impl_line_like_distance!(Segment);

// A cylinder is its axis line with every distance shrunk by its radius.
macro_rules! impl_cylinder_vs_line_like {
    ($LineLike:ty) => {
        impl Distance<$LineLike> for InfiniteCylinder {
            #[inline]
            fn distance(&self, rhs: &$LineLike) -> Real {
                subtract_radii(nearest_point_line_line(&self.line, rhs).distance, self.radius)
            }
        }
    };
}

impl_cylinder_vs_line_like!(Line);
impl_cylinder_vs_line_like!(Ray);
impl_cylinder_vs_line_like!(Segment);

impl Distance<Point3> for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &Point3) -> Real {
        subtract_radii(
            nearest_point_line_point(&self.line, rhs).distance,
            self.radius,
        )
    }
}

impl Distance<Sphere> for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &Sphere) -> Real {
        subtract_radii(self.line.distance(rhs), self.radius)
    }
}

impl Distance<Plane> for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &Plane) -> Real {
        subtract_radii(
            nearest_point_line_plane(&self.line, rhs).distance,
            self.radius,
        )
    }
}

impl Distance for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &InfiniteCylinder) -> Real {
        subtract_radii(
            nearest_point_line_line(&self.line, &rhs.line).distance,
            self.radius + rhs.radius,
        )
    }
}

impl Distance<Capsule> for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &Capsule) -> Real {
        rhs.distance(self)
    }
}

impl Distance<Parallelepiped> for InfiniteCylinder {
    #[inline]
    fn distance(&self, rhs: &Parallelepiped) -> Real {
        rhs.distance(self)
    }
}

// A capsule is its axis segment with every distance shrunk by its radius.
macro_rules! impl_capsule_nearest_point_via_segment {
    ($($Rhs:ty),*) => {$(
        impl NearestPointQuery<$Rhs> for Capsule {
            #[inline]
            fn nearest_point(&self, rhs: &$Rhs) -> NearestPoint {
                self.segment.nearest_point(rhs).minus_radii(self.radius)
            }
        }
    )*};
}

impl_capsule_nearest_point_via_segment!(Point3, Sphere, Plane, Line, Ray, Segment, Parallelepiped);

impl NearestPointQuery<InfiniteCylinder> for Capsule {
    #[inline]
    fn nearest_point(&self, rhs: &InfiniteCylinder) -> NearestPoint {
        nearest_point_line_line(&self.segment, &rhs.line).minus_radii(self.radius + rhs.radius)
    }
}

impl NearestPointQuery<Capsule> for Capsule {
    #[inline]
    fn nearest_point(&self, rhs: &Capsule) -> NearestPoint {
        self.segment
            .nearest_point(&rhs.segment)
            .minus_radii(self.radius + rhs.radius)
    }
}

macro_rules! impl_capsule_distance {
    ($($Rhs:ty),*) => {$(
        impl Distance<$Rhs> for Capsule {
            #[inline]
            fn distance(&self, rhs: &$Rhs) -> Real {
                self.nearest_point(rhs).distance
            }
        }
    )*};
}

impl_capsule_distance!(
    Point3,
    Sphere,
    Plane,
    Line,
    Ray,
    Segment,
    InfiniteCylinder,
    Capsule,
    Parallelepiped
);

// Pairs whose canonical algorithm lives on the other shape.
macro_rules! impl_distance_by_symmetry {
    ($Lhs:ty: $($Rhs:ty),*) => {$(
        impl Distance<$Rhs> for $Lhs {
            #[inline]
            fn distance(&self, rhs: &$Rhs) -> Real {
                rhs.distance(self)
            }
        }
    )*};
}

impl Distance for Sphere {
    #[inline]
    fn distance(&self, rhs: &Sphere) -> Real {
        distance_sphere_sphere(self, rhs)
    }
}

impl Distance<Point3> for Sphere {
    #[inline]
    fn distance(&self, rhs: &Point3) -> Real {
        distance_sphere_point(self, rhs)
    }
}

impl_distance_by_symmetry!(Sphere: Plane, Line, Ray, Segment, InfiniteCylinder, Capsule, Parallelepiped);

impl Distance for Plane {
    #[inline]
    fn distance(&self, rhs: &Plane) -> Real {
        distance_plane_plane(self, rhs)
    }
}

impl Distance<Point3> for Plane {
    #[inline]
    fn distance(&self, rhs: &Point3) -> Real {
        distance_plane_point(self, rhs)
    }
}

impl Distance<Sphere> for Plane {
    #[inline]
    fn distance(&self, rhs: &Sphere) -> Real {
        distance_plane_sphere(self, rhs)
    }
}

impl_distance_by_symmetry!(Plane: Line, Ray, Segment, InfiniteCylinder, Capsule, Parallelepiped);

impl Distance for Parallelepiped {
    #[inline]
    fn distance(&self, rhs: &Parallelepiped) -> Real {
        distance_parallelepiped_parallelepiped(self, rhs)
    }
}

impl Distance<Point3> for Parallelepiped {
    #[inline]
    fn distance(&self, rhs: &Point3) -> Real {
        distance_parallelepiped_point(self, rhs)
    }
}

impl Distance<Plane> for Parallelepiped {
    #[inline]
    fn distance(&self, rhs: &Plane) -> Real {
        distance_parallelepiped_plane(self, rhs)
    }
}

impl Distance<Sphere> for Parallelepiped {
    #[inline]
    fn distance(&self, rhs: &Sphere) -> Real {
        subtract_radii(distance_parallelepiped_point(self, &rhs.center), rhs.radius)
    }
}

impl Distance<InfiniteCylinder> for Parallelepiped {
    #[inline]
    fn distance(&self, rhs: &InfiniteCylinder) -> Real {
        subtract_radii(
            nearest_point_line_parallelepiped(&rhs.line, self).distance,
            rhs.radius,
        )
    }
}

impl_distance_by_symmetry!(Parallelepiped: Line, Ray, Segment, Capsule);
