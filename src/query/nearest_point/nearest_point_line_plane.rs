use crate::query::NearestPoint;
use crate::shape::{ParametricLine, Plane};

/// Nearest point on a line-like primitive to a plane.
///
/// Solves the crossing parameter from the plane equation directly; when it
/// falls past a bounded end, the parameter clamps there and the distance is
/// recomputed at the clamped point. A line parallel to the plane makes the
/// solved parameter non-finite, and the distance of an unbounded primitive
/// is then undefined.
#[inline]
pub fn nearest_point_line_plane<L: ParametricLine>(line: &L, plane: &Plane) -> NearestPoint {
    let w = plane.point() - line.a();
    let u = line.scaled_direction();
    let n = plane.normal();

    let t = n.dot(&w) / n.dot(&u);

    if L::HAS_LOWER_BOUND && t < 0.0 {
        return NearestPoint::new(plane.distance_to_point(&line.a()), 0.0);
    } else if L::HAS_UPPER_BOUND && t > 1.0 {
        return NearestPoint::new(plane.distance_to_point(&(line.a() + u)), 1.0);
    }

    NearestPoint::new(plane.distance_to_point(&(line.a() + u * t)), t)
}
