use crate::math::Point3;
use crate::query::NearestPoint;
use crate::shape::ParametricLine;

/// Nearest point on a line-like primitive to a point.
///
/// Projects the point onto the infinite line; when the projection parameter
/// falls past a bounded end, that endpoint is the nearest point instead.
#[inline]
pub fn nearest_point_line_point<L: ParametricLine>(line: &L, point: &Point3) -> NearestPoint {
    let w = *point - line.a();
    let u = line.scaled_direction();

    let uu = line.length_squared();
    let uw = u.dot(&w);

    let closest = line.a() - *point;

    if L::HAS_LOWER_BOUND && uw < 0.0 {
        return NearestPoint::new(closest.norm(), 0.0);
    } else if L::HAS_UPPER_BOUND && uw > uu {
        return NearestPoint::new((closest + u).norm(), 1.0);
    }

    let t = uw / uu;
    NearestPoint::new((closest + u * t).norm(), t)
}
