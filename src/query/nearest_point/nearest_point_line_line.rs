use crate::math::COLLISION_EPSILON;
use crate::query::NearestPoint;
use crate::shape::ParametricLine;

/// Nearest points between two line-like primitives, each independently
/// bounded or not at either end.
///
/// Solves the 2x2 system built from the direction dot products, then clamps
/// each parameter to its bounds and reprojects the other. Directions whose
/// system determinant falls at or below [`COLLISION_EPSILON`] (parallel or
/// degenerate) fall back to anchoring the first primitive at its base point,
/// which also covers collinear configurations.
pub fn nearest_point_line_line<L1, L2>(lhs: &L1, rhs: &L2) -> NearestPoint
where
    L1: ParametricLine,
    L2: ParametricLine,
{
    let w = lhs.a() - rhs.a();
    let u = lhs.scaled_direction();
    let v = rhs.scaled_direction();

    let uu = lhs.length_squared();
    let uv = u.dot(&v);
    let vv = rhs.length_squared();
    let uw = u.dot(&w);
    let vw = v.dot(&w);

    let denom = uu * vv - uv * uv;
    let mut sc_numer = uv * vw - vv * uw;
    let sc_denom;
    let mut tc_numer = uu * vw - uv * uw;
    let tc_denom;

    if denom > COLLISION_EPSILON {
        sc_denom = denom;

        if L1::HAS_LOWER_BOUND && sc_numer < 0.0 {
            sc_numer = 0.0;
            tc_numer = vw;
            tc_denom = vv;
        } else if L1::HAS_UPPER_BOUND && sc_numer > sc_denom {
            sc_numer = sc_denom;
            tc_numer = vw + uv;
            tc_denom = vv;
        } else {
            tc_denom = denom;
        }
    } else {
        sc_numer = 0.0;
        sc_denom = 1.0;
        tc_numer = vw;
        tc_denom = vv;
    }

    let mut min_dist = w;
    let final_numer;

    if L2::HAS_LOWER_BOUND && tc_numer < 0.0 {
        final_numer = -uw;
    } else if L2::HAS_UPPER_BOUND && tc_numer > tc_denom {
        min_dist -= v;
        final_numer = uv - uw;
    } else {
        let t = sc_numer / sc_denom;
        return NearestPoint::new((min_dist + u * t - v * (tc_numer / tc_denom)).norm(), t);
    }

    // The second primitive clamped to an endpoint; redo the first against it.
    if L1::HAS_LOWER_BOUND && final_numer < 0.0 {
        NearestPoint::new(min_dist.norm(), 0.0)
    } else if L1::HAS_UPPER_BOUND && final_numer > uu {
        NearestPoint::new((min_dist + u).norm(), 1.0)
    } else {
        let t = final_numer / uu;
        NearestPoint::new((min_dist + u * t).norm(), t)
    }
}
