use crate::math::Real;
use crate::shape::{Parallelepiped, Plane};

/// Distance between an oriented box and a plane.
///
/// Projects all eight corners onto the plane's signed-distance axis,
/// building each corner's offset incrementally from the three edge
/// projections. If the extremes straddle zero the box touches the plane;
/// otherwise the distance is the extreme closer to zero.
pub fn distance_parallelepiped_plane(parallelepiped: &Parallelepiped, plane: &Plane) -> Real {
    let n = plane.normal();

    let diff_001 = parallelepiped.edge_c().dot(&n);
    let diff_010 = parallelepiped.edge_b().dot(&n);
    let diff_011 = diff_010 + diff_001;
    let diff_100 = parallelepiped.edge_a().dot(&n);
    let diff_101 = diff_100 + diff_001;
    let diff_110 = diff_100 + diff_010;
    let diff_111 = diff_100 + diff_011;

    let t_000 = (parallelepiped.point() - plane.point()).dot(&n);

    let mut min_t = t_000;
    let mut max_t = t_000;

    for diff in [
        diff_001, diff_010, diff_011, diff_100, diff_101, diff_110, diff_111,
    ] {
        let t = t_000 + diff;
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }

    if min_t > 0.0 {
        min_t
    } else if max_t < 0.0 {
        -max_t
    } else {
        0.0
    }
}
