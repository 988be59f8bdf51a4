use crate::math::Real;
use crate::shape::Parallelepiped;

/// Distance between two oriented boxes, by the separating axis test.
///
/// Tests all 15 candidate axes (each box's three face normals, then the
/// nine cross products of edge-axis pairs) with everything expressed in the
/// first box's normal basis. The first axis with a projection gap decides
/// the returned separation; `0.0` means no separating axis exists and the
/// boxes overlap. The first gap found is reported as-is, which need not be
/// the smallest over all separating axes.
pub fn distance_parallelepiped_parallelepiped(
    parallelepiped1: &Parallelepiped,
    parallelepiped2: &Parallelepiped,
) -> Real {
    let a = parallelepiped1.extents();
    let b = parallelepiped2.extents();
    let a_axes = parallelepiped1.normals();
    let b_axes = parallelepiped2.normals();

    // Center-to-center translation, in the first box's frame.
    let v = parallelepiped2.center() - parallelepiped1.center();
    let t = [v.dot(&a_axes[0]), v.dot(&a_axes[1]), v.dot(&a_axes[2])];

    // The second box's basis with respect to the first box's frame.
    let mut r = [[0.0; 3]; 3];
    let mut abs_r = [[0.0; 3]; 3];
    for j in 0..3 {
        for i in 0..3 {
            r[j][i] = a_axes[j].dot(&b_axes[i]);
            abs_r[j][i] = r[j][i].abs();
        }
    }

    // The six face normals, interleaved: each box's i-th axis in turn.
    for i in 0..3 {
        {
            let ra = a[i];
            let rb = b[0] * abs_r[i][0] + b[1] * abs_r[i][1] + b[2] * abs_r[i][2];
            let gap = t[i].abs();

            if gap > ra + rb {
                return gap - (ra + rb);
            }
        }

        {
            let ra = a[0] * abs_r[0][i] + a[1] * abs_r[1][i] + a[2] * abs_r[2][i];
            let rb = b[i];
            let gap = (t[0] * r[0][i] + t[1] * r[1][i] + t[2] * r[2][i]).abs();

            if gap > ra + rb {
                return gap - (ra + rb);
            }
        }
    }

    // The nine edge-edge cross products, walking the complementary index
    // pairs (u, v) and (m, n) alongside the axis indices.
    let mut u = 1;
    let mut v = 2;
    for j in 0..3 {
        let mut m = 1;
        let mut n = 2;
        for i in 0..3 {
            let ra = a[u] * abs_r[v][i] + a[v] * abs_r[u][i];
            let rb = b[m] * abs_r[j][n] + b[n] * abs_r[j][m];
            let gap = (t[u] * r[v][i] - t[v] * r[u][i]).abs();

            if gap > ra + rb {
                return gap - (ra + rb);
            }

            if i == 0 {
                m -= 1;
            } else {
                n -= 1;
            }
        }

        if j == 0 {
            u -= 1;
        } else {
            v -= 1;
        }
    }

    // No separating axis: the boxes overlap.
    0.0
}
