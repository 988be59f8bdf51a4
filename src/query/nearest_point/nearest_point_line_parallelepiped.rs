use crate::math::{Real, Vector3, COLLISION_EPSILON};
use crate::query::NearestPoint;
use crate::shape::{Parallelepiped, ParametricLine};

/// Nearest point on a line-like primitive to an oriented box.
///
/// Works in the box's local space, where the box is the unit cube: the
/// per-axis slab entry/exit parameters combine into one interval, clamped to
/// the primitive's own bounds. An axis along which the local direction is
/// within [`COLLISION_EPSILON`] of zero cannot constrain the parameter;
/// instead, if the base point already lies outside the cube on that axis,
/// its perpendicular offset contributes a fixed squared-distance term.
pub fn nearest_point_line_parallelepiped<L: ParametricLine>(
    line: &L,
    parallelepiped: &Parallelepiped,
) -> NearestPoint {
    let convert_to = parallelepiped.convert_to();
    let convert_from = parallelepiped.convert_from();

    let local_a = convert_to * (line.a() - parallelepiped.point());
    let local_b = convert_to * (line.b() - parallelepiped.point());
    let local_dir = local_b - local_a;

    let mut valid_axes = 0;
    let mut invalid_axes_distance2 = 0.0;
    let mut min_max: Real = 0.0;
    let mut max_min: Real = 0.0;

    for axis in 0..3 {
        if local_dir[axis].abs() > COLLISION_EPSILON {
            let enter = -local_a[axis] / local_dir[axis];
            let exit = (1.0 - local_a[axis]) / local_dir[axis];
            let (lo, hi) = if enter < exit {
                (enter, exit)
            } else {
                (exit, enter)
            };

            if valid_axes == 0 || hi < min_max {
                min_max = hi;
            }
            if valid_axes == 0 || lo > max_min {
                max_min = lo;
            }
            valid_axes += 1;
        } else {
            let overshoot = if local_a[axis] < 0.0 {
                local_a[axis]
            } else if local_a[axis] > 1.0 {
                local_a[axis] - 1.0
            } else {
                continue;
            };

            let mut local_offset = Vector3::zeros();
            local_offset[axis] = overshoot;
            let offset = convert_from * local_offset;
            invalid_axes_distance2 += offset.dot(&offset);
        }
    }

    if valid_axes == 0 {
        // No usable direction on any axis: the primitive is effectively the
        // point at its base.
        log::debug!("line-box query with a degenerate direction on all three axes");
        return NearestPoint::new(invalid_axes_distance2.sqrt(), 0.0);
    }

    if L::HAS_LOWER_BOUND && min_max < 0.0 {
        min_max = 0.0;
    } else if L::HAS_UPPER_BOUND && min_max > 1.0 {
        min_max = 1.0;
    }

    if L::HAS_LOWER_BOUND && max_min < 0.0 {
        max_min = 0.0;
    } else if L::HAS_UPPER_BOUND && max_min > 1.0 {
        max_min = 1.0;
    }

    // A non-empty slab interval means the primitive crosses the cube on
    // every constrained axis; only the degenerate-axis offsets remain.
    if min_max > max_min {
        return NearestPoint::new(invalid_axes_distance2.sqrt(), max_min);
    }

    let mut local_closest = local_a + local_dir * min_max;
    local_closest.x = local_closest.x.clamp(0.0, 1.0);
    local_closest.y = local_closest.y.clamp(0.0, 1.0);
    local_closest.z = local_closest.z.clamp(0.0, 1.0);
    let closest = parallelepiped.point() + convert_from * local_closest;

    let valid_axes_offset = line.a() + line.scaled_direction() * min_max - closest;
    let valid_axes_distance2 = valid_axes_offset.dot(&valid_axes_offset);

    NearestPoint::new(
        (invalid_axes_distance2 + valid_axes_distance2).sqrt(),
        min_max,
    )
}
