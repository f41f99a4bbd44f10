use bevy::prelude::*;

/// Ray against an oriented box centred on `xf`, with the given local-space
/// half extents. Returns the nearest non-negative hit distance.
pub fn ray_hits_obb(ray: &Ray3d, xf: &GlobalTransform, half_extents: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(ray.origin);
    let d_local = inv.transform_vector3(*ray.direction);
    ray_aabb_hit_t(o_local, d_local, -half_extents, half_extents)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];
        if direction.abs() < f32::EPSILON {
            // Parallel to the slab; miss unless the origin lies inside it.
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((min[axis] - origin) * inv, (max[axis] - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        tmin = tmin.max(t0);
        tmax = tmax.min(t1);
        if tmin > tmax {
            return None;
        }
    }

    if tmax < 0.0 {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_a_box_straight_ahead() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn misses_a_box_off_axis() {
        let t = ray_aabb_hit_t(
            Vec3::new(3.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn box_behind_the_origin_is_ignored() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn origin_inside_the_box_returns_the_exit_distance() {
        let t = ray_aabb_hit_t(Vec3::ZERO, Vec3::NEG_Z, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn rotated_box_is_tested_in_local_space() {
        // A thin box rotated 90 degrees around Y presents its long side to a
        // ray along -Z.
        let xf = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        let ray = Ray3d::new(Vec3::new(0.4, 0.0, 5.0), Dir3::NEG_Z);
        assert!(ray_hits_obb(&ray, &xf, Vec3::new(0.05, 0.5, 0.5)).is_some());
    }
}
