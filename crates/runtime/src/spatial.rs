//! Ray and volume queries against world geometry.
//!
//! The session resolves hits against the live enemy set itself (sphere
//! colliders); a presentation layer with real level geometry supplies a
//! [`SpatialOracle`] so projectiles also stop on terrain and props.

use wilds_core::Vec3;

/// Nearest obstruction along a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

/// Static-geometry queries supplied by the presentation layer.
///
/// Implementations only need to cover non-entity geometry (terrain,
/// props); entity hits are handled by the session.
pub trait SpatialOracle: Send + Sync {
    /// Nearest static obstruction along the ray within `max_distance`,
    /// if any. `direction` is a unit vector.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

/// Nearest intersection of a ray with a sphere, within `max_distance`.
///
/// Returns the entry distance (0 when the origin starts inside the
/// sphere). Used for enemy hit tests; shared here so oracle
/// implementations can reuse it.
pub fn sphere_raycast(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let to_center = center - origin;
    let projection = to_center.x * direction.x
        + to_center.y * direction.y
        + to_center.z * direction.z;
    let closest = origin + direction * projection.clamp(0.0, max_distance);
    if closest.distance(center) > radius {
        return None;
    }

    // Inside the sphere counts as an immediate hit.
    if to_center.length() <= radius {
        return Some(0.0);
    }

    let offset = (radius * radius
        - (to_center.length() * to_center.length() - projection * projection))
        .max(0.0)
        .sqrt();
    let entry = projection - offset;
    (entry >= 0.0 && entry <= max_distance).then_some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_sphere_ahead() {
        let hit = sphere_raycast(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            100.0,
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
        );
        let distance = hit.expect("sphere is on the ray");
        assert!((distance - 9.0).abs() < 1e-4);
    }

    #[test]
    fn ray_misses_sphere_behind_or_aside() {
        assert!(sphere_raycast(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            100.0,
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
        )
        .is_none());

        assert!(sphere_raycast(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            100.0,
            Vec3::new(5.0, 0.0, 10.0),
            1.0,
        )
        .is_none());
    }

    #[test]
    fn hit_beyond_max_distance_does_not_count() {
        assert!(sphere_raycast(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            5.0,
            Vec3::new(0.0, 0.0, 10.0),
            1.0,
        )
        .is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_immediately() {
        let hit = sphere_raycast(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
            5.0,
            Vec3::new(0.0, 0.0, 0.2),
            1.0,
        );
        assert_eq!(hit, Some(0.0));
    }
}
