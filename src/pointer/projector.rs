use bevy::prelude::*;

use super::entities::PointerTarget;

/// Invisible finite rectangle the pointer ray is cast against.
///
/// Lies in the grid's resting plane around `center` and faces +Z: only rays
/// travelling downward (from the camera side) can hit it.
#[derive(Clone, Copy, Debug, Reflect)]
pub struct InteractionPlane {
    center: Vec3,
    half_extents: Vec2,
}

impl InteractionPlane {
    /// A `size.x` by `size.y` plane centred on `center`.
    pub fn new(center: Vec3, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size.abs() * 0.5,
        }
    }

    /// Nearest point in front of the ray origin that lies on the plane's extent.
    pub fn intersect(&self, ray: Ray3d) -> Option<Vec3> {
        if ray.direction.z >= 0.0 {
            return None;
        }
        let distance = ray.intersect_plane(self.center, InfinitePlane3d { normal: Dir3::Z })?;
        let hit = ray.get_point(distance);
        let local = hit - self.center;
        (local.x.abs() <= self.half_extents.x && local.y.abs() <= self.half_extents.y)
            .then_some(hit)
    }
}

/// Latest cursor position plus the plane it is projected onto.
///
/// Cursor samples overwrite the stored position; only the most recent one is
/// ever resolved.
#[derive(Resource, Debug)]
pub struct PointerProjector {
    cursor: Option<Vec2>,
    plane: InteractionPlane,
    last_hit: Option<Vec3>,
}

impl PointerProjector {
    /// A projector with no cursor seen yet.
    pub fn new(plane: InteractionPlane) -> Self {
        Self {
            cursor: None,
            plane,
            last_hit: None,
        }
    }

    /// Records the latest cursor position in viewport pixels.
    pub fn set_cursor(&mut self, position: Vec2) {
        self.cursor = Some(position);
    }

    /// Latest cursor position, if the cursor has ever been over the window.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// World point where the camera ray meets the interaction plane.
    pub fn resolve_world_target(&self, ray: Ray3d) -> Option<Vec3> {
        self.plane.intersect(ray)
    }

    /// Moves `target` to the resolved point on a hit; leaves it untouched on a miss.
    pub fn update_target(&mut self, ray: Ray3d, target: &mut PointerTarget) -> Option<Vec3> {
        let hit = self.resolve_world_target(ray)?;
        target.set_position(hit);
        self.last_hit = Some(hit);
        Some(hit)
    }

    /// Most recent successful intersection.
    pub fn last_hit(&self) -> Option<Vec3> {
        self.last_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAR: Vec3 = Vec3::new(20.0, 20.0, 0.0);
    const EYE: Vec3 = Vec3::new(0.0, 0.0, 8.0);

    fn plane() -> InteractionPlane {
        InteractionPlane::new(Vec3::ZERO, Vec2::splat(12.0))
    }

    fn ray_toward(origin: Vec3, toward: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::new(toward - origin).unwrap())
    }

    fn assert_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "got {a:?}, expected {b:?}");
    }

    // ── plane intersection ──────────────────────────────────────────

    #[test]
    fn straight_down_ray_hits_origin() {
        let hit = plane().intersect(ray_toward(EYE, Vec3::ZERO)).unwrap();
        assert_near(hit, Vec3::ZERO);
    }

    #[test]
    fn oblique_ray_hits_analytic_point() {
        let aim = Vec3::new(3.0, -2.0, 0.0);
        let hit = plane().intersect(ray_toward(EYE, aim)).unwrap();
        assert_near(hit, aim);
    }

    #[test]
    fn ray_from_orbited_camera_hits_look_target() {
        let eye = Vec3::new(0.0, -6.0, 6.0);
        let aim = Vec3::new(1.0, 2.0, 0.0);
        // Extend past the plane so the ray is not aimed exactly at the hit.
        let hit = plane().intersect(ray_toward(eye, aim + (aim - eye))).unwrap();
        assert_near(hit, aim);
    }

    #[test]
    fn offset_plane_uses_its_own_center() {
        let plane = InteractionPlane::new(Vec3::new(10.0, 0.0, 1.0), Vec2::splat(2.0));
        let hit = plane
            .intersect(ray_toward(Vec3::new(10.5, 0.0, 5.0), Vec3::new(10.5, 0.0, 0.0)))
            .unwrap();
        assert_near(hit, Vec3::new(10.5, 0.0, 1.0));
    }

    #[test]
    fn ray_beyond_plane_extent_misses() {
        assert!(
            plane()
                .intersect(ray_toward(EYE, Vec3::new(10.9, 0.0, 0.0)))
                .is_none()
        );
    }

    #[test]
    fn ray_pointing_away_misses() {
        assert!(
            plane()
                .intersect(ray_toward(EYE, Vec3::new(0.0, 0.0, 20.0)))
                .is_none()
        );
    }

    #[test]
    fn ray_parallel_to_plane_misses() {
        assert!(
            plane()
                .intersect(ray_toward(Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO))
                .is_none()
        );
    }

    #[test]
    fn ray_from_below_the_grid_misses() {
        assert!(
            plane()
                .intersect(ray_toward(Vec3::new(0.0, 0.0, -8.0), Vec3::ZERO))
                .is_none()
        );
    }

    // ── cursor ──────────────────────────────────────────────────────

    #[test]
    fn no_cursor_before_first_sample() {
        assert!(PointerProjector::new(plane()).cursor().is_none());
    }

    #[test]
    fn latest_cursor_wins() {
        let mut projector = PointerProjector::new(plane());
        projector.set_cursor(Vec2::new(10.0, 20.0));
        projector.set_cursor(Vec2::new(400.0, 300.0));
        assert_eq!(projector.cursor(), Some(Vec2::new(400.0, 300.0)));
    }

    // ── update_target ───────────────────────────────────────────────

    #[test]
    fn hit_moves_target_and_is_remembered() {
        let mut projector = PointerProjector::new(plane());
        let mut target = PointerTarget::new(FAR);
        let hit = projector
            .update_target(ray_toward(EYE, Vec3::new(1.0, 1.0, 0.0)), &mut target)
            .unwrap();
        assert_near(target.position(), hit);
        assert_near(hit, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(projector.last_hit(), Some(hit));
    }

    #[test]
    fn miss_leaves_target_where_it_was() {
        let mut projector = PointerProjector::new(plane());
        let mut target = PointerTarget::new(FAR);
        projector.update_target(ray_toward(EYE, Vec3::ZERO), &mut target);
        let before = target.position();

        let miss = ray_toward(EYE, Vec3::new(10.9, 6.1, 0.0));
        assert!(projector.update_target(miss, &mut target).is_none());
        assert_eq!(target.position(), before);
        assert_eq!(projector.last_hit(), Some(before));
    }

    #[test]
    fn target_starts_far_from_grid() {
        let projector = PointerProjector::new(plane());
        let target = PointerTarget::new(FAR);
        assert_eq!(target.position(), FAR);
        assert!(projector.last_hit().is_none());
    }
}
