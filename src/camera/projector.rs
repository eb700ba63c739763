//! World-space to screen-space projection for UI anchors.

use glam::{Mat4, Vec2, Vec3};
use serde::Serialize;

use super::viewport::Viewport;

/// Where a world point lands on screen this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScreenPosition {
    /// Pixel coordinates, origin top-left, Y growing downward.
    Visible {
        /// Horizontal pixel coordinate.
        x: f32,
        /// Vertical pixel coordinate.
        y: f32,
    },
    /// Behind the camera or outside the clip depth range.
    Hidden,
}

impl ScreenPosition {
    /// Pixel position if visible.
    pub fn point(&self) -> Option<Vec2> {
        match *self {
            Self::Visible { x, y } => Some(Vec2::new(x, y)),
            Self::Hidden => None,
        }
    }

    /// Whether the point is visible and falls inside the viewport rectangle.
    pub fn is_inside(&self, viewport: Viewport) -> bool {
        self.point().is_some_and(|p| {
            (0.0..=viewport.width()).contains(&p.x)
                && (0.0..=viewport.height()).contains(&p.y)
        })
    }
}

/// Project `world` onto the viewport.
///
/// `model_root` is the transform of the movable root the point is attached
/// to; `None` means identity. `view_proj` must use NDC depth `[-1, 1]`
/// (see [`Camera::build_matrix`](super::Camera::build_matrix)).
///
/// Only depth hides a point: positions left/right/above/below the viewport
/// are still reported as [`ScreenPosition::Visible`].
pub fn project(
    world: Vec3,
    model_root: Option<&Mat4>,
    view_proj: &Mat4,
    viewport: Viewport,
) -> ScreenPosition {
    let world = model_root.map_or(world, |m| m.transform_point3(world));
    let clip = *view_proj * world.extend(1.0);

    // w <= 0 is at or behind the eye plane; dividing would mirror the point
    // back in front of the camera.
    if clip.w <= f32::EPSILON {
        return ScreenPosition::Hidden;
    }
    let ndc = clip.truncate() / clip.w;
    if !ndc.is_finite() || ndc.z > 1.0 || ndc.z < -1.0 {
        return ScreenPosition::Hidden;
    }

    ScreenPosition::Visible {
        x: (ndc.x * 0.5 + 0.5) * viewport.width(),
        y: (1.0 - (ndc.y * 0.5 + 0.5)) * viewport.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    fn camera_at_z10(viewport: Viewport) -> Camera {
        let mut camera = Camera::default();
        camera.aspect = viewport.aspect();
        camera.position = Vec3::new(0.0, 0.0, 10.0);
        camera.look_at(Vec3::ZERO);
        camera
    }

    fn assert_near(pos: ScreenPosition, x: f32, y: f32) {
        let p = pos.point().unwrap();
        assert!(
            (p.x - x).abs() < 1e-2 && (p.y - y).abs() < 1e-2,
            "expected ({x}, {y}), got {p}"
        );
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let pos = project(Vec3::ZERO, None, &camera.build_matrix(), viewport);
        assert_near(pos, 400.0, 300.0);
    }

    #[test]
    fn point_behind_camera_is_hidden() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let vp = camera.build_matrix();
        assert_eq!(
            project(Vec3::new(0.0, 0.0, 20.0), None, &vp, viewport),
            ScreenPosition::Hidden
        );
        // Exactly on the eye plane.
        assert_eq!(
            project(Vec3::new(3.0, 0.0, 10.0), None, &vp, viewport),
            ScreenPosition::Hidden
        );
    }

    #[test]
    fn point_beyond_far_plane_is_hidden() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let far = Vec3::new(0.0, 0.0, 10.0 - camera.zfar - 1.0);
        assert_eq!(
            project(far, None, &camera.build_matrix(), viewport),
            ScreenPosition::Hidden
        );
    }

    #[test]
    fn point_inside_near_plane_is_hidden() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        assert!((camera.znear - 0.1).abs() < 1e-6);
        let vp = camera.build_matrix();
        // In front of the eye (w > 0) but closer than znear.
        let close = Vec3::new(0.0, 0.0, 9.95);
        assert!((vp * close.extend(1.0)).w > 0.0);
        assert_eq!(project(close, None, &vp, viewport), ScreenPosition::Hidden);
    }

    #[test]
    fn screen_y_grows_downward() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let vp = camera.build_matrix();
        let above = project(Vec3::new(0.0, 1.0, 0.0), None, &vp, viewport);
        let right = project(Vec3::new(1.0, 0.0, 0.0), None, &vp, viewport);
        assert!(above.point().unwrap().y < 300.0);
        assert!(right.point().unwrap().x > 400.0);
    }

    #[test]
    fn model_root_transform_is_applied() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let vp = camera.build_matrix();
        let root = Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0));

        // Anchor at (5,0,0) in model space sits at the world origin.
        let pos = project(Vec3::new(5.0, 0.0, 0.0), Some(&root), &vp, viewport);
        assert_near(pos, 400.0, 300.0);
    }

    #[test]
    fn off_to_the_side_is_visible_but_outside() {
        let viewport = Viewport::new(800.0, 600.0);
        let camera = camera_at_z10(viewport);
        let pos = project(
            Vec3::new(100.0, 0.0, 0.0),
            None,
            &camera.build_matrix(),
            viewport,
        );
        assert!(pos.point().is_some());
        assert!(!pos.is_inside(viewport));
    }

    #[test]
    fn resize_changes_pixel_mapping_only() {
        let small = Viewport::new(800.0, 600.0);
        let large = Viewport::new(1600.0, 900.0);
        let mut camera = camera_at_z10(small);
        let before = (camera.position, camera.orientation);

        camera.aspect = large.aspect();
        let pos = project(Vec3::ZERO, None, &camera.build_matrix(), large);
        assert_near(pos, 800.0, 450.0);
        assert_eq!((camera.position, camera.orientation), before);
    }
}
