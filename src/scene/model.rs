use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a loaded model in its own space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl ModelBounds {
    /// Bounds from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Root transform that scales a model so its largest extent equals
/// `desired_size` and moves its scaled center onto the vertical axis.
///
/// The vertical offset is left at zero. Degenerate bounds (zero or
/// non-finite extent) yield the identity.
pub fn fit_model_root(bounds: &ModelBounds, desired_size: f32) -> Mat4 {
    let extent = bounds.size().max_element();
    if !(extent > 0.0 && extent.is_finite() && desired_size.is_finite()) {
        log::warn!("cannot fit model with extent {extent}; using identity");
        return Mat4::IDENTITY;
    }
    let scale = desired_size / extent;
    let center = bounds.center() * scale;
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::IDENTITY,
        Vec3::new(-center.x, 0.0, -center.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_extent_becomes_desired_size() {
        let bounds =
            ModelBounds::new(Vec3::new(-10.0, 0.0, -5.0), Vec3::new(30.0, 8.0, 5.0));
        let root = fit_model_root(&bounds, 12.0);

        let lo = root.transform_point3(bounds.min);
        let hi = root.transform_point3(bounds.max);
        assert!(((hi - lo).max_element() - 12.0).abs() < 1e-4);
        // Centered in X/Z.
        assert!((lo.x + hi.x).abs() < 1e-4);
        assert!((lo.z + hi.z).abs() < 1e-4);
        // No vertical shift: y = 0 stays at y = 0.
        assert_eq!(root.transform_point3(Vec3::ZERO).y, 0.0);
    }

    #[test]
    fn degenerate_bounds_give_identity() {
        let point = ModelBounds::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(fit_model_root(&point, 12.0), Mat4::IDENTITY);
    }
}
