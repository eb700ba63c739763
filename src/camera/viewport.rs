use serde::Serialize;

/// Size of the drawing surface in CSS/physical pixels.
///
/// Dimensions are clamped to at least one pixel so the aspect ratio and
/// pixel mapping stay finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    /// Create a viewport, clamping non-positive or non-finite sizes to 1px.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width / height.
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

fn sanitize(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_common_sizes() {
        assert_eq!(Viewport::new(800.0, 600.0).aspect(), 800.0 / 600.0);
        assert_eq!(Viewport::new(1600.0, 900.0).aspect(), 16.0 / 9.0);
    }

    #[test]
    fn degenerate_sizes_clamp_to_one_pixel() {
        let vp = Viewport::new(0.0, f32::NAN);
        assert_eq!(vp.width(), 1.0);
        assert_eq!(vp.height(), 1.0);
        assert!(vp.aspect().is_finite());
    }
}
