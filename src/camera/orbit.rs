//! Target-anchored orbit navigation with damped rotation, zoom and pan.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::OrbitOptions;

/// Smallest polar angle allowed; keeps the camera off the pole so the
/// look-at basis never degenerates.
const MIN_POLAR: f32 = 1e-6;
/// Frame rate at which `damping_factor` is applied exactly once per tick.
const REFERENCE_FPS: f32 = 60.0;
/// `ln(1 / 0.95)`: one wheel notch scales the distance by 0.95.
const ZOOM_STEP: f32 = 0.051_293_3;

/// Offset of the camera from the pivot in spherical coordinates.
///
/// The polar angle is measured from world +Y; the azimuth is measured
/// around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the pivot.
    pub radius: f32,
    /// Angle from +Y in radians.
    pub polar: f32,
    /// Angle around +Y in radians.
    pub azimuth: f32,
}

impl Spherical {
    /// Convert a cartesian offset. A zero offset becomes a zero-radius
    /// offset on the horizon.
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON || !radius.is_finite() {
            return Self {
                radius: 0.0,
                polar: PI / 2.0,
                azimuth: 0.0,
            };
        }
        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    /// Convert back to a cartesian offset.
    pub fn to_offset(self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            ring * self.azimuth.cos(),
        )
    }
}

/// Input-driven change not yet applied to the offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PendingOrbit {
    azimuth: f32,
    polar: f32,
    log_zoom: f32,
    pan: Vec3,
}

impl PendingOrbit {
    fn discard_non_finite(&mut self) {
        for v in [&mut self.azimuth, &mut self.polar, &mut self.log_zoom] {
            if !v.is_finite() {
                *v = 0.0;
            }
        }
        if !self.pan.is_finite() {
            self.pan = Vec3::ZERO;
        }
    }
}

/// Orbit navigator: keeps the camera on a sphere around `target`.
///
/// Input accumulates as a pending change that [`tick`](Self::tick) feeds
/// into the offset with exponential damping. Radius and polar angle are
/// clamped after every tick.
#[derive(Debug, Clone)]
pub struct OrbitNavigator {
    target: Vec3,
    offset: Spherical,
    pending: PendingOrbit,
    options: OrbitOptions,
}

impl OrbitNavigator {
    /// Create a navigator at its home pose.
    pub fn new(options: OrbitOptions) -> Self {
        let mut nav = Self {
            target: Vec3::ZERO,
            offset: Spherical::from_offset(Vec3::Z),
            pending: PendingOrbit::default(),
            options,
        };
        nav.home();
        nav
    }

    /// Current pivot.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current spherical offset of the camera from the pivot.
    pub fn offset(&self) -> Spherical {
        self.offset
    }

    /// Current distance from the pivot.
    pub fn distance(&self) -> f32 {
        self.offset.radius
    }

    /// Active options.
    pub fn options(&self) -> &OrbitOptions {
        &self.options
    }

    /// Replace the options and re-clamp the offset to the new bounds.
    pub fn set_options(&mut self, options: OrbitOptions) {
        self.options = options;
        self.clamp_offset();
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    ///
    /// A drag across the full viewport height turns a full circle.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let scale = TAU / viewport_height.max(1.0) * self.options.rotate_speed;
        if !delta.is_finite() || !scale.is_finite() {
            return;
        }
        self.pending.azimuth -= delta.x * scale;
        self.pending.polar -= delta.y * scale;
    }

    /// Queue a zoom. Positive values move toward the pivot.
    pub fn zoom(&mut self, delta: f32) {
        if delta.is_finite() {
            self.pending.log_zoom -= delta * self.options.zoom_speed * ZOOM_STEP;
        }
    }

    /// Queue a pivot shift in the camera's screen plane, scaled so the
    /// pivot follows the pointer at the current distance.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, camera: &Camera) {
        let half_fov = (camera.fovy.to_radians() * 0.5).tan();
        let scale = 2.0 * self.offset.radius * half_fov
            / viewport_height.max(1.0)
            * self.options.pan_speed;
        if !delta.is_finite() || !scale.is_finite() {
            return;
        }
        self.pending.pan +=
            camera.right() * (-delta.x * scale) + camera.up() * (delta.y * scale);
    }

    /// Move the pivot, keeping the current offset.
    pub fn set_target(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Take over a camera placed by someone else: pivot at `pivot`, offset
    /// derived from where the camera is now.
    pub fn retarget_from_camera(&mut self, camera: &mut Camera, pivot: Vec3) {
        self.target = pivot;
        self.offset = Spherical::from_offset(camera.position - pivot);
        self.halt();
        self.clamp_offset();
        self.apply(camera);
    }

    /// Drop any pending input so nothing keeps drifting.
    pub fn halt(&mut self) {
        self.pending = PendingOrbit::default();
    }

    /// Restore the home pivot and offset and place the camera there.
    pub fn reset(&mut self, camera: &mut Camera) {
        self.home();
        self.apply(camera);
    }

    /// Advance damping by `elapsed` seconds and write the camera pose.
    pub fn tick(&mut self, camera: &mut Camera, elapsed: f32) {
        self.pending.discard_non_finite();
        let blend = self.damping_blend(elapsed);

        self.offset.azimuth += self.pending.azimuth * blend;
        self.offset.polar += self.pending.polar * blend;
        self.offset.radius *= (self.pending.log_zoom * blend).exp();
        self.target += self.pending.pan * blend;

        let keep = 1.0 - blend;
        self.pending.azimuth *= keep;
        self.pending.polar *= keep;
        self.pending.log_zoom *= keep;
        self.pending.pan *= keep;

        self.clamp_offset();
        self.apply(camera);
    }

    /// Fraction of the pending change applied this tick.
    fn damping_blend(&self, elapsed: f32) -> f32 {
        if !self.options.enable_damping {
            return 1.0;
        }
        let elapsed = if elapsed.is_finite() {
            elapsed.max(0.0)
        } else {
            0.0
        };
        let factor = self.options.damping_factor.clamp(0.0, 1.0);
        1.0 - (1.0 - factor).powf(elapsed * REFERENCE_FPS)
    }

    fn home(&mut self) {
        self.target = Vec3::from_array(self.options.home_target);
        self.offset = Spherical::from_offset(
            Vec3::from_array(self.options.home_position) - self.target,
        );
        self.halt();
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        let o = &self.options;
        let max_polar = o.max_polar_angle.max(MIN_POLAR).min(PI - MIN_POLAR);
        let max_distance = o.max_distance.max(o.min_distance);
        self.offset.polar = self.offset.polar.max(MIN_POLAR).min(max_polar);
        self.offset.radius =
            self.offset.radius.max(o.min_distance).min(max_distance);
        if !self.offset.azimuth.is_finite() {
            self.offset.azimuth = 0.0;
        }
    }

    fn apply(&self, camera: &mut Camera) {
        camera.position = self.target + self.offset.to_offset();
        camera.look_at(self.target);
    }
}
