//! Free-look, six-axis fly navigation.

use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::core::Camera;
use crate::options::FlyOptions;

/// One of the six held-key movement directions, in camera-local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveIntent {
    /// Along the view direction (-Z).
    Forward,
    /// Against the view direction (+Z).
    Backward,
    /// Strafe left (-X).
    Left,
    /// Strafe right (+X).
    Right,
    /// Rise along camera up (+Y).
    Up,
    /// Sink along camera up (-Y).
    Down,
}

impl MoveIntent {
    /// Every intent, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// Unit axis this intent contributes in camera-local space.
    pub fn axis(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::NEG_Z,
            Self::Backward => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
            Self::Up => Vec3::Y,
            Self::Down => Vec3::NEG_Y,
        }
    }
}

/// Held movement flags, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MoveIntents {
    /// Forward held.
    pub forward: bool,
    /// Backward held.
    pub backward: bool,
    /// Left held.
    pub left: bool,
    /// Right held.
    pub right: bool,
    /// Up held.
    pub up: bool,
    /// Down held.
    pub down: bool,
}

impl MoveIntents {
    fn flag_mut(&mut self, intent: MoveIntent) -> &mut bool {
        match intent {
            MoveIntent::Forward => &mut self.forward,
            MoveIntent::Backward => &mut self.backward,
            MoveIntent::Left => &mut self.left,
            MoveIntent::Right => &mut self.right,
            MoveIntent::Up => &mut self.up,
            MoveIntent::Down => &mut self.down,
        }
    }

    /// Set one flag. Setting it to its current value changes nothing.
    pub fn set(&mut self, intent: MoveIntent, active: bool) {
        *self.flag_mut(intent) = active;
    }

    /// Whether `intent` is held.
    pub fn is_active(&self, intent: MoveIntent) -> bool {
        match intent {
            MoveIntent::Forward => self.forward,
            MoveIntent::Backward => self.backward,
            MoveIntent::Left => self.left,
            MoveIntent::Right => self.right,
            MoveIntent::Up => self.up,
            MoveIntent::Down => self.down,
        }
    }

    /// Release every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sum of the held axes in camera-local space (not normalized).
    /// Opposing intents cancel.
    pub fn local_direction(&self) -> Vec3 {
        MoveIntent::ALL
            .into_iter()
            .filter(|i| self.is_active(*i))
            .map(MoveIntent::axis)
            .sum()
    }
}

/// Fly navigator: yaw/pitch free look with roll pinned at zero, plus
/// translation driven by held [`MoveIntents`].
#[derive(Debug, Clone)]
pub struct FlyNavigator {
    yaw: f32,
    pitch: f32,
    intents: MoveIntents,
    look_active: bool,
    options: FlyOptions,
}

impl FlyNavigator {
    /// Create a navigator facing world -Z.
    pub fn new(options: FlyOptions) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            intents: MoveIntents::default(),
            look_active: false,
            options,
        }
    }

    /// Yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians, always within `[-π/2, π/2]`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Currently held movement flags.
    pub fn intents(&self) -> MoveIntents {
        self.intents
    }

    /// Whether a look-drag is in progress.
    pub fn look_active(&self) -> bool {
        self.look_active
    }

    /// Active options.
    pub fn options(&self) -> &FlyOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: FlyOptions) {
        self.options = options;
    }

    /// Orientation built from yaw and pitch with zero roll.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Start or end a look-drag. Look deltas are ignored outside a drag.
    pub fn set_look_active(&mut self, active: bool) {
        self.look_active = active;
    }

    /// Set one movement flag.
    pub fn set_intent(&mut self, intent: MoveIntent, active: bool) {
        self.intents.set(intent, active);
    }

    /// Turn the camera by a pointer movement of `delta` pixels.
    pub fn look(&mut self, camera: &mut Camera, delta: Vec2) {
        if !self.look_active || !delta.is_finite() {
            return;
        }
        self.yaw -= delta.x * self.options.look_speed;
        self.pitch = (self.pitch - delta.y * self.options.look_speed)
            .clamp(-FRAC_PI_2, FRAC_PI_2);
        camera.orientation = self.orientation();
    }

    /// Move the camera along the held intents for `elapsed` seconds.
    pub fn tick(&mut self, camera: &mut Camera, elapsed: f32) {
        let direction = self.intents.local_direction();
        if direction.length_squared() == 0.0 {
            return;
        }
        let elapsed = if elapsed.is_finite() {
            elapsed.max(0.0)
        } else {
            0.0
        };
        let step = direction.normalize() * self.options.speed * elapsed;
        camera.position += camera.orientation * step;
        camera.position.y = camera.position.y.max(self.options.min_height);
    }

    /// Pick up yaw and pitch from the camera's current orientation,
    /// dropping any roll. The camera itself is not touched.
    pub fn seed_from_camera(&mut self, camera: &Camera) {
        let (yaw, pitch, _roll) = camera.orientation.to_euler(EulerRot::YXZ);
        self.yaw = if yaw.is_finite() { yaw } else { 0.0 };
        self.pitch = if pitch.is_finite() {
            pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
        } else {
            0.0
        };
    }

    /// Stop consuming input: end any look-drag and release all intents.
    pub fn suspend(&mut self) {
        self.look_active = false;
        self.intents.clear();
    }

    /// Restore the home position facing world -Z.
    pub fn reset(&mut self, camera: &mut Camera) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        camera.position = Vec3::from_array(self.options.home_position);
        camera.orientation = self.orientation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (FlyNavigator, Camera) {
        let mut camera = Camera::default();
        let mut nav = FlyNavigator::new(FlyOptions::default());
        nav.reset(&mut camera);
        (nav, camera)
    }

    fn roll_of(q: Quat) -> f32 {
        q.to_euler(EulerRot::YXZ).2
    }

    #[test]
    fn forward_one_second_at_speed_fifteen() {
        let (mut nav, mut camera) = setup();
        assert_eq!(camera.orientation, Quat::IDENTITY);
        let start = camera.position;

        nav.set_intent(MoveIntent::Forward, true);
        nav.tick(&mut camera, 1.0);

        let moved = camera.position - start;
        assert!((moved - Vec3::new(0.0, 0.0, -15.0)).length() < 1e-4);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let (mut nav, mut camera) = setup();
        let start = camera.position;
        nav.set_intent(MoveIntent::Forward, true);
        nav.set_intent(MoveIntent::Right, true);
        nav.tick(&mut camera, 1.0);
        assert!(((camera.position - start).length() - 15.0).abs() < 1e-3);
    }

    #[test]
    fn opposing_intents_cancel() {
        let (mut nav, mut camera) = setup();
        let start = camera.position;
        nav.set_intent(MoveIntent::Left, true);
        nav.set_intent(MoveIntent::Right, true);
        nav.tick(&mut camera, 1.0);
        assert_eq!(camera.position, start);
    }

    #[test]
    fn set_intent_is_idempotent() {
        let mut intents = MoveIntents::default();
        intents.set(MoveIntent::Up, true);
        let once = intents;
        intents.set(MoveIntent::Up, true);
        assert_eq!(intents, once);
        intents.set(MoveIntent::Up, false);
        assert_eq!(intents, MoveIntents::default());
    }

    #[test]
    fn floor_stops_descent() {
        let (mut nav, mut camera) = setup();
        nav.set_intent(MoveIntent::Down, true);
        nav.tick(&mut camera, 10.0);
        assert_eq!(camera.position.y, nav.options().min_height);
    }

    #[test]
    fn movement_follows_orientation() {
        let (mut nav, mut camera) = setup();
        nav.set_look_active(true);
        // Turn left by 90 degrees: forward becomes world -X.
        let pixels = FRAC_PI_2 / nav.options().look_speed;
        nav.look(&mut camera, Vec2::new(-pixels, 0.0));
        let start = camera.position;
        nav.set_intent(MoveIntent::Forward, true);
        nav.tick(&mut camera, 1.0);
        let moved = camera.position - start;
        assert!((moved - Vec3::new(-15.0, 0.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn pitch_is_clamped_and_roll_stays_zero() {
        let (mut nav, mut camera) = setup();
        nav.set_look_active(true);
        for delta in [-100_000.0, 3.0, 100_000.0, -7.5] {
            nav.look(&mut camera, Vec2::new(delta * 0.3, delta));
            assert!(nav.pitch() >= -FRAC_PI_2 && nav.pitch() <= FRAC_PI_2);
            // Roll is only well defined away from the poles.
            if nav.pitch().abs() < 1.5 {
                assert!(roll_of(camera.orientation).abs() < 1e-4);
            }
            assert!(camera.right().y.abs() < 1e-4);
        }
    }

    #[test]
    fn look_requires_active_drag() {
        let (mut nav, mut camera) = setup();
        nav.look(&mut camera, Vec2::new(40.0, 20.0));
        assert_eq!(camera.orientation, Quat::IDENTITY);
        assert_eq!(nav.yaw(), 0.0);
    }

    #[test]
    fn seed_discards_roll() {
        let (mut nav, mut camera) = setup();
        camera.orientation =
            Quat::from_euler(EulerRot::YXZ, 0.7, -0.3, 0.4);
        nav.seed_from_camera(&camera);
        assert!((nav.yaw() - 0.7).abs() < 1e-4);
        assert!((nav.pitch() + 0.3).abs() < 1e-4);
        assert!(roll_of(nav.orientation()).abs() < 1e-6);
    }

    #[test]
    fn suspend_releases_input() {
        let (mut nav, mut camera) = setup();
        nav.set_look_active(true);
        nav.set_intent(MoveIntent::Forward, true);
        nav.suspend();
        let start = camera.position;
        nav.tick(&mut camera, 1.0);
        nav.look(&mut camera, Vec2::new(10.0, 10.0));
        assert_eq!(camera.position, start);
        assert_eq!(camera.orientation, Quat::IDENTITY);
    }
}
