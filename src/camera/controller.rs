//! The Orbit/Fly state machine sitting between input and the camera.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::core::Camera;
use super::fly::{FlyNavigator, MoveIntent};
use super::orbit::OrbitNavigator;
use super::viewport::Viewport;
use crate::options::{FlyOptions, OrbitOptions};

/// Which navigator currently drives the camera.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Damped orbit around a pivot.
    #[default]
    Orbit,
    /// Free-look fly-through.
    Fly,
}

impl NavigationMode {
    /// Parse a mode name (`"orbit"` or `"fly"`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "orbit" => Some(Self::Orbit),
            "fly" => Some(Self::Fly),
            _ => None,
        }
    }

    /// Lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::Fly => "fly",
        }
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed mode transition, reported so UI can update its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeChange {
    /// Mode that was active before.
    pub from: NavigationMode,
    /// Mode active now.
    pub to: NavigationMode,
}

/// Owns both navigators and decides which one may touch the camera.
///
/// Only the active navigator receives ticks and input. The other keeps its
/// state untouched until it is activated again.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: NavigationMode,
    orbit: OrbitNavigator,
    fly: FlyNavigator,
    handoff_distance: f32,
}

impl ModeController {
    /// Create a controller in orbit mode. Call [`reset`](Self::reset) to
    /// place the camera at the orbit home pose.
    pub fn new(orbit: OrbitOptions, fly: FlyOptions) -> Self {
        let handoff_distance = orbit.handoff_distance;
        Self {
            mode: NavigationMode::Orbit,
            orbit: OrbitNavigator::new(orbit),
            fly: FlyNavigator::new(fly),
            handoff_distance,
        }
    }

    /// Active mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// The orbit navigator (active or frozen).
    pub fn orbit(&self) -> &OrbitNavigator {
        &self.orbit
    }

    /// The fly navigator (active or frozen).
    pub fn fly(&self) -> &FlyNavigator {
        &self.fly
    }

    /// Push new options into both navigators.
    pub fn set_options(&mut self, orbit: OrbitOptions, fly: FlyOptions) {
        self.handoff_distance = orbit.handoff_distance;
        self.orbit.set_options(orbit);
        self.fly.set_options(fly);
    }

    /// Switch to `mode`. Returns `None` when it is already active.
    pub fn activate(
        &mut self,
        mode: NavigationMode,
        camera: &mut Camera,
    ) -> Option<ModeChange> {
        if mode == self.mode {
            return None;
        }
        let change = match mode {
            NavigationMode::Fly => self.enter_fly(camera),
            NavigationMode::Orbit => self.enter_orbit(camera),
        };
        log::debug!("navigation mode {} -> {}", change.from, change.to);
        Some(change)
    }

    /// Switch by name; unknown names are ignored.
    pub fn activate_by_name(
        &mut self,
        name: &str,
        camera: &mut Camera,
    ) -> Option<ModeChange> {
        let Some(mode) = NavigationMode::from_name(name) else {
            log::debug!("ignoring unknown navigation mode {name:?}");
            return None;
        };
        self.activate(mode, camera)
    }

    /// Orbit → Fly: yaw/pitch are seeded from the camera so the view does
    /// not jump.
    fn enter_fly(&mut self, camera: &Camera) -> ModeChange {
        self.orbit.halt();
        self.fly.seed_from_camera(camera);
        self.switch_to(NavigationMode::Fly)
    }

    /// Fly → Orbit: the new pivot sits `handoff_distance` ahead of the
    /// camera along its view direction.
    fn enter_orbit(&mut self, camera: &mut Camera) -> ModeChange {
        self.fly.suspend();
        let pivot = camera.position + camera.forward() * self.handoff_distance;
        self.orbit.retarget_from_camera(camera, pivot);
        self.switch_to(NavigationMode::Orbit)
    }

    fn switch_to(&mut self, to: NavigationMode) -> ModeChange {
        let from = self.mode;
        self.mode = to;
        ModeChange { from, to }
    }

    /// Advance the active navigator by `elapsed` seconds.
    pub fn tick(&mut self, camera: &mut Camera, elapsed: f32) {
        match self.mode {
            NavigationMode::Orbit => self.orbit.tick(camera, elapsed),
            NavigationMode::Fly => self.fly.tick(camera, elapsed),
        }
    }

    /// Route a pointer drag. `pan` selects orbit panning; fly mode only
    /// looks around.
    pub fn drag(
        &mut self,
        camera: &mut Camera,
        delta: Vec2,
        pan: bool,
        viewport: Viewport,
    ) {
        match self.mode {
            NavigationMode::Orbit if pan => {
                self.orbit.pan(delta, viewport.height(), camera);
            }
            NavigationMode::Orbit => {
                self.orbit.rotate(delta, viewport.height());
            }
            NavigationMode::Fly => self.fly.look(camera, delta),
        }
    }

    /// Route a wheel zoom. Fly mode has no zoom.
    pub fn zoom(&mut self, delta: f32) {
        if self.mode == NavigationMode::Orbit {
            self.orbit.zoom(delta);
        }
    }

    /// Pointer pressed or released over the viewport.
    pub fn set_dragging(&mut self, active: bool) {
        if self.mode == NavigationMode::Fly {
            self.fly.set_look_active(active);
        }
    }

    /// Route a movement intent. Only fly mode moves on intents.
    pub fn set_intent(&mut self, intent: MoveIntent, active: bool) {
        if self.mode == NavigationMode::Fly {
            self.fly.set_intent(intent, active);
        }
    }

    /// Reset the active navigator to its home pose.
    pub fn reset(&mut self, camera: &mut Camera) {
        match self.mode {
            NavigationMode::Orbit => self.orbit.reset(camera),
            NavigationMode::Fly => self.fly.reset(camera),
        }
    }
}
