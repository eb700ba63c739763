use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit navigation bounds, damping and home pose.
pub struct OrbitOptions {
    /// Smooth rotation/zoom/pan instead of applying input at once.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Share of the pending change applied per 60 Hz frame.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Closest the camera may get to the pivot.
    #[schemars(title = "Min Distance", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub min_distance: f32,
    /// Farthest the camera may get from the pivot.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Largest angle from straight overhead, in radians.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Pivot restored by a camera reset.
    #[schemars(skip)]
    pub home_target: [f32; 3],
    /// Camera position restored by a camera reset.
    #[schemars(skip)]
    pub home_position: [f32; 3],
    /// How far ahead of the camera the pivot is placed when leaving fly
    /// mode.
    #[schemars(skip)]
    pub handoff_distance: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 2.0,
            max_distance: 80.0,
            max_polar_angle: PI * 0.49,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            home_target: [0.0, 2.5, 0.0],
            home_position: [12.0, 6.0, 12.0],
            handoff_distance: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fly", inline)]
#[serde(default)]
/// Fly navigation speeds, floor and home pose.
pub struct FlyOptions {
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 1.0, max = 60.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Look sensitivity in radians per pixel.
    #[schemars(title = "Look Speed", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub look_speed: f32,
    /// Lowest camera height; keeps the camera above the ground plane.
    #[schemars(title = "Floor Height", range(min = -10.0, max = 10.0), extend("step" = 0.1))]
    pub min_height: f32,
    /// Camera position restored by a camera reset.
    #[schemars(skip)]
    pub home_position: [f32; 3],
}

impl Default for FlyOptions {
    fn default() -> Self {
        Self {
            speed: 15.0,
            look_speed: 0.003,
            min_height: 0.5,
            home_position: [0.0, 2.0, 10.0],
        }
    }
}
