use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hotspots", inline)]
#[serde(default)]
/// Hotspot interaction parameters.
pub struct HotspotOptions {
    /// Click tolerance around a hotspot marker, in pixels.
    #[schemars(title = "Pick Radius", range(min = 4.0, max = 64.0), extend("step" = 1.0))]
    pub pick_radius: f32,
    /// Pointer travel (pixels) after which a press counts as a drag rather
    /// than a click.
    #[schemars(skip)]
    pub drag_threshold: f32,
}

impl Default for HotspotOptions {
    fn default() -> Self {
        Self {
            pick_radius: 16.0,
            drag_threshold: 4.0,
        }
    }
}
