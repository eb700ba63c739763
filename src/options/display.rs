use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles and scene presentation.
pub struct DisplayOptions {
    /// Whether shadows are rendered.
    #[schemars(title = "Shadows")]
    pub shadows: bool,
    /// Clear color (linear RGB).
    #[schemars(skip)]
    pub background: [f32; 3],
    /// Upper bound on the device pixel ratio used for the drawing buffer.
    #[schemars(title = "Max Pixel Ratio", range(min = 0.5, max = 3.0), extend("step" = 0.25))]
    pub max_pixel_ratio: f32,
    /// Largest extent of the model after fitting, in world units.
    #[schemars(skip)]
    pub model_size: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            shadows: true,
            background: [0.875, 0.910, 0.949],
            max_pixel_ratio: 1.5,
            model_size: 12.0,
        }
    }
}

impl DisplayOptions {
    /// Pixel ratio to render at for a device reporting `device_ratio`.
    pub fn pixel_ratio(&self, device_ratio: f32) -> f32 {
        let device_ratio = if device_ratio.is_finite() && device_ratio > 0.0 {
            device_ratio
        } else {
            1.0
        };
        device_ratio.min(self.max_pixel_ratio)
    }
}
