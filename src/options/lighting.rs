use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Directional Light", inline)]
#[serde(default)]
/// A single directional light of the rig.
pub struct DirectionalLight {
    /// Light intensity.
    #[schemars(title = "Intensity", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Linear RGB color.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// World-space position the light shines from, toward the origin.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Whether this light casts shadows.
    #[schemars(skip)]
    pub cast_shadow: bool,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            color: [1.0, 1.0, 1.0],
            position: [0.0, 10.0, 0.0],
            cast_shadow: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Three-point lighting rig plus hemisphere fill, consumed by the renderer.
pub struct LightingOptions {
    /// Hemisphere (sky/ground) light intensity.
    #[schemars(title = "Hemisphere", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub hemisphere_intensity: f32,
    /// Hemisphere sky color.
    #[schemars(skip)]
    pub sky_color: [f32; 3],
    /// Hemisphere ground color.
    #[schemars(skip)]
    pub ground_color: [f32; 3],
    /// Main shadow-casting light.
    #[schemars(title = "Key Light")]
    pub key: DirectionalLight,
    /// Soft light opposite the key.
    #[schemars(title = "Fill Light")]
    pub fill: DirectionalLight,
    /// Back light separating the model from the background.
    #[schemars(title = "Rim Light")]
    pub rim: DirectionalLight,
    /// Tone-mapping exposure.
    #[schemars(title = "Exposure", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub exposure: f32,
    /// Shadow map resolution in texels per side.
    #[schemars(skip)]
    pub shadow_map_size: u32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            hemisphere_intensity: 0.4,
            sky_color: [1.0, 1.0, 1.0],
            ground_color: [0.682, 0.769, 0.847],
            key: DirectionalLight {
                intensity: 1.8,
                color: [1.0, 1.0, 1.0],
                position: [14.0, 24.0, 10.0],
                cast_shadow: true,
            },
            fill: DirectionalLight {
                intensity: 0.3,
                color: [1.0, 0.984, 0.941],
                position: [-18.0, 14.0, -12.0],
                cast_shadow: false,
            },
            rim: DirectionalLight {
                intensity: 0.25,
                color: [0.816, 0.894, 1.0],
                position: [-6.0, 18.0, 20.0],
                cast_shadow: false,
            },
            exposure: 1.0,
            shadow_map_size: 2048,
        }
    }
}
