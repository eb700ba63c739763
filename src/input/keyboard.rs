use serde::{Deserialize, Serialize};

use crate::camera::NavigationMode;
use crate::engine::ViewerCommand;

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// fly_mode = "Digit2"
/// reset_camera = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch to orbit navigation.
    OrbitMode,
    /// Switch to fly navigation.
    FlyMode,
    /// Reset the active navigator to its home pose.
    ResetCamera,
    /// Ask the host to enter or leave fullscreen.
    ToggleFullscreen,
    /// Turn shadow rendering on or off.
    ToggleShadows,
    /// Ask the host to capture the canvas.
    Screenshot,
    /// Close the hotspot info panel.
    CloseInfoPanel,
}

impl KeyAction {
    /// The command this action triggers.
    pub fn command(self) -> ViewerCommand {
        match self {
            Self::OrbitMode => ViewerCommand::SetMode {
                mode: NavigationMode::Orbit,
            },
            Self::FlyMode => ViewerCommand::SetMode {
                mode: NavigationMode::Fly,
            },
            Self::ResetCamera => ViewerCommand::ResetCamera,
            Self::ToggleFullscreen => ViewerCommand::ToggleFullscreen,
            Self::ToggleShadows => ViewerCommand::ToggleShadows,
            Self::Screenshot => ViewerCommand::Screenshot,
            Self::CloseInfoPanel => ViewerCommand::CloseInfoPanel,
        }
    }
}
