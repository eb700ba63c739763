//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! gesture, DOM button or programmatic call, is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).
//!
//! Things the host page has to act on (fullscreen, screenshots, panel
//! visibility) come back out as [`ViewerEvent`]s.

use glam::Vec2;
use serde::Serialize;

use crate::camera::{ModeChange, MoveIntent, NavigationMode};
use crate::hotspot::HotspotPayload;

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(ViewerCommand::SetMode { mode: NavigationMode::Fly });
/// engine.execute(ViewerCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    // ── Navigation ──────────────────────────────────────────────────
    /// Activate a navigation mode. Activating the active mode does nothing.
    SetMode {
        /// Mode to activate.
        mode: NavigationMode,
    },

    /// Put the active navigator back at its home pose.
    ResetCamera,

    /// A pointer drag of `delta` pixels.
    Drag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
        /// Pan instead of rotate (orbit only).
        pan: bool,
    },

    /// Zoom (positive = zoom in, negative = zoom out). Orbit only.
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// A pointer went down over the viewport.
    BeginDrag,

    /// The pointer was released or left the viewport.
    EndDrag,

    /// A fly movement key changed state.
    SetIntent {
        /// Which direction.
        intent: MoveIntent,
        /// Held or released.
        active: bool,
    },

    // ── Hotspots ────────────────────────────────────────────────────
    /// Open whichever hotspot marker lies under a click.
    Pick {
        /// Click position in viewport pixels.
        position: Vec2,
    },

    /// Open the info panel for a hotspot by id.
    OpenHotspot {
        /// Hotspot id.
        id: String,
    },

    /// Close the info panel.
    CloseInfoPanel,

    // ── Display ─────────────────────────────────────────────────────
    /// Turn shadows on or off.
    ToggleShadows,

    /// Ask the host to toggle fullscreen.
    ToggleFullscreen,

    /// Ask the host to capture the canvas.
    Screenshot,

    /// The drawing surface changed size.
    Resize {
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
    },
}

// ── Events ───────────────────────────────────────────────────────────────

/// Something the host page should react to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewerEvent {
    /// The navigation mode changed; update the mode buttons.
    ModeChanged(ModeChange),
    /// The info panel opened with this content.
    InfoPanelOpened {
        /// Hotspot id.
        id: String,
        /// Content to show.
        payload: HotspotPayload,
    },
    /// The info panel closed.
    InfoPanelClosed,
    /// Shadow rendering changed.
    ShadowsToggled {
        /// New state.
        enabled: bool,
    },
    /// The user asked for fullscreen to be toggled.
    FullscreenRequested,
    /// The user asked for a screenshot.
    ScreenshotRequested,
}
