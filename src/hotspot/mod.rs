//! Static points of interest on the model and their per-frame screen
//! positions.
//!
//! Hotspots are registered once at start-up. Each frame the
//! [`HotspotRegistry`] re-projects every anchor through the current camera
//! into a [`HotspotScreens`] map that the host uses to place its DOM
//! markers. Clicking a marker opens the [`InfoPanel`].

/// Info-panel state.
pub mod panel;
/// Hotspot definitions, registration and projection.
pub mod registry;

pub use panel::InfoPanel;
pub use registry::{
    load_hotspots, Annotation, Hotspot, HotspotPayload, HotspotRegistry,
    HotspotScreens,
};
