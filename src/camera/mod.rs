//! Camera system for viewing the architectural model.
//!
//! One [`Camera`] is driven by whichever navigator the [`ModeController`]
//! has active: a damped [`OrbitNavigator`] around a pivot, or a free-look
//! [`FlyNavigator`]. The [`projector`] maps world points to screen pixels
//! for UI anchors.

/// Core camera struct and renderer snapshot.
pub mod core;
/// Orbit/Fly navigation state machine.
pub mod controller;
/// Free-look fly navigation.
pub mod fly;
/// Damped orbit navigation around a pivot.
pub mod orbit;
/// World-to-screen projection.
pub mod projector;
/// Viewport dimensions.
pub mod viewport;

pub use controller::{ModeChange, ModeController, NavigationMode};
pub use self::core::{Camera, CameraSnapshot};
pub use fly::{FlyNavigator, MoveIntent, MoveIntents};
pub use orbit::{OrbitNavigator, Spherical};
pub use projector::{project, ScreenPosition};
pub use viewport::Viewport;
