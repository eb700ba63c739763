//! The viewer engine: the single owner of camera, navigators, hotspots
//! and input state.
//!
//! Split across files by concern: this file holds construction, the frame
//! step and accessors; `input` routes events and executes
//! [`ViewerCommand`]s; `options` applies runtime configuration.

mod command;
mod input;
mod options;

pub use command::{ViewerCommand, ViewerEvent};
use glam::Mat4;
use serde::Serialize;

use crate::camera::{
    Camera, CameraSnapshot, ModeController, NavigationMode, Viewport,
};
use crate::hotspot::{
    Annotation, Hotspot, HotspotRegistry, HotspotScreens, InfoPanel,
};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{fit_model_root, ModelBounds};

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Camera pose and matrices for the renderer.
    pub camera: CameraSnapshot,
    /// Marker positions keyed by hotspot id.
    pub hotspots: HotspotScreens,
}

/// The viewer core: one camera, two navigators, the hotspot set.
///
/// The engine renders nothing. The host owns the canvas and 3D scene; it
/// feeds the engine input and elapsed time and reads back a
/// [`FrameOutput`] plus any queued [`ViewerEvent`]s.
///
/// # Frame loop
///
/// Each animation frame, call [`frame`](Self::frame) with the seconds since
/// the previous one, apply the returned camera to the renderer, and move
/// the hotspot markers. Then drain [`take_events`](Self::take_events).
///
/// # Input
///
/// Forward raw events with [`handle_input`](Self::handle_input), or issue
/// [`ViewerCommand`]s directly with [`execute`](Self::execute) (for DOM
/// buttons such as the mode switch).
///
/// # Model
///
/// Once the model has loaded, pass its root transform to
/// [`on_model_loaded`](Self::on_model_loaded) so hotspot anchors follow it.
#[derive(Debug)]
pub struct ViewerEngine {
    /// The one camera; only the active navigator writes to it.
    camera: Camera,
    /// Drawing surface size.
    viewport: Viewport,
    /// Orbit/Fly state machine.
    controller: ModeController,
    /// Registered hotspots.
    hotspots: HotspotRegistry,
    /// Transform of the model root, identity until a model loads.
    model_root: Option<Mat4>,
    /// Raw event → command translation.
    input: InputProcessor,
    /// Open hotspot panel.
    info_panel: InfoPanel,
    /// Runtime options.
    options: Options,
    /// Currently applied options preset name, if any.
    active_preset: Option<String>,
    /// Events waiting for the host.
    events: Vec<ViewerEvent>,
}

impl ViewerEngine {
    /// Create an engine in orbit mode at the orbit home pose, with the
    /// given hotspots registered.
    pub fn new(options: Options, hotspots: Vec<Hotspot>) -> Self {
        let viewport = Viewport::default();
        let mut camera = Camera::from_options(&options.camera, viewport.aspect());
        let mut controller =
            ModeController::new(options.orbit.clone(), options.fly.clone());
        controller.reset(&mut camera);

        let mut registry = HotspotRegistry::new();
        let _ = registry.register_all(hotspots);

        log::info!("viewer ready in {} mode", controller.mode());
        Self {
            camera,
            viewport,
            controller,
            hotspots: registry,
            model_root: None,
            input: InputProcessor::new(
                options.keybindings.clone(),
                &options.hotspots,
            ),
            info_panel: InfoPanel::default(),
            options,
            active_preset: None,
            events: Vec::new(),
        }
    }

    /// Advance the active navigator by `elapsed` seconds and project every
    /// hotspot through the updated camera.
    pub fn frame(&mut self, elapsed: f32) -> FrameOutput {
        self.controller.tick(&mut self.camera, elapsed);
        FrameOutput {
            camera: self.camera.snapshot(),
            hotspots: self.project_hotspots(),
        }
    }

    /// Hotspot screen positions for the current camera.
    pub fn project_hotspots(&self) -> HotspotScreens {
        self.hotspots.project_all(
            &self.camera,
            self.model_root.as_ref(),
            self.viewport,
        )
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Store the model-root transform. In orbit mode the camera returns to
    /// the orbit home pose, framing the freshly placed model.
    pub fn on_model_loaded(&mut self, model_root: Mat4) {
        if !model_root.is_finite() {
            log::warn!("ignoring non-finite model root transform");
            return;
        }
        self.model_root = Some(model_root);
        if self.controller.mode() == NavigationMode::Orbit {
            self.controller.reset(&mut self.camera);
        }
        log::info!("model root set");
    }

    /// Fit a model with the given bounds to the configured size and use
    /// the result as the model root. Returns the transform.
    pub fn fit_model(&mut self, bounds: &ModelBounds) -> Mat4 {
        let root = fit_model_root(bounds, self.options.display.model_size);
        self.on_model_loaded(root);
        root
    }

    /// Update the drawing surface size. Only the aspect ratio and pixel
    /// mapping change.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Active navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.controller.mode()
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The drawing surface size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The mode controller and both navigators.
    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    /// The registered hotspots.
    pub fn hotspots(&self) -> &HotspotRegistry {
        &self.hotspots
    }

    /// `(id, title)` rows for the annotations list.
    pub fn annotations(&self) -> Vec<Annotation<'_>> {
        self.hotspots.annotations()
    }

    /// The model-root transform, if a model has loaded.
    pub fn model_root(&self) -> Option<&Mat4> {
        self.model_root.as_ref()
    }

    /// The info panel.
    pub fn info_panel(&self) -> &InfoPanel {
        &self.info_panel
    }

    /// Whether shadow rendering is on.
    pub fn shadows_enabled(&self) -> bool {
        self.options.display.shadows
    }

    /// The input processor.
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::camera::{ModeChange, MoveIntent, ScreenPosition};
    use crate::hotspot::HotspotPayload;
    use crate::input::{InputEvent, MouseButton};

    const FRAME: f32 = 1.0 / 60.0;

    fn hotspot(id: &str, anchor: Option<Vec3>) -> Hotspot {
        Hotspot::new(
            id,
            anchor,
            HotspotPayload {
                title: id.to_owned(),
                text: String::new(),
                image: None,
            },
        )
    }

    fn engine() -> ViewerEngine {
        ViewerEngine::new(
            Options::default(),
            vec![
                hotspot("church", Some(Vec3::new(0.0, 3.0, 13.0))),
                hotspot("pivot", Some(Vec3::new(0.0, 2.5, 0.0))),
                hotspot("floating", None),
            ],
        )
    }

    #[test]
    fn starts_at_orbit_home() {
        let engine = engine();
        assert_eq!(engine.mode(), NavigationMode::Orbit);
        let pos = engine.camera().position;
        assert!((pos - Vec3::new(12.0, 6.0, 12.0)).length() < 1e-4);
    }

    #[test]
    fn frame_projects_anchored_hotspots() {
        let mut engine = engine();
        engine.resize(800.0, 600.0);
        let out = engine.frame(FRAME);
        assert_eq!(out.hotspots.len(), 2);
        assert!(out.hotspots.get("floating").is_none());
        // The orbit pivot sits on the optical axis.
        let p = out.hotspots.get("pivot").unwrap().point().unwrap();
        assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-2);
    }

    #[test]
    fn mode_change_is_reported_once() {
        let mut engine = engine();
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        assert_eq!(
            engine.take_events(),
            vec![ViewerEvent::ModeChanged(ModeChange {
                from: NavigationMode::Orbit,
                to: NavigationMode::Fly,
            })]
        );
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn fly_keys_move_camera() {
        let mut engine = engine();
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        let start = engine.camera().position;
        engine.handle_input(InputEvent::Key {
            code: "KeyW".to_owned(),
            pressed: true,
        });
        let _ = engine.frame(0.5);
        let moved = engine.camera().position - start;
        assert!((moved.length() - 7.5).abs() < 1e-3);
        assert!(moved.dot(engine.camera().forward()) > 0.0);

        engine.handle_input(InputEvent::Key {
            code: "KeyW".to_owned(),
            pressed: false,
        });
        let stopped = engine.camera().position;
        let _ = engine.frame(0.5);
        assert_eq!(engine.camera().position, stopped);
    }

    #[test]
    fn mode_switch_mid_drag_ends_the_drag() {
        let mut engine = engine();
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        engine.handle_input(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Orbit,
        });
        let _ = engine.frame(FRAME);
        let settled = engine.controller().orbit().offset();

        engine.handle_input(InputEvent::CursorMoved { x: 300.0, y: 180.0 });
        let _ = engine.frame(FRAME);
        assert_eq!(engine.controller().orbit().offset(), settled);
        assert!(!engine.input().mouse_pressed());
    }

    #[test]
    fn click_on_hotspot_opens_panel() {
        let mut engine = engine();
        engine.resize(800.0, 600.0);
        let _ = engine.frame(FRAME);
        engine.handle_input(InputEvent::CursorMoved { x: 402.0, y: 299.0 });
        engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert_eq!(
            engine.info_panel().current().map(|h| h.id.as_str()),
            Some("pivot")
        );
        let events = engine.take_events();
        assert!(matches!(
            events.as_slice(),
            [ViewerEvent::InfoPanelOpened { id, .. }] if id == "pivot"
        ));

        engine.handle_input(InputEvent::Key {
            code: "Escape".to_owned(),
            pressed: true,
        });
        assert!(!engine.info_panel().is_open());
        assert_eq!(engine.take_events(), vec![ViewerEvent::InfoPanelClosed]);
    }

    #[test]
    fn unknown_hotspot_is_ignored() {
        let mut engine = engine();
        engine.execute(ViewerCommand::OpenHotspot {
            id: "missing".to_owned(),
        });
        assert!(!engine.info_panel().is_open());
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn model_root_moves_anchors_and_rehomes_orbit() {
        let mut engine = engine();
        engine.execute(ViewerCommand::Zoom { delta: 5.0 });
        for _ in 0..60 {
            let _ = engine.frame(FRAME);
        }
        assert!(engine.controller().orbit().distance() < 15.0);

        let root = Mat4::from_translation(Vec3::new(0.0, 0.0, -13.0));
        engine.on_model_loaded(root);
        let home = Vec3::new(12.0, 6.0, 12.0);
        assert!((engine.camera().position - home).length() < 1e-4);

        let direct = engine.hotspots().project_all(
            engine.camera(),
            Some(&root),
            engine.viewport(),
        );
        assert_eq!(engine.project_hotspots(), direct);
        let church = engine.project_hotspots().get("church").unwrap();
        let shifted = engine.hotspots().project_all(
            engine.camera(),
            None,
            engine.viewport(),
        );
        assert_ne!(Some(church), shifted.get("church"));
    }

    #[test]
    fn model_load_in_fly_mode_keeps_camera() {
        let mut engine = engine();
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        engine.execute(ViewerCommand::SetIntent {
            intent: MoveIntent::Up,
            active: true,
        });
        let _ = engine.frame(1.0);
        let before = engine.camera().clone();
        engine.on_model_loaded(Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(engine.camera(), &before);
    }

    #[test]
    fn resize_only_changes_aspect() {
        let mut engine = engine();
        let before = engine.camera().clone();
        engine.resize(1600.0, 900.0);
        engine.resize(1600.0, 900.0);
        assert_eq!(engine.camera().position, before.position);
        assert_eq!(engine.camera().orientation, before.orientation);
        assert_eq!(engine.camera().aspect, 16.0 / 9.0);
    }

    #[test]
    fn hidden_hotspot_reported_hidden() {
        let mut engine = engine();
        let _ = engine.frame(FRAME);
        engine.execute(ViewerCommand::SetMode {
            mode: NavigationMode::Fly,
        });
        engine.execute(ViewerCommand::ResetCamera);
        // Fly home faces -Z from z = 10; the church at z = 13 is behind.
        let out = engine.frame(FRAME);
        assert_eq!(out.hotspots.get("church"), Some(ScreenPosition::Hidden));
    }
}
