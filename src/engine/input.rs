//! Input routing and command execution for ViewerEngine.

use super::{ViewerCommand, ViewerEngine, ViewerEvent};
use crate::camera::NavigationMode;
use crate::input::InputEvent;

impl ViewerEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// or DOM events as [`InputEvent`] variants; the engine's
    /// [`InputProcessor`](crate::input::InputProcessor) turns them into
    /// commands, which are executed immediately.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Scroll { delta: 1.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        let commands = self.input.handle_event(event, self.controller.mode());
        for command in commands {
            self.execute(command);
        }
    }

    /// Release the pointer without click detection (e.g. it left the
    /// canvas).
    pub fn release_mouse_state(&mut self) {
        if let Some(command) = self.input.release_mouse_state() {
            self.execute(command);
        }
    }

    /// Switch mode by name (`"orbit"` / `"fly"`). Unknown names are
    /// ignored.
    pub fn set_mode_by_name(&mut self, name: &str) {
        if let Some(mode) = NavigationMode::from_name(name) {
            self.execute(ViewerCommand::SetMode { mode });
        } else {
            log::debug!("ignoring unknown navigation mode {name:?}");
        }
    }

    /// Perform one command.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::SetMode { mode } => self.set_mode(mode),
            ViewerCommand::ResetCamera => {
                self.controller.reset(&mut self.camera);
            }
            ViewerCommand::Drag { delta, pan } => {
                self.controller
                    .drag(&mut self.camera, delta, pan, self.viewport);
            }
            ViewerCommand::Zoom { delta } => self.controller.zoom(delta),
            ViewerCommand::BeginDrag => self.controller.set_dragging(true),
            ViewerCommand::EndDrag => self.controller.set_dragging(false),
            ViewerCommand::SetIntent { intent, active } => {
                self.controller.set_intent(intent, active);
            }
            ViewerCommand::Pick { position } => {
                let radius = self.options.hotspots.pick_radius;
                let hit = self
                    .project_hotspots()
                    .hit_test(position, radius)
                    .map(str::to_owned);
                if let Some(id) = hit {
                    self.open_hotspot(&id);
                }
            }
            ViewerCommand::OpenHotspot { id } => self.open_hotspot(&id),
            ViewerCommand::CloseInfoPanel => {
                if self.info_panel.close() {
                    self.events.push(ViewerEvent::InfoPanelClosed);
                }
            }
            ViewerCommand::ToggleShadows => {
                let enabled = !self.options.display.shadows;
                self.options.display.shadows = enabled;
                log::debug!("shadows {}", if enabled { "on" } else { "off" });
                self.events.push(ViewerEvent::ShadowsToggled { enabled });
            }
            ViewerCommand::ToggleFullscreen => {
                self.events.push(ViewerEvent::FullscreenRequested);
            }
            ViewerCommand::Screenshot => {
                self.events.push(ViewerEvent::ScreenshotRequested);
            }
            ViewerCommand::Resize { width, height } => {
                self.resize(width, height);
            }
        }
    }

    /// Activate `mode`; any drag in progress ends with it.
    fn set_mode(&mut self, mode: NavigationMode) {
        let Some(change) = self.controller.activate(mode, &mut self.camera)
        else {
            return;
        };
        let _ = self.input.release_mouse_state();
        self.events.push(ViewerEvent::ModeChanged(change));
    }

    fn open_hotspot(&mut self, id: &str) {
        let Some(hotspot) = self.hotspots.get(id) else {
            log::debug!("ignoring unknown hotspot {id:?}");
            return;
        };
        if self.info_panel.open(hotspot) {
            self.events.push(ViewerEvent::InfoPanelOpened {
                id: hotspot.id.clone(),
                payload: hotspot.payload.clone(),
            });
        }
    }
}
