//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::ViewerEngine::execute) method.

use super::event::{InputEvent, MouseButton};
use super::mouse::{PointerState, ReleaseResult};
use crate::camera::NavigationMode;
use crate::engine::ViewerCommand;
use crate::options::{HotspotOptions, KeybindingOptions};

/// Converts raw input events into [`ViewerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event, engine.mode()) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Pointer tracking and click/drag classification.
    pointer: PointerState,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Pointer travel (px) beyond which a press is a drag.
    drag_threshold: f32,
    /// Key string → action/intent mapping.
    key_bindings: KeybindingOptions,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default(), &HotspotOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(
        key_bindings: KeybindingOptions,
        hotspots: &HotspotOptions,
    ) -> Self {
        Self {
            pointer: PointerState::default(),
            shift_pressed: false,
            drag_threshold: hotspots.drag_threshold,
            key_bindings,
        }
    }

    /// Whether any mouse button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.pointer.pressed().is_some()
    }

    /// Replace key bindings and drag threshold after an options change.
    pub fn reconfigure(
        &mut self,
        key_bindings: KeybindingOptions,
        hotspots: &HotspotOptions,
    ) {
        self.key_bindings = key_bindings;
        self.drag_threshold = hotspots.drag_threshold;
    }

    /// Release the mouse button without click detection (e.g. the pointer
    /// left the canvas).
    pub fn release_mouse_state(&mut self) -> Option<ViewerCommand> {
        if self.pointer.pressed().is_none() {
            return None;
        }
        self.pointer.cancel();
        Some(ViewerCommand::EndDrag)
    }

    /// Process a raw input event and return the resulting commands.
    ///
    /// `mode` is the engine's active navigation mode; it decides whether
    /// movement keys win over action keys bound to the same code.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        mode: NavigationMode,
    ) -> Vec<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(x, y).into_iter().collect()
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                vec![ViewerCommand::Zoom { delta }]
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                Vec::new()
            }
            InputEvent::Key { code, pressed } => {
                self.handle_key(&code, pressed, mode).into_iter().collect()
            }
            InputEvent::Resized { width, height } => {
                vec![ViewerCommand::Resize { width, height }]
            }
        }
    }

    /// Cursor moved: compute delta, produce a drag while a button is held.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewerCommand> {
        let delta = self.pointer.handle_move(x, y);
        let button = self.pointer.pressed()?;
        if delta.length_squared() == 0.0 {
            return None;
        }
        let pan = button == MouseButton::Right || self.shift_pressed;
        Some(ViewerCommand::Drag { delta, pan })
    }

    /// Mouse button press/release: start/stop drags, clicks pick hotspots.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Vec<ViewerCommand> {
        if button == MouseButton::Middle {
            return Vec::new();
        }

        // Only the left button drives fly look and picking; the right
        // button is tracked for panning alone.
        let left = button == MouseButton::Left;
        if pressed {
            return if self.pointer.press(button) && left {
                vec![ViewerCommand::BeginDrag]
            } else {
                Vec::new()
            };
        }

        match self.pointer.release(button, self.drag_threshold) {
            ReleaseResult::NoAction => Vec::new(),
            _ if !left => Vec::new(),
            ReleaseResult::Drag => vec![ViewerCommand::EndDrag],
            ReleaseResult::Click { position } => {
                vec![ViewerCommand::EndDrag, ViewerCommand::Pick { position }]
            }
        }
    }

    /// Key press/release. In fly mode movement bindings take precedence;
    /// actions fire on press only.
    fn handle_key(
        &self,
        code: &str,
        pressed: bool,
        mode: NavigationMode,
    ) -> Option<ViewerCommand> {
        let movement = self.key_bindings.lookup_movement(code);
        if let Some(intent) = movement {
            if mode == NavigationMode::Fly || !pressed {
                return Some(ViewerCommand::SetIntent {
                    intent,
                    active: pressed,
                });
            }
        }
        if !pressed {
            return None;
        }
        self.key_bindings.lookup(code).map(super::KeyAction::command)
    }
}
