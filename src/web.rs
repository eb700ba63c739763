//! Browser bindings: a [`WebViewer`] handle the page drives from its
//! `requestAnimationFrame` loop and DOM event listeners.
//!
//! Results cross the boundary as plain JS objects built from the same serde
//! representations the native API uses.

use glam::{Mat4, Vec3};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::engine::{ViewerCommand, ViewerEngine};
use crate::hotspot::load_hotspots;
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::scene::ModelBounds;
use crate::util::frame_timing::FrameClock;

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json)
        .map_err(|_| JsError::new("failed to convert result to a JS value"))
}

/// The viewer core as seen from JavaScript.
#[wasm_bindgen]
pub struct WebViewer {
    engine: ViewerEngine,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebViewer {
    /// Create a viewer from an optional TOML options string and a JSON array
    /// of hotspots.
    #[wasm_bindgen(constructor)]
    pub fn new(
        options_toml: Option<String>,
        hotspots_json: &str,
    ) -> Result<WebViewer, JsError> {
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text)?,
            None => Options::default(),
        };
        let hotspots = load_hotspots(hotspots_json)?;
        Ok(Self {
            engine: ViewerEngine::new(options, hotspots),
            clock: FrameClock::new(),
        })
    }

    /// Advance one animation frame. Returns `{ camera, hotspots }`.
    pub fn frame(&mut self) -> Result<JsValue, JsError> {
        let elapsed = self.clock.tick();
        to_js(&self.engine.frame(elapsed))
    }

    /// Drain pending events as an array of `{ type, ... }` objects.
    #[wasm_bindgen(js_name = takeEvents)]
    pub fn take_events(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.engine.take_events())
    }

    /// `[{ id, title }]` rows for the annotations list.
    pub fn annotations(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.annotations())
    }

    /// JSON Schema of the options, for a settings panel.
    #[wasm_bindgen(js_name = optionsSchema)]
    pub fn options_schema() -> Result<JsValue, JsError> {
        to_js(&Options::json_schema())
    }

    /// Current options (lighting rig, display toggles, navigation limits).
    pub fn options(&self) -> Result<JsValue, JsError> {
        to_js(self.engine.options())
    }

    /// Drawing-buffer pixel ratio for a device reporting `device_ratio`.
    #[wasm_bindgen(js_name = pixelRatio)]
    pub fn pixel_ratio(&self, device_ratio: f32) -> f32 {
        self.engine.options().display.pixel_ratio(device_ratio)
    }

    /// Whether shadows are on.
    #[wasm_bindgen(js_name = shadowsEnabled)]
    pub fn shadows_enabled(&self) -> bool {
        self.engine.shadows_enabled()
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Active mode name (`"orbit"` or `"fly"`).
    pub fn mode(&self) -> String {
        self.engine.mode().name().to_owned()
    }

    /// Switch mode by name. Unknown names are ignored.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, name: &str) {
        self.engine.set_mode_by_name(name);
    }

    /// Canvas size in CSS pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.handle_input(InputEvent::Resized { width, height });
    }

    /// `pointerdown` / `mousedown` on the canvas.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, event: &web_sys::MouseEvent) {
        self.pointer_moved(event);
        self.engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::from_dom_index(event.button()),
            pressed: true,
        });
    }

    /// `pointermove` / `mousemove` on the canvas.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, event: &web_sys::MouseEvent) {
        self.pointer_moved(event);
    }

    /// `pointerup` / `mouseup` on the canvas.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, event: &web_sys::MouseEvent) {
        self.pointer_moved(event);
        self.engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::from_dom_index(event.button()),
            pressed: false,
        });
    }

    /// `pointerleave` on the canvas: end any drag without a click.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.engine.release_mouse_state();
    }

    /// `wheel` on the canvas. One event is one zoom step.
    pub fn wheel(&mut self, event: &web_sys::WheelEvent) {
        let delta_y = event.delta_y();
        if delta_y == 0.0 {
            return;
        }
        self.engine.handle_input(InputEvent::Scroll {
            delta: if delta_y < 0.0 { 1.0 } else { -1.0 },
        });
    }

    /// `keydown` on the window.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, event: &web_sys::KeyboardEvent) {
        self.key(event, true);
    }

    /// `keyup` on the window.
    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, event: &web_sys::KeyboardEvent) {
        self.key(event, false);
    }

    /// Open a hotspot's panel (annotation list click).
    #[wasm_bindgen(js_name = openHotspot)]
    pub fn open_hotspot(&mut self, id: &str) {
        self.engine.execute(ViewerCommand::OpenHotspot {
            id: id.to_owned(),
        });
    }

    /// Close the info panel (close button).
    #[wasm_bindgen(js_name = closeInfoPanel)]
    pub fn close_info_panel(&mut self) {
        self.engine.execute(ViewerCommand::CloseInfoPanel);
    }

    /// Reset the active navigator (reset button).
    #[wasm_bindgen(js_name = resetCamera)]
    pub fn reset_camera(&mut self) {
        self.engine.execute(ViewerCommand::ResetCamera);
    }

    /// Set the model-root transform from a column-major 16-element array.
    #[wasm_bindgen(js_name = setModelRoot)]
    pub fn set_model_root(&mut self, matrix: &[f32]) -> Result<(), JsError> {
        let cols: &[f32; 16] = matrix
            .try_into()
            .map_err(|_| JsError::new("model root must have 16 elements"))?;
        self.engine.on_model_loaded(Mat4::from_cols_array(cols));
        Ok(())
    }

    /// Fit the model with the given bounds and return the root transform
    /// (column-major) for the renderer.
    #[wasm_bindgen(js_name = fitModel)]
    pub fn fit_model(
        &mut self,
        min: &[f32],
        max: &[f32],
    ) -> Result<Vec<f32>, JsError> {
        let (Some(min), Some(max)) = (vec3_from(min), vec3_from(max)) else {
            return Err(JsError::new("bounds must have 3 elements each"));
        };
        let root = self.engine.fit_model(&ModelBounds::new(min, max));
        Ok(root.to_cols_array().to_vec())
    }
}

impl WebViewer {
    fn pointer_moved(&mut self, event: &web_sys::MouseEvent) {
        self.engine.handle_input(InputEvent::ModifiersChanged {
            shift: event.shift_key(),
        });
        self.engine.handle_input(InputEvent::CursorMoved {
            x: event.offset_x() as f32,
            y: event.offset_y() as f32,
        });
    }

    fn key(&mut self, event: &web_sys::KeyboardEvent, pressed: bool) {
        self.engine.handle_input(InputEvent::ModifiersChanged {
            shift: event.shift_key(),
        });
        self.engine.handle_input(InputEvent::Key {
            code: event.code(),
            pressed,
        });
    }
}

fn vec3_from(values: &[f32]) -> Option<Vec3> {
    <[f32; 3]>::try_from(values).ok().map(Vec3::from_array)
}
