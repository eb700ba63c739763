//! Headless walkthrough of the viewer core.
//!
//! Usage: `vantage [options.toml] [hotspots.json]`
//!
//! Drives a scripted session (orbit drag, zoom, fly forward, back to orbit)
//! and logs where every hotspot lands on screen. Run with `RUST_LOG=debug`
//! to see mode transitions and ignored input.

use std::path::Path;

use glam::Vec3;
use vantage::camera::ScreenPosition;
use vantage::hotspot::load_hotspots;
use vantage::input::{InputEvent, MouseButton};
use vantage::options::Options;
use vantage::scene::ModelBounds;
use vantage::{ViewerEngine, ViewerError};

const DEFAULT_HOTSPOTS: &str = include_str!("../assets/hotspots.json");
const FRAME: f32 = 1.0 / 60.0;

fn load_inputs() -> Result<(Options, String), ViewerError> {
    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };
    let hotspots = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_HOTSPOTS.to_owned(),
    };
    Ok((options, hotspots))
}

fn run_frames(engine: &mut ViewerEngine, frames: u32) {
    for _ in 0..frames {
        let _ = engine.frame(FRAME);
    }
}

fn key(engine: &mut ViewerEngine, code: &str, pressed: bool) {
    engine.handle_input(InputEvent::Key {
        code: code.to_owned(),
        pressed,
    });
}

fn drag(engine: &mut ViewerEngine, from: (f32, f32), to: (f32, f32)) {
    engine.handle_input(InputEvent::CursorMoved {
        x: from.0,
        y: from.1,
    });
    engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    engine.handle_input(InputEvent::CursorMoved { x: to.0, y: to.1 });
    engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    });
}

fn report(engine: &ViewerEngine, label: &str) {
    let p = engine.camera().position;
    log::info!(
        "[{label}] {} mode, camera at ({:.2}, {:.2}, {:.2})",
        engine.mode(),
        p.x,
        p.y,
        p.z
    );
    let screens = engine.project_hotspots();
    for hotspot in engine.hotspots().iter() {
        match screens.get(&hotspot.id) {
            Some(ScreenPosition::Visible { x, y }) => {
                log::info!("  {:<12} ({x:.1}, {y:.1})", hotspot.id);
            }
            Some(ScreenPosition::Hidden) => {
                log::info!("  {:<12} hidden", hotspot.id);
            }
            None => log::info!("  {:<12} no anchor", hotspot.id),
        }
    }
}

fn walkthrough(engine: &mut ViewerEngine) {
    engine.handle_input(InputEvent::Resized {
        width: 1280.0,
        height: 720.0,
    });
    let _ = engine.fit_model(&ModelBounds::new(
        Vec3::new(-10.0, 0.0, -8.0),
        Vec3::new(38.0, 24.0, 20.0),
    ));
    run_frames(engine, 1);
    report(engine, "orbit home");

    drag(engine, (640.0, 360.0), (860.0, 330.0));
    run_frames(engine, 120);
    report(engine, "orbit rotated");

    engine.handle_input(InputEvent::Scroll { delta: 4.0 });
    run_frames(engine, 120);
    report(engine, "zoomed in");

    key(engine, "Digit2", true);
    key(engine, "KeyW", true);
    run_frames(engine, 60);
    key(engine, "KeyW", false);
    report(engine, "fly forward");

    key(engine, "Digit1", true);
    run_frames(engine, 1);
    report(engine, "orbit again");

    for event in engine.take_events() {
        log::info!("event: {event:?}");
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let (options, hotspots_json) = match load_inputs() {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let hotspots = match load_hotspots(&hotspots_json) {
        Ok(hotspots) => hotspots,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut engine = ViewerEngine::new(options, hotspots);
    walkthrough(&mut engine);
}
