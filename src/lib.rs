// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera navigation and hotspot projection core for an interactive
//! architectural model viewer.
//!
//! Vantage owns the single perspective camera of a browser 3D viewer and
//! decides how user input moves it. It renders nothing itself: the host
//! page draws the model with the camera the core hands back and places
//! hotspot markers at the screen positions it computes each frame.
//!
//! # Key entry points
//!
//! - [`ViewerEngine`] - owns the camera, both navigators and the hotspots
//! - [`camera`] - projection, orbit and fly navigators, mode controller
//! - [`hotspot`] - hotspot definitions, per-frame projection, info panel
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Each frame the [`camera::ModeController`] ticks whichever navigator is
//! active (damped orbit around a pivot, or free-look fly-through). The
//! camera is an owned value passed by `&mut` into that navigator only. The
//! [`hotspot::HotspotRegistry`] then re-projects every anchor through the
//! updated camera. Raw input flows through [`input::InputProcessor`] into
//! [`ViewerCommand`]s; things the page must act on come back as
//! [`ViewerEvent`]s.
//!
//! The `web` feature adds `wasm-bindgen` bindings in `web`.

pub mod camera;
pub mod engine;
pub mod error;
pub mod hotspot;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{FrameOutput, ViewerCommand, ViewerEngine, ViewerEvent};
pub use error::ViewerError;
