//! Model placement: bounds and the root transform that fits a loaded model
//! into the scene.
//!
//! The crate never loads meshes itself. The host measures the model and
//! passes either its bounds (to [`fit_model_root`]) or a finished transform
//! to [`ViewerEngine::on_model_loaded`](crate::ViewerEngine::on_model_loaded).

mod model;

pub use model::{fit_model_root, ModelBounds};
