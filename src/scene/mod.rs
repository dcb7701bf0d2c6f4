//! Menu → Play → GameOver scene flow.

pub mod logic;
pub mod types;

pub use logic::{Game, SceneView};
pub use types::*;
