pub mod color;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod options;
pub mod resolver;
pub mod scene;
pub mod state;

pub use color::*;
pub use constants::*;
pub use error::*;
pub use mesh::*;
pub use options::*;
pub use resolver::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
