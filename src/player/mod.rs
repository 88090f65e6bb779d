//! Player-related modules
//! Contains camera, input handling, and physics.

pub mod camera;
pub mod input;
pub mod physics;
#[allow(clippy::module_inception)]
pub mod player;

// Re-export commonly used types
pub use camera::Camera;
pub use input::InputState;
pub use physics::Body;
pub use player::Player;
