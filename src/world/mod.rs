//! World generation and management modules
//! Contains terrain generation, chunk streaming, block targeting and collision.

pub mod collision;
pub mod generator;
pub mod height_field;
pub mod raycast;
pub mod streaming;
pub mod structures;
pub mod terrain;

// Re-export commonly used types
pub use generator::ChunkGenerator;
pub use height_field::HeightField;
pub use raycast::{Ray, RayHit, Target};
pub use streaming::{StreamingController, StreamingPlan};
pub use terrain::{ChunkEvent, PlaceError, World};
