// Core module with fundamental types
pub mod core;

// Game module with inventory, crafting, enemies and the session
pub mod game;

// Player module with camera, input and physics
pub mod player;

// Render module with chunk meshing
pub mod render;

// Settings and their storage
pub mod utils;

// World module with generation, streaming and queries
pub mod world;

// Other modules
pub mod constants;

// Re-exports
pub use constants::*;
pub use crate::core::{AABB, BlockType, Chunk, ChunkPos, LocalPos, Vertex, split_block_pos};
pub use game::{ActionError, FrameReport, Game, GameEvent, Inventory, SkyState};
pub use player::{Body, Camera, InputState, Player};
pub use render::{ChunkMesh, MeshBatch, build_chunk_mesh};
pub use utils::{GameSettings, WorldSettings};
pub use world::{ChunkEvent, ChunkGenerator, PlaceError, Ray, Target, World};
