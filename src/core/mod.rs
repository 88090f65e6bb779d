//! Core data structures for the voxel world
//! Contains blocks, chunks, bounding boxes and vertices.

pub mod aabb;
pub mod block;
pub mod chunk;
pub mod vertex;

// Re-export commonly used types
pub use aabb::AABB;
pub use block::BlockType;
pub use chunk::{Chunk, ChunkPos, LocalPos, split_block_pos};
pub use vertex::Vertex;
