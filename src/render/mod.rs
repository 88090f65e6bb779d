//! Rendering-related modules
//! Contains chunk mesh building. Drawing the batches is left to the host.

pub mod mesh;

// Re-export commonly used types
pub use mesh::{ChunkMesh, Face, MeshBatch, add_quad, build_chunk_mesh};
