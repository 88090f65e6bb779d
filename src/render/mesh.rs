use glam::IVec3;

use crate::core::block::BlockType;
use crate::core::chunk::{Chunk, ChunkPos};
use crate::core::vertex::Vertex;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Left,
    Right,
    Bottom,
    Top,
    Back,
    Front,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
        Face::Back,
        Face::Front,
    ];

    /// Step from a voxel to the neighbor this face looks at.
    pub fn offset(self) -> IVec3 {
        match self {
            Face::Left => IVec3::new(-1, 0, 0),
            Face::Right => IVec3::new(1, 0, 0),
            Face::Bottom => IVec3::new(0, -1, 0),
            Face::Top => IVec3::new(0, 1, 0),
            Face::Back => IVec3::new(0, 0, -1),
            Face::Front => IVec3::new(0, 0, 1),
        }
    }

    pub fn normal(self) -> [f32; 3] {
        self.offset().as_vec3().to_array()
    }

    /// Quad corners (bottom-left, bottom-right, top-right, top-left) of this
    /// face for the unit cube whose minimum corner is (x, y, z).
    fn corners(self, x: f32, y: f32, z: f32) -> [[f32; 3]; 4] {
        match self {
            Face::Left => [
                [x, y, z],
                [x, y, z + 1.0],
                [x, y + 1.0, z + 1.0],
                [x, y + 1.0, z],
            ],
            Face::Right => [
                [x + 1.0, y, z + 1.0],
                [x + 1.0, y, z],
                [x + 1.0, y + 1.0, z],
                [x + 1.0, y + 1.0, z + 1.0],
            ],
            Face::Bottom => [
                [x, y, z + 1.0],
                [x, y, z],
                [x + 1.0, y, z],
                [x + 1.0, y, z + 1.0],
            ],
            Face::Top => [
                [x, y + 1.0, z],
                [x, y + 1.0, z + 1.0],
                [x + 1.0, y + 1.0, z + 1.0],
                [x + 1.0, y + 1.0, z],
            ],
            Face::Back => [
                [x + 1.0, y, z],
                [x, y, z],
                [x, y + 1.0, z],
                [x + 1.0, y + 1.0, z],
            ],
            Face::Front => [
                [x, y, z + 1.0],
                [x + 1.0, y, z + 1.0],
                [x + 1.0, y + 1.0, z + 1.0],
                [x, y + 1.0, z + 1.0],
            ],
        }
    }
}

pub fn add_quad(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    corners: [[f32; 3]; 4],
    normal: [f32; 3],
    color: [f32; 3],
) {
    let base_idx = vertices.len() as u32;
    let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
    for (position, uv) in corners.into_iter().zip(uvs) {
        vertices.push(Vertex {
            position,
            normal,
            color,
            uv,
        });
    }
    indices.extend_from_slice(&[
        base_idx,
        base_idx + 1,
        base_idx + 2,
        base_idx,
        base_idx + 2,
        base_idx + 3,
    ]);
}

/// All visible faces of one material inside one chunk, merged into a single
/// indexed triangle list.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBatch {
    pub block: BlockType,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBatch {
    fn new(block: BlockType) -> Self {
        MeshBatch {
            block,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }
}

/// Render batches derived from a chunk's blocks. Owned by the chunk and
/// released when it is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ChunkMesh {
    pub pos: ChunkPos,
    pub batches: Vec<MeshBatch>,
}

impl ChunkMesh {
    pub fn batch(&self, block: BlockType) -> Option<&MeshBatch> {
        self.batches.iter().find(|b| b.block == block)
    }

    pub fn face_count(&self) -> usize {
        self.batches.iter().map(MeshBatch::face_count).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Build one batch per material from the faces of `chunk` that are not
/// hidden by a neighbor. Only neighbors inside the same chunk are consulted,
/// so faces on chunk borders are always emitted.
pub fn build_chunk_mesh(chunk: &Chunk) -> ChunkMesh {
    let mut batches: [Option<MeshBatch>; BlockType::COUNT] = std::array::from_fn(|_| None);
    let pos = chunk.pos();

    for (local, block) in chunk.blocks() {
        let mut visible = Face::ALL
            .into_iter()
            .filter(|face| block.exposes_face_against(chunk.get(local.offset(face.offset()))))
            .peekable();

        if visible.peek().is_none() {
            continue;
        }

        let world = pos.to_world(local).as_vec3();
        let color = block.color();
        let batch = batches[block.index()].get_or_insert_with(|| MeshBatch::new(block));

        for face in visible {
            add_quad(
                &mut batch.vertices,
                &mut batch.indices,
                face.corners(world.x, world.y, world.z),
                face.normal(),
                color,
            );
        }
    }

    let mesh = ChunkMesh {
        pos,
        batches: batches.into_iter().flatten().collect(),
    };
    tracing::trace!(
        "Meshed chunk ({}, {}): {} faces in {} batches",
        pos.x,
        pos.z,
        mesh.face_count(),
        mesh.batches.len()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chunk::LocalPos;

    fn faces_at(mesh: &ChunkMesh, block: BlockType) -> usize {
        mesh.batch(block).map_or(0, MeshBatch::face_count)
    }

    #[test]
    fn lone_block_has_six_faces() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        chunk.set_block(5, 5, 5, BlockType::Stone);
        let mesh = build_chunk_mesh(&chunk);
        assert_eq!(faces_at(&mesh, BlockType::Stone), 6);
        assert_eq!(mesh.vertex_count(), 24);
    }

    #[test]
    fn enclosed_block_is_culled() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        for x in 4..=6 {
            for y in 4..=6 {
                for z in 4..=6 {
                    chunk.set_block(x, y, z, BlockType::Dirt);
                }
            }
        }
        chunk.set_block(5, 5, 5, BlockType::Coal);
        let mesh = build_chunk_mesh(&chunk);
        assert!(mesh.batch(BlockType::Coal).is_none());
        // 3x3x3 cube: 9 faces per side
        assert_eq!(faces_at(&mesh, BlockType::Dirt), 54);
    }

    #[test]
    fn water_neighbors_expose_solid_faces_but_not_each_other() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0));
        chunk.set_block(5, 5, 5, BlockType::Sand);
        chunk.set_block(5, 6, 5, BlockType::Water);
        chunk.set_block(6, 6, 5, BlockType::Water);

        let mesh = build_chunk_mesh(&chunk);
        // the sand top stays visible through the water above it
        assert_eq!(faces_at(&mesh, BlockType::Sand), 6);
        // the shared water face is hidden and the water resting on the sand
        // also hides its bottom face
        assert_eq!(faces_at(&mesh, BlockType::Water), 5 + 4);
    }

    #[test]
    fn faces_on_chunk_border_are_kept() {
        let mut chunk = Chunk::new(ChunkPos::new(-1, 2));
        chunk.set_block(0, 0, 15, BlockType::Stone);
        let mesh = build_chunk_mesh(&chunk);
        assert_eq!(faces_at(&mesh, BlockType::Stone), 6);

        let batch = mesh.batch(BlockType::Stone).unwrap();
        let min_x = batch
            .vertices
            .iter()
            .map(|v| v.position[0])
            .fold(f32::INFINITY, f32::min);
        let max_z = batch
            .vertices
            .iter()
            .map(|v| v.position[2])
            .fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min_x, -16.0);
        assert_eq!(max_z, 48.0);
    }

    #[test]
    fn batches_follow_material_order_and_rebuilds_match() {
        let mut chunk = Chunk::new(ChunkPos::new(3, 3));
        chunk.set(LocalPos::new(1, 1, 1), Some(BlockType::Coal));
        chunk.set(LocalPos::new(8, 1, 1), Some(BlockType::Grass));
        chunk.set(LocalPos::new(8, 2, 1), Some(BlockType::Leaves));

        let first = build_chunk_mesh(&chunk);
        let order: Vec<_> = first.batches.iter().map(|b| b.block).collect();
        assert_eq!(order, vec![BlockType::Grass, BlockType::Leaves, BlockType::Coal]);
        assert_eq!(first, build_chunk_mesh(&chunk));
    }
}
