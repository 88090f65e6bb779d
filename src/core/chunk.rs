use glam::{IVec3, Vec3};

use crate::constants::*;
use crate::core::block::BlockType;
use crate::render::mesh::{ChunkMesh, build_chunk_mesh};

/// Column coordinate of a chunk on the X/Z grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        ChunkPos { x, z }
    }

    /// Chunk owning a world block coordinate. Floors towards negative
    /// infinity, so block -1 lives in chunk -1.
    pub fn of_block(pos: IVec3) -> Self {
        ChunkPos::new(pos.x.div_euclid(CHUNK_SIZE), pos.z.div_euclid(CHUNK_SIZE))
    }

    pub fn containing(pos: Vec3) -> Self {
        Self::of_block(pos.floor().as_ivec3())
    }

    pub fn block_origin(self) -> IVec3 {
        IVec3::new(self.x * CHUNK_SIZE, 0, self.z * CHUNK_SIZE)
    }

    pub fn to_world(self, local: LocalPos) -> IVec3 {
        self.block_origin() + IVec3::new(local.x, local.y, local.z)
    }

    pub fn chebyshev_distance(self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    pub fn distance_squared(self, other: ChunkPos) -> i32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }
}

/// Block coordinate inside a chunk.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LocalPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LocalPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        LocalPos { x, y, z }
    }

    pub fn in_bounds(&self) -> bool {
        (0..CHUNK_SIZE).contains(&self.x)
            && (0..CHUNK_HEIGHT).contains(&self.y)
            && (0..CHUNK_SIZE).contains(&self.z)
    }

    pub fn offset(self, by: IVec3) -> LocalPos {
        LocalPos::new(self.x + by.x, self.y + by.y, self.z + by.z)
    }

    fn index(&self) -> Option<usize> {
        if !self.in_bounds() {
            return None;
        }
        Some(((self.x * CHUNK_HEIGHT + self.y) * CHUNK_SIZE + self.z) as usize)
    }

    fn from_index(index: usize) -> Self {
        let index = index as i32;
        LocalPos::new(
            index / (CHUNK_HEIGHT * CHUNK_SIZE),
            (index / CHUNK_SIZE) % CHUNK_HEIGHT,
            index % CHUNK_SIZE,
        )
    }
}

/// Split a world block coordinate into its chunk and the position inside it.
pub fn split_block_pos(pos: IVec3) -> (ChunkPos, LocalPos) {
    let chunk = ChunkPos::of_block(pos);
    let local = LocalPos::new(
        pos.x.rem_euclid(CHUNK_SIZE),
        pos.y,
        pos.z.rem_euclid(CHUNK_SIZE),
    );
    (chunk, local)
}

pub struct Chunk {
    pos: ChunkPos,
    blocks: Box<[Option<BlockType>]>,
    block_count: usize,
    mesh_dirty: bool,
    mesh: Option<ChunkMesh>,
}

impl Chunk {
    pub fn new(pos: ChunkPos) -> Self {
        Chunk {
            pos,
            blocks: vec![None; CHUNK_VOLUME].into_boxed_slice(),
            block_count: 0,
            mesh_dirty: true,
            mesh: None,
        }
    }

    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    pub fn get(&self, local: LocalPos) -> Option<BlockType> {
        local.index().and_then(|i| self.blocks[i])
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        self.get(LocalPos::new(x, y, z))
    }

    /// Store `block` at `local` and return what was there. Positions outside
    /// the chunk are ignored.
    pub fn set(&mut self, local: LocalPos, block: Option<BlockType>) -> Option<BlockType> {
        let Some(i) = local.index() else {
            return None;
        };
        let previous = std::mem::replace(&mut self.blocks[i], block);
        if previous != block {
            match (previous, block) {
                (None, Some(_)) => self.block_count += 1,
                (Some(_), None) => self.block_count -= 1,
                _ => {}
            }
            self.mesh_dirty = true;
        }
        previous
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        self.set(LocalPos::new(x, y, z), Some(block));
    }

    /// Occupied cells in x, y, z order.
    pub fn blocks(&self) -> impl Iterator<Item = (LocalPos, BlockType)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(i, block)| block.map(|b| (LocalPos::from_index(i), b)))
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// Highest occupied y in a column.
    pub fn column_top(&self, x: i32, z: i32) -> Option<i32> {
        (0..CHUNK_HEIGHT)
            .rev()
            .find(|&y| self.get_block(x, y, z).is_some())
    }

    pub fn is_mesh_dirty(&self) -> bool {
        self.mesh_dirty
    }

    pub fn mesh(&self) -> Option<&ChunkMesh> {
        self.mesh.as_ref()
    }

    /// Replace the cached mesh with one built from the current blocks. The
    /// old mesh is dropped here.
    pub fn rebuild_mesh(&mut self) -> &ChunkMesh {
        let mesh = build_chunk_mesh(self);
        self.mesh_dirty = false;
        self.mesh.insert(mesh)
    }
}
