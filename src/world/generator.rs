//! Chunk generation from the height field
//!
//! Every column is filled from y = 0 up to its surface with stone,
//! a thin dirt layer and a grass or sand top. Low columns are flooded up to
//! sea level and some high columns grow a tree. Random choices come from an
//! RNG seeded per chunk, so the same seed always rebuilds the same world.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::{Chunk, ChunkPos, LocalPos};
use crate::world::height_field::HeightField;
use crate::world::structures::{Structure, tree};

pub struct ChunkGenerator {
    height_field: HeightField,
    tree: Structure,
    pub seed: u32,
}

impl ChunkGenerator {
    pub fn new(seed: u32) -> Self {
        ChunkGenerator {
            height_field: HeightField::new(seed),
            tree: tree(),
            seed,
        }
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height_field
    }

    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        self.height_field.height_at(x, z)
    }

    /// Generate a complete chunk at the given coordinates
    pub fn generate_chunk(&self, pos: ChunkPos) -> Chunk {
        let mut chunk = Chunk::new(pos);
        let mut rng = StdRng::seed_from_u64(self.chunk_seed(pos));
        let origin = pos.block_origin();
        let mut trees = 0;

        for lx in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                let height = self.height_at(origin.x + lx, origin.z + lz);
                self.fill_column(&mut chunk, lx, lz, height, &mut rng);

                if height >= SEA_LEVEL && rng.random_bool(TREE_CHANCE) {
                    self.tree.stamp(&mut chunk, LocalPos::new(lx, height, lz));
                    trees += 1;
                }

                if height < SEA_LEVEL {
                    for y in (height + 1)..=SEA_LEVEL {
                        chunk.set_block(lx, y, lz, BlockType::Water);
                    }
                }
            }
        }

        tracing::debug!(
            "Generated chunk ({}, {}): {} blocks, {} trees",
            pos.x,
            pos.z,
            chunk.block_count(),
            trees
        );
        chunk
    }

    fn fill_column(&self, chunk: &mut Chunk, lx: i32, lz: i32, height: i32, rng: &mut StdRng) {
        for y in 0..=height {
            let block = if y == height {
                Self::surface_block(height)
            } else if y > height - 1 - DIRT_DEPTH {
                BlockType::Dirt
            } else if y < height - COAL_MIN_DEPTH && rng.random_bool(COAL_CHANCE) {
                BlockType::Coal
            } else {
                BlockType::Stone
            };
            chunk.set_block(lx, y, lz, block);
        }
    }

    pub fn surface_block(height: i32) -> BlockType {
        if height < SEA_LEVEL {
            BlockType::Sand
        } else {
            BlockType::Grass
        }
    }

    fn chunk_seed(&self, pos: ChunkPos) -> u64 {
        let mut hash = self.seed as u64;
        hash = hash.wrapping_add(pos.x as u32 as u64).wrapping_mul(73856093);
        hash = hash.wrapping_add(pos.z as u32 as u64).wrapping_mul(19349663);
        hash ^ (hash >> 16)
    }
}

impl Clone for ChunkGenerator {
    fn clone(&self) -> Self {
        ChunkGenerator::new(self.seed)
    }
}
