use glam::{IVec3, Vec3};
use rustc_hash::FxHashMap;
use std::fmt;

use crate::constants::*;
use crate::core::aabb::AABB;
use crate::core::block::BlockType;
use crate::core::chunk::{Chunk, ChunkPos, split_block_pos};
use crate::utils::settings::WorldSettings;
use crate::world::collision;
use crate::world::generator::ChunkGenerator;
use crate::world::raycast::{self, Ray, RayHit, Target};
use crate::world::streaming::{StreamingController, StreamingPlan};

/// Chunk lifecycle notifications for whoever owns the GPU copies of meshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkEvent {
    Loaded(ChunkPos),
    Remeshed(ChunkPos),
    Unloaded(ChunkPos),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    NoTarget,
    ChunkNotLoaded(ChunkPos),
    OutOfBounds(IVec3),
    Occupied(IVec3),
    IntersectsObserver(IVec3),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::NoTarget => write!(f, "no block in reach"),
            PlaceError::ChunkNotLoaded(pos) => {
                write!(f, "chunk ({}, {}) is not loaded", pos.x, pos.z)
            }
            PlaceError::OutOfBounds(cell) => {
                write!(f, "y = {} is outside the world height", cell.y)
            }
            PlaceError::Occupied(cell) => write!(f, "cell {} is already occupied", cell),
            PlaceError::IntersectsObserver(cell) => {
                write!(f, "cell {} would overlap the player", cell)
            }
        }
    }
}

impl std::error::Error for PlaceError {}

pub struct World {
    chunks: FxHashMap<ChunkPos, Chunk>,
    generator: ChunkGenerator,
    streaming: StreamingController,
    events: Vec<ChunkEvent>,
}

impl World {
    pub fn new(settings: &WorldSettings) -> Self {
        tracing::info!(
            "Creating world with seed {} and render distance {}",
            settings.seed,
            settings.render_distance
        );
        World {
            chunks: FxHashMap::default(),
            generator: ChunkGenerator::new(settings.seed),
            streaming: StreamingController::new(settings.render_distance),
            events: Vec::new(),
        }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::new(&WorldSettings {
            seed,
            ..WorldSettings::default()
        })
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed
    }

    pub fn render_distance(&self) -> i32 {
        self.streaming.render_distance()
    }

    /// Terrain surface height of the column, independent of loaded chunks and
    /// of any edits.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        self.generator.height_at(x, z)
    }

    pub fn height_at_f32(&self, x: f32, z: f32) -> i32 {
        self.generator.height_field().height_at_f32(x, z)
    }

    pub fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Loaded chunk positions, sorted.
    pub fn loaded_chunks(&self) -> Vec<ChunkPos> {
        let mut positions: Vec<ChunkPos> = self.chunks.keys().copied().collect();
        positions.sort();
        positions
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_loaded(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    /// Generate and mesh the chunk at `pos` unless it is already resident.
    /// Returns whether a chunk was created.
    pub fn ensure_chunk_generated(&mut self, pos: ChunkPos) -> bool {
        if self.chunks.contains_key(&pos) {
            return false;
        }
        let mut chunk = self.generator.generate_chunk(pos);
        chunk.rebuild_mesh();
        self.chunks.insert(pos, chunk);
        self.events.push(ChunkEvent::Loaded(pos));
        true
    }

    /// Bring the resident set in line with the window around `observer`.
    pub fn update_chunks(&mut self, observer: Vec3) -> StreamingPlan {
        let plan = self.streaming.plan(observer, self.chunks.keys());

        for pos in &plan.unload {
            if self.chunks.remove(pos).is_some() {
                self.events.push(ChunkEvent::Unloaded(*pos));
            }
        }
        for pos in &plan.load {
            self.ensure_chunk_generated(*pos);
        }

        if !plan.is_empty() {
            tracing::debug!(
                "Streaming around chunk ({}, {}): +{} -{} ({} resident)",
                plan.center.x,
                plan.center.z,
                plan.load.len(),
                plan.unload.len(),
                self.chunks.len()
            );
        }
        plan
    }

    /// Block at a world coordinate. Unloaded chunks and cells outside the
    /// vertical range read as air.
    pub fn get_block(&self, pos: IVec3) -> Option<BlockType> {
        let (chunk_pos, local) = split_block_pos(pos);
        self.chunks.get(&chunk_pos).and_then(|chunk| chunk.get(local))
    }

    pub fn is_solid(&self, pos: IVec3) -> bool {
        self.get_block(pos).is_some_and(|b| b.is_solid())
    }

    /// Write a block and remesh its chunk. Returns false when the chunk is
    /// not loaded, the cell is out of range or nothing changed.
    pub fn set_block(&mut self, pos: IVec3, block: Option<BlockType>) -> bool {
        let (chunk_pos, local) = split_block_pos(pos);
        if !local.in_bounds() {
            return false;
        }
        let Some(chunk) = self.chunks.get_mut(&chunk_pos) else {
            return false;
        };
        if chunk.set(local, block) == block {
            return false;
        }
        self.rebuild_dirty_meshes();
        true
    }

    /// Rebuild the mesh of every chunk whose blocks changed since it was last
    /// meshed. Returns how many were rebuilt.
    pub fn rebuild_dirty_meshes(&mut self) -> usize {
        let mut rebuilt = 0;
        for (pos, chunk) in self.chunks.iter_mut() {
            if chunk.is_mesh_dirty() {
                chunk.rebuild_mesh();
                self.events.push(ChunkEvent::Remeshed(*pos));
                rebuilt += 1;
            }
        }
        rebuilt
    }

    pub fn raycast(&self, ray: &Ray) -> Option<RayHit> {
        raycast::march(ray, REACH_DISTANCE, RAY_STEP, |pos| self.get_block(pos))
    }

    pub fn cast_target(&self, ray: &Ray) -> Option<Target> {
        self.raycast(ray).map(|hit| hit.target)
    }

    /// Delete the targeted block and return what it was.
    pub fn remove_block(&mut self, ray: &Ray) -> Option<BlockType> {
        let target = self.cast_target(ray)?;
        if !self.set_block(target.pos, None) {
            return None;
        }
        tracing::debug!("Removed {} at {}", target.block.name(), target.pos);
        Some(target.block)
    }

    /// Place `block` against the targeted face, refusing cells that overlap
    /// a player standing at `observer_feet`.
    pub fn place_block(
        &mut self,
        ray: &Ray,
        block: BlockType,
        observer_feet: Vec3,
    ) -> Result<IVec3, PlaceError> {
        let observer = AABB::from_feet(observer_feet, PLAYER_RADIUS, PLAYER_HEIGHT);
        self.place_block_with_box(ray, block, &observer)
    }

    pub fn place_block_with_box(
        &mut self,
        ray: &Ray,
        block: BlockType,
        observer: &AABB,
    ) -> Result<IVec3, PlaceError> {
        let hit = self.raycast(ray).ok_or(PlaceError::NoTarget)?;
        let cell = raycast::placement_cell(ray, &hit);

        if !(0..CHUNK_HEIGHT).contains(&cell.y) {
            return Err(PlaceError::OutOfBounds(cell));
        }
        let chunk_pos = ChunkPos::of_block(cell);
        if !self.is_loaded(chunk_pos) {
            return Err(PlaceError::ChunkNotLoaded(chunk_pos));
        }
        if self
            .get_block(cell)
            .is_some_and(|existing| existing == block || existing.is_solid())
        {
            return Err(PlaceError::Occupied(cell));
        }
        if AABB::unit_cell(cell).intersects(observer) {
            return Err(PlaceError::IntersectsObserver(cell));
        }

        if !self.set_block(cell, Some(block)) {
            return Err(PlaceError::Occupied(cell));
        }
        tracing::debug!("Placed {} at {}", block.name(), cell);
        Ok(cell)
    }

    pub fn intersects_solid(&self, aabb: &AABB) -> bool {
        collision::intersects_solid(aabb, |pos| self.get_block(pos))
    }

    /// Events since the last drain, in the order they happened.
    pub fn drain_events(&mut self) -> Vec<ChunkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feet position a few blocks above the surface at the origin.
    pub fn find_spawn_point(&self) -> Vec3 {
        let height = self.height_at(0, 0);
        Vec3::new(0.0, (height + PLAYER_SPAWN_CLEARANCE) as f32, 0.0)
    }
}
