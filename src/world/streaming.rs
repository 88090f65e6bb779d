//! Decides which chunks must be resident around the observer.

use glam::Vec3;
use rustc_hash::FxHashSet;

use crate::core::chunk::ChunkPos;

/// Chunks to create and chunks to drop for one observer position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingPlan {
    pub center: ChunkPos,
    /// Missing chunks, nearest first.
    pub load: Vec<ChunkPos>,
    pub unload: Vec<ChunkPos>,
}

impl StreamingPlan {
    pub fn is_empty(&self) -> bool {
        self.load.is_empty() && self.unload.is_empty()
    }
}

pub struct StreamingController {
    render_distance: i32,
}

impl StreamingController {
    pub fn new(render_distance: i32) -> Self {
        StreamingController {
            render_distance: render_distance.max(0),
        }
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    /// Square window of chunks within the render distance on both axes.
    pub fn required_chunks(&self, center: ChunkPos) -> impl Iterator<Item = ChunkPos> + use<> {
        let r = self.render_distance;
        (center.x - r..=center.x + r)
            .flat_map(move |x| (center.z - r..=center.z + r).map(move |z| ChunkPos::new(x, z)))
    }

    pub fn is_required(&self, center: ChunkPos, pos: ChunkPos) -> bool {
        center.chebyshev_distance(pos) <= self.render_distance
    }

    pub fn plan<'a>(
        &self,
        observer: Vec3,
        loaded: impl IntoIterator<Item = &'a ChunkPos>,
    ) -> StreamingPlan {
        let center = ChunkPos::containing(observer);
        let loaded: FxHashSet<ChunkPos> = loaded.into_iter().copied().collect();

        let mut load: Vec<ChunkPos> = self
            .required_chunks(center)
            .filter(|pos| !loaded.contains(pos))
            .collect();
        load.sort_by_key(|pos| (pos.distance_squared(center), *pos));

        let mut unload: Vec<ChunkPos> = loaded
            .into_iter()
            .filter(|pos| !self.is_required(center, *pos))
            .collect();
        unload.sort();

        StreamingPlan {
            center,
            load,
            unload,
        }
    }
}
