use glam::IVec3;

use crate::core::block::BlockType;
use crate::core::chunk::{Chunk, LocalPos};

/// A fixed arrangement of blocks relative to an anchor cell.
#[derive(Debug, Clone)]
pub struct Structure {
    pub name: &'static str,
    pub blocks: Vec<(IVec3, BlockType)>,
}

impl Structure {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, offset: IVec3, block: BlockType) -> Self {
        self.blocks.push((offset, block));
        self
    }

    /// Write the structure into `chunk` with its origin at `anchor`. Blocks
    /// that fall outside the chunk are dropped; returns how many were written.
    pub fn stamp(&self, chunk: &mut Chunk, anchor: LocalPos) -> usize {
        let mut written = 0;
        for &(offset, block) in &self.blocks {
            let target = anchor.offset(offset);
            if !target.in_bounds() {
                continue;
            }
            chunk.set(target, Some(block));
            written += 1;
        }
        written
    }
}
