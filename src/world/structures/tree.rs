use glam::IVec3;

use super::Structure;
use crate::constants::TREE_TRUNK_HEIGHT;
use crate::core::block::BlockType;

/// Tree anchored on the surface block it grows from: a wood trunk above the
/// anchor and a 5x5x3 leaf canopy around the top two trunk cells.
pub fn tree() -> Structure {
    let mut structure = Structure::new("Tree");

    for dy in 1..=TREE_TRUNK_HEIGHT {
        structure = structure.with_block(IVec3::new(0, dy, 0), BlockType::Wood);
    }

    let canopy_base = TREE_TRUNK_HEIGHT - 1;
    for dx in -2..=2 {
        for dz in -2..=2 {
            for layer in 0..3 {
                // trunk passes through the two lower layers
                if dx == 0 && dz == 0 && layer < 2 {
                    continue;
                }
                structure = structure.with_block(
                    IVec3::new(dx, canopy_base + layer, dz),
                    BlockType::Leaves,
                );
            }
        }
    }

    structure
}
