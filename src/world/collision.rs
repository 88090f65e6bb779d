use glam::IVec3;

use crate::core::aabb::AABB;
use crate::core::block::BlockType;

/// Whether `aabb` overlaps any solid voxel. Water never blocks.
pub fn intersects_solid<F>(aabb: &AABB, mut block_at: F) -> bool
where
    F: FnMut(IVec3) -> Option<BlockType>,
{
    let min = aabb.min.floor().as_ivec3();
    let max = aabb.max.ceil().as_ivec3();

    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                let cell = IVec3::new(x, y, z);
                let Some(block) = block_at(cell) else {
                    continue;
                };
                if block.is_solid() && AABB::unit_cell(cell).intersects(aabb) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn box_inside_solid_cell_collides() {
        let lookup = |p: IVec3| (p == IVec3::new(1, 2, 3)).then_some(BlockType::Stone);
        let inner = AABB::new(Vec3::new(1.2, 2.2, 3.2), Vec3::new(1.8, 2.8, 3.8));
        assert!(intersects_solid(&inner, lookup));
    }

    #[test]
    fn water_never_collides() {
        let lookup = |_: IVec3| Some(BlockType::Water);
        let b = AABB::from_feet(Vec3::new(0.5, 0.0, 0.5), 0.3, 1.8);
        assert!(!intersects_solid(&b, lookup));
    }

    #[test]
    fn resting_on_a_block_is_not_a_collision() {
        let lookup = |p: IVec3| (p.y < 0).then_some(BlockType::Grass);
        let standing = AABB::from_feet(Vec3::new(0.5, 0.0, 0.5), 0.3, 1.8);
        assert!(!intersects_solid(&standing, lookup));
        assert!(intersects_solid(&standing.translated(Vec3::new(0.0, -0.05, 0.0)), lookup));
    }
}
