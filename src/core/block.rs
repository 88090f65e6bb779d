use serde::{Deserialize, Serialize};

/// Material of an occupied voxel. Empty cells are `None` wherever a block is
/// optional, so there is no air variant.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Wood,
    Planks,
    Leaves,
    Sand,
    Water,
    Coal,
}

impl BlockType {
    pub const COUNT: usize = 9;

    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Planks,
        BlockType::Leaves,
        BlockType::Sand,
        BlockType::Water,
        BlockType::Coal,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Grass => "GRASS",
            BlockType::Dirt => "DIRT",
            BlockType::Stone => "STONE",
            BlockType::Wood => "WOOD",
            BlockType::Planks => "PLANKS",
            BlockType::Leaves => "LEAVES",
            BlockType::Sand => "SAND",
            BlockType::Water => "WATER",
            BlockType::Coal => "COAL",
        }
    }

    fn hex_color(&self) -> u32 {
        match self {
            BlockType::Grass => 0x7cb342,
            BlockType::Dirt => 0x8d6e63,
            BlockType::Stone => 0x757575,
            BlockType::Wood => 0x6d4c41,
            BlockType::Planks => 0xa1887f,
            BlockType::Leaves => 0x66bb6a,
            BlockType::Sand => 0xddc399,
            BlockType::Water => 0x42a5f5,
            BlockType::Coal => 0x212121,
        }
    }

    pub fn color(&self) -> [f32; 3] {
        rgb(self.hex_color())
    }

    pub fn opacity(&self) -> f32 {
        match self {
            BlockType::Leaves => 0.8,
            BlockType::Water => 0.6,
            _ => 1.0,
        }
    }

    /// Water is the only material entities can move through.
    pub fn is_solid(&self) -> bool {
        !matches!(self, BlockType::Water)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, BlockType::Leaves | BlockType::Water)
    }

    /// Whether the face of `self` towards `neighbor` has to be drawn.
    /// Water is drawn as a boundary around other blocks but never hides them.
    pub fn exposes_face_against(&self, neighbor: Option<BlockType>) -> bool {
        match neighbor {
            None => true,
            Some(BlockType::Water) => *self != BlockType::Water,
            Some(_) => false,
        }
    }
}

pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_the_only_non_solid_block() {
        for block in BlockType::ALL {
            assert_eq!(block.is_solid(), block != BlockType::Water, "{:?}", block);
        }
    }

    #[test]
    fn faces_against_water_only_show_for_other_materials() {
        assert!(BlockType::Stone.exposes_face_against(None));
        assert!(BlockType::Stone.exposes_face_against(Some(BlockType::Water)));
        assert!(!BlockType::Stone.exposes_face_against(Some(BlockType::Dirt)));
        assert!(!BlockType::Water.exposes_face_against(Some(BlockType::Water)));
        assert!(!BlockType::Water.exposes_face_against(Some(BlockType::Sand)));
        assert!(BlockType::Water.exposes_face_against(None));
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, block) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block.index(), i);
        }
    }

    #[test]
    fn hex_colors_unpack_to_unit_range() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
        let stone = BlockType::Stone.color();
        assert!((stone[0] - 0x75 as f32 / 255.0).abs() < 1e-6);
    }
}
