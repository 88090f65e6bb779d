use crate::core::block::BlockType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub block: BlockType,
    pub count: u32,
}

/// Hotbar with one slot per block type, in `BlockType::ALL` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: [ItemStack; BlockType::COUNT],
    selected: usize,
}

fn starting_count(block: BlockType) -> u32 {
    match block {
        BlockType::Grass | BlockType::Dirt | BlockType::Stone => 64,
        BlockType::Water => 0,
        BlockType::Coal => 16,
        _ => 32,
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            slots: BlockType::ALL.map(|block| ItemStack {
                block,
                count: starting_count(block),
            }),
            selected: 0,
        }
    }

    pub fn empty() -> Self {
        Inventory {
            slots: BlockType::ALL.map(|block| ItemStack { block, count: 0 }),
            selected: 0,
        }
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> ItemStack {
        self.slots[self.selected]
    }

    /// Select a slot by index. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Move the selection by `delta` slots, wrapping around.
    pub fn scroll(&mut self, delta: i32) {
        let len = self.slots.len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(len) as usize;
    }

    pub fn count(&self, block: BlockType) -> u32 {
        self.slots[block.index()].count
    }

    pub fn add(&mut self, block: BlockType, amount: u32) {
        let slot = &mut self.slots[block.index()];
        slot.count = slot.count.saturating_add(amount);
    }

    /// Take `amount` of `block`. Nothing is taken when there is not enough.
    pub fn remove(&mut self, block: BlockType, amount: u32) -> bool {
        let slot = &mut self.slots[block.index()];
        if slot.count < amount {
            return false;
        }
        slot.count -= amount;
        true
    }

    /// Block type of the selected slot if it has at least one item.
    pub fn selected_block(&self) -> Option<BlockType> {
        let stack = self.selected();
        (stack.count > 0).then_some(stack.block)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
