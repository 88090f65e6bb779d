use crate::core::block::BlockType;
use crate::game::inventory::Inventory;

#[derive(Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub output: BlockType,
    pub output_count: u32,
    pub ingredients: &'static [(BlockType, u32)],
}

pub const RECIPES: &[Recipe] = &[
    Recipe {
        name: "Planks",
        output: BlockType::Planks,
        output_count: 4,
        ingredients: &[(BlockType::Wood, 1)],
    },
    Recipe {
        name: "Sticks",
        output: BlockType::Wood,
        output_count: 4,
        ingredients: &[(BlockType::Planks, 2)],
    },
];

pub fn find_recipe(name: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

pub fn can_craft(inventory: &Inventory, recipe: &Recipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|&(block, count)| inventory.count(block) >= count)
}

/// Consume the ingredients and add the output. Leaves the inventory
/// untouched when any ingredient is short.
pub fn craft(inventory: &mut Inventory, recipe: &Recipe) -> bool {
    if !can_craft(inventory, recipe) {
        return false;
    }
    for &(block, count) in recipe.ingredients {
        inventory.remove(block, count);
    }
    inventory.add(recipe.output, recipe.output_count);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_becomes_planks() {
        let mut inventory = Inventory::empty();
        inventory.add(BlockType::Wood, 1);
        let planks = find_recipe("planks").unwrap();

        assert!(craft(&mut inventory, planks));
        assert_eq!(inventory.count(BlockType::Wood), 0);
        assert_eq!(inventory.count(BlockType::Planks), 4);
        assert!(!craft(&mut inventory, planks));
    }

    #[test]
    fn short_ingredients_leave_inventory_alone() {
        let mut inventory = Inventory::empty();
        inventory.add(BlockType::Planks, 1);
        let sticks = find_recipe("Sticks").unwrap();

        assert!(!can_craft(&inventory, sticks));
        let before = inventory.clone();
        assert!(!craft(&mut inventory, sticks));
        assert_eq!(inventory, before);
    }

    #[test]
    fn unknown_recipe() {
        assert!(find_recipe("Torch").is_none());
    }
}
