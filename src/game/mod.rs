//! Gameplay on top of the voxel world
//! Contains inventory, crafting, enemies, the day cycle and the game session.

pub mod crafting;
pub mod day_cycle;
pub mod enemy;
pub mod inventory;
pub mod session;

// Re-export commonly used types
pub use crafting::{RECIPES, Recipe};
pub use day_cycle::{DayCycle, SkyState};
pub use enemy::Enemy;
pub use inventory::{Inventory, ItemStack};
pub use session::{ActionError, FrameReport, Game, GameEvent};
