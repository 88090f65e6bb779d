//! One running game: world, player, enemies and the per-frame state that
//! ties them together.

use glam::IVec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::ChunkPos;
use crate::game::crafting::{self, Recipe};
use crate::game::day_cycle::{DayCycle, SkyState};
use crate::game::enemy::Enemy;
use crate::game::inventory::Inventory;
use crate::player::input::InputState;
use crate::player::player::Player;
use crate::utils::settings::GameSettings;
use crate::world::raycast::Target;
use crate::world::terrain::{ChunkEvent, PlaceError, World};

/// Discrete things that happened, for sound effects and HUD feedback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    BlockBroken { pos: IVec3, block: BlockType },
    BlockPlaced { pos: IVec3, block: BlockType },
    Crafted { output: BlockType, count: u32 },
    PlayerDied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    EmptySlot(BlockType),
    Place(PlaceError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::EmptySlot(block) => write!(f, "no {} left", block.name()),
            ActionError::Place(e) => write!(f, "cannot place block: {}", e),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Place(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlaceError> for ActionError {
    fn from(e: PlaceError) -> Self {
        ActionError::Place(e)
    }
}

/// Summary of one simulated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub chunks_loaded: usize,
    pub chunks_unloaded: usize,
    pub target: Option<Target>,
    pub sky: SkyState,
    pub health: f32,
}

pub struct Game {
    world: World,
    player: Player,
    enemies: Vec<Enemy>,
    inventory: Inventory,
    day_cycle: DayCycle,
    target: Option<Target>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(settings: &GameSettings) -> Self {
        let mut world = World::new(&settings.world);
        let spawn = world.find_spawn_point();
        world.update_chunks(spawn);

        let mut rng = StdRng::seed_from_u64(settings.world.seed as u64);
        let enemies = (0..settings.world.enemy_count)
            .map(|_| Enemy::spawn(&mut rng, &world))
            .collect();

        tracing::info!(
            "Spawned player at ({:.1}, {:.1}, {:.1}) with {} enemies",
            spawn.x,
            spawn.y,
            spawn.z,
            settings.world.enemy_count
        );

        Game {
            world,
            player: Player::new(spawn, settings.player.clone()),
            enemies,
            inventory: Inventory::new(),
            day_cycle: DayCycle::default(),
            target: None,
            events: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn day_cycle(&self) -> &DayCycle {
        &self.day_cycle
    }

    /// Block under the crosshair as of the last update.
    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn look(&mut self, dx: f32, dy: f32) {
        self.player.look(dx, dy);
    }

    pub fn update(&mut self, dt: f32, input: &InputState) -> FrameReport {
        let plan = self.world.update_chunks(self.player.position());

        let world = &self.world;
        self.player
            .update(dt, input, |aabb| world.intersects_solid(aabb));

        let was_alive = !self.player.is_dead();
        let player_pos = self.player.position();
        for enemy in &mut self.enemies {
            // enemies in unloaded chunks would fall through the world
            if !world.is_loaded(ChunkPos::containing(enemy.position())) {
                continue;
            }
            enemy.update(dt, player_pos, |aabb| world.intersects_solid(aabb));
            if enemy.in_attack_range(player_pos) {
                self.player.take_damage(ENEMY_DAMAGE_PER_SECOND * dt);
            }
        }
        if was_alive && self.player.is_dead() {
            tracing::info!("Player died");
            self.events.push(GameEvent::PlayerDied);
        }

        self.day_cycle.advance(dt);
        self.target = self.world.cast_target(&self.player.view_ray());

        FrameReport {
            chunks_loaded: plan.load.len(),
            chunks_unloaded: plan.unload.len(),
            target: self.target,
            sky: self.day_cycle.sky(),
            health: self.player.health,
        }
    }

    /// Break the targeted block and put it in the inventory.
    pub fn break_block(&mut self) -> Option<BlockType> {
        let ray = self.player.view_ray();
        let pos = self.world.cast_target(&ray)?.pos;
        let block = self.world.remove_block(&ray)?;

        self.inventory.add(block, 1);
        self.events.push(GameEvent::BlockBroken { pos, block });
        self.target = self.world.cast_target(&ray);
        Some(block)
    }

    /// Place one block from the selected slot against the targeted face.
    pub fn place_selected(&mut self) -> Result<IVec3, ActionError> {
        let stack = self.inventory.selected();
        let block = self
            .inventory
            .selected_block()
            .ok_or(ActionError::EmptySlot(stack.block))?;

        let ray = self.player.view_ray();
        let pos = self.world.place_block(&ray, block, self.player.position())?;

        self.inventory.remove(block, 1);
        self.events.push(GameEvent::BlockPlaced { pos, block });
        self.target = self.world.cast_target(&ray);
        Ok(pos)
    }

    pub fn craft(&mut self, recipe: &Recipe) -> bool {
        if !crafting::craft(&mut self.inventory, recipe) {
            return false;
        }
        self.events.push(GameEvent::Crafted {
            output: recipe.output,
            count: recipe.output_count,
        });
        true
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn drain_chunk_events(&mut self) -> Vec<ChunkEvent> {
        self.world.drain_events()
    }
}
