// World constants
pub const CHUNK_SIZE: i32 = 16;
pub const CHUNK_HEIGHT: i32 = 64;
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_HEIGHT * CHUNK_SIZE) as usize;
pub const RENDER_DISTANCE: i32 = 4;
pub const SEA_LEVEL: i32 = 8;
pub const DEFAULT_SEED: u32 = 2137;

// Terrain generation
pub const HEIGHT_NOISE_FREQUENCY: f32 = 0.03;
pub const HEIGHT_BASE: f32 = 10.0;
pub const HEIGHT_AMPLITUDE: f32 = 8.0;
pub const DIRT_DEPTH: i32 = 2;
pub const COAL_CHANCE: f64 = 0.05;
pub const COAL_MIN_DEPTH: i32 = 5;
pub const TREE_CHANCE: f64 = 0.02;
pub const TREE_TRUNK_HEIGHT: i32 = 5;

// Block targeting
pub const REACH_DISTANCE: f32 = 5.0;
pub const RAY_STEP: f32 = 0.1;

// Swept collision sub-steps per world unit of displacement
pub const COLLISION_STEPS_PER_UNIT: f32 = 10.0;

// Player constants
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_RADIUS: f32 = 0.3;
pub const PLAYER_EYE_FACTOR: f32 = 0.9;
pub const PLAYER_BASE_SPEED: f32 = 5.0;
pub const PLAYER_SPRINT_SPEED: f32 = 8.0;
pub const PLAYER_ACCELERATION: f32 = 50.0;
pub const PLAYER_DAMPING: f32 = 0.9;
pub const PLAYER_JUMP_VELOCITY: f32 = 10.0;
pub const PLAYER_SPAWN_CLEARANCE: i32 = 3;
pub const PLAYER_MAX_HEALTH: f32 = 10.0;
pub const GRAVITY: f32 = -25.0;
pub const MAX_FALL_SPEED: f32 = 50.0;

// Enemy constants
pub const ENEMY_COUNT: usize = 5;
pub const ENEMY_SPAWN_RANGE: f32 = 40.0;
pub const ENEMY_SPAWN_CLEARANCE: i32 = 2;
pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_MIN_CHASE_DISTANCE: f32 = 2.0;
pub const ENEMY_MAX_CHASE_DISTANCE: f32 = 20.0;
pub const ENEMY_ATTACK_RANGE: f32 = 1.5;
pub const ENEMY_DAMAGE_PER_SECOND: f32 = 0.5;
pub const ENEMY_HALF_WIDTH: f32 = 0.4;
pub const ENEMY_HEIGHT: f32 = 2.2;
pub const ENEMY_JUMP_VELOCITY: f32 = 8.0;

// Day/night cycle
pub const DAY_SPEED: f32 = 0.02;
pub const DAY_START_TIME: f32 = 0.3;
pub const NIGHT_SKY_COLOR: u32 = 0x000011;
pub const DAY_SKY_COLOR: u32 = 0x87ceeb;
