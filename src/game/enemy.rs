use glam::Vec3;
use rand::Rng;

use crate::constants::*;
use crate::core::aabb::AABB;
use crate::player::physics::Body;
use crate::world::terrain::World;

/// Hostile walker that chases the player across the terrain.
pub struct Enemy {
    pub body: Body,
    /// Set when the last step made less than half the intended progress.
    blocked: bool,
}

impl Enemy {
    pub fn new(position: Vec3) -> Self {
        Enemy {
            body: Body::new(position, ENEMY_HALF_WIDTH, ENEMY_HEIGHT),
            blocked: false,
        }
    }

    /// Drop an enemy at a random column near the origin, slightly above the
    /// surface.
    pub fn spawn<R: Rng>(rng: &mut R, world: &World) -> Self {
        let x = rng.random_range(-ENEMY_SPAWN_RANGE..ENEMY_SPAWN_RANGE);
        let z = rng.random_range(-ENEMY_SPAWN_RANGE..ENEMY_SPAWN_RANGE);
        let y = world.height_at_f32(x, z) + ENEMY_SPAWN_CLEARANCE;
        Enemy::new(Vec3::new(x, y as f32, z))
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.body.position.distance(point)
    }

    pub fn in_attack_range(&self, player: Vec3) -> bool {
        self.distance_to(player) < ENEMY_ATTACK_RANGE
    }

    /// Chase `target` when it is neither too close nor too far, jumping over
    /// one block steps.
    pub fn update<F>(&mut self, dt: f32, target: Vec3, collides: F)
    where
        F: FnMut(&AABB) -> bool,
    {
        let distance = self.distance_to(target);
        let chasing = distance > ENEMY_MIN_CHASE_DISTANCE && distance < ENEMY_MAX_CHASE_DISTANCE;

        let heading = if chasing {
            let offset = target - self.body.position;
            Vec3::new(offset.x, 0.0, offset.z).normalize_or_zero()
        } else {
            Vec3::ZERO
        };
        self.body.velocity.x = heading.x * ENEMY_SPEED;
        self.body.velocity.z = heading.z * ENEMY_SPEED;

        if self.blocked && self.body.on_ground {
            self.body.velocity.y = ENEMY_JUMP_VELOCITY;
            self.body.on_ground = false;
        }
        self.body.apply_gravity(GRAVITY, dt);

        let before = self.body.position;
        let intended = ENEMY_SPEED * dt * heading.length();
        self.body.move_and_collide(self.body.velocity * dt, collides);

        let moved = (self.body.position - before).with_y(0.0).length();
        self.blocked = intended > 0.0 && moved < intended * 0.5;
    }
}
