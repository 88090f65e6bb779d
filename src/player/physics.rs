//! Swept box motion against the voxel grid.

use glam::Vec3;

use crate::constants::*;
use crate::core::aabb::AABB;

/// Upright box entity. `position` is the center of its feet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_width: f32,
    pub height: f32,
    pub on_ground: bool,
}

impl Body {
    pub fn new(position: Vec3, half_width: f32, height: f32) -> Self {
        Body {
            position,
            velocity: Vec3::ZERO,
            half_width,
            height,
            on_ground: false,
        }
    }

    pub fn aabb(&self) -> AABB {
        AABB::from_feet(self.position, self.half_width, self.height)
    }

    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.velocity.y = (self.velocity.y + gravity * dt).max(-MAX_FALL_SPEED);
    }

    /// Move by `displacement` in sub-steps of at most a tenth of a block,
    /// resolving X, then Z, then Y independently in each one. A blocked axis
    /// keeps its position and loses its velocity.
    pub fn move_and_collide<F>(&mut self, displacement: Vec3, mut collides: F)
    where
        F: FnMut(&AABB) -> bool,
    {
        let steps = (displacement.length() * COLLISION_STEPS_PER_UNIT).ceil() as u32;
        if steps == 0 {
            return;
        }
        let step = displacement / steps as f32;

        for _ in 0..steps {
            let dx = Vec3::new(step.x, 0.0, 0.0);
            if collides(&self.aabb().translated(dx)) {
                self.velocity.x = 0.0;
            } else {
                self.position += dx;
            }

            let dz = Vec3::new(0.0, 0.0, step.z);
            if collides(&self.aabb().translated(dz)) {
                self.velocity.z = 0.0;
            } else {
                self.position += dz;
            }

            let dy = Vec3::new(0.0, step.y, 0.0);
            if collides(&self.aabb().translated(dy)) {
                if self.velocity.y < 0.0 {
                    self.on_ground = true;
                }
                self.velocity.y = 0.0;
            } else {
                self.position += dy;
                self.on_ground = false;
            }
        }
    }
}
