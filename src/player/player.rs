use glam::Vec3;

use crate::constants::*;
use crate::core::aabb::AABB;
use crate::player::camera::Camera;
use crate::player::input::InputState;
use crate::player::physics::Body;
use crate::utils::settings::PlayerSettings;
use crate::world::raycast::Ray;

pub struct Player {
    pub body: Body,
    pub camera: Camera,
    pub health: f32,
    settings: PlayerSettings,
}

impl Player {
    pub fn new(position: Vec3, settings: PlayerSettings) -> Self {
        Player {
            body: Body::new(position, PLAYER_RADIUS, PLAYER_HEIGHT),
            camera: Camera::default(),
            health: PLAYER_MAX_HEALTH,
            settings,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn eye_position(&self) -> Vec3 {
        self.body.position + Vec3::Y * (self.body.height * PLAYER_EYE_FACTOR)
    }

    pub fn view_ray(&self) -> Ray {
        Ray::new(self.eye_position(), self.camera.look_direction())
    }

    pub fn look(&mut self, dx: f32, dy: f32) {
        self.camera.rotate(dx, dy, self.settings.mouse_sensitivity);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Horizontal velocity the held keys ask for, relative to the view yaw.
    fn wish_velocity(&self, input: &InputState) -> Vec3 {
        let speed = if input.sprint {
            self.settings.sprint_speed
        } else {
            self.settings.walk_speed
        };
        let forward = self.camera.forward();
        let right = self.camera.right();

        let mut wish = Vec3::ZERO;
        if input.forward {
            wish += forward * speed;
        }
        if input.backward {
            wish -= forward * speed;
        }
        if input.left {
            wish -= right * speed;
        }
        if input.right {
            wish += right * speed;
        }
        wish
    }

    pub fn update<F>(&mut self, dt: f32, input: &InputState, collides: F)
    where
        F: FnMut(&AABB) -> bool,
    {
        let wish = self.wish_velocity(input);
        // acceleration * dt above 1 would overshoot the target speed
        let blend = (self.settings.acceleration * dt).min(1.0);
        self.body.velocity.x += (wish.x - self.body.velocity.x) * blend;
        self.body.velocity.z += (wish.z - self.body.velocity.z) * blend;

        if self.body.on_ground && input.jump {
            self.body.velocity.y = self.settings.jump_velocity;
            self.body.on_ground = false;
        }
        self.body.apply_gravity(self.settings.gravity, dt);

        let displacement = self.body.velocity * dt;
        self.body.move_and_collide(displacement, collides);

        self.body.velocity.x *= self.settings.damping;
        self.body.velocity.z *= self.settings.damping;
    }
}
