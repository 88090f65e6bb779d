use glam::Vec3;

const MAX_PITCH: f32 = 89.0_f32.to_radians();

/// First person view orientation. Yaw 0 looks along +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut camera = Camera { yaw, pitch: 0.0 };
        camera.set_pitch(pitch);
        camera
    }

    /// Horizontal walking direction.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Apply a mouse delta. Moving the mouse up looks up.
    pub fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw = (self.yaw + dx * sensitivity).rem_euclid(std::f32::consts::TAU);
        self.set_pitch(self.pitch - dy * sensitivity);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn basis_is_orthogonal_and_horizontal() {
        let camera = Camera::new(0.7, 0.4);
        assert!(camera.forward().dot(camera.right()).abs() < 1e-6);
        assert_eq!(camera.forward().y, 0.0);
        assert!((camera.look_direction().length() - 1.0).abs() < 1e-5);
        // right is forward turned a quarter towards +Z
        let turned = Camera::new(0.7 + FRAC_PI_2, 0.0).forward();
        assert!((turned - camera.right()).length() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.rotate(0.0, -10_000.0, 0.01);
        assert!((camera.pitch - MAX_PITCH).abs() < 1e-6);
        assert!(camera.look_direction().y < 1.0);

        camera.rotate(0.0, 10_000.0, 0.01);
        assert!((camera.pitch + MAX_PITCH).abs() < 1e-6);
    }

    #[test]
    fn construction_clamps_pitch() {
        let camera = Camera::new(0.0, -FRAC_PI_2);
        assert_eq!(camera.pitch, -MAX_PITCH);
        assert!(camera.look_direction().y < -0.99);
    }
}
