//! Time of day and the sky parameters derived from it.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::core::block::rgb;

/// Lighting a renderer needs for the current time of day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyState {
    pub sky_color: [f32; 3],
    pub ambient_intensity: f32,
    pub sun_intensity: f32,
    pub sun_position: Vec3,
    pub hour: u32,
    pub is_night: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayCycle {
    /// Fraction of the day in [0, 1).
    time: f32,
    speed: f32,
}

impl DayCycle {
    pub fn new(time: f32) -> Self {
        DayCycle {
            time: time.rem_euclid(1.0),
            speed: DAY_SPEED,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt * self.speed;
        if self.time > 1.0 {
            self.time = 0.0;
        }
    }

    /// Peaks at a quarter of the day and bottoms out at three quarters.
    pub fn daylight(&self) -> f32 {
        (self.time * TAU).sin() * 0.5 + 0.5
    }

    pub fn hour(&self) -> u32 {
        ((self.time * 24.0).floor() as u32).min(23)
    }

    pub fn is_night(&self) -> bool {
        self.time > 0.75 || self.time < 0.25
    }

    pub fn sky(&self) -> SkyState {
        let daylight = self.daylight();
        let night = rgb(NIGHT_SKY_COLOR);
        let day = rgb(DAY_SKY_COLOR);
        let angle = self.time * TAU;

        SkyState {
            sky_color: std::array::from_fn(|i| night[i] + (day[i] - night[i]) * daylight),
            ambient_intensity: 0.3 + daylight * 0.5,
            sun_intensity: 0.2 + daylight * 0.8,
            sun_position: Vec3::new(angle.cos() * 100.0, angle.sin() * 100.0, 50.0),
            hour: self.hour(),
            is_night: self.is_night(),
        }
    }
}

impl Default for DayCycle {
    fn default() -> Self {
        DayCycle::new(DAY_START_TIME)
    }
}
