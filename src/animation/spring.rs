// src/animation/spring.rs
//
// Second-order damped spring filter for smoothing a raw signal.
// Integrated with semi-implicit Euler in fixed substeps so a slow
// frame can't blow up the simulation.

use crate::config::SpringConfig;

// a frame longer than this is treated as a hitch, not simulated through
const MAX_FRAME_DT: f32 = 1.0 / 30.0;
const MAX_STEP: f32 = 1.0 / 240.0;

const REST_DELTA: f32 = 0.01;
const REST_SPEED: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct Spring {
    position: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl Spring {
    pub fn new(config: &SpringConfig) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass.max(f32::EPSILON),
        }
    }

    /// Advance the filter towards `target` by `dt` seconds and return
    /// the new smoothed position.
    pub fn update(&mut self, target: f32, dt: f32) -> f32 {
        let mut remaining = dt.min(MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let accel = (self.stiffness * (target - self.position)
                - self.damping * self.velocity)
                / self.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    /// Jump straight to `target` with no transient. Used at startup so
    /// cards don't fly in from their rest position.
    pub fn snap_to(&mut self, target: f32) {
        self.position = target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self, target: f32) -> bool {
        (target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    pub fn position(&self) -> f32 {
        self.position
    }
}
