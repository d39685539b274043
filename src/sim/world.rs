use log::trace;

use crate::config::SimConfig;
use crate::sim::{Body, EnergySample, Floor, Scheme};

/// Process-wide constants, read-only once the simulation is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub gravity: f64,
    pub dt: f64,
    pub ball_radius: f64,
    pub width: f64,
    pub height: f64,
}

impl Constants {
    pub fn floor(&self) -> Floor {
        Floor::new(self.height)
    }
}

/// Owns both balls. The frame clock is the only writer of body state.
pub struct Simulation {
    constants: Constants,
    floor: Floor,
    euler: Body,
    verlet: Body,
    steps: u64,
    bounces: [u64; 2],
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let constants = config.constants();
        let radius = constants.ball_radius;
        let euler = Body::new(
            Scheme::Euler,
            config.euler.x,
            config.euler.y,
            radius,
            config.euler.color(),
        );
        let verlet = Body::new(
            Scheme::Verlet,
            config.verlet.x,
            config.verlet.y,
            radius,
            config.verlet.color(),
        );
        Self {
            constants,
            floor: constants.floor(),
            euler,
            verlet,
            steps: 0,
            bounces: [0; 2],
        }
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn bodies(&self) -> [&Body; 2] {
        [&self.euler, &self.verlet]
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn body(&self, scheme: Scheme) -> &Body {
        match scheme {
            Scheme::Euler => &self.euler,
            Scheme::Verlet => &self.verlet,
        }
    }

    pub fn bounces(&self, scheme: Scheme) -> u64 {
        match scheme {
            Scheme::Euler => self.bounces[0],
            Scheme::Verlet => self.bounces[1],
        }
    }

    /// One frame of physics: resolve floor contact left by the previous
    /// frame, then integrate. Contact is checked before the step so a body
    /// never sinks more than one step's travel below the floor.
    pub fn step_frame(&mut self) {
        let Constants { gravity, dt, .. } = self.constants;
        for (i, body) in [&mut self.euler, &mut self.verlet].into_iter().enumerate() {
            if self.floor.resolve(body) {
                self.bounces[i] += 1;
            }
            body.advance(gravity, dt);
        }
        self.steps += 1;
    }

    /// Energy readings for both bodies, Euler first.
    pub fn sample(&self, timestamp: u64) -> [EnergySample; 2] {
        let Constants { gravity, .. } = self.constants;
        let floor_y = self.floor.y;
        let samples = [
            EnergySample::measure(&self.euler, gravity, floor_y, timestamp),
            EnergySample::measure(&self.verlet, gravity, floor_y, timestamp),
        ];
        trace!(
            "t={}s euler drift={:.4} verlet drift={:.4}",
            timestamp,
            samples[0].drift,
            samples[1].drift
        );
        samples
    }
}
