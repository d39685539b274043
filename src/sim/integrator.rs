//! Fixed-step vertical integrators.
//!
//! Both schemes advance a body under constant gravity by one step `dt`:
//! - `Euler`: semi-implicit Euler, the updated velocity drives the position
//! - `Verlet`: constant-acceleration position update, then the velocity kick

use crate::sim::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Euler,
    Verlet,
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Euler => "Euler",
            Scheme::Verlet => "Verlet",
        }
    }

    pub fn advance(&self, body: &mut Body, gravity: f64, dt: f64) {
        match self {
            Scheme::Euler => {
                // v_n+1 = v_n + g dt, y_n+1 = y_n + v_n+1 dt
                body.vy += gravity * dt;
                body.y += body.vy * dt;
            }
            Scheme::Verlet => {
                // y_n+1 = y_n + v_n dt + 1/2 g dt^2, gravity is constant so a_n == a_n+1
                body.y += body.vy * dt + 0.5 * gravity * dt * dt;
                body.vy += gravity * dt;
            }
        }
    }
}
