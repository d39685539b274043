use log::debug;

use crate::sim::Body;

/// The ground. Perfectly elastic: the reflected speed equals the incoming speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub y: f64,
}

impl Floor {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    /// Clamp a body that touches or passed the floor and reflect its velocity.
    /// Contact is only checked here, once per frame, so the body may have
    /// overshot by up to one step before being pulled back.
    pub fn resolve(&self, body: &mut Body) -> bool {
        if body.bottom() < self.y {
            return false;
        }
        body.y = self.y - body.radius();
        body.vy = -body.vy;
        debug!(
            "{} bounce: y={:.4} vy={:.4}",
            body.scheme().name(),
            body.y,
            body.vy
        );
        true
    }
}
