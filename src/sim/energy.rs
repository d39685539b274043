//! Energy bookkeeping for one body. Mass is normalised to 1, both balls are identical.

use crate::sim::Body;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub timestamp: u64, // whole seconds since the simulation started
    pub potential: f64,
    pub kinetic: f64,
    pub mechanical: f64,
    pub initial_total: f64,
    pub drift: f64, // numerical energy loss
}

impl EnergySample {
    pub fn measure(body: &Body, gravity: f64, floor_y: f64, timestamp: u64) -> Self {
        let potential = gravity * (floor_y - body.y);
        let kinetic = 0.5 * body.vy * body.vy;
        let mechanical = potential + kinetic;
        let initial_total = gravity * (floor_y - body.initial_y());
        Self {
            timestamp,
            potential,
            kinetic,
            mechanical,
            initial_total,
            drift: initial_total - mechanical,
        }
    }
}
