pub mod body;
pub mod boundary;
pub mod energy;
pub mod integrator;
pub mod world;

pub use body::Body;
pub use boundary::Floor;
pub use energy::EnergySample;
pub use integrator::Scheme;
pub use world::{Constants, Simulation};
