//! Particle swarm optimization

mod optimizer;
mod params;
mod particle;
mod swarm;

pub use optimizer::Optimizer;
pub use params::Params;
pub use particle::Particle;
pub use swarm::Swarm;
