use crate::{Error, Result};

/// The hyperparameters of the particle swarm optimizer
#[derive(Debug, Clone)]
pub struct Params {
    /// Fraction of the previous velocity retained in each step
    pub inertia_weight: f64,
    /// Pull towards the particles own best known location
    pub cognitive_weight: f64,
    /// Pull towards the swarms best known location
    pub social_weight: f64,
    /// Lower limit of every velocity component
    pub velocity_min: f64,
    /// Upper limit of every velocity component
    pub velocity_max: f64,
    /// Optional seed for Rng
    pub seed: Option<u64>,
}

impl Params {
    /// Ensure the velocity clamp describes a non empty, finite interval
    pub fn validate(&self) -> Result<()> {
        if !self.velocity_min.is_finite()
            || !self.velocity_max.is_finite()
            || self.velocity_min > self.velocity_max
        {
            return Err(Error::InvalidVelocityLimits {
                min: self.velocity_min,
                max: self.velocity_max,
            });
        }
        Ok(())
    }
}
