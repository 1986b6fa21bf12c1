use common::{Objective, Vector};
use nanorand::{Rng, WyRand};

use super::{Params, Swarm};
use crate::{clip, Error, Result};

/// Drives a swarm towards the minimum of an objective
pub struct Optimizer<O> {
    swarm: Swarm,
    objective: O,
    params: Params,
    rng: WyRand,
}

impl<O: Objective> Optimizer<O> {
    /// Create a new particle swarm optimizer.
    /// The swarm must already have its values initialized against the same objective.
    pub fn new(swarm: Swarm, objective: O, params: Params) -> Result<Self> {
        params.validate()?;
        if !swarm.is_ready() {
            return Err(Error::OutOfOrder(
                "swarm values must be initialized before optimizing",
            ));
        }
        if let Some(expected) = objective.dimensions() {
            if expected != swarm.dimensions() {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: swarm.dimensions(),
                });
            }
        }
        let rng = match params.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        Ok(Self {
            swarm,
            objective,
            params,
            rng,
        })
    }

    /// Perform a single optimization step, moving every particle once
    /// and then refreshing the global best.
    pub fn step(&mut self) {
        // Every particle of this step is attracted by the same global best
        let global_best = self.swarm.global_best().clone();

        for p in self.swarm.particles_mut() {
            let mut velocity = Vector::zeros(p.dimensions());
            let mut location = Vector::zeros(p.dimensions());
            for i in 0..p.dimensions() {
                let r1 = self.rng.generate::<f64>();
                let r2 = self.rng.generate::<f64>();
                let v = self.params.inertia_weight * p.velocity()[i]
                    + self.params.cognitive_weight * r1 * (p.best()[i] - p.location()[i])
                    + self.params.social_weight * r2 * (global_best[i] - p.location()[i]);
                velocity[i] = clip(self.params.velocity_min, self.params.velocity_max, v);
                location[i] = p.location()[i] + velocity[i];
            }
            let fitness = self.objective.evaluate(&location);
            p.advance(location, velocity, fitness);
        }

        self.swarm.scan_global_best();
        trace!("global best fitness after step: {:?}", self.best_fitness());
    }

    /// Perform `steps` optimization steps
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
        info!("best fitness after {} steps: {:?}", steps, self.best_fitness());
    }

    /// The best location found so far
    #[inline(always)]
    pub fn best(&self) -> Option<&Vector> {
        self.swarm.best()
    }

    /// The fitness of `best`
    #[inline(always)]
    pub fn best_fitness(&self) -> Option<f64> {
        self.swarm.best_fitness()
    }

    #[inline(always)]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    #[inline(always)]
    pub fn objective(&self) -> &O {
        &self.objective
    }

    #[inline(always)]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Give up the optimizer and take back the swarm
    pub fn into_swarm(self) -> Swarm {
        self.swarm
    }
}
