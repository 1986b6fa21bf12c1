use common::{Objective, Vector};
use nanorand::WyRand;

use super::Particle;
use crate::{is_valid_range, random_in_range, Error, Result, Sampling};

/// Where a swarm is in its setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Created,
    Positioned,
    Ready,
}

/// A fixed size collection of particles together with the best location any of them found
#[derive(Debug, Clone)]
pub struct Swarm {
    particle_count: usize,
    dimensions: usize,
    particles: Vec<Particle>,
    /// Only meaningful once the stage is `Ready`
    best: Vector,
    best_fitness: f64,
    sampling: Sampling,
    stage: Stage,
    rng: WyRand,
}

impl Swarm {
    /// Create an empty swarm which will hold `particle_count` particles
    ///
    /// # Arguments:
    /// particle_count: number of particles, must be at least one
    /// seed: optional seed for the rng used to draw initial locations and velocities
    pub fn new(particle_count: usize, seed: Option<u64>) -> Result<Self> {
        if particle_count == 0 {
            return Err(Error::EmptySwarm);
        }
        let rng = match seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        Ok(Self {
            particle_count,
            dimensions: 0,
            particles: Vec::with_capacity(particle_count),
            best: Vector::zeros(0),
            best_fitness: f64::MAX,
            sampling: Sampling::default(),
            stage: Stage::Created,
            rng,
        })
    }

    /// Build a ready to use swarm from already evaluated particles.
    /// The global best is seeded from the first particle and then scanned.
    pub fn from_particles(particles: Vec<Particle>) -> Result<Self> {
        let dimensions = particles.first().ok_or(Error::EmptySwarm)?.dimensions();
        if dimensions == 0 {
            return Err(Error::ZeroDimensions);
        }
        for p in particles.iter() {
            if !p.is_evaluated() {
                return Err(Error::OutOfOrder(
                    "particles must be evaluated before building a swarm from them",
                ));
            }
            for actual in [p.dimensions(), p.velocity().len()] {
                if actual != dimensions {
                    return Err(Error::DimensionMismatch {
                        expected: dimensions,
                        actual,
                    });
                }
            }
        }

        let mut swarm = Self {
            particle_count: particles.len(),
            dimensions,
            particles,
            best: Vector::zeros(0),
            best_fitness: f64::MAX,
            sampling: Sampling::default(),
            stage: Stage::Ready,
            // never drawn from, a ready swarm can not be initialized again
            rng: WyRand::new_seed(0),
        };
        swarm.seed_global_best();

        Ok(swarm)
    }

    /// Use the given policy when drawing initial locations and velocities
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Place every particle at a random location.
    /// Each coordinate is drawn independently from its dimensions `[min, max)`.
    ///
    /// # Arguments:
    /// bounds: one `(min, max)` pair per dimension of the search space
    pub fn initialize(&mut self, bounds: &[(f64, f64)]) -> Result<()> {
        if self.stage != Stage::Created {
            return Err(Error::OutOfOrder("swarm locations are already initialized"));
        }
        if bounds.is_empty() {
            return Err(Error::ZeroDimensions);
        }
        for (dimension, &(min, max)) in bounds.iter().enumerate() {
            if !is_valid_range(min, max, self.sampling) {
                return Err(Error::InvalidBounds {
                    dimension,
                    min,
                    max,
                });
            }
        }

        self.dimensions = bounds.len();
        self.particles = (0..self.particle_count)
            .map(|_| {
                let location = Vector::from_iterator(
                    bounds.len(),
                    bounds
                        .iter()
                        .map(|&(min, max)| random_in_range(&mut self.rng, min, max, self.sampling)),
                );
                Particle::new(location)
            })
            .collect();
        self.stage = Stage::Positioned;

        Ok(())
    }

    /// Evaluate every particle, record it as its own personal best and give it a random velocity.
    /// Afterwards the global best is seeded from the first particle and updated from the rest.
    ///
    /// # Arguments:
    /// objective: the function to minimize
    /// max_initial_speed: each velocity component is drawn from `[-max_initial_speed, max_initial_speed)`
    pub fn initialize_value<O: Objective>(
        &mut self,
        objective: &O,
        max_initial_speed: f64,
    ) -> Result<()> {
        match self.stage {
            Stage::Created => {
                return Err(Error::OutOfOrder(
                    "swarm locations must be initialized before their values",
                ))
            }
            Stage::Ready => return Err(Error::OutOfOrder("swarm values are already initialized")),
            Stage::Positioned => {}
        }
        if let Some(expected) = objective.dimensions() {
            if expected != self.dimensions {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: self.dimensions,
                });
            }
        }
        if !is_valid_range(-max_initial_speed, max_initial_speed, self.sampling) {
            return Err(Error::InvalidSpeed(max_initial_speed));
        }

        for p in self.particles.iter_mut() {
            let fitness = objective.evaluate(p.location());
            let velocity = Vector::from_iterator(
                self.dimensions,
                (0..self.dimensions).map(|_| {
                    random_in_range(
                        &mut self.rng,
                        -max_initial_speed,
                        max_initial_speed,
                        self.sampling,
                    )
                }),
            );
            p.init_values(fitness, velocity);
        }
        self.stage = Stage::Ready;
        self.seed_global_best();

        Ok(())
    }

    /// Replace the global best with any strictly better personal best.
    /// On ties the earliest found best is kept.
    pub fn update_global_best(&mut self) -> Result<()> {
        if self.stage != Stage::Ready {
            return Err(Error::OutOfOrder(
                "swarm values must be initialized before updating the global best",
            ));
        }
        self.scan_global_best();

        Ok(())
    }

    fn seed_global_best(&mut self) {
        if let Some(first) = self.particles.first() {
            self.best = first.best().clone();
            self.best_fitness = first.best_fitness();
        }
        self.scan_global_best();
        debug!(
            "seeded global best of {} particles with fitness {}",
            self.particles.len(),
            self.best_fitness
        );
    }

    /// Single pass over all personal bests, only strict improvements replace the global best
    pub(crate) fn scan_global_best(&mut self) {
        for p in self.particles.iter() {
            if p.best_fitness() < self.best_fitness {
                debug!("global best improved from {} to {}", self.best_fitness, p.best_fitness());
                self.best_fitness = p.best_fitness();
                self.best = p.best().clone();
            }
        }
    }

    /// True once particle values and the global best are initialized
    #[inline(always)]
    pub fn is_ready(&self) -> bool {
        self.stage == Stage::Ready
    }

    #[inline(always)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline(always)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline(always)]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Dimensionality of the search space, 0 until the locations are initialized
    #[inline(always)]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The best location found by any particle so far
    #[inline(always)]
    pub fn best(&self) -> Option<&Vector> {
        self.is_ready().then_some(&self.best)
    }

    /// The fitness of `best`
    #[inline(always)]
    pub fn best_fitness(&self) -> Option<f64> {
        self.is_ready().then_some(self.best_fitness)
    }

    /// The global best of a ready swarm
    #[inline(always)]
    pub(crate) fn global_best(&self) -> &Vector {
        debug_assert!(self.is_ready());
        &self.best
    }
}

#[cfg(test)]
mod tests {
    use common::Paraboloid;

    use super::*;

    fn v(x: f64, y: f64) -> Vector {
        Vector::from_vec(vec![x, y])
    }

    fn bowl() -> Paraboloid {
        Paraboloid::new(v(0.0, 0.0), 1.0)
    }

    #[test]
    fn empty_swarm() {
        assert_eq!(Swarm::new(0, None).err(), Some(Error::EmptySwarm));
        assert_eq!(Swarm::from_particles(vec![]).err(), Some(Error::EmptySwarm));
    }

    #[test]
    fn initialize_within_bounds() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let bounds = [(-10.0, 10.0), (5.0, 6.0)];
        let mut swarm = Swarm::new(50, Some(0)).unwrap();
        swarm.initialize(&bounds).unwrap();

        assert_eq!(swarm.particles().len(), 50);
        assert_eq!(swarm.dimensions(), 2);
        assert!(!swarm.is_ready());
        assert_eq!(swarm.best(), None);
        for p in swarm.particles() {
            for (x, &(min, max)) in p.location().iter().zip(bounds.iter()) {
                assert!(*x >= min && *x < max);
            }
        }
    }

    #[test]
    fn initialize_truncated() {
        let mut swarm = Swarm::new(50, Some(3)).unwrap().with_sampling(Sampling::Truncated);
        swarm.initialize(&[(-10.0, 10.0), (-10.0, 10.0)]).unwrap();
        swarm.initialize_value(&bowl(), 2.0).unwrap();

        for p in swarm.particles() {
            assert!(p.location().iter().all(|x| *x == x.trunc()));
            assert!(p.velocity().iter().all(|x| *x == x.trunc() && *x >= -2.0 && *x < 2.0));
        }
    }

    #[test]
    fn initialize_truncated_fractional_bounds() {
        let mut swarm = Swarm::new(200, Some(4)).unwrap().with_sampling(Sampling::Truncated);
        assert_eq!(
            swarm.initialize(&[(0.5, 0.9), (0.5, 0.9)]),
            Err(Error::InvalidBounds {
                dimension: 0,
                min: 0.5,
                max: 0.9
            })
        );

        let bounds = [(0.5, 2.5), (-1.5, 0.5)];
        swarm.initialize(&bounds).unwrap();
        swarm.initialize_value(&bowl(), 0.5).unwrap();
        for p in swarm.particles() {
            for (x, &(min, max)) in p.location().iter().zip(bounds.iter()) {
                assert!(*x >= min && *x < max);
                assert_eq!(*x, x.trunc());
            }
            assert!(p.velocity().iter().all(|x| *x == 0.0));
        }
    }

    #[test]
    fn rejects_overflowing_ranges() {
        let mut swarm = Swarm::new(5, Some(0)).unwrap();
        assert_eq!(
            swarm.initialize(&[(-f64::MAX, f64::MAX)]),
            Err(Error::InvalidBounds {
                dimension: 0,
                min: -f64::MAX,
                max: f64::MAX
            })
        );

        swarm.initialize(&[(-1.0, 1.0)]).unwrap();
        let f = |p: &Vector| p.norm_squared();
        assert_eq!(swarm.initialize_value(&f, f64::MAX), Err(Error::InvalidSpeed(f64::MAX)));
        swarm.initialize_value(&f, 1.0).unwrap();
        assert!(swarm.particles().iter().all(|p| p.location()[0].is_finite()));
    }

    #[test]
    fn initialize_rejects_bad_input() {
        let mut swarm = Swarm::new(5, Some(0)).unwrap();
        assert_eq!(swarm.initialize(&[]), Err(Error::ZeroDimensions));
        assert_eq!(
            swarm.initialize(&[(0.0, 1.0), (2.0, -2.0)]),
            Err(Error::InvalidBounds {
                dimension: 1,
                min: 2.0,
                max: -2.0
            })
        );

        swarm.initialize(&[(0.0, 1.0)]).unwrap();
        assert!(matches!(swarm.initialize(&[(0.0, 1.0)]), Err(Error::OutOfOrder(_))));
    }

    #[test]
    fn lifecycle_order() {
        let mut swarm = Swarm::new(5, Some(0)).unwrap();
        assert!(matches!(swarm.initialize_value(&bowl(), 1.0), Err(Error::OutOfOrder(_))));
        assert!(matches!(swarm.update_global_best(), Err(Error::OutOfOrder(_))));

        swarm.initialize(&[(-1.0, 1.0), (-1.0, 1.0)]).unwrap();
        assert!(matches!(swarm.update_global_best(), Err(Error::OutOfOrder(_))));
        assert_eq!(swarm.initialize_value(&bowl(), -1.0), Err(Error::InvalidSpeed(-1.0)));

        swarm.initialize_value(&bowl(), 1.0).unwrap();
        assert!(swarm.is_ready());
        assert!(matches!(swarm.initialize_value(&bowl(), 1.0), Err(Error::OutOfOrder(_))));
        assert_eq!(swarm.update_global_best(), Ok(()));
    }

    #[test]
    fn initialize_value_dimension_mismatch() {
        let mut swarm = Swarm::new(5, Some(0)).unwrap();
        swarm.initialize(&[(-1.0, 1.0), (-1.0, 1.0), (-1.0, 1.0)]).unwrap();

        assert_eq!(
            swarm.initialize_value(&bowl(), 1.0),
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn initialize_value_seeds_global_best() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let f = bowl();
        let mut swarm = Swarm::new(20, Some(42)).unwrap();
        swarm.initialize(&[(-10.0, 10.0), (-10.0, 10.0)]).unwrap();
        swarm.initialize_value(&f, 1.0).unwrap();

        let min = swarm.particles().iter().map(|p| p.best_fitness()).fold(f64::MAX, f64::min);
        assert_eq!(swarm.best_fitness(), Some(min));
        for p in swarm.particles() {
            assert_eq!(p.best(), p.location());
            assert_eq!(p.fitness(), f.evaluate(p.location()));
            assert_eq!(p.best_fitness(), p.fitness());
            assert!(p.velocity().iter().all(|x| *x >= -1.0 && *x < 1.0));
        }
    }

    #[test]
    fn global_best_first_index_wins_ties() {
        let f = bowl();
        let particles = vec![
            Particle::with_velocity(v(3.0, 3.0), v(0.0, 0.0), &f),
            Particle::with_velocity(v(1.0, 0.0), v(0.0, 0.0), &f),
            Particle::with_velocity(v(0.0, 1.0), v(0.0, 0.0), &f),
            Particle::with_velocity(v(0.0, -1.0), v(0.0, 0.0), &f),
        ];
        let mut swarm = Swarm::from_particles(particles).unwrap();

        assert_eq!(swarm.best(), Some(&v(1.0, 0.0)));
        assert_eq!(swarm.best_fitness(), Some(1.0));

        swarm.update_global_best().unwrap();
        assert_eq!(swarm.best(), Some(&v(1.0, 0.0)));
    }

    #[test]
    fn from_particles_rejects_unevaluated() {
        let f = bowl();
        let particles = vec![
            Particle::with_velocity(v(1.0, 1.0), v(0.0, 0.0), &f),
            Particle::new(v(10.0, 10.0)),
        ];

        assert!(matches!(Swarm::from_particles(particles), Err(Error::OutOfOrder(_))));
        assert!(matches!(
            Swarm::from_particles(vec![Particle::new(v(10.0, 10.0))]),
            Err(Error::OutOfOrder(_))
        ));
    }

    #[test]
    fn from_particles_is_reproducible() {
        let f = bowl();
        let build = || {
            Swarm::from_particles(vec![
                Particle::with_velocity(v(2.0, 1.0), v(0.5, 0.0), &f),
                Particle::with_velocity(v(-1.0, 0.0), v(0.0, 0.5), &f),
            ])
            .unwrap()
        };

        assert_eq!(format!("{:?}", build()), format!("{:?}", build()));
        assert_eq!(build().best(), Some(&v(-1.0, 0.0)));
    }

    #[test]
    fn from_particles_dimension_mismatch() {
        let f = |p: &Vector| p.norm_squared();
        let particles = vec![
            Particle::with_velocity(v(1.0, 1.0), v(0.0, 0.0), &f),
            Particle::with_velocity(Vector::from_vec(vec![1.0]), Vector::from_vec(vec![0.0]), &f),
        ];

        assert_eq!(
            Swarm::from_particles(particles).err(),
            Some(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn seeded_swarms_are_identical() {
        let init = |seed| {
            let mut swarm = Swarm::new(10, Some(seed)).unwrap();
            swarm.initialize(&[(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
            swarm.initialize_value(&bowl(), 1.0).unwrap();
            swarm
        };

        assert_eq!(init(7).particles(), init(7).particles());
        assert_ne!(init(7).particles(), init(8).particles());
    }
}
