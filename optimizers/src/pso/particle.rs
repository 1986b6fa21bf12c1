use common::{Objective, Vector};

/// A single candidate solution, remembering the best location it has visited
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    location: Vector,
    velocity: Vector,
    fitness: f64,
    best: Vector,
    best_fitness: f64,
    evaluated: bool,
}

impl Particle {
    /// Create a particle at `location` which has not been evaluated yet.
    /// Its velocity is zero and its fitness is `f64::MAX` until the swarm initializes its values.
    pub fn new(location: Vector) -> Self {
        Self {
            velocity: Vector::zeros(location.len()),
            fitness: f64::MAX,
            best: location.clone(),
            best_fitness: f64::MAX,
            evaluated: false,
            location,
        }
    }

    /// Create a fully initialized particle at `location` moving with `velocity`.
    /// Its personal best is the starting location.
    pub fn with_velocity<O: Objective>(location: Vector, velocity: Vector, objective: &O) -> Self {
        let mut p = Self::new(location);
        let fitness = objective.evaluate(&p.location);
        p.init_values(fitness, velocity);
        p
    }

    /// Sets the values which depend on the objective
    pub(crate) fn init_values(&mut self, fitness: f64, velocity: Vector) {
        self.fitness = fitness;
        self.best = self.location.clone();
        self.best_fitness = fitness;
        self.velocity = velocity;
        self.evaluated = true;
    }

    /// Move the particle to an already evaluated location.
    /// Ties with the personal best move the personal best as well.
    pub(crate) fn advance(&mut self, location: Vector, velocity: Vector, fitness: f64) {
        self.location = location;
        self.velocity = velocity;
        self.fitness = fitness;
        if fitness <= self.best_fitness {
            self.best = self.location.clone();
            self.best_fitness = fitness;
        }
    }

    #[inline(always)]
    pub fn location(&self) -> &Vector {
        &self.location
    }

    #[inline(always)]
    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    /// The fitness at the current location
    #[inline(always)]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// The best location this particle has visited
    #[inline(always)]
    pub fn best(&self) -> &Vector {
        &self.best
    }

    /// The fitness of `best`
    #[inline(always)]
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// False until the particle has been evaluated against an objective
    #[inline(always)]
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Number of dimensions of the search space this particle lives in
    #[inline(always)]
    pub fn dimensions(&self) -> usize {
        self.location.len()
    }
}
