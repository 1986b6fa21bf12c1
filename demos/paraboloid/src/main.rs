#[macro_use]
extern crate log;

use common::{Paraboloid, Vector};
use optimizers::{
    pso::{Optimizer, Params, Swarm},
    Sampling,
};

const SEED: Option<u64> = Some(0);
const NUM_PARTICLES: usize = 30;
const NUM_STEPS: usize = 100;
const LOG_EVERY: usize = 10;
const BOUNDS: [(f64, f64); 2] = [(-100.0, 100.0), (-100.0, 100.0)];
const MAX_INITIAL_SPEED: f64 = 5.0;

pub(crate) fn main() -> optimizers::Result<()> {
    pretty_env_logger::init();

    let objective = Paraboloid::new(Vector::from_vec(vec![12.0, -7.0]), 10.0);

    let mut swarm = Swarm::new(NUM_PARTICLES, SEED)?.with_sampling(Sampling::Truncated);
    swarm.initialize(&BOUNDS)?;
    swarm.initialize_value(&objective, MAX_INITIAL_SPEED)?;
    info!(
        "initialized {} particles, best fitness: {:?}",
        swarm.particle_count(),
        swarm.best_fitness()
    );

    let params = Params {
        inertia_weight: 0.8,
        cognitive_weight: 2.0,
        social_weight: 2.0,
        velocity_max: 10.0,
        velocity_min: -10.0,
        seed: SEED,
    };
    let mut opt = Optimizer::new(swarm, objective, params)?;

    for i in 0..NUM_STEPS {
        opt.step();
        if i % LOG_EVERY == 0 {
            info!("step {}: best fitness {:?} at {:?}", i, opt.best_fitness(), opt.best());
        }
    }
    info!(
        "done after {} steps, origin: {:?}, best: {:?}, best fitness: {:?}",
        NUM_STEPS,
        opt.objective().origin(),
        opt.best(),
        opt.best_fitness()
    );

    Ok(())
}
