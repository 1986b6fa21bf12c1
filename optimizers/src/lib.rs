//! Population based optimizers for continuous search spaces

#![deny(unused_imports, unused_crate_dependencies)]

#[macro_use]
extern crate log;

mod errors;
pub mod pso;
mod utils;

pub use common::{Objective, Paraboloid, Vector};
pub use errors::Error;
pub use utils::{clip, is_valid_range, random_in_range, Sampling};

/// Convenience alias for results of this crate
pub type Result<T> = std::result::Result<T, Error>;
