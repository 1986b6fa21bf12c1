//! This crate provides the search space types shared by the optimizers

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod objective;
mod paraboloid;

pub use objective::Objective;
pub use paraboloid::Paraboloid;

/// A point in search space.
/// Owned and heap backed, so assigning one to another always copies the coordinates.
pub type Vector = nalgebra::DVector<f64>;
