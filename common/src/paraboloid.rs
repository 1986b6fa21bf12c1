use crate::{Objective, Vector};

/// Squared euclidean distance to a fixed origin.
/// A bowl with its unique minimum of 0.0 at `origin`.
#[derive(Debug, Clone)]
pub struct Paraboloid {
    origin: Vector,
    radius: f64,
}

impl Paraboloid {
    /// Create a new paraboloid centered at `origin`.
    /// `radius` is kept as configuration and does not influence `evaluate`.
    pub fn new(origin: Vector, radius: f64) -> Self {
        Self { origin, radius }
    }

    /// The location of the minimum
    #[inline(always)]
    pub fn origin(&self) -> &Vector {
        &self.origin
    }

    /// The configured radius
    #[inline(always)]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Objective for Paraboloid {
    fn evaluate(&self, point: &Vector) -> f64 {
        point.iter().zip(self.origin.iter()).map(|(p, o)| (p - o).powi(2)).sum()
    }

    #[inline(always)]
    fn dimensions(&self) -> Option<usize> {
        Some(self.origin.len())
    }
}
