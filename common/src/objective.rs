use crate::Vector;

/// Anything that maps a point in search space to a scalar fitness.
/// Lower fitness is better.
pub trait Objective {
    /// Evaluates the fitness at the given point
    ///
    /// # Arguments:
    /// point: a location in search space
    ///
    /// # Returns:
    /// the fitness, where lower is better
    fn evaluate(&self, point: &Vector) -> f64;

    /// The dimensionality this objective is defined on.
    /// `None` accepts points of any dimensionality.
    fn dimensions(&self) -> Option<usize> {
        None
    }
}

impl<F> Objective for F
where
    F: Fn(&Vector) -> f64,
{
    #[inline(always)]
    fn evaluate(&self, point: &Vector) -> f64 {
        self(point)
    }
}
