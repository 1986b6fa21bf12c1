use nanorand::{Rng, WyRand};
use num::Float;

/// How random coordinates are drawn from a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Uniform over the real interval `[min, max)`
    #[default]
    Continuous,
    /// Uniform draw truncated with `floor`, which yields integer valued coordinates
    Truncated,
}

/// Clamps `value` into `[min, max]`
#[inline(always)]
pub fn clip<F: Float>(min: F, max: F, value: F) -> F {
    if value >= max {
        max
    } else if value <= min {
        min
    } else {
        value
    }
}

/// True if values can be drawn from `[min, max)` using the given sampling policy.
/// Truncated sampling needs a whole number inside the range.
pub fn is_valid_range(min: f64, max: f64, sampling: Sampling) -> bool {
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        return false;
    }
    match sampling {
        Sampling::Continuous => true,
        Sampling::Truncated => min.ceil() < max || (min == max && min == min.ceil()),
    }
}

/// Draws a value from `[min, max)` using the given sampling policy.
/// The range must satisfy `is_valid_range`.
#[inline(always)]
pub fn random_in_range(rng: &mut WyRand, min: f64, max: f64, sampling: Sampling) -> f64 {
    match sampling {
        Sampling::Continuous => rng.generate::<f64>() * (max - min) + min,
        Sampling::Truncated => {
            let min = min.ceil();
            (rng.generate::<f64>() * (max - min) + min).floor()
        }
    }
}
