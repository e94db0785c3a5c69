use crate::core::data::complex::Complex;

/// Escape-time evaluation of a single point of the complex plane.
///
/// Implementations must be pure so bands can be evaluated from any thread.
pub trait FractalAlgorithm: Send + Sync {
    /// Returns the iteration on which `c` escaped, or `None` if it stayed
    /// bounded for the whole budget.
    fn escape_time(&self, c: Complex) -> Option<u32>;

    /// Escape count with `0` standing in for points that never escaped.
    fn iterate(&self, c: Complex) -> u32 {
        self.escape_time(c).unwrap_or(0)
    }

    fn max_iterations(&self) -> u32;
}
