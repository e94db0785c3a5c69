use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 500;
/// |z|² threshold, i.e. an escape radius of √10.
pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 10.0;

/// Escape-time iteration of `z ← z² + c` starting from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
        }
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_radius_squared: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadius(escape_radius_squared));
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared,
        })
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    /// Index of the update `z ← z² + c` that left the escape radius, counting
    /// the first update as `0`. At most `max_iterations` updates are tried.
    fn escape_time(&self, c: Complex) -> Option<u32> {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = z.square() + c;
            if z.magnitude_squared() > self.escape_radius_squared {
                return Some(iteration);
            }
        }

        None
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
