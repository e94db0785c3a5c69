use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape radius squared must be finite and positive, got {0}")]
    InvalidEscapeRadius(f64),
    #[error("palette {channel} channel modulus must be greater than zero")]
    ZeroPaletteModulus { channel: &'static str },
}
