use thiserror::Error;

/// World half-height visible at zoom 1, so the default view spans `[-2, 2]` vertically.
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum FrameGeometryError {
    #[error("frame size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("half extent must be finite and positive, got {0}")]
    InvalidHalfExtent(f64),
}

/// Fixed raster dimensions plus the world extent they cover at zoom 1.
///
/// Normalized device coordinates run from -1 at the left/top edge of the
/// raster to +1 at its right/bottom edge. The horizontal axis is widened by
/// `width / height` so square world regions stay square on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameGeometry {
    width: u32,
    height: u32,
    half_extent: f64,
}

impl FrameGeometry {
    pub fn new(width: u32, height: u32, half_extent: f64) -> Result<Self, FrameGeometryError> {
        if width == 0 || height == 0 {
            return Err(FrameGeometryError::InvalidSize { width, height });
        }

        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(FrameGeometryError::InvalidHalfExtent(half_extent));
        }

        Ok(Self { width, height, half_extent })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.half_extent
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// World units per normalized unit along x at zoom 1.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.half_extent * self.aspect()
    }

    /// World units per normalized unit along y at zoom 1.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.half_extent
    }

    #[must_use]
    pub fn pixel_to_normalized(&self, x: f64, y: f64) -> (f64, f64) {
        (
            lerp(-1.0, 1.0, x / f64::from(self.width)),
            lerp(-1.0, 1.0, y / f64::from(self.height)),
        )
    }

    #[must_use]
    pub fn normalized_to_pixel(&self, nx: f64, ny: f64) -> (f64, f64) {
        (
            (nx + 1.0) * 0.5 * f64::from(self.width),
            (ny + 1.0) * 0.5 * f64::from(self.height),
        )
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_sizes() {
        assert_eq!(
            FrameGeometry::new(0, 10, DEFAULT_HALF_EXTENT),
            Err(FrameGeometryError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            FrameGeometry::new(10, 0, DEFAULT_HALF_EXTENT),
            Err(FrameGeometryError::InvalidSize { width: 10, height: 0 })
        );
    }

    #[test]
    fn test_rejects_bad_half_extent() {
        assert!(FrameGeometry::new(10, 10, 0.0).is_err());
        assert!(FrameGeometry::new(10, 10, -1.0).is_err());
        assert!(FrameGeometry::new(10, 10, f64::NAN).is_err());
        assert!(FrameGeometry::new(10, 10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_aspect_widens_horizontal_scale() {
        let geometry = FrameGeometry::new(500, 400, 2.0).unwrap();

        assert_eq!(geometry.aspect(), 1.25);
        assert_eq!(geometry.scale_x(), 2.5);
        assert_eq!(geometry.scale_y(), 2.0);
    }

    #[test]
    fn test_pixel_to_normalized_spans_full_raster() {
        let geometry = FrameGeometry::new(4, 4, 2.0).unwrap();

        assert_eq!(geometry.pixel_to_normalized(0.0, 0.0), (-1.0, -1.0));
        assert_eq!(geometry.pixel_to_normalized(2.0, 2.0), (0.0, 0.0));
        assert_eq!(geometry.pixel_to_normalized(4.0, 4.0), (1.0, 1.0));
        assert_eq!(geometry.pixel_to_normalized(1.0, 3.0), (-0.5, 0.5));
    }

    #[test]
    fn test_normalized_to_pixel_inverts_pixel_to_normalized() {
        let geometry = FrameGeometry::new(500, 400, 2.0).unwrap();
        let (nx, ny) = geometry.pixel_to_normalized(123.0, 321.0);
        let (x, y) = geometry.normalized_to_pixel(nx, ny);

        assert!((x - 123.0).abs() < 1e-9);
        assert!((y - 321.0).abs() < 1e-9);
    }
}
