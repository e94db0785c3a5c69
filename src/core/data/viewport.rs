use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::frame_geometry::FrameGeometry;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
    #[error("zoom factor must be finite and positive, got {0}")]
    InvalidZoomFactor(f64),
    #[error("offset must be finite, got ({x}, {y})")]
    NonFiniteOffset { x: f64, y: f64 },
    #[error("pan delta must be finite, got ({dx}, {dy})")]
    NonFinitePan { dx: f64, dy: f64 },
}

/// Pan offset and zoom of the view onto the complex plane.
///
/// A normalized screen point `(nx, ny)` maps to
/// `offset + (nx * scale_x, ny * scale_y) / zoom`, with the scales taken
/// from the [`FrameGeometry`]. `offset` is therefore the world point at the
/// centre of the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    offset_x: f64,
    offset_y: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(offset_x: f64, offset_y: f64, zoom: f64) -> Result<Self, ViewportError> {
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(ViewportError::NonFiniteOffset { x: offset_x, y: offset_y });
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(zoom));
        }

        Ok(Self { offset_x, offset_y, zoom })
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn screen_to_world(&self, geometry: &FrameGeometry, nx: f64, ny: f64) -> Complex {
        Complex {
            real: self.offset_x + nx * geometry.scale_x() / self.zoom,
            imag: self.offset_y + ny * geometry.scale_y() / self.zoom,
        }
    }

    #[must_use]
    pub fn world_to_screen(&self, geometry: &FrameGeometry, point: Complex) -> (f64, f64) {
        (
            (point.real - self.offset_x) * self.zoom / geometry.scale_x(),
            (point.imag - self.offset_y) * self.zoom / geometry.scale_y(),
        )
    }

    /// Moves the view by `(dx, dy)` world units as measured at zoom 1, so a
    /// given input delta moves the picture the same distance on screen at
    /// any zoom level.
    ///
    /// On error the viewport is left unchanged.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<(), ViewportError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::NonFinitePan { dx, dy });
        }

        *self = Self::new(self.offset_x + dx / self.zoom, self.offset_y + dy / self.zoom, self.zoom)?;
        Ok(())
    }

    /// Multiplies zoom by `factor` while keeping the world point under the
    /// normalized screen point `(nx, ny)` in place.
    ///
    /// On error the viewport is left unchanged.
    pub fn zoom_around_point(
        &mut self,
        geometry: &FrameGeometry,
        nx: f64,
        ny: f64,
        factor: f64,
    ) -> Result<(), ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor(factor));
        }

        let new_zoom = self.zoom * factor;
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(new_zoom));
        }

        let inverse_delta = self.zoom.recip() - new_zoom.recip();
        let offset_x = self.offset_x + nx * geometry.scale_x() * inverse_delta;
        let offset_y = self.offset_y + ny * geometry.scale_y() * inverse_delta;

        *self = Self::new(offset_x, offset_y, new_zoom)?;
        Ok(())
    }
}
