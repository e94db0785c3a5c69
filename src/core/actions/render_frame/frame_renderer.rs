use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::band::Band;
use crate::core::data::colour::Colour;
use crate::core::data::frame_geometry::FrameGeometry;
use crate::core::data::viewport::Viewport;

/// Per-pixel pipeline: normalize, map through the viewport, iterate, colour.
#[derive(Debug, Clone)]
pub struct FrameRenderer<A, M> {
    algorithm: A,
    colour_map: M,
    geometry: FrameGeometry,
}

impl<A: FractalAlgorithm, M: ColourMap> FrameRenderer<A, M> {
    pub fn new(algorithm: A, colour_map: M, geometry: FrameGeometry) -> Self {
        Self {
            algorithm,
            colour_map,
            geometry,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &M {
        &self.colour_map
    }

    #[must_use]
    pub fn escape_time_at(&self, viewport: &Viewport, x: u32, y: u32) -> Option<u32> {
        let (nx, ny) = self.geometry.pixel_to_normalized(f64::from(x), f64::from(y));
        let c = viewport.screen_to_world(&self.geometry, nx, ny);

        self.algorithm.escape_time(c)
    }

    #[must_use]
    pub fn iterations_at(&self, viewport: &Viewport, x: u32, y: u32) -> u32 {
        self.escape_time_at(viewport, x, y).unwrap_or(0)
    }

    #[must_use]
    pub fn colour_at(&self, viewport: &Viewport, x: u32, y: u32) -> Colour {
        self.colour_map.map_escape(self.escape_time_at(viewport, x, y))
    }

    /// Fills `rows`, the raster slice holding `band`, checking `cancel`
    /// before each row.
    pub fn render_band<C: CancelToken>(
        &self,
        viewport: &Viewport,
        band: Band,
        rows: &mut [u32],
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let width = self.geometry.width() as usize;

        for (y, row) in band.rows().zip(rows.chunks_exact_mut(width)) {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            for (x, pixel) in (0u32..).zip(row.iter_mut()) {
                *pixel = self.colour_at(viewport, x, y).pack();
            }
        }

        Ok(())
    }
}
