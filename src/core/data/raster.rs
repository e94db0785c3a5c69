use thiserror::Error;

use crate::core::data::band::Band;
use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("raster size {expected_width}x{expected_height} does not match {actual_width}x{actual_height}")]
    SizeMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("band {start}..{end} does not continue the partition at row {expected_start} of {height}")]
    BandOutOfOrder {
        start: u32,
        end: u32,
        expected_start: u32,
        height: u32,
    },
}

/// Fixed-size grid of packed `0xRRGGBBAA` pixels stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::BLACK.pack(); width as usize * height as usize],
        })
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
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn fill(&mut self, colour: Colour) {
        self.pixels.fill(colour.pack());
    }

    /// Overwrites this raster with `other`, which must be the same size.
    pub fn copy_from(&mut self, other: &Raster) -> Result<(), RasterError> {
        self.ensure_same_size(other.width, other.height)?;
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }

    pub fn ensure_same_size(&self, width: u32, height: u32) -> Result<(), RasterError> {
        if self.width != width || self.height != height {
            return Err(RasterError::SizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: width,
                actual_height: height,
            });
        }

        Ok(())
    }

    /// Splits the raster into one mutable row slice per band.
    ///
    /// `bands` must be an exact, ordered partition of `[0, height)`; the
    /// returned slices are disjoint, so each can be handed to a different
    /// worker.
    pub fn split_bands_mut(&mut self, bands: &[Band]) -> Result<Vec<(Band, &mut [u32])>, RasterError> {
        let row_len = self.width as usize;
        let mut remaining: &mut [u32] = &mut self.pixels;
        let mut expected_start = 0;
        let mut slices = Vec::with_capacity(bands.len());

        for &band in bands {
            if band.start != expected_start || band.end < band.start || band.end > self.height {
                return Err(RasterError::BandOutOfOrder {
                    start: band.start,
                    end: band.end,
                    expected_start,
                    height: self.height,
                });
            }

            let (head, tail) = std::mem::take(&mut remaining).split_at_mut(band.len() as usize * row_len);
            slices.push((band, head));
            remaining = tail;
            expected_start = band.end;
        }

        if expected_start != self.height {
            return Err(RasterError::BandOutOfOrder {
                start: expected_start,
                end: expected_start,
                expected_start,
                height: self.height,
            });
        }

        Ok(slices)
    }

    /// Returns the pixels as tightly packed RGB bytes, dropping alpha.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&packed| {
                let colour = Colour::unpack(packed);
                [colour.r, colour.g, colour.b]
            })
            .collect()
    }
}
