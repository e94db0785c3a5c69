use std::ops::Range;

/// Half-open range of raster rows `[start, end)` filled as one unit of work.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Band {
    pub start: u32,
    pub end: u32,
}

impl Band {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start..self.end
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
