use std::num::NonZeroU32;

use crate::core::data::band::Band;

/// Splits `[0, height)` into contiguous bands.
///
/// Every band gets `height / count` rows and the last one also takes the
/// remainder, so every row is covered exactly once. `band_count` is capped
/// at `height` to avoid empty bands.
#[must_use]
pub fn partition_bands(height: u32, band_count: NonZeroU32) -> Vec<Band> {
    if height == 0 {
        return Vec::new();
    }

    let count = band_count.get().min(height);
    let rows_per_band = height / count;

    (0..count)
        .map(|index| {
            let start = index * rows_per_band;
            let end = if index == count - 1 {
                height
            } else {
                start + rows_per_band
            };

            Band { start, end }
        })
        .collect()
}
