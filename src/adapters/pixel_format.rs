//! Conversions from the renderer's packed pixels to surface byte layouts.

const CROSSHAIR_OUTLINE: [u8; 4] = [0, 0, 0, 255];
const CROSSHAIR_MARKER: [u8; 4] = [127, 106, 79, 255];

/// Expands packed `0xRRGGBBAA` pixels into RGBA bytes.
///
/// # Panics
/// Panics if `dst` is not exactly four bytes per source pixel.
pub fn copy_packed_rgba_to_bytes(src: &[u32], dst: &mut [u8]) {
    assert_eq!(
        dst.len(),
        src.len() * 4,
        "dst length {} does not match expected {}",
        dst.len(),
        src.len() * 4
    );

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel.copy_from_slice(&packed.to_be_bytes());
    }
}

/// Draws the centre marker into an RGBA frame: a black 4x4 square with a
/// tan 2x2 square inside it.
pub fn draw_crosshair(frame: &mut [u8], width: u32, height: u32) {
    let cx = i64::from(width / 2);
    let cy = i64::from(height / 2);

    fill_square(frame, width, height, cx - 2, cy - 2, 4, CROSSHAIR_OUTLINE);
    fill_square(frame, width, height, cx - 1, cy - 1, 2, CROSSHAIR_MARKER);
}

fn fill_square(frame: &mut [u8], width: u32, height: u32, left: i64, top: i64, size: i64, colour: [u8; 4]) {
    for y in top..top + size {
        for x in left..left + size {
            if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                continue;
            }

            let index = (y as usize * width as usize + x as usize) * 4;
            if let Some(pixel) = frame.get_mut(index..index + 4) {
                pixel.copy_from_slice(&colour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * width + x) * 4) as usize;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn test_copy_packed_rgba_known_values() {
        let src = [0xFF00_00FF, 0x00FF_00FF, 0x0000_FF80];
        let mut dst = vec![0; 12];

        copy_packed_rgba_to_bytes(&src, &mut dst);

        assert_eq!(dst, vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 128]);
    }

    #[test]
    fn test_copy_packed_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_packed_rgba_to_bytes(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_packed_rgba_rejects_wrong_length() {
        let mut dst = vec![0; 3];

        copy_packed_rgba_to_bytes(&[0], &mut dst);
    }

    #[test]
    fn test_crosshair_outline_and_marker() {
        let (width, height) = (10, 8);
        let mut frame = vec![255; (width * height * 4) as usize];

        draw_crosshair(&mut frame, width, height);

        assert_eq!(pixel(&frame, width, 3, 2), CROSSHAIR_OUTLINE);
        assert_eq!(pixel(&frame, width, 6, 5), CROSSHAIR_OUTLINE);
        assert_eq!(pixel(&frame, width, 4, 3), CROSSHAIR_MARKER);
        assert_eq!(pixel(&frame, width, 5, 4), CROSSHAIR_MARKER);
        assert_eq!(pixel(&frame, width, 2, 2), [255; 4]);
        assert_eq!(pixel(&frame, width, 7, 5), [255; 4]);
    }

    #[test]
    fn test_crosshair_is_clipped_on_tiny_frames() {
        let mut frame = vec![255; 4];

        draw_crosshair(&mut frame, 1, 1);

        assert_eq!(frame, CROSSHAIR_MARKER.to_vec());
    }
}
