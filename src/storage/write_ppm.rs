use std::io::Write;

use crate::core::data::raster::Raster;

/// Writes `raster` as a binary (P6) PPM image. Alpha is dropped.
pub fn write_ppm<W: Write>(raster: &Raster, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&raster.to_rgb_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn test_writes_header_then_rgb_bytes() {
        let mut raster = Raster::new(2, 1).unwrap();
        raster.fill(Colour::opaque(1, 2, 3));
        let mut out = Vec::new();

        write_ppm(&raster, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_body_length_matches_dimensions() {
        let raster = Raster::new(5, 3).unwrap();
        let mut out = Vec::new();

        write_ppm(&raster, &mut out).unwrap();

        let header_len = b"P6\n5 3\n255\n".len();
        assert_eq!(out.len(), header_len + 5 * 3 * 3);
    }
}
