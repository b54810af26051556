//! Per-cell pixel sampling.
//!
//! Each pixel of the resampled image becomes one [`AsciiPixel`] holding an
//! 8-bit luminance and the 8-bit color of the pixel. Channels come in at
//! 16 bits and are brought down with a truncating division by 257.

use image::Rgba;
use serde::Serialize;

use super::source::Rgba16Buffer;

/// Divisor from a 16-bit channel to an 8-bit one (65535 / 255).
const DEPTH_RATIO: u32 = 257;

/// Numeric data for one output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AsciiPixel {
    /// Luminance, 0 (black) to 255 (white)
    pub intensity: u8,
    /// The pixel in the gray color model; all three channels are equal
    pub grayscale: [u8; 3],
    /// The pixel's own RGB color
    pub color: [u8; 3],
}

impl AsciiPixel {
    /// Sample a 16-bit straight-alpha RGBA pixel.
    ///
    /// Color channels are alpha-premultiplied first, so transparent pixels
    /// come out black.
    pub fn from_rgba16(pixel: &Rgba<u16>) -> Self {
        let [r, g, b, a] = pixel.0.map(u32::from);
        let r = premultiply(r, a);
        let g = premultiply(g, a);
        let b = premultiply(b, a);

        // BT.601 weights scaled to 1 << 16; the result is already 8-bit.
        let y = ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8;

        AsciiPixel {
            intensity: y,
            grayscale: [y, y, y],
            color: [
                (r / DEPTH_RATIO) as u8,
                (g / DEPTH_RATIO) as u8,
                (b / DEPTH_RATIO) as u8,
            ],
        }
    }
}

fn premultiply(channel: u32, alpha: u32) -> u32 {
    channel * alpha / 0xffff
}

/// Rows of sampled pixels, top to bottom, each row left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PixelGrid {
    rows: Vec<Vec<AsciiPixel>>,
}

impl PixelGrid {
    pub fn from_rows(rows: Vec<Vec<AsciiPixel>>) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<AsciiPixel>] {
        &self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&AsciiPixel> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    pub fn into_rows(self) -> Vec<Vec<AsciiPixel>> {
        self.rows
    }

    /// Iterate all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &AsciiPixel> {
        self.rows.iter().flatten()
    }

    /// Flip the grid in place.
    ///
    /// `mirror_x` reverses every row, `mirror_y` reverses the row order.
    /// The two flips are independent and commute.
    pub fn mirror(&mut self, mirror_x: bool, mirror_y: bool) {
        if mirror_x {
            for row in &mut self.rows {
                row.reverse();
            }
        }
        if mirror_y {
            self.rows.reverse();
        }
    }
}

/// Walk `image` row by row and build the grid, then apply any flips.
pub fn sample(image: &Rgba16Buffer, mirror_x: bool, mirror_y: bool) -> PixelGrid {
    let rows = image
        .rows()
        .map(|row| row.map(AsciiPixel::from_rgba16).collect())
        .collect();

    let mut grid = PixelGrid::from_rows(rows);
    grid.mirror(mirror_x, mirror_y);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    fn px(r: u16, g: u16, b: u16, a: u16) -> Rgba<u16> {
        Rgba([r, g, b, a])
    }

    fn numbered(width: u32, height: u32) -> Rgba16Buffer {
        // Red channel encodes the column, green the row.
        ImageBuffer::from_fn(width, height, |x, y| {
            px(x as u16 * 257, y as u16 * 257, 0, 0xffff)
        })
    }

    #[test]
    fn test_black_pixel() {
        let p = AsciiPixel::from_rgba16(&px(0, 0, 0, 0xffff));
        assert_eq!(p, AsciiPixel::default());
    }

    #[test]
    fn test_white_pixel() {
        let p = AsciiPixel::from_rgba16(&px(0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(p.intensity, 255);
        assert_eq!(p.grayscale, [255, 255, 255]);
        assert_eq!(p.color, [255, 255, 255]);
    }

    #[test]
    fn test_primary_luminance() {
        let red = AsciiPixel::from_rgba16(&px(0xffff, 0, 0, 0xffff));
        let green = AsciiPixel::from_rgba16(&px(0, 0xffff, 0, 0xffff));
        let blue = AsciiPixel::from_rgba16(&px(0, 0, 0xffff, 0xffff));
        assert_eq!(red.intensity, 76);
        assert_eq!(green.intensity, 149);
        assert_eq!(blue.intensity, 29);
        assert_eq!(red.color, [255, 0, 0]);
        assert_eq!(red.grayscale, [76, 76, 76]);
    }

    #[test]
    fn test_color_truncates() {
        // 256 / 257 truncates to 0, 513 / 257 to 1
        let p = AsciiPixel::from_rgba16(&px(256, 513, 65534, 0xffff));
        assert_eq!(p.color, [0, 1, 254]);
    }

    #[test]
    fn test_transparent_is_black() {
        let p = AsciiPixel::from_rgba16(&px(0xffff, 0xffff, 0xffff, 0));
        assert_eq!(p, AsciiPixel::default());
    }

    #[test]
    fn test_sample_row_major() {
        let grid = sample(&numbered(3, 2), false, false);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(2, 0).unwrap().color, [2, 0, 0]);
        assert_eq!(grid.get(0, 1).unwrap().color, [0, 1, 0]);
        assert!(grid.get(3, 0).is_none());
    }

    #[test]
    fn test_mirror_x() {
        let grid = sample(&numbered(3, 2), true, false);
        assert_eq!(grid.get(0, 0).unwrap().color, [2, 0, 0]);
        assert_eq!(grid.get(2, 1).unwrap().color, [0, 1, 0]);
    }

    #[test]
    fn test_mirror_y() {
        let grid = sample(&numbered(3, 2), false, true);
        assert_eq!(grid.get(0, 0).unwrap().color, [0, 1, 0]);
        assert_eq!(grid.get(2, 1).unwrap().color, [2, 0, 0]);
    }

    #[test]
    fn test_mirror_both() {
        let grid = sample(&numbered(3, 2), true, true);
        assert_eq!(grid.get(0, 0).unwrap().color, [2, 1, 0]);
        assert_eq!(grid.get(2, 1).unwrap().color, [0, 0, 0]);
    }

    #[test]
    fn test_mirror_is_involution() {
        let original = sample(&numbered(4, 3), false, false);
        let mut grid = original.clone();
        grid.mirror(true, false);
        grid.mirror(true, false);
        assert_eq!(grid, original);
        grid.mirror(false, true);
        grid.mirror(false, true);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_empty_grid() {
        let grid = PixelGrid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.pixels().count(), 0);
    }
}
