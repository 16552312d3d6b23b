//! Column-major, channel-planar pixel buffer and the scanline transpose
//! writer.
//!
//! Numeric-array hosts store an image as a `[height, width, 3]` array in
//! Fortran order: three contiguous planes (R, then G, then B), each plane
//! column-major so the sample for row `y`, column `x` sits at flat offset
//! `x * height + y`. JPEG codecs hand out the transposed opposite —
//! row-major scanlines of interleaved RGB — so each decoded row is scattered
//! into all three planes as it arrives.

use rgb::AsPixels as _;
use rgb::RGB8;

/// One of the three color planes of a [`PlanarImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    R = 0,
    G = 1,
    B = 2,
}

/// Fully decoded pixel array in column-major, channel-planar layout.
///
/// The backing buffer is `height * width * 3` bytes: plane R at offset 0,
/// plane G at `height * width`, plane B at `2 * height * width`. Within a
/// plane, successive rows of the same column are adjacent (unit stride down
/// a column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanarImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PlanarImage {
    /// Allocate a zero-initialized buffer for a `height` x `width` image.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        PlanarImage {
            data: vec![0u8; height * width * 3],
            width,
            height,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Array shape in host convention: `[height, width, 3]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, 3]
    }

    /// One whole color plane, `height * width` bytes, column-major.
    pub fn plane(&self, channel: Channel) -> &[u8] {
        let plane = self.height * self.width;
        let start = channel as usize * plane;
        &self.data[start..start + plane]
    }

    /// Sample at row `y`, column `x` of the given plane.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x >= width`.
    pub fn sample(&self, y: usize, x: usize, channel: Channel) -> u8 {
        assert!(y < self.height && x < self.width, "sample out of bounds");
        self.plane(channel)[x * self.height + y]
    }

    /// The whole backing buffer: planes R, G, B back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image and take the backing buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Scatter one interleaved RGB scanline into the three planes.
    ///
    /// `row` is the decoded scanline for row index `y`, `width * 3` bytes in
    /// RGBRGB… order. Each pixel's samples land at `x * height + y` in their
    /// respective planes. Writing rows 0..height exactly once covers every
    /// output element exactly once.
    pub(crate) fn write_scanline(&mut self, y: usize, row: &[u8]) {
        debug_assert!(y < self.height);
        debug_assert_eq!(row.len(), self.width * 3);

        let plane = self.height * self.width;
        let (r, rest) = self.data.split_at_mut(plane);
        let (g, b) = rest.split_at_mut(plane);

        let pixels: &[RGB8] = row.as_pixels();
        for (x, px) in pixels.iter().enumerate() {
            let dst = x * self.height + y;
            r[dst] = px.r;
            g[dst] = px.g;
            b[dst] = px.b;
        }
    }
}
