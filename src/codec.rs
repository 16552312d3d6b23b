//! Codec adapter: pull-based scanline access over the external JPEG decoder.
//!
//! The decoder crate produces a whole interleaved frame per call; this module
//! wraps it behind a one-row-at-a-time pull contract so the planar transpose
//! writer never sees more than one scanline. All codec faults come back as
//! [`PlanarError::DecodeFailure`] result values, and everything the session
//! allocated is dropped with it on every exit path.

use jpeg_decoder::PixelFormat;

use crate::PlanarError;

/// Pull-based source of interleaved RGB scanlines.
///
/// Rows are produced in top-to-bottom order, each exactly `width() * 3`
/// bytes (sample order R, G, B per pixel). `next_scanline` returns `None`
/// once `height()` rows have been produced; pulling past the end is defined
/// and keeps returning `None`.
pub trait ScanlineSource {
    /// Image width in pixels, fixed once the header is parsed.
    fn width(&self) -> usize;

    /// Image height in pixels (total number of scanlines).
    fn height(&self) -> usize;

    /// Produce the next scanline, or `None` when the image is exhausted.
    ///
    /// The returned slice is only valid until the next pull — callers must
    /// consume it immediately.
    fn next_scanline(&mut self) -> Result<Option<&[u8]>, PlanarError>;
}

/// Decode session over a borrowed JPEG byte buffer.
///
/// [`open`](JpegScanlines::open) parses the header and validates the channel
/// layout; entropy decoding is deferred to the first pull. The decoded frame
/// is codec working memory owned by the session — dropped with it whether
/// the decode finishes, fails, or is abandoned mid-image. The input buffer
/// is not retained beyond the session's lifetime.
pub struct JpegScanlines<'a> {
    decoder: jpeg_decoder::Decoder<&'a [u8]>,
    frame: Option<Vec<u8>>,
    width: usize,
    height: usize,
    next_row: usize,
}

impl core::fmt::Debug for JpegScanlines<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JpegScanlines")
            .field("frame", &self.frame)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("next_row", &self.next_row)
            .finish_non_exhaustive()
    }
}

impl<'a> JpegScanlines<'a> {
    /// Parse the JPEG header and validate that the source is 3-channel RGB.
    ///
    /// Grayscale and CMYK sources fail with
    /// [`PlanarError::UnsupportedFormat`] here, before any scanline is
    /// decoded. Malformed headers fail with
    /// [`PlanarError::DecodeFailure`].
    pub fn open(data: &'a [u8]) -> Result<Self, PlanarError> {
        let mut decoder = jpeg_decoder::Decoder::new(data);
        decoder.read_info()?;
        let info = decoder.info().ok_or_else(|| {
            PlanarError::DecodeFailure("codec parsed the header but reported no image info".into())
        })?;

        match info.pixel_format {
            PixelFormat::RGB24 => {}
            other => {
                return Err(PlanarError::UnsupportedFormat {
                    layout: format!("{other:?}"),
                });
            }
        }

        Ok(JpegScanlines {
            decoder,
            frame: None,
            width: info.width as usize,
            height: info.height as usize,
            next_row: 0,
        })
    }
}

impl ScanlineSource for JpegScanlines<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn next_scanline(&mut self) -> Result<Option<&[u8]>, PlanarError> {
        if self.next_row >= self.height {
            return Ok(None);
        }

        let stride = self.width * 3;
        if self.frame.is_none() {
            let frame = self.decoder.decode()?;
            let expected = stride * self.height;
            if frame.len() != expected {
                return Err(PlanarError::DecodeFailure(format!(
                    "codec returned {} bytes for a {}x{} RGB frame, expected {expected}",
                    frame.len(),
                    self.width,
                    self.height,
                )));
            }
            self.frame = Some(frame);
        }

        let row = match self.frame.as_deref() {
            Some(frame) => &frame[self.next_row * stride..(self.next_row + 1) * stride],
            None => return Ok(None),
        };
        self.next_row += 1;
        Ok(Some(row))
    }
}
