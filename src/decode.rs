//! Decode entry points: request builder and the scanline pull loop.

use crate::codec::{JpegScanlines, ScanlineSource};
use crate::{Limits, PlanarError, PlanarImage};

/// Decode a JPEG byte buffer into a column-major planar pixel array.
///
/// Convenience wrapper over [`DecodeRequest`] with no limits.
pub fn decode(data: &[u8]) -> Result<PlanarImage, PlanarError> {
    DecodeRequest::new(data).decode()
}

/// JPEG decode request builder.
///
/// # Example
///
/// ```no_run
/// use zenplanar::DecodeRequest;
///
/// let data: &[u8] = &[]; // raw JPEG file contents
/// let image = DecodeRequest::new(data).decode()?;
/// println!("{:?}", image.shape());
/// # Ok::<(), zenplanar::PlanarError>(())
/// ```
#[derive(Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Create a decode request over a borrowed byte buffer.
    pub fn new(data: &'a [u8]) -> Self {
        DecodeRequest { data, limits: None }
    }

    /// Create a request from a host-side shaped byte array.
    ///
    /// Numeric-array hosts pass compressed bytes as a `rows x cols` matrix;
    /// only vectors (one row or one column) are accepted, and the shape must
    /// account for every byte. Anything else is
    /// [`PlanarError::InvalidArgument`], raised before any codec state
    /// exists.
    pub fn from_shaped(data: &'a [u8], rows: usize, cols: usize) -> Result<Self, PlanarError> {
        if rows != 1 && cols != 1 {
            return Err(PlanarError::InvalidArgument(format!(
                "input must be a byte vector, got a {rows}x{cols} matrix"
            )));
        }
        if rows.saturating_mul(cols) != data.len() {
            return Err(PlanarError::InvalidArgument(format!(
                "shape {rows}x{cols} does not match buffer length {}",
                data.len()
            )));
        }
        Ok(Self::new(data))
    }

    /// Set resource limits.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to a planar pixel array.
    ///
    /// Fails atomically: on any error no output is produced and the decode
    /// session (with all codec working memory) has already been torn down.
    pub fn decode(self) -> Result<PlanarImage, PlanarError> {
        if self.data.is_empty() {
            return Err(PlanarError::InvalidArgument("input is empty".into()));
        }

        let mut source = JpegScanlines::open(self.data)?;
        decode_from_source(&mut source, self.limits)
    }
}

/// Drive any [`ScanlineSource`] through the planar transpose writer.
///
/// Pulls exactly `height` scanlines in order, scattering each into the three
/// output planes as it arrives. A source that runs dry early or yields a
/// wrong-length row is a [`PlanarError::DecodeFailure`].
pub fn decode_from_source<S: ScanlineSource>(
    source: &mut S,
    limits: Option<&Limits>,
) -> Result<PlanarImage, PlanarError> {
    let width = source.width();
    let height = source.height();

    if let Some(limits) = limits {
        limits.check(width as u64, height as u64)?;
    }

    let mut out = PlanarImage::zeroed(width, height);
    for y in 0..height {
        let row = source.next_scanline()?.ok_or_else(|| {
            PlanarError::DecodeFailure(format!("source produced {y} of {height} scanlines"))
        })?;
        if row.len() != width * 3 {
            return Err(PlanarError::DecodeFailure(format!(
                "scanline {y} is {} bytes, expected {}",
                row.len(),
                width * 3
            )));
        }
        out.write_scanline(y, row);
    }
    Ok(out)
}
