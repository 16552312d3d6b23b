//! # zenplanar
//!
//! Baseline JPEG decoding into column-major, channel-planar pixel arrays.
//!
//! Numeric-array hosts (MATLAB, Octave, Fortran-ordered NumPy views) store
//! an image as a `[height, width, 3]` array: one contiguous plane per
//! channel, each plane column-major. JPEG codecs produce the opposite
//! layout — row-major scanlines of interleaved RGB samples. This crate
//! decodes a JPEG from an in-memory byte buffer and performs that layout
//! transform in one streaming pass: each scanline is pulled from the codec
//! and immediately scattered into the three output planes, with no
//! intermediate full-image copy in host layout.
//!
//! Only 3-channel (RGB) sources are supported; grayscale and CMYK JPEGs are
//! rejected with [`PlanarError::UnsupportedFormat`] rather than converted.
//!
//! ## Usage
//!
//! ```no_run
//! use zenplanar::{Channel, decode};
//!
//! let data: &[u8] = &[]; // raw JPEG file contents
//! let image = decode(data)?;
//! println!("{}x{}", image.width(), image.height());
//!
//! // Sample for row y, column x lives at x * height + y in each plane
//! let red = image.plane(Channel::R);
//! # Ok::<(), zenplanar::PlanarError>(())
//! ```
//!
//! ## Probing
//!
//! [`probe::probe`] reads the frame header with pure byte parsing — enough
//! to learn dimensions and component count (and so predict an
//! `UnsupportedFormat` rejection) without creating a decode session.

#![forbid(unsafe_code)]

mod codec;
mod decode;
mod error;
mod limits;
mod planar;
pub mod probe;

// Re-exports
pub use codec::{JpegScanlines, ScanlineSource};
pub use decode::{DecodeRequest, decode, decode_from_source};
pub use error::PlanarError;
pub use limits::Limits;
pub use planar::{Channel, PlanarImage};
