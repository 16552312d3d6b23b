//! Error types for planar JPEG decoding.

/// Errors from decoding a JPEG into a planar pixel array.
///
/// The whole decode fails atomically — no variant leaves a partial output
/// behind, and session resources are released before the error is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlanarError {
    /// Caller-supplied argument is malformed: empty input, or a shaped byte
    /// buffer that is not a vector. Detected before any codec state exists.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Structurally valid JPEG, but the channel layout is not 3-channel RGB
    /// (grayscale and CMYK sources land here). Raised after header parse,
    /// before any scanline is decoded.
    #[error("unsupported pixel layout {layout}: only 3-channel RGB JPEGs are supported")]
    UnsupportedFormat {
        /// Codec's name for the source layout (e.g. `L8`, `CMYK32`).
        layout: String,
    },

    /// The codec reported a bitstream or internal fault. The message is
    /// forwarded from the codec.
    #[error("JPEG decode failed: {0}")]
    DecodeFailure(String),

    /// A configured [`Limits`](crate::Limits) cap was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl From<jpeg_decoder::Error> for PlanarError {
    fn from(e: jpeg_decoder::Error) -> Self {
        PlanarError::DecodeFailure(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_layout_name() {
        let err = PlanarError::UnsupportedFormat {
            layout: "CMYK32".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CMYK32"));
        assert!(msg.contains("3-channel"));
    }

    #[test]
    fn codec_error_message_is_forwarded() {
        let codec = jpeg_decoder::Error::Format("first marker is not SOI".into());
        let err = PlanarError::from(codec);
        match &err {
            PlanarError::DecodeFailure(msg) => assert!(msg.contains("SOI")),
            other => panic!("expected DecodeFailure, got {other:?}"),
        }
    }
}
