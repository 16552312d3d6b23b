//! Resource limits for decode operations.

use crate::PlanarError;

/// Caps on decoded image size and output allocation.
///
/// All limits are optional; [`Limits::none()`] disables every check. Checked
/// after the header is parsed and before the output buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum image width in pixels.
    pub max_width: Option<u64>,
    /// Maximum image height in pixels.
    pub max_height: Option<u64>,
    /// Maximum total pixels (width × height).
    pub max_pixels: Option<u64>,
    /// Maximum output buffer size in bytes (height × width × 3).
    pub max_output_bytes: Option<u64>,
}

impl Limits {
    /// Create a new `Limits` with no restrictions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check decoded dimensions against every configured cap.
    pub(crate) fn check(&self, width: u64, height: u64) -> Result<(), PlanarError> {
        if let Some(max_width) = self.max_width {
            if width > max_width {
                return Err(PlanarError::LimitExceeded(format!(
                    "width {width} exceeds limit {max_width}"
                )));
            }
        }

        if let Some(max_height) = self.max_height {
            if height > max_height {
                return Err(PlanarError::LimitExceeded(format!(
                    "height {height} exceeds limit {max_height}"
                )));
            }
        }

        let pixels = width.saturating_mul(height);
        if let Some(max_pixels) = self.max_pixels {
            if pixels > max_pixels {
                return Err(PlanarError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max_pixels}"
                )));
            }
        }

        if let Some(max_output) = self.max_output_bytes {
            let bytes = pixels.saturating_mul(3);
            if bytes > max_output {
                return Err(PlanarError::LimitExceeded(format!(
                    "output size {bytes} bytes exceeds limit {max_output}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_none() {
        let limits = Limits::none();
        assert!(limits.check(u64::MAX, 1).is_ok());
        assert!(limits.check(1, u64::MAX).is_ok());
    }

    #[test]
    fn limits_dimensions() {
        let limits = Limits {
            max_width: Some(1000),
            max_height: Some(1000),
            max_pixels: Some(500_000),
            ..Default::default()
        };

        assert!(limits.check(1000, 1000).is_err()); // 1M pixels > 500k
        assert!(limits.check(500, 500).is_ok()); // 250k pixels
        assert!(limits.check(2000, 500).is_err()); // width > 1000
        assert!(limits.check(500, 2000).is_err()); // height > 1000
    }

    #[test]
    fn limits_output_bytes() {
        let limits = Limits {
            max_output_bytes: Some(1_000_000),
            ..Default::default()
        };

        assert!(limits.check(500, 500).is_ok()); // 750k bytes
        assert!(limits.check(1000, 1000).is_err()); // 3M bytes
    }

    #[test]
    fn exceeded_limit_is_limit_exceeded() {
        let limits = Limits {
            max_pixels: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            limits.check(4, 4),
            Err(PlanarError::LimitExceeded(_))
        ));
    }
}
