//! Header probing without pixel decode.
//!
//! Scans JPEG marker segments for the SOF (Start of Frame) header to extract
//! dimensions, sample precision, and component count from a leading slice of
//! the file. Pure byte parsing — no codec session is created, so callers can
//! predict an [`UnsupportedFormat`](crate::PlanarError::UnsupportedFormat)
//! rejection (component count ≠ 3) before paying for a decode.
//!
//! Truncated or garbage data yields `None` fields, never an error or panic.

/// Result of probing JPEG header data.
///
/// All fields are `Option`, since partial data may end before the SOF marker.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct JpegHeader {
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
    /// Sample precision in bits (8 for baseline).
    pub bit_depth: Option<u8>,
    /// Number of color components (1 = grayscale, 3 = RGB/YCbCr, 4 = CMYK).
    pub components: Option<u8>,
    /// Number of bytes examined from the input.
    pub bytes_examined: usize,
}

impl JpegHeader {
    fn empty(bytes_examined: usize) -> Self {
        JpegHeader {
            width: None,
            height: None,
            bit_depth: None,
            components: None,
            bytes_examined,
        }
    }

    /// Whether the frame header promises the 3-channel layout this crate
    /// decodes. `None` when the SOF marker was not reached.
    pub fn is_rgb_compatible(&self) -> Option<bool> {
        self.components.map(|c| c == 3)
    }
}

/// Check the JPEG magic bytes (SOI marker followed by another marker).
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF
}

/// Probe a leading slice of JPEG data for frame header metadata.
///
/// Structure: SOI (FF D8), then marker segments (FF xx, 2-byte length,
/// payload). Stops at the first SOF marker to read precision, height, width,
/// and component count; stops at SOS — past that point only entropy-coded
/// data follows.
pub fn probe(data: &[u8]) -> JpegHeader {
    if data.len() < 4 || !is_jpeg(data) {
        return JpegHeader::empty(data.len());
    }

    // Skip SOI marker (FF D8)
    let mut pos = 2;

    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            // Lost sync — not a valid marker position
            break;
        }

        // Skip padding FF bytes
        while pos + 1 < data.len() && data[pos + 1] == 0xFF {
            pos += 1;
        }

        if pos + 1 >= data.len() {
            break;
        }

        let marker = data[pos + 1];
        pos += 2; // past marker bytes

        // Standalone markers (no length field)
        if marker == 0x00 || marker == 0x01 || (0xD0..=0xD7).contains(&marker) {
            continue;
        }

        // SOS (start of scan) or EOI — stop scanning
        if marker == 0xDA || marker == 0xD9 {
            break;
        }

        // All other markers have a 2-byte length field
        if pos + 2 > data.len() {
            break;
        }

        let seg_len = u16::from_be_bytes([data[pos], data[pos + 1]]) as usize;

        // SOF markers: C0 (baseline), C1 (extended), C2 (progressive),
        // C3 (lossless), C5-C7, C9-CB, CD-CF — all share the same layout
        let is_sof = matches!(
            marker,
            0xC0 | 0xC1
                | 0xC2
                | 0xC3
                | 0xC5
                | 0xC6
                | 0xC7
                | 0xC9
                | 0xCA
                | 0xCB
                | 0xCD
                | 0xCE
                | 0xCF
        );

        if is_sof {
            // SOF payload: length (2) + precision (1) + height (2) +
            // width (2) + component count (1) = 8 bytes
            if pos + 7 < data.len() {
                let precision = data[pos + 2];
                let height = u16::from_be_bytes([data[pos + 3], data[pos + 4]]);
                let width = u16::from_be_bytes([data[pos + 5], data[pos + 6]]);
                let components = data[pos + 7];

                return JpegHeader {
                    width: Some(width as u32),
                    height: Some(height as u32),
                    bit_depth: Some(precision),
                    components: Some(components),
                    bytes_examined: pos + 8,
                };
            }
            // Not enough data to read SOF contents
            break;
        }

        // Skip this segment
        if seg_len < 2 {
            break; // Invalid segment length
        }
        pos += seg_len;
    }

    JpegHeader::empty(pos.min(data.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal synthetic stream: SOI + APP0 (16 bytes) + SOF0 for a
    /// 640x480 8-bit image with the given component count.
    fn synthetic_sof(components: u8) -> Vec<u8> {
        let mut data = vec![0u8; 30];
        data[0] = 0xFF;
        data[1] = 0xD8;
        data[2] = 0xFF;
        data[3] = 0xE0;
        // APP0 length = 16 (including the 2-byte length field)
        data[4] = 0x00;
        data[5] = 0x10;
        // SOF0 at offset 20
        data[20] = 0xFF;
        data[21] = 0xC0;
        data[22] = 0x00;
        data[23] = 0x11;
        data[24] = 8; // precision
        data[25] = 0x01; // height: 480
        data[26] = 0xE0;
        data[27] = 0x02; // width: 640
        data[28] = 0x80;
        data[29] = components;
        data
    }

    #[test]
    fn probe_reads_sof() {
        let header = probe(&synthetic_sof(3));
        assert_eq!(header.width, Some(640));
        assert_eq!(header.height, Some(480));
        assert_eq!(header.bit_depth, Some(8));
        assert_eq!(header.components, Some(3));
        assert_eq!(header.is_rgb_compatible(), Some(true));
    }

    #[test]
    fn probe_flags_grayscale() {
        let header = probe(&synthetic_sof(1));
        assert_eq!(header.components, Some(1));
        assert_eq!(header.is_rgb_compatible(), Some(false));
    }

    #[test]
    fn probe_truncated_before_sof() {
        // SOI + APP0 claiming far more data than present
        let mut data = vec![0u8; 20];
        data[0] = 0xFF;
        data[1] = 0xD8;
        data[2] = 0xFF;
        data[3] = 0xE0;
        data[4] = 0x03; // APP0 length = 1000
        data[5] = 0xE8;

        let header = probe(&data);
        assert_eq!(header.width, None);
        assert_eq!(header.components, None);
        assert_eq!(header.is_rgb_compatible(), None);
    }

    #[test]
    fn probe_too_short() {
        let header = probe(&[0xFF, 0xD8]);
        assert_eq!(header.width, None);
        assert_eq!(header.bytes_examined, 2);
    }

    #[test]
    fn probe_non_jpeg() {
        let header = probe(b"not a jpeg at all");
        assert_eq!(header.width, None);
        assert!(!is_jpeg(b"not a jpeg at all"));
    }

    #[test]
    fn probe_truncation_never_panics() {
        let data = synthetic_sof(3);
        for len in 0..data.len() {
            let _ = probe(&data[..len]);
        }
    }

    #[test]
    fn probe_real_encoded_jpeg() {
        let mut encoded = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut encoded, 90);
        let pixels = vec![128u8; 24 * 18 * 3];
        encoder
            .encode(&pixels, 24, 18, jpeg_encoder::ColorType::Rgb)
            .unwrap();

        assert!(is_jpeg(&encoded));
        let header = probe(&encoded);
        assert_eq!(header.width, Some(24));
        assert_eq!(header.height, Some(18));
        assert_eq!(header.bit_depth, Some(8));
        assert_eq!(header.components, Some(3));

        for len in (1..encoded.len()).step_by(17) {
            let _ = probe(&encoded[..len]);
        }
    }

    #[test]
    fn probe_real_grayscale_jpeg() {
        let mut encoded = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut encoded, 90);
        let pixels = vec![200u8; 16 * 16];
        encoder
            .encode(&pixels, 16, 16, jpeg_encoder::ColorType::Luma)
            .unwrap();

        let header = probe(&encoded);
        assert_eq!(header.components, Some(1));
        assert_eq!(header.is_rgb_compatible(), Some(false));
    }
}
