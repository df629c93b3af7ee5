//! Single-byte text encoding for PDF strings.

/// Text encoded to Latin-1 bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Latin1 {
    /// Encoded bytes, one per kept character
    pub bytes: Vec<u8>,

    /// Characters above U+00FF that were dropped
    pub dropped: usize,
}

/// Encode text to Latin-1, dropping characters that have no single-byte
/// representation.
///
/// The drop is lossy on purpose; callers read [`Latin1::dropped`] to report
/// it.
pub fn encode_latin1(text: &str) -> Latin1 {
    let mut encoded = Latin1 {
        bytes: Vec::with_capacity(text.len()),
        dropped: 0,
    };
    for c in text.chars() {
        match u8::try_from(u32::from(c)) {
            Ok(byte) => encoded.bytes.push(byte),
            Err(_) => encoded.dropped += 1,
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let encoded = encode_latin1("Hello (PDF)");
        assert_eq!(encoded.bytes, b"Hello (PDF)");
        assert_eq!(encoded.dropped, 0);
    }

    #[test]
    fn test_latin1_single_byte() {
        let encoded = encode_latin1("caf\u{00E9} \u{00FC}ber");
        assert_eq!(encoded.bytes, b"caf\xE9 \xFCber");
        assert_eq!(encoded.dropped, 0);
    }

    #[test]
    fn test_unrepresentable_dropped() {
        let encoded = encode_latin1("a\u{4E2D}b\u{1F600}c\u{20AC}");
        assert_eq!(encoded.bytes, b"abc");
        assert_eq!(encoded.dropped, 3);
    }
}
