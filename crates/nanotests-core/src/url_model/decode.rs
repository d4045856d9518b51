//! Percent-decoding for query-string names and values.

use super::error::{DecodeError, ParamPart};

/// Decodes a raw query component: `+` becomes a space and `%XX` escapes are
/// reassembled into UTF-8.
///
/// Unlike lenient decoders, a stray `%` is an error rather than being passed
/// through, and so is any byte sequence that is not UTF-8 once decoded.
pub(crate) fn decode_component(raw: &str, part: ParamPart) -> Result<String, DecodeError> {
    // Fast path: nothing to decode.
    if !raw.bytes().any(|b| b == b'%' || b == b'+') {
        return Ok(raw.to_string());
    }

    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let high = bytes.get(i + 1).copied().and_then(hex_digit);
                let low = bytes.get(i + 2).copied().and_then(hex_digit);
                match (high, low) {
                    (Some(h), Some(l)) => out.push(h << 4 | l),
                    _ => {
                        return Err(DecodeError::MalformedEscape {
                            part,
                            raw: raw.to_string(),
                            offset: i,
                        })
                    }
                }
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| DecodeError::InvalidUtf8 {
        part,
        raw: raw.to_string(),
    })
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
