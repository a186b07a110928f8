//! Canonical hyphenated UUID text.
//!
//! Only the RFC 4122 variant bits are checked. The version nibble is left
//! alone, so any variant-valid UUID (v4, v7, ...) round-trips.

use crate::{Error, Result, UUID_BYTES};

/// Length of the canonical `8-4-4-4-12` text form.
pub const UUID_TEXT_LEN: usize = 36;

/// Byte offsets after which a hyphen is inserted when formatting.
const GROUP_ENDS: [usize; 4] = [4, 6, 8, 10];

/// Text positions holding hyphens in the canonical form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Text position of the variant nibble (first digit of the fourth group).
const VARIANT_POSITION: usize = 19;

const HEX: &[u8; 16] = b"0123456789abcdef";

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Returns true if the variant bits of `bytes` are `10`, i.e. the variant
/// nibble is one of `8`, `9`, `a` or `b`.
#[must_use]
pub const fn has_rfc4122_variant(bytes: &[u8; UUID_BYTES]) -> bool {
    bytes[8] & 0xC0 == 0x80
}

/// Returns true if `s` matches
/// `^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$`,
/// ignoring case.
#[must_use]
pub fn is_canonical_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != UUID_TEXT_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| {
        if HYPHEN_POSITIONS.contains(&i) {
            b == b'-'
        } else if i == VARIANT_POSITION {
            matches!(b, b'8' | b'9' | b'a' | b'b' | b'A' | b'B')
        } else {
            hex_value(b).is_some()
        }
    })
}

/// Parses a canonical hyphenated UUID into its 16 raw bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidUuidFormat`] if `s` is not canonical or lacks the
/// RFC 4122 variant.
pub fn parse_uuid(s: &str) -> Result<[u8; UUID_BYTES]> {
    if !is_canonical_uuid(s) {
        return Err(Error::InvalidUuidFormat { uuid: s.to_owned() });
    }

    let mut out = [0_u8; UUID_BYTES];
    let mut nibbles = s.bytes().filter(|&b| b != b'-').filter_map(hex_value);
    for byte in &mut out {
        match (nibbles.next(), nibbles.next()) {
            (Some(hi), Some(lo)) => *byte = (hi << 4) | lo,
            _ => return Err(Error::InvalidUuidFormat { uuid: s.to_owned() }),
        }
    }
    Ok(out)
}

/// Renders 16 raw bytes as lowercase `8-4-4-4-12` hex.
#[must_use]
pub fn format_uuid(bytes: &[u8; UUID_BYTES]) -> String {
    let mut out = String::with_capacity(UUID_TEXT_LEN);
    for (i, &b) in bytes.iter().enumerate() {
        if GROUP_ENDS.contains(&i) {
            out.push('-');
        }
        out.push(char::from(HEX[usize::from(b >> 4)]));
        out.push(char::from(HEX[usize::from(b & 0x0F)]));
    }
    out
}
