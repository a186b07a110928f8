//! Conversion between canonical UUID text and prefixed base32 identifiers.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    DecodeCause, Error, PREFIX_LEN, Result, UUID_BASE32_LEN, UUID_BYTES, UuidSource,
    decode_base32, encode_base32, format_uuid, has_rfc4122_variant, is_prefix, parse_uuid,
    validate_prefix,
};

/// Length of a prefixed identifier.
pub const PUID_LEN: usize = PREFIX_LEN + UUID_BASE32_LEN;

const _: () = assert!(PUID_LEN == 29);

/// Encodes a canonical hyphenated UUID into a prefixed, lowercase Crockford
/// base32 identifier.
///
/// The output is `prefix` followed by 26 base32 symbols: 29 characters with a
/// prefix, 26 with the empty prefix.
///
/// # Errors
///
/// - [`Error::InvalidPrefix`] if the prefix is not empty or three `a-z`
///   letters
/// - [`Error::InvalidUuidFormat`] if `uuid` is not canonical `8-4-4-4-12` hex
///   with an RFC 4122 variant nibble
///
/// # Example
///
/// ```
/// let id = puid::encode("01960ec0-c6cf-74d3-ae14-50c20e035fe6", "tst").unwrap();
/// assert_eq!(id, "tst06b0xg66sxtd7bgma310w0tzwr");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn encode(uuid: &str, prefix: &str) -> Result<String> {
    validate_prefix(prefix)?;
    let bytes = parse_uuid(uuid)?;
    Ok(encode_unchecked(&bytes, prefix))
}

/// Encodes 16 raw UUID bytes into a prefixed identifier.
///
/// # Errors
///
/// - [`Error::InvalidPrefix`] for an invalid prefix
/// - [`Error::InvalidUuidFormat`] if the bytes lack the RFC 4122 variant
pub fn encode_bytes(bytes: &[u8; UUID_BYTES], prefix: &str) -> Result<String> {
    validate_prefix(prefix)?;
    if !has_rfc4122_variant(bytes) {
        return Err(Error::InvalidUuidFormat {
            uuid: format_uuid(bytes),
        });
    }
    Ok(encode_unchecked(bytes, prefix))
}

fn encode_unchecked(bytes: &[u8; UUID_BYTES], prefix: &str) -> String {
    let mut buf = [0_u8; UUID_BASE32_LEN];
    encode_base32(bytes, &mut buf);

    let mut out = String::with_capacity(prefix.len() + UUID_BASE32_LEN);
    out.push_str(prefix);
    out.extend(buf.iter().copied().map(char::from));
    out
}

/// Decodes a prefixed identifier back into a lowercase hyphenated UUID,
/// checking that it carries `prefix`.
///
/// Input is matched case-insensitively. With the empty prefix, both the bare
/// 26-symbol body and a 29-character identifier with any prefix are accepted.
///
/// # Errors
///
/// - [`Error::InvalidPrefix`] for an invalid expected prefix
/// - [`Error::MalformedIdentifier`] if the identifier is not
///   `[a-z]{3}[0-9a-z]{26}`
/// - [`Error::PrefixMismatch`] if it carries a different prefix
/// - [`Error::DecodeFailure`] if the body is not valid base32 or does not
///   decode to a variant-valid UUID
///
/// # Example
///
/// ```
/// let uuid = puid::decode("tst06b0xg66sxtd7bgma310w0tzwr", "tst").unwrap();
/// assert_eq!(uuid, "01960ec0-c6cf-74d3-ae14-50c20e035fe6");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn decode(id: &str, prefix: &str) -> Result<String> {
    let bytes = decode_to_bytes(id, prefix)?;
    Ok(format_uuid(&bytes))
}

/// Decodes a prefixed identifier into its 16 raw UUID bytes.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_to_bytes(id: &str, prefix: &str) -> Result<[u8; UUID_BYTES]> {
    validate_prefix(prefix)?;
    let normalized = id.to_ascii_lowercase();
    let body = split_body(&normalized, id, prefix)?;

    let mut bytes = [0_u8; UUID_BYTES];
    decode_base32(body.as_bytes(), &mut bytes).map_err(|e| Error::DecodeFailure {
        id: id.to_owned(),
        cause: e.into(),
    })?;
    if !has_rfc4122_variant(&bytes) {
        return Err(Error::DecodeFailure {
            id: id.to_owned(),
            cause: DecodeCause::NotAUuid {
                uuid: format_uuid(&bytes),
            },
        });
    }
    Ok(bytes)
}

/// Checks the shape and prefix of an identifier without decoding its body.
///
/// This is the cheap guard for system boundaries: it accepts exactly what
/// [`decode`] would let through to the base32 step.
///
/// # Errors
///
/// - [`Error::InvalidPrefix`] for an invalid expected prefix
/// - [`Error::MalformedIdentifier`] for a malformed identifier
/// - [`Error::PrefixMismatch`] if it carries a different prefix
#[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
pub fn validate(id: &str, prefix: &str) -> Result<()> {
    validate_prefix(prefix)?;
    let normalized = id.to_ascii_lowercase();
    split_body(&normalized, id, prefix).map(|_| ())
}

/// Returns the base32 body of a lowercased identifier after checking its
/// shape and prefix. `original` is only used for error reporting.
fn split_body<'a>(normalized: &'a str, original: &str, prefix: &str) -> Result<&'a str> {
    let malformed = || Error::MalformedIdentifier {
        id: original.to_owned(),
    };

    if prefix.is_empty() && normalized.len() == UUID_BASE32_LEN {
        return if is_body(normalized) {
            Ok(normalized)
        } else {
            Err(malformed())
        };
    }

    if normalized.len() != PUID_LEN || !normalized.is_char_boundary(PREFIX_LEN) {
        return Err(malformed());
    }
    let (head, body) = normalized.split_at(PREFIX_LEN);
    if !is_prefix(head) || !is_body(body) {
        return Err(malformed());
    }
    if !prefix.is_empty() && head != prefix {
        return Err(Error::PrefixMismatch {
            expected: prefix.to_owned(),
            id: original.to_owned(),
        });
    }
    Ok(body)
}

fn is_body(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

/// Mints a fresh identifier for `prefix` from the process-wide UUIDv7
/// generator.
///
/// # Errors
///
/// Returns [`Error::InvalidPrefix`] for an invalid prefix.
///
/// # Example
///
/// ```
/// let a = puid::new_id("acc").unwrap();
/// let b = puid::new_id("acc").unwrap();
/// assert_eq!(a.len(), 29);
/// assert_ne!(a, b);
/// ```
#[cfg(feature = "generator")]
pub fn new_id(prefix: &str) -> Result<String> {
    new_id_with(crate::default_generator(), prefix)
}

/// Mints a fresh identifier for `prefix` from the given UUID source.
///
/// # Errors
///
/// - [`Error::InvalidPrefix`] for an invalid prefix
/// - [`Error::InvalidUuidFormat`] if the source yields a value without the
///   RFC 4122 variant
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip(source), err))]
pub fn new_id_with<S>(source: &S, prefix: &str) -> Result<String>
where
    S: UuidSource + ?Sized,
{
    validate_prefix(prefix)?;
    encode_bytes(&source.next_uuid().to_be_bytes(), prefix)
}
