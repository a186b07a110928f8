use super::Base32Error;

const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow upper-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[(c - 32) as usize] = i; // uppercase letter
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

/// Number of base32 symbols needed to encode `bytes` bytes.
#[must_use]
pub const fn base32_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(BITS_PER_CHAR)
}

/// Encodes a byte slice into lowercase Crockford base32, most significant bit
/// first, writing output to `buf`.
///
/// When the input bit count is not a multiple of five, the final symbol is
/// padded with zero bits on the right.
///
/// `buf` must be exactly [`base32_len`] of the input length. Every index into
/// `ALPHABET` is masked with `0x1F`, so lookups stay in bounds.
pub fn encode_base32(input: &[u8], buf: &mut [u8]) {
    debug_assert_eq!(buf.len(), base32_len(input.len()));

    let mut acc = 0_u16;
    let mut bits = 0;
    let mut out = 0;
    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            buf[out] = ALPHABET[((acc >> bits) & MASK) as usize];
            out += 1;
        }
    }
    if bits > 0 {
        buf[out] = ALPHABET[((acc << (BITS_PER_CHAR - bits)) & MASK) as usize];
    }
}

/// Decodes a Crockford base32 string into `out`, filling it completely.
///
/// Decoding is case-insensitive and accepts the `O`, `I` and `L` aliases. The
/// input must be the canonical encoding: its length must be exactly
/// [`base32_len`] of `out.len()` and the padding bits of the final symbol must
/// be zero.
///
/// # Errors
///
/// - [`Base32Error::DecodeInvalidLen`] if the length does not match `out`
/// - [`Base32Error::DecodeInvalidAscii`] on a byte outside the alphabet
/// - [`Base32Error::DecodeNonZeroPadding`] if trailing bits are set
pub fn decode_base32(encoded: &[u8], out: &mut [u8]) -> Result<(), Base32Error> {
    if encoded.len() != base32_len(out.len()) {
        return Err(Base32Error::DecodeInvalidLen { len: encoded.len() });
    }

    let mut acc = 0_u16;
    let mut bits = 0;
    let mut written = 0;
    for (index, &byte) in encoded.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(Base32Error::DecodeInvalidAscii { byte, index });
        }
        acc = (acc << BITS_PER_CHAR) | u16::from(val);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            out[written] = (acc >> bits) as u8;
            written += 1;
        }
    }

    if acc & ((1 << bits) - 1) != 0 {
        let symbol = encoded.last().copied().unwrap_or_default();
        return Err(Base32Error::DecodeNonZeroPadding { symbol });
    }
    Ok(())
}
