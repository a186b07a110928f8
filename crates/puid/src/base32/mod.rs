//! Crockford base32 over fixed-width byte strings.
//!
//! The codec is MSB-first with trailing zero padding, so 16 bytes always map
//! to exactly 26 symbols and back.

mod crockford;
mod error;

pub use crockford::*;
pub use error::*;

/// Number of raw bytes in a UUID.
pub const UUID_BYTES: usize = 16;

/// Number of base32 symbols in an encoded UUID.
pub const UUID_BASE32_LEN: usize = base32_len(UUID_BYTES);

const _: () = assert!(UUID_BASE32_LEN == 26);
