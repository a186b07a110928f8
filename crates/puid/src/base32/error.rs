use core::fmt;

/// Errors raised by the Crockford base32 decoder.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base32Error {
    /// The input length does not match the fixed width of the target buffer.
    DecodeInvalidLen { len: usize },
    /// A byte outside the Crockford alphabet (and its aliases).
    DecodeInvalidAscii { byte: u8, index: usize },
    /// The trailing bits of the final symbol are not zero, so the input is not
    /// the canonical encoding of any byte string.
    DecodeNonZeroPadding { symbol: u8 },
}

impl fmt::Display for Base32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeInvalidLen { len } => write!(f, "invalid length: {len}"),
            Self::DecodeInvalidAscii { byte, index } => {
                write!(
                    f,
                    "invalid ascii byte {:?} at index {index}",
                    char::from(*byte)
                )
            }
            Self::DecodeNonZeroPadding { symbol } => {
                write!(f, "non-zero padding in final symbol {:?}", char::from(*symbol))
            }
        }
    }
}

impl core::error::Error for Base32Error {}
