use crate::Base32Error;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `puid` can produce.
///
/// Every variant carries the offending input so callers can report it without
/// re-deriving context. Batch errors from prefix derivation carry the full
/// offending set, in input order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The prefix is neither empty nor exactly three lowercase `a-z` letters.
    #[error("puid prefix must be 3 lowercase a-z characters, got: {prefix:?}")]
    InvalidPrefix { prefix: String },

    /// The input is not a canonical hyphenated UUID with an RFC 4122 variant.
    #[error("invalid UUID format: {uuid:?}")]
    InvalidUuidFormat { uuid: String },

    /// The identifier does not match the `[a-z]{3}[0-9a-z]{26}` shape.
    #[error("malformed puid: {id:?}")]
    MalformedIdentifier { id: String },

    /// The identifier carries a different prefix than the one expected.
    #[error("puid prefix mismatch: expected {expected:?}, got {id:?}")]
    PrefixMismatch { expected: String, id: String },

    /// The body could not be turned back into a variant-valid UUID.
    #[error("puid {id:?} cannot be decoded: {cause}")]
    DecodeFailure {
        id: String,
        #[source]
        cause: DecodeCause,
    },

    /// One or more model names are not 1-100 lowercase `a-z` letters.
    #[error("invalid model names found: {}", .names.join(", "))]
    InvalidModelNames { names: Vec<String> },

    /// One or more model names appear more than once in the batch.
    #[error("duplicate model names found: {}", .names.join(", "))]
    DuplicateModelNames { names: Vec<String> },

    /// A model name reached derivation with fewer than three characters.
    #[error("invalid model name {name:?}: must be at least 3 characters")]
    ModelNameTooShort { name: String },

    /// A heuristic produced a candidate that is neither empty nor three
    /// lowercase letters. This is a defect in the heuristic, not in the input.
    #[error("heuristic {heuristic} produced malformed prefix {prefix:?} for model {name:?}")]
    HeuristicInvariantViolation {
        name: String,
        prefix: String,
        heuristic: usize,
    },

    /// Every heuristic candidate for the name collided with an assigned prefix.
    #[error("no unique prefix found for model: {name}")]
    PrefixExhausted { name: String },
}

/// The reason a well-shaped identifier failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeCause {
    /// The base32 body was rejected by the decoder.
    #[error(transparent)]
    Base32(#[from] Base32Error),

    /// The decoded bytes do not carry the RFC 4122 variant bits.
    #[error("decoded value {uuid} is not a variant-valid UUID")]
    NotAUuid { uuid: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_errors_list_every_name() {
        let err = Error::InvalidModelNames {
            names: vec!["User".into(), "post123".into(), "comment-test".into()],
        };
        assert_eq!(
            err.to_string(),
            "invalid model names found: User, post123, comment-test"
        );
    }

    #[test]
    fn decode_failure_exposes_its_cause() {
        let err = Error::DecodeFailure {
            id: "abc".into(),
            cause: DecodeCause::Base32(Base32Error::DecodeInvalidAscii {
                byte: b'u',
                index: 4,
            }),
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("invalid ascii byte 'u' at index 4"));
    }
}
