//! Call contracts for storage columns and validation pipelines.
//!
//! Framework integrations wrap these instead of re-implementing the
//! transform: the column stores the raw UUID, the application sees the
//! prefixed identifier.

use crate::{Result, decode, encode, validate, validate_prefix};

/// Message surfaced to users when an identifier fails validation.
pub const INVALID_ID_MESSAGE: &str = "Invalid puid ID";

/// Converts between a UUID storage column and prefixed identifiers.
///
/// # Example
///
/// ```
/// use puid::ColumnCodec;
///
/// let column = ColumnCodec::new("tst").unwrap();
/// let stored = column.to_storage("tst06b0xg66sxtd7bgma310w0tzwr").unwrap();
/// assert_eq!(stored, "01960ec0-c6cf-74d3-ae14-50c20e035fe6");
/// assert_eq!(column.from_storage(&stored).unwrap(), "tst06b0xg66sxtd7bgma310w0tzwr");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnCodec {
    prefix: String,
}

impl ColumnCodec {
    /// The storage type the column is declared with.
    pub const DATA_TYPE: &'static str = "uuid";

    /// Creates a codec for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPrefix`] for an invalid prefix.
    pub fn new(prefix: &str) -> Result<Self> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_owned(),
        })
    }

    /// The prefix this codec encodes with and expects on decode.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Application value to storage value: decodes the identifier.
    ///
    /// # Errors
    ///
    /// See [`crate::decode`].
    pub fn to_storage(&self, id: &str) -> Result<String> {
        decode(id, &self.prefix)
    }

    /// Storage value to application value: encodes the UUID.
    ///
    /// # Errors
    ///
    /// See [`crate::encode`].
    pub fn from_storage(&self, uuid: &str) -> Result<String> {
        encode(uuid, &self.prefix)
    }
}

/// A boolean predicate over identifiers for one prefix, for use in
/// validation pipelines.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdValidator {
    prefix: String,
}

impl IdValidator {
    /// Creates a validator for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPrefix`] for an invalid prefix.
    pub fn new(prefix: &str) -> Result<Self> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_owned(),
        })
    }

    /// The prefix every accepted identifier must carry.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if `id` passes [`crate::validate`].
    #[must_use]
    pub fn is_valid(&self, id: &str) -> bool {
        validate(id, &self.prefix).is_ok()
    }

    /// Like [`Self::is_valid`], reporting failures with
    /// [`INVALID_ID_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when `id` is rejected.
    pub fn check(&self, id: &str) -> core::result::Result<(), &'static str> {
        if self.is_valid(id) {
            Ok(())
        } else {
            Err(INVALID_ID_MESSAGE)
        }
    }
}
