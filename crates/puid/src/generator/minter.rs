use crate::{Result, UuidSource, new_id_with, validate_prefix};

/// Mints identifiers for one prefix from one UUID source.
///
/// The prefix is validated once, at construction.
///
/// # Example
///
/// ```
/// use puid::{PuidGenerator, default_generator};
///
/// let accounts = PuidGenerator::new("acc", default_generator()).unwrap();
/// let id = accounts.next_id().unwrap();
/// assert!(id.starts_with("acc"));
/// ```
#[derive(Clone, Debug)]
pub struct PuidGenerator<S: UuidSource> {
    prefix: String,
    source: S,
}

impl<S: UuidSource> PuidGenerator<S> {
    /// Binds `prefix` to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPrefix`] for an invalid prefix.
    pub fn new(prefix: &str, source: S) -> Result<Self> {
        validate_prefix(prefix)?;
        Ok(Self {
            prefix: prefix.to_owned(),
            source,
        })
    }

    /// The prefix every identifier from this generator carries.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Mints the next identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidUuidFormat`] if the source yields a
    /// value without the RFC 4122 variant.
    pub fn next_id(&self) -> Result<String> {
        new_id_with(&self.source, &self.prefix)
    }
}
