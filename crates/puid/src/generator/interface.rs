/// A source of fresh 128-bit, time-ordered UUID values.
///
/// Implementations must yield values carrying the RFC 4122 variant bits; the
/// codec rejects anything else. The version is not checked.
pub trait UuidSource {
    /// Returns the next UUID as a big-endian 128-bit integer.
    fn next_uuid(&self) -> u128;
}

impl<S: UuidSource + ?Sized> UuidSource for &S {
    fn next_uuid(&self) -> u128 {
        (**self).next_uuid()
    }
}

impl<S: UuidSource + ?Sized> UuidSource for std::sync::Arc<S> {
    fn next_uuid(&self) -> u128 {
        (**self).next_uuid()
    }
}
