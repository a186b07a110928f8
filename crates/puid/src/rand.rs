/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// # Example
/// ```
/// use puid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u128> for FixedRand {
///     fn rand(&self) -> u128 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
#[cfg(feature = "generator")]
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

#[cfg(feature = "generator")]
impl RandSource<u128> for ThreadRandom {
    fn rand(&self) -> u128 {
        use ::rand::Rng;
        ::rand::rng().random()
    }
}

#[cfg(all(test, feature = "generator"))]
mod tests {
    use super::*;

    #[test]
    fn thread_random_varies() {
        let rng = ThreadRandom;
        let a: u128 = rng.rand();
        let b: u128 = rng.rand();
        assert_ne!(a, b);
    }
}
