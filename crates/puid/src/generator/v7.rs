#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{RandSource, TimeSource, UuidSource};

/// Width of the millisecond timestamp field.
pub const TIMESTAMP_BITS: u32 = 48;

const TIMESTAMP_MASK: u64 = (1 << TIMESTAMP_BITS) - 1;
const VERSION: u128 = 0x7;
const VARIANT: u128 = 0b10;
const RAND_A_MASK: u128 = (1 << 12) - 1;
const RAND_B_MASK: u128 = (1 << 62) - 1;

/// A *non-monotonic* UUIDv7 generator suitable for multi-threaded
/// environments.
///
/// Each value packs, from the most significant bit down:
///
/// ```text
/// | unix_ts_ms (48) | ver 0111 (4) | rand_a (12) | var 10 (2) | rand_b (62) |
/// ```
///
/// Values are ordered by millisecond; within one millisecond they are random.
/// The generator holds no mutable state, so it can be shared freely when its
/// sources can.
///
/// # Example
///
/// ```
/// use puid::{BasicUuidV7Generator, MonotonicClock, ThreadRandom, UuidSource};
///
/// let generator = BasicUuidV7Generator::new(MonotonicClock::default(), ThreadRandom);
/// let uuid = generator.next_uuid();
/// assert_eq!(uuid >> 76 & 0xF, 7);
/// ```
#[derive(Clone, Debug)]
pub struct BasicUuidV7Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u128>,
{
    time: T,
    rng: R,
}

impl<T, R> BasicUuidV7Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u128>,
{
    /// Creates a new [`BasicUuidV7Generator`] with the provided time source
    /// and RNG.
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }
}

/// Packs a millisecond timestamp and random bits into a version 7 UUID.
///
/// Timestamp bits above the 48-bit field are discarded. Of `random`, the low
/// 62 bits fill `rand_b` and the next 12 fill `rand_a`.
#[must_use]
pub const fn pack_v7(timestamp: u64, random: u128) -> u128 {
    let ts = (timestamp & TIMESTAMP_MASK) as u128;
    let rand_a = (random >> 62) & RAND_A_MASK;
    let rand_b = random & RAND_B_MASK;
    (ts << 80) | (VERSION << 76) | (rand_a << 64) | (VARIANT << 62) | rand_b
}

/// Returns the millisecond timestamp field of a version 7 UUID.
#[must_use]
pub const fn v7_timestamp(uuid: u128) -> u64 {
    (uuid >> 80) as u64
}

impl<T, R> UuidSource for BasicUuidV7Generator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u128>,
{
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn next_uuid(&self) -> u128 {
        pack_v7(self.time.current_millis(), self.rng.rand())
    }
}

/// The generator behind [`crate::new_id`].
#[cfg(feature = "generator")]
pub type DefaultUuidGenerator = BasicUuidV7Generator<crate::MonotonicClock, crate::ThreadRandom>;

/// Returns the process-wide [`DefaultUuidGenerator`], created on first use.
#[cfg(feature = "generator")]
pub fn default_generator() -> &'static DefaultUuidGenerator {
    static GENERATOR: std::sync::OnceLock<DefaultUuidGenerator> = std::sync::OnceLock::new();
    GENERATOR.get_or_init(|| {
        BasicUuidV7Generator::new(crate::MonotonicClock::default(), crate::ThreadRandom)
    })
}
