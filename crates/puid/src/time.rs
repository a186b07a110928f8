use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Origin of UUIDv7 timestamps: 1970-01-01 00:00:00 UTC.
pub const UNIX_EPOCH_ORIGIN: Duration = Duration::ZERO;

/// A trait for time sources that return a monotonic or wall-clock timestamp.
///
/// This abstraction allows you to plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests.
///
/// The unit is expected to be **milliseconds** relative to a configurable
/// origin.
///
/// # Example
///
/// ```
/// use puid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the configured epoch.
    fn current_millis(&self) -> T;
}

/// A monotonic time source that returns elapsed time since construction,
/// offset from an epoch.
///
/// This avoids wall-clock adjustments (e.g., NTP corrections) while still
/// aligning timestamps to a fixed origin: the wall clock is read once, at
/// construction, and every later reading adds the `Instant` elapsed since.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: u64, // in milliseconds
}

impl Default for MonotonicClock {
    /// Constructs a monotonic clock aligned to the Unix epoch.
    fn default() -> Self {
        Self::with_epoch(UNIX_EPOCH_ORIGIN)
    }
}

impl MonotonicClock {
    /// Constructs a monotonic clock using `epoch` (a [`Duration`] since
    /// 1970-01-01 UTC) as the origin.
    ///
    /// A system clock earlier than the epoch saturates to an offset of zero.
    #[must_use]
    pub fn with_epoch(epoch: Duration) -> Self {
        let system_now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let epoch_offset = u64::try_from(system_now.saturating_sub(epoch).as_millis())
            .unwrap_or(u64::MAX);

        Self {
            start: Instant::now(),
            epoch_offset,
        }
    }
}

impl TimeSource<u64> for MonotonicClock {
    fn current_millis(&self) -> u64 {
        let elapsed = u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.epoch_offset.saturating_add(elapsed)
    }
}
