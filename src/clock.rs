//! All things time-related.

pub use chrono::{DateTime, Utc};
use std::time::Duration;

/// Tells time and returns the time.
///
/// Generally you will want to retrieve time using [`SystemClock`],
/// but in tests you may want to implement a `Clock` with a fixed time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;

    /// How long until `when`, according to this clock.
    ///
    /// Moments already in the past yield a zero duration, never a
    /// negative countdown.
    fn until(&self, when: DateTime<Utc>) -> Duration {
        (when - self.now()).to_std().unwrap_or(Duration::ZERO)
    }
}

/// Interacts with the system clock to get the current time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    mod clock {
        use super::super::*;
        use std::ops::Sub;

        #[test]
        fn it_returns_the_system_time() {
            let clock = SystemClock;
            let delta = Utc::now().sub(clock.now());
            let secs = delta.num_seconds();
            assert_eq!(secs, 0);
        }
    }

    mod until {
        use super::super::*;
        use crate::test_utils::FrozenClock;
        use chrono::TimeDelta;

        #[test]
        fn it_counts_down_to_a_future_moment() {
            let clock = FrozenClock::default();
            let later = clock.now() + TimeDelta::seconds(90);
            assert_eq!(clock.until(later), Duration::from_secs(90));
        }

        #[test]
        fn it_clamps_past_moments_to_zero() {
            let clock = FrozenClock::default();
            let earlier = clock.now() - TimeDelta::seconds(90);
            assert_eq!(clock.until(earlier), Duration::ZERO);
        }

        #[test]
        fn it_clamps_the_epoch_to_zero() {
            let clock = FrozenClock::default();
            assert_eq!(clock.until(DateTime::<Utc>::UNIX_EPOCH), Duration::ZERO);
        }
    }
}
