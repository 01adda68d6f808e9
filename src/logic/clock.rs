//! Reference time for relative formatting
//!
//! Formatting never reads the wall clock itself; callers ask a `Clock` for
//! "now" and pass it in.

use chrono::{DateTime, Utc};

/// Source of the current instant
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock time at each call
    #[default]
    System,
    /// Always the same instant (pinned via config, or in tests)
    Fixed(DateTime<Utc>),
    /// Caller-supplied provider
    Provider(fn() -> DateTime<Utc>),
}

impl Clock {
    /// Clock pinned to `reference` when set, wall clock otherwise
    pub fn from_reference(reference: Option<DateTime<Utc>>) -> Self {
        match reference {
            Some(instant) => Clock::Fixed(instant),
            None => Clock::System,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
            Clock::Provider(provider) => provider(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch_plus_day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = Clock::Fixed(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_provider_clock_calls_function() {
        let clock = Clock::Provider(epoch_plus_day);
        assert_eq!(clock.now(), epoch_plus_day());
    }

    #[test]
    fn test_from_reference() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(Clock::from_reference(Some(instant)), Clock::Fixed(t) if t == instant));
        assert!(matches!(Clock::from_reference(None), Clock::System));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = Utc::now();
        let now = Clock::System.now();
        assert!(now >= before);
    }
}
