//! Compositor clock access
//!
//! Descriptors carry absolute begin times, so issuing one needs the host's
//! current media time. Nothing here ticks.

use std::time::Instant;

/// Source of the host compositor's current media time, in seconds
pub trait MediaClock {
    fn now(&self) -> f64;
}

/// Clock frozen at a fixed time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedClock(pub f64);

impl MediaClock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

/// Monotonic clock counting seconds since it was created
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

impl<C: MediaClock + ?Sized> MediaClock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(10.0).now(), 10.0);
    }
}
