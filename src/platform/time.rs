//! Clock sources
//!
//! The simulation only ever sees a `Duration` since some fixed origin.

use std::time::{Duration, Instant};

/// Monotonic "now" reader
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock, measured from when it was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to, one fixed step at a time
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    now: Duration,
    step: Duration,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            step,
        }
    }

    /// Clock stepping at `hz` ticks per second
    pub fn from_rate(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn advance(&mut self) {
        self.now += self.step;
    }
}

impl Clock for FixedStepClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_advances_exactly() {
        let mut clock = FixedStepClock::new(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::ZERO);
        for _ in 0..8 {
            clock.advance();
        }
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn test_from_rate() {
        let clock = FixedStepClock::from_rate(60);
        assert_eq!(clock.step(), Duration::from_nanos(16_666_666));
        // Zero rate is treated as 1 Hz instead of dividing by zero
        assert_eq!(FixedStepClock::from_rate(0).step(), Duration::from_secs(1));
    }

    #[test]
    fn test_monotonic_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
