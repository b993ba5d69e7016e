//! Frame counter driving wing and spawn cadence.

/// True when `frame` falls on a multiple of `period`. A zero period never fires.
pub fn on_cadence(frame: u64, period: u64) -> bool {
    period != 0 && frame % period == 0
}

/// Monotonic count of simulated frames since the session (re)started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounter {
    frame: u64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame and return the new count. The first tick yields 1.
    pub fn tick(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    pub fn get(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(FrameCounter::new().get(), 0);
    }

    #[test]
    fn test_tick_is_monotonic() {
        let mut clock = FrameCounter::new();
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.get(), 2);
    }

    #[test]
    fn test_cadence_fires_on_multiples() {
        let mut clock = FrameCounter::new();
        let fired: Vec<u64> = (0..20)
            .map(|_| clock.tick())
            .filter(|&f| on_cadence(f, 5))
            .collect();
        assert_eq!(fired, vec![5, 10, 15, 20]);
    }

    #[test]
    fn test_zero_period_never_fires() {
        assert!(!on_cadence(0, 0));
        assert!(!on_cadence(90, 0));
    }
}
