pub const REST_TIME: u32 = 90;

/// Counts down once per tick until zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_seconds: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining_seconds: seconds,
        }
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Returns true once the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.is_expired()
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(REST_TIME)
    }
}

/// Counts elapsed seconds while active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_seconds: u32,
    active: bool,
}

impl Stopwatch {
    #[must_use]
    pub fn new(elapsed_seconds: u32, active: bool) -> Self {
        Self {
            elapsed_seconds,
            active,
        }
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn start_pause(&mut self) {
        if self.is_active() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.elapsed_seconds = 0;
    }

    pub fn tick(&mut self) {
        if self.active {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        }
    }
}

#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_countdown_expires_after_exactly_its_duration() {
        let mut countdown = Countdown::default();
        assert_eq!(countdown.seconds(), REST_TIME);
        for _ in 1..REST_TIME {
            assert!(!countdown.tick());
        }
        assert_eq!(countdown.seconds(), 1);
        assert!(countdown.tick());
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_countdown_does_not_underflow() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.tick());
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_stopwatch() {
        let mut stopwatch = Stopwatch::default();
        stopwatch.tick();
        assert_eq!(stopwatch.seconds(), 0);

        stopwatch.start();
        stopwatch.tick();
        stopwatch.tick();
        assert_eq!(stopwatch.seconds(), 2);

        stopwatch.start_pause();
        assert!(!stopwatch.is_active());
        stopwatch.tick();
        assert_eq!(stopwatch.seconds(), 2);

        stopwatch.start_pause();
        assert!(stopwatch.is_active());
        stopwatch.reset();
        assert_eq!(stopwatch, Stopwatch::default());
    }

    #[rstest]
    #[case(0, "0:00")]
    #[case(9, "0:09")]
    #[case(90, "1:30")]
    #[case(3601, "60:01")]
    fn test_format_time(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(format_time(seconds), expected);
    }
}
