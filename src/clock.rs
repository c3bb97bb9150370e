use std::time::Duration;

use tracing::info;

/// Decides, frame by frame, whether the world should advance.
///
/// Timestamps are durations since some fixed instant (usually the start of the frame loop). At
/// most one generation is granted per call, however long it's been.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Minimum time between two generations. Zero means every frame.
    delay: Duration,

    /// How much [`SimulationClock::speed_up`] and [`SimulationClock::slow_down`] change `delay` by
    step: Duration,

    paused: bool,

    /// When the last generation happened. `None` until the first frame is seen.
    last: Option<Duration>,
}

impl SimulationClock {
    pub fn new(delay: Duration, step: Duration, paused: bool) -> Self {
        Self {
            delay,
            step,
            paused,
            last: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Called once per frame. Returns whether a generation is due at `now`.
    pub fn should_advance(&mut self, now: Duration) -> bool {
        let last = *self.last.get_or_insert(now);

        if self.paused {
            return false;
        }

        if now.saturating_sub(last) > self.delay {
            self.last = Some(now);
            return true;
        }

        false
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;

        info!("paused");
    }

    /// Keeps the last timestamp, so the first frame after resuming grants at most one generation.
    pub fn resume(&mut self) {
        self.paused = false;

        info!("resumed");
    }

    /// Shorten the delay by one step, down to zero.
    pub fn speed_up(&mut self) {
        self.delay = self.delay.saturating_sub(self.step);

        info!(delay_ms = self.delay.as_millis(), "sped up");
    }

    /// Lengthen the delay by one step.
    pub fn slow_down(&mut self) {
        self.delay = self.delay.saturating_add(self.step);

        info!(delay_ms = self.delay.as_millis(), "slowed down");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SimulationClock;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Feed frames every `frame` ms up to and including `until`, counting generations.
    fn run(clock: &mut SimulationClock, frame: u64, until: u64) -> usize {
        (0..=until)
            .step_by(frame as usize)
            .filter(|&t| clock.should_advance(ms(t)))
            .count()
    }

    #[test]
    fn delay_gates_generations() {
        let mut clock = SimulationClock::new(ms(20), ms(20), false);

        let n = run(&mut clock, 5, 100);

        assert!(n <= 5, "advanced {n} times");
        assert_eq!(n, 4);
    }

    #[test]
    fn zero_delay_advances_every_frame() {
        let mut clock = SimulationClock::new(ms(0), ms(20), false);

        // the very first frame only starts the clock
        assert_eq!(run(&mut clock, 16, 160), 10);
    }

    #[test]
    fn one_generation_after_long_stall() {
        let mut clock = SimulationClock::new(ms(20), ms(20), false);

        assert!(!clock.should_advance(ms(0)));
        assert!(clock.should_advance(ms(10_000)));
        assert!(!clock.should_advance(ms(10_001)));
    }

    #[test]
    fn paused_never_advances() {
        let mut clock = SimulationClock::new(ms(0), ms(20), true);

        assert_eq!(run(&mut clock, 5, 1_000), 0);
        assert!(clock.is_paused());
    }

    #[test]
    fn pause_twice_is_identity() {
        let mut clock = SimulationClock::new(ms(20), ms(20), false);

        clock.toggle_pause();
        assert!(clock.is_paused());

        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let mut clock = SimulationClock::new(ms(20), ms(20), false);
        assert!(!clock.should_advance(ms(0)));

        clock.pause();
        clock.pause();
        assert!(clock.is_paused());
        assert!(!clock.should_advance(ms(500)));

        clock.resume();
        clock.resume();
        assert!(!clock.is_paused());

        // the pause doesn't pile up generations
        assert!(clock.should_advance(ms(501)));
        assert!(!clock.should_advance(ms(502)));
    }

    #[test]
    fn speed_is_floored_at_zero() {
        let mut clock = SimulationClock::new(ms(30), ms(20), false);

        clock.speed_up();
        assert_eq!(clock.delay(), ms(10));

        clock.speed_up();
        assert_eq!(clock.delay(), ms(0));

        clock.slow_down();
        clock.slow_down();
        assert_eq!(clock.delay(), ms(40));
    }
}
