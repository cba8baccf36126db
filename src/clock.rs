use std::time::{Duration, Instant};

/// Lifecycle of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Intro screen, left with [`SimulationState::confirm`].
    Welcome,
    Paused,
    Running,
    /// Terminal, no further transitions.
    Terminated,
}

/// Gates generation advancement by elapsed time.
#[derive(Clone, Debug)]
pub struct SimulationState {
    phase: Phase,
    tick_interval_ms: u64,
    last_advance: Instant,
}

impl SimulationState {
    pub fn new(show_welcome: bool, tick_interval_ms: u64, now: Instant) -> Self {
        Self {
            phase: if show_welcome {
                Phase::Welcome
            } else {
                Phase::Paused
            },
            tick_interval_ms,
            last_advance: now,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whether a generation is due at `now`.
    pub fn should_advance(&self, now: Instant) -> bool {
        self.is_running() && now.saturating_duration_since(self.last_advance) >= self.tick_interval()
    }

    pub fn mark_advanced(&mut self, now: Instant) {
        self.last_advance = now;
    }

    /// `Welcome -> Paused`; other phases are left alone.
    pub fn confirm(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::Paused;
        }
    }

    /// `Paused <-> Running`; other phases are left alone.
    pub fn toggle_running(&mut self) {
        self.phase = match self.phase {
            Phase::Paused => Phase::Running,
            Phase::Running => Phase::Paused,
            phase => phase,
        };
    }

    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
    }

    /// Shifts the interval by `delta_ms`, never going below zero.
    pub fn set_tick_interval(&mut self, delta_ms: i64) {
        self.tick_interval_ms = self.tick_interval_ms.saturating_add_signed(delta_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, SimulationState};
    use std::time::{Duration, Instant};

    #[test]
    fn test_phase_transitions() {
        let now = Instant::now();
        let mut state = SimulationState::new(true, 25, now);
        assert_eq!(state.phase(), Phase::Welcome);

        state.toggle_running();
        assert_eq!(state.phase(), Phase::Welcome);

        state.confirm();
        assert_eq!(state.phase(), Phase::Paused);
        state.confirm();
        assert_eq!(state.phase(), Phase::Paused);

        state.toggle_running();
        assert_eq!(state.phase(), Phase::Running);
        state.toggle_running();
        assert_eq!(state.phase(), Phase::Paused);

        state.terminate();
        state.toggle_running();
        state.confirm();
        assert_eq!(state.phase(), Phase::Terminated);
    }

    #[test]
    fn test_skip_welcome() {
        let state = SimulationState::new(false, 25, Instant::now());
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn test_gate() {
        let t0 = Instant::now();
        let mut state = SimulationState::new(false, 25, t0);
        assert!(!state.should_advance(t0 + Duration::from_millis(100)));

        state.toggle_running();
        assert!(!state.should_advance(t0 + Duration::from_millis(24)));
        assert!(state.should_advance(t0 + Duration::from_millis(25)));

        state.mark_advanced(t0 + Duration::from_millis(30));
        assert!(!state.should_advance(t0 + Duration::from_millis(40)));
        assert!(state.should_advance(t0 + Duration::from_millis(55)));
    }

    #[test]
    fn test_zero_interval_advances_every_tick() {
        let t0 = Instant::now();
        let mut state = SimulationState::new(false, 0, t0);
        state.toggle_running();
        assert!(state.should_advance(t0));
    }

    #[test]
    fn test_interval_clamped_at_zero() {
        let mut state = SimulationState::new(false, 25, Instant::now());
        state.set_tick_interval(-25);
        assert_eq!(state.tick_interval_ms(), 0);
        state.set_tick_interval(-25);
        assert_eq!(state.tick_interval_ms(), 0);
        state.set_tick_interval(50);
        assert_eq!(state.tick_interval_ms(), 50);
    }
}
