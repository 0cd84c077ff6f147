//! Simulation clock with variable-rate, pausable, reversible playback.

/// Accumulates elapsed simulation time from real frame deltas.
///
/// The speed multiplier may be zero or negative; elapsed time then stands
/// still or runs backwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
    speed: f64,
    paused: bool,
}

impl SimulationClock {
    /// A clock at `t = 0` running at `speed`.
    pub fn new(speed: f64) -> Self {
        Self {
            elapsed: 0.0,
            speed,
            paused: false,
        }
    }

    /// Current elapsed simulation time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Jump to an absolute elapsed time.
    pub fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
    }

    /// Advance by a real-time frame delta and return the new elapsed time.
    pub fn tick(&mut self, real_dt: f64) -> f64 {
        if !self.paused {
            self.elapsed += real_dt * self.speed;
        }
        self.elapsed
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
