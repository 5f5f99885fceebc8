use tracing::debug;

/// Counts downward scroll ticks toward a capture threshold.
///
/// Downward (negative) wheel deltas accumulate; an upward tick means the
/// gesture reversed and discards all progress. Crossing the threshold
/// zeroes the counter and signals exactly one capture request.
#[derive(Debug)]
pub struct ScrollAccumulator {
    threshold: u32,
    pending: u32,
}

impl ScrollAccumulator {
    /// Create an accumulator firing once per `threshold` downward ticks.
    ///
    /// A zero threshold is clamped to one.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            pending: 0,
        }
    }

    /// The configured ticks-per-capture threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Replace the threshold and discard pending progress.
    ///
    /// A zero threshold is clamped to one.
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold.max(1);
        self.pending = 0;
    }

    /// Discard pending progress.
    ///
    /// Called on every capture-mode transition so a re-entered session
    /// always starts a fresh gesture count.
    pub fn reset(&mut self) {
        self.pending = 0;
    }

    /// Consume one wheel tick; returns `true` when a capture is due.
    pub fn on_wheel(&mut self, delta: i32) -> bool {
        if delta < 0 {
            self.pending += 1;
            if self.pending >= self.threshold {
                self.pending = 0;
                debug!(threshold = self.threshold, "Scroll threshold reached");
                return true;
            }
        } else if delta > 0 {
            self.pending = 0;
        }
        false
    }
}
