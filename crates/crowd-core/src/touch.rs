use std::collections::VecDeque;

/// Sliding-window counter of touch-start timestamps (milliseconds).
#[derive(Clone, Debug)]
pub struct TouchRateTracker {
    stamps: VecDeque<f64>,
    window_ms: f64,
}

impl TouchRateTracker {
    pub fn new(window_ms: f64) -> Self {
        Self {
            stamps: VecDeque::new(),
            window_ms,
        }
    }

    pub fn record(&mut self, now_ms: f64) {
        self.stamps.push_back(now_ms);
    }

    /// Drop every stamp at least one window old. Stamps arrive in order so
    /// only the front needs checking.
    pub fn prune(&mut self, now_ms: f64) {
        while let Some(&t) = self.stamps.front() {
            if now_ms - t < self.window_ms {
                break;
            }
            self.stamps.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}
