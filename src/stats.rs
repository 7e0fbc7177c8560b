//! Running mean/min/max accumulator for the estimation stages.

/// Accumulates observations one at a time and exposes the mean and the
/// max−min range without retaining the samples. Each estimation call owns
/// its own accumulator; nothing is shared or reused between stages.
#[derive(Clone, Copy, Debug)]
pub struct RunningStats {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Arithmetic mean, `None` when no observations were recorded.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Max−min spread of the observations; 0 when fewer than two were seen.
    pub fn range(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.max - self.min
        }
    }
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}
