use glam::Vec3;

use crate::util::{average, keep_last, lerp};

pub const DEFAULT_HISTORY_LEN: usize = 10;
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.2;
pub const MAX_HISTORY_LEN: usize = 1024;

/// Jitter filter for the displayed indicator position.
///
/// Each update appends the raw candidate to a bounded history, averages the
/// window and moves the display position a fixed fraction toward that
/// average. The display position starts as NaN ("never placed"), so the
/// first update lands exactly on the first sample.
#[derive(Debug, Clone)]
pub struct PositionSmoother {
    history: Vec<Vec3>,
    capacity: usize,
    factor: f32,
    position: Vec3,
}

impl Default for PositionSmoother {
    fn default() -> Self {
        PositionSmoother::new(DEFAULT_HISTORY_LEN, DEFAULT_SMOOTHING_FACTOR)
    }
}

impl PositionSmoother {
    /// `capacity` is clamped to `1..=MAX_HISTORY_LEN` samples.
    pub fn new(capacity: usize, factor: f32) -> PositionSmoother {
        let capacity = capacity.clamp(1, MAX_HISTORY_LEN);
        PositionSmoother {
            // one extra slot for append-then-trim
            history: Vec::with_capacity(capacity + 1),
            capacity,
            factor,
            position: Vec3::NAN,
        }
    }

    /// Starts from an already placed display position.
    pub fn with_position(mut self, position: Vec3) -> PositionSmoother {
        self.position = position;
        self
    }

    pub fn update(&mut self, raw: Vec3) -> Vec3 {
        self.history.push(raw);
        keep_last(&mut self.history, self.capacity);

        // unreachable, the history holds at least `raw`
        let Some(avg) = average(&self.history) else {
            return self.position;
        };
        let mut candidate = lerp(self.position, avg, self.factor);
        if candidate.is_nan() {
            log::trace!("smoothed position is NaN, using window average {:?}", avg);
            candidate = avg;
        }
        log::trace!(
            "smoother raw {:?} avg {:?} -> {:?} ({} samples)",
            raw,
            avg,
            candidate,
            self.history.len()
        );
        self.position = candidate;
        candidate
    }

    /// Current display position, NaN until the first update.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Recent raw samples, oldest first.
    pub fn history(&self) -> &[Vec3] {
        &self.history
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
